use crate::types::config::SprintCalendar;
use crate::types::feature::{FeatureRecord, SprintLabel};
use crate::types::stats::{rounded_mean, SprintProgressPoint};
use std::collections::BTreeMap;

/// Global burndown: for every calendar sprint, the mean snapshot value over
/// all records that reported data for it.
pub fn aggregate_sprint_progress(
    features: &[FeatureRecord],
    calendar: &SprintCalendar,
) -> BTreeMap<SprintLabel, SprintProgressPoint> {
    let sums = features.iter().fold(
        BTreeMap::<SprintLabel, (i64, u32)>::new(),
        |mut sums, record| {
            for (label, _) in calendar.entries() {
                if let Some(value) = record.sprint_progress.get(*label) {
                    let slot = sums.entry(*label).or_default();
                    slot.0 = slot.0.saturating_add(value);
                    slot.1 += 1;
                }
            }
            sums
        },
    );

    calendar
        .entries()
        .iter()
        .map(|(label, _)| {
            let (total, count) = sums.get(label).copied().unwrap_or_default();
            let point = SprintProgressPoint {
                date: calendar.display_date(*label),
                total,
                count,
                average: rounded_mean(total, count),
            };
            (*label, point)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::feature::SprintProgress;

    fn record(team: &str, s1: Option<i64>, s2: Option<i64>) -> FeatureRecord {
        FeatureRecord {
            team_name: team.to_string(),
            sprint_progress: SprintProgress {
                s1,
                s2,
                ..SprintProgress::default()
            },
            ..FeatureRecord::default()
        }
    }

    #[test]
    fn averages_only_reported_values_across_all_records() {
        let features = vec![
            record("Falcons", Some(10), Some(0)),
            record("", Some(31), None),
            record("Otters", None, None),
        ];
        let progress = aggregate_sprint_progress(&features, &SprintCalendar::default());

        assert_eq!(progress.len(), 5);
        let s1 = &progress[&SprintLabel::S1];
        assert_eq!(s1.count, 2);
        assert_eq!(s1.average, 21);
        assert_eq!(s1.date, "14-Oct");
        let s2 = &progress[&SprintLabel::S2];
        assert_eq!(s2.count, 1);
        assert_eq!(s2.average, 0);
        let s5 = &progress[&SprintLabel::S5];
        assert_eq!(s5.count, 0);
        assert_eq!(s5.average, 0);
        assert_eq!(s5.date, "9-Dec");
    }

    #[test]
    fn ip_snapshots_are_not_part_of_burndown() {
        let mut with_ip = record("Falcons", None, None);
        with_ip.sprint_progress.ip = Some(70);
        let progress = aggregate_sprint_progress(&[with_ip], &SprintCalendar::default());
        assert!(!progress.contains_key(&SprintLabel::Ip));
        assert!(progress.values().all(|point| point.count == 0));
    }
}
