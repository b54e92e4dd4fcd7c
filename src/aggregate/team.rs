use super::gates::classify_status;
use crate::types::feature::{FeatureRecord, QualityGate, SprintLabel};
use crate::types::stats::{
    round_half_up, rounded_mean, FeatureTypes, Kpis, QualityGates, TeamStats, VelocityPoint,
};
use std::collections::BTreeMap;

/// Planned sprint value meaning "uncommitted"; such items are not planned.
pub const UNCOMMITTED_SPRINT: &str = "UNC";
/// Completion at which a planned item counts as delivered on time.
pub const ON_TIME_COMPLETION: i64 = 95;

#[derive(Debug, Clone, Default)]
struct TeamAccumulator {
    total: u32,
    completed: u32,
    in_progress: u32,
    completion_sum: i64,
    velocity: BTreeMap<SprintLabel, (i64, u32)>,
    feature_types: FeatureTypes,
    priorities: BTreeMap<i64, u32>,
    first_sum: i64,
    latest_sum: i64,
    momentum_records: u32,
    planned: u32,
    on_time: u32,
    gates: QualityGates,
}

impl TeamAccumulator {
    fn absorb(mut self, record: &FeatureRecord) -> Self {
        self.total += 1;
        self.completion_sum = self.completion_sum.saturating_add(record.current_completion);
        if record.is_completed() {
            self.completed += 1;
        } else if record.is_in_progress() {
            self.in_progress += 1;
        }

        match record.kind.as_str() {
            "Story" => self.feature_types.story += 1,
            "Feature" => self.feature_types.feature += 1,
            _ => {}
        }
        *self.priorities.entry(record.priority).or_default() += 1;

        for (label, value) in record.sprint_progress.delivery_values() {
            let slot = self.velocity.entry(label).or_default();
            slot.0 = slot.0.saturating_add(value);
            slot.1 += 1;
        }

        if let Some((first, latest)) = record.sprint_progress.first_and_latest() {
            self.first_sum = self.first_sum.saturating_add(first);
            self.latest_sum = self.latest_sum.saturating_add(latest);
            self.momentum_records += 1;
        }

        let planned = record.planned_delivery_sprint.as_str();
        if !planned.is_empty() && planned != UNCOMMITTED_SPRINT {
            self.planned += 1;
            if record.current_completion >= ON_TIME_COMPLETION {
                self.on_time += 1;
            }
        }

        for gate in classify_status(&record.initial_status) {
            match gate {
                QualityGate::Ready => self.gates.ready += 1,
                QualityGate::ReadyForQa => self.gates.ready_for_qa += 1,
                QualityGate::Blocked => self.gates.blocked += 1,
                QualityGate::Other => {}
            }
        }

        self
    }

    fn finish(self, name: String) -> TeamStats {
        let average_completion = rounded_mean(self.completion_sum, self.total);

        let sprint_velocity = SprintLabel::DELIVERY
            .into_iter()
            .map(|label| {
                let (total, count) = self.velocity.get(&label).copied().unwrap_or_default();
                let point = VelocityPoint {
                    total,
                    count,
                    average: rounded_mean(total, count),
                };
                (label, point)
            })
            .collect();

        let momentum = if self.momentum_records == 0 {
            0
        } else {
            let records = f64::from(self.momentum_records);
            round_half_up(self.latest_sum as f64 / records - self.first_sum as f64 / records)
        };

        let predictability = if self.planned == 0 {
            0
        } else {
            round_half_up(100.0 * f64::from(self.on_time) / f64::from(self.planned))
        };

        TeamStats {
            name,
            total_features: self.total,
            completed_features: self.completed,
            in_progress_features: self.in_progress,
            average_completion,
            sprint_velocity,
            feature_types: self.feature_types,
            priorities: self.priorities,
            kpis: Kpis {
                completion: average_completion,
                momentum,
                predictability,
                quality_gates: self.gates,
            },
        }
    }
}

/// Folds the records into per-team statistics keyed by team name. Records
/// without a team name are ignored.
pub fn aggregate_teams(features: &[FeatureRecord]) -> BTreeMap<String, TeamStats> {
    features
        .iter()
        .filter(|record| !record.team_name.is_empty())
        .fold(
            BTreeMap::<&str, TeamAccumulator>::new(),
            |mut teams, record| {
                let accumulator = teams.remove(record.team_name.as_str()).unwrap_or_default();
                teams.insert(record.team_name.as_str(), accumulator.absorb(record));
                teams
            },
        )
        .into_iter()
        .map(|(name, accumulator)| (name.to_string(), accumulator.finish(name.to_string())))
        .collect()
}
