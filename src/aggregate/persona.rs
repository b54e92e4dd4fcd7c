use crate::types::feature::FeatureRecord;
use crate::types::stats::{rounded_mean, PersonaStats};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, Default)]
struct PersonaAccumulator {
    total: u32,
    completed: u32,
    completion_sum: i64,
    teams: BTreeSet<String>,
}

impl PersonaAccumulator {
    fn absorb(mut self, record: &FeatureRecord) -> Self {
        self.total += 1;
        self.completion_sum = self.completion_sum.saturating_add(record.current_completion);
        if record.is_completed() {
            self.completed += 1;
        }
        self.teams.insert(record.team_name.clone());
        self
    }

    fn finish(self, name: String) -> PersonaStats {
        PersonaStats {
            name,
            total_features: self.total,
            completed_features: self.completed,
            average_completion: rounded_mean(self.completion_sum, self.total),
            teams: self.teams,
        }
    }
}

/// Folds the records into per-epic-owner statistics. Records without an
/// owner, or without a team to attribute the work to, are ignored.
pub fn aggregate_personas(features: &[FeatureRecord]) -> BTreeMap<String, PersonaStats> {
    features
        .iter()
        .filter(|record| !record.epic_owner.is_empty() && !record.team_name.is_empty())
        .fold(
            BTreeMap::<&str, PersonaAccumulator>::new(),
            |mut personas, record| {
                let owner = record.epic_owner.as_str();
                let accumulator = personas.remove(owner).unwrap_or_default();
                personas.insert(owner, accumulator.absorb(record));
                personas
            },
        )
        .into_iter()
        .map(|(name, accumulator)| (name.to_string(), accumulator.finish(name.to_string())))
        .collect()
}
