use super::feature::SprintLabel;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityGates {
    pub ready: u32,
    pub ready_for_qa: u32,
    pub blocked: u32,
}

impl QualityGates {
    /// Items that cleared a readiness gate, QA or otherwise.
    pub fn cleared(&self) -> u32 {
        self.ready + self.ready_for_qa
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Kpis {
    pub completion: i64,
    pub momentum: i64,
    pub predictability: i64,
    pub quality_gates: QualityGates,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct VelocityPoint {
    pub total: i64,
    pub count: u32,
    pub average: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct FeatureTypes {
    pub story: u32,
    pub feature: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamStats {
    pub name: String,
    pub total_features: u32,
    pub completed_features: u32,
    pub in_progress_features: u32,
    pub average_completion: i64,
    pub sprint_velocity: BTreeMap<SprintLabel, VelocityPoint>,
    pub feature_types: FeatureTypes,
    pub priorities: BTreeMap<i64, u32>,
    pub kpis: Kpis,
}

impl TeamStats {
    /// Velocity averages for the delivery sprints in label order.
    pub fn velocity_averages(&self) -> Vec<i64> {
        SprintLabel::DELIVERY
            .iter()
            .map(|label| {
                self.sprint_velocity
                    .get(label)
                    .map(|point| point.average)
                    .unwrap_or(0)
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonaStats {
    pub name: String,
    pub total_features: u32,
    pub completed_features: u32,
    pub average_completion: i64,
    pub teams: BTreeSet<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SprintProgressPoint {
    pub date: String,
    pub total: i64,
    pub count: u32,
    pub average: i64,
}

/// Integer mean with halves rounded toward positive infinity; an empty
/// population averages to zero.
pub fn rounded_mean(total: i64, count: u32) -> i64 {
    if count == 0 {
        return 0;
    }
    round_half_up(total as f64 / f64::from(count))
}

pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounded_mean_handles_empty_population() {
        assert_eq!(rounded_mean(0, 0), 0);
        assert_eq!(rounded_mean(250, 0), 0);
    }

    #[test]
    fn round_half_up_matches_reference_rounding() {
        assert_eq!(round_half_up(2.5), 3);
        assert_eq!(round_half_up(-2.5), -2);
        assert_eq!(round_half_up(-2.6), -3);
        assert_eq!(rounded_mean(5, 2), 3);
        assert_eq!(rounded_mean(-5, 2), -2);
    }
}
