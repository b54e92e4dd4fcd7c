use super::stats::Kpis;
use serde::Serialize;

/// Rubric used by the scoring engine. Defaults reproduce the published
/// sprint game rules; every value can be overridden from `[scoring]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringConfig {
    pub completion_multiplier: i64,
    pub feature_complete_bonus: i64,
    pub in_progress_bonus: i64,
    pub velocity_improvement_bonus: i64,
    pub completed_threshold: i64,
    pub completed_bonus: i64,
    pub on_track_threshold: i64,
    pub on_track_bonus: i64,
    pub momentum_threshold: i64,
    pub momentum_bonus: i64,
    pub no_progress_penalty: i64,
    pub ready_status_bonus: i64,
    pub ready_for_qa_bonus: i64,
    pub predictability_high_threshold: i64,
    pub predictability_high_bonus: i64,
    pub predictability_mid_threshold: i64,
    pub predictability_mid_bonus: i64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            completion_multiplier: 10,
            feature_complete_bonus: 50,
            in_progress_bonus: 10,
            velocity_improvement_bonus: 5,
            completed_threshold: 95,
            completed_bonus: 10,
            on_track_threshold: 80,
            on_track_bonus: 5,
            momentum_threshold: 20,
            momentum_bonus: 3,
            no_progress_penalty: -2,
            ready_status_bonus: 2,
            ready_for_qa_bonus: 3,
            predictability_high_threshold: 80,
            predictability_high_bonus: 10,
            predictability_mid_threshold: 60,
            predictability_mid_bonus: 5,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub completion_points: i64,
    pub on_track_points: i64,
    pub momentum_points: i64,
    pub quality_points: i64,
    pub penalties: i64,
}

impl ScoreBreakdown {
    pub fn total(&self) -> i64 {
        [
            self.on_track_points,
            self.momentum_points,
            self.quality_points,
            self.penalties,
        ]
        .into_iter()
        .fold(self.completion_points, i64::saturating_add)
    }
}

/// Result of scoring one team. `base`, `velocity_term` and
/// `predictability_term` are added to `score` but are not part of the
/// breakdown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TeamScore {
    pub score: i64,
    pub base: i64,
    pub breakdown: ScoreBreakdown,
    pub velocity_term: i64,
    pub predictability_term: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredTeam {
    pub name: String,
    pub score: i64,
    pub score_breakdown: ScoreBreakdown,
    pub completion_rate: i64,
    pub features_completed: u32,
    pub total_features: u32,
    pub kpis: Kpis,
}
