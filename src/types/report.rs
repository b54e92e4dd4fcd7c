use super::feature::{FeatureRecord, SprintLabel};
use super::scoring::{ScoredTeam, ScoringConfig};
use super::stats::{PersonaStats, SprintProgressPoint, TeamStats};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_features: usize,
    pub completed_features: usize,
    pub in_progress_features: usize,
    pub not_started_features: usize,
    pub total_teams: usize,
    pub total_personas: usize,
    pub overall_completion: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgeEntry {
    pub rank: usize,
    pub team: String,
    pub value: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medal: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgeCategory {
    pub id: String,
    pub title: String,
    pub description: String,
    pub entries: Vec<BadgeEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Badges {
    pub sprint_stars: BadgeCategory,
    pub comeback_crew: BadgeCategory,
    pub predictability_pro: BadgeCategory,
    pub blocker_buster: BadgeCategory,
}

impl Badges {
    pub fn categories(&self) -> [&BadgeCategory; 4] {
        [
            &self.sprint_stars,
            &self.comeback_crew,
            &self.predictability_pro,
            &self.blocker_buster,
        ]
    }
}

/// Provenance of one analytics pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceInfo {
    pub sha256: String,
    pub data_rows: usize,
    pub skipped_rows: usize,
    pub skipped_lines: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SprintAnalytics {
    pub features: Vec<FeatureRecord>,
    pub team_stats: BTreeMap<String, TeamStats>,
    pub persona_stats: BTreeMap<String, PersonaStats>,
    pub sprint_progress: BTreeMap<SprintLabel, SprintProgressPoint>,
    pub leaderboard: Vec<ScoredTeam>,
    pub badges: Badges,
    pub scoring_config: ScoringConfig,
    pub summary: Summary,
    pub source: SourceInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamDetail {
    pub team: TeamStats,
    pub features: Vec<FeatureRecord>,
    pub rank: usize,
}
