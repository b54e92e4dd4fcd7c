use super::View;
use crate::types::feature::{FeatureRecord, SprintLabel};
use crate::types::report::Summary;
use crate::types::scoring::ScoredTeam;
use crate::types::stats::{PersonaStats, SprintProgressPoint, TeamStats};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Serialize)]
struct LeaderboardPayload<'a> {
    leaderboard: &'a [ScoredTeam],
    summary: &'a Summary,
}

#[derive(Serialize)]
struct TeamsPayload<'a> {
    teams: &'a BTreeMap<String, TeamStats>,
    summary: &'a Summary,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProgressPayload<'a> {
    sprint_progress: &'a BTreeMap<SprintLabel, SprintProgressPoint>,
    summary: &'a Summary,
}

#[derive(Serialize)]
struct PersonasPayload<'a> {
    personas: &'a BTreeMap<String, PersonaStats>,
}

#[derive(Serialize)]
struct FeaturesPayload<'a> {
    features: &'a [&'a FeatureRecord],
    count: usize,
}

pub fn to_json(view: &View<'_>) -> Result<String, serde_json::Error> {
    match view {
        View::Analytics(analytics) => serde_json::to_string_pretty(analytics),
        View::Leaderboard(analytics) => serde_json::to_string_pretty(&LeaderboardPayload {
            leaderboard: &analytics.leaderboard,
            summary: &analytics.summary,
        }),
        View::Teams(analytics) => serde_json::to_string_pretty(&TeamsPayload {
            teams: &analytics.team_stats,
            summary: &analytics.summary,
        }),
        View::Team(detail) => serde_json::to_string_pretty(detail),
        View::Progress(analytics) => serde_json::to_string_pretty(&ProgressPayload {
            sprint_progress: &analytics.sprint_progress,
            summary: &analytics.summary,
        }),
        View::Personas(analytics) => serde_json::to_string_pretty(&PersonasPayload {
            personas: &analytics.persona_stats,
        }),
        View::Features(features) => serde_json::to_string_pretty(&FeaturesPayload {
            features: features.as_slice(),
            count: features.len(),
        }),
    }
}
