pub mod badges;

use crate::scoring::scored_team;
use crate::types::scoring::{ScoredTeam, ScoringConfig};
use crate::types::stats::TeamStats;
use std::collections::BTreeMap;

pub use badges::derive_badges;

/// Ranks every team by score, highest first. Equal scores are ordered by
/// team name.
pub fn build_leaderboard(
    teams: &BTreeMap<String, TeamStats>,
    cfg: &ScoringConfig,
) -> Vec<ScoredTeam> {
    let mut leaderboard: Vec<ScoredTeam> =
        teams.values().map(|team| scored_team(team, cfg)).collect();
    leaderboard.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.name.cmp(&b.name)));
    leaderboard
}

/// 1-based leaderboard position of `team`.
pub fn rank_of(leaderboard: &[ScoredTeam], team: &str) -> Option<usize> {
    leaderboard
        .iter()
        .position(|entry| entry.name == team)
        .map(|index| index + 1)
}
