//! One analytics pass: read the feed, aggregate, score, rank. Nothing is
//! cached between passes, so identical input always yields identical output.

use crate::aggregate::{aggregate_personas, aggregate_sprint_progress, aggregate_teams};
use crate::error::{Result, SprintboardError};
use crate::leaderboard::{build_leaderboard, derive_badges, rank_of};
use crate::parse::{parse_features, read_source};
use crate::types::config::{SprintCalendar, SprintboardConfig, DEFAULT_BADGE_TOP_N};
use crate::types::feature::{CompletionStatus, FeatureRecord};
use crate::types::report::{SourceInfo, SprintAnalytics, Summary, TeamDetail};
use crate::types::scoring::ScoringConfig;
use crate::types::stats::rounded_mean;
use sha2::{Digest, Sha256};
use std::path::Path;

/// Inputs that shape a pass besides the feed itself.
#[derive(Debug, Clone)]
pub struct AnalyticsSettings {
    pub scoring: ScoringConfig,
    pub calendar: SprintCalendar,
    pub badge_top_n: usize,
}

impl Default for AnalyticsSettings {
    fn default() -> Self {
        Self {
            scoring: ScoringConfig::default(),
            calendar: SprintCalendar::default(),
            badge_top_n: DEFAULT_BADGE_TOP_N,
        }
    }
}

impl AnalyticsSettings {
    pub fn from_config(cfg: &SprintboardConfig) -> Result<Self> {
        Ok(Self {
            scoring: cfg.scoring_config(),
            calendar: cfg.calendar()?,
            badge_top_n: cfg.badge_top_n(),
        })
    }
}

/// Reads `path` and runs a full pass over it.
pub fn sprint_analytics(path: &Path, settings: &AnalyticsSettings) -> Result<SprintAnalytics> {
    tracing::debug!(path = %path.display(), "reading sprint feed");
    let bytes = read_source(path)?;
    let analytics = analyze_bytes(&bytes, settings);
    tracing::info!(
        path = %path.display(),
        features = analytics.summary.total_features,
        teams = analytics.summary.total_teams,
        "sprint analytics computed"
    );
    Ok(analytics)
}

/// Runs a full pass over an in-memory feed. Invalid UTF-8 is replaced
/// rather than rejected.
pub fn analyze_bytes(bytes: &[u8], settings: &AnalyticsSettings) -> SprintAnalytics {
    let content = String::from_utf8_lossy(bytes);
    let feed = parse_features(&content);

    let team_stats = aggregate_teams(&feed.features);
    let persona_stats = aggregate_personas(&feed.features);
    let sprint_progress = aggregate_sprint_progress(&feed.features, &settings.calendar);
    let leaderboard = build_leaderboard(&team_stats, &settings.scoring);
    let badges = derive_badges(&leaderboard, settings.badge_top_n);
    tracing::debug!(
        teams = team_stats.len(),
        personas = persona_stats.len(),
        "aggregation finished"
    );

    let summary = summarize(&feed.features, team_stats.len(), persona_stats.len());
    let source = SourceInfo {
        sha256: sha256_hex(bytes),
        data_rows: feed.features.len(),
        skipped_rows: feed.skipped_lines.len(),
        skipped_lines: feed.skipped_lines,
    };

    SprintAnalytics {
        features: feed.features,
        team_stats,
        persona_stats,
        sprint_progress,
        leaderboard,
        badges,
        scoring_config: settings.scoring,
        summary,
        source,
    }
}

fn summarize(features: &[FeatureRecord], total_teams: usize, total_personas: usize) -> Summary {
    let completion_sum = features
        .iter()
        .fold(0_i64, |sum, record| sum.saturating_add(record.current_completion));
    Summary {
        total_features: features.len(),
        completed_features: features.iter().filter(|record| record.is_completed()).count(),
        in_progress_features: features
            .iter()
            .filter(|record| record.is_in_progress())
            .count(),
        not_started_features: features
            .iter()
            .filter(|record| record.is_not_started())
            .count(),
        total_teams,
        total_personas,
        overall_completion: rounded_mean(
            completion_sum,
            u32::try_from(features.len()).unwrap_or(u32::MAX),
        ),
    }
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    format!("{digest:x}")
}

/// Features narrowed by completion bucket and/or exact team name.
pub fn filter_features<'a>(
    features: &'a [FeatureRecord],
    status: Option<CompletionStatus>,
    team: Option<&str>,
) -> Vec<&'a FeatureRecord> {
    features
        .iter()
        .filter(|record| status.map_or(true, |status| record.matches_status(status)))
        .filter(|record| team.map_or(true, |team| record.team_name == team))
        .collect()
}

/// Stats, features and leaderboard rank of a single team.
pub fn team_detail(analytics: &SprintAnalytics, team: &str) -> Result<TeamDetail> {
    let stats = analytics
        .team_stats
        .get(team)
        .ok_or_else(|| SprintboardError::TeamNotFound(team.to_string()))?;
    let rank = rank_of(&analytics.leaderboard, team)
        .ok_or_else(|| SprintboardError::TeamNotFound(team.to_string()))?;

    Ok(TeamDetail {
        team: stats.clone(),
        features: filter_features(&analytics.features, None, Some(team))
            .into_iter()
            .cloned()
            .collect(),
        rank,
    })
}
