use crate::types::scoring::{ScoreBreakdown, ScoredTeam, ScoringConfig, TeamScore};
use crate::types::stats::TeamStats;

/// Scores one team against the rubric. The breakdown holds the tiered
/// bonuses and penalties; base, velocity and predictability terms only
/// feed the total.
pub fn score_team(team: &TeamStats, cfg: &ScoringConfig) -> TeamScore {
    let base = base_points(team, cfg);

    let mut breakdown = ScoreBreakdown::default();
    if team.average_completion >= cfg.completed_threshold {
        breakdown.completion_points += cfg.completed_bonus;
    } else if team.average_completion >= cfg.on_track_threshold {
        breakdown.on_track_points += cfg.on_track_bonus;
    }

    let momentum = team.kpis.momentum;
    if momentum >= cfg.momentum_threshold {
        breakdown.momentum_points += cfg.momentum_bonus;
    } else if momentum <= 0 {
        breakdown.penalties += cfg.no_progress_penalty;
    }

    let gates = team.kpis.quality_gates;
    breakdown.quality_points = i64::from(gates.ready)
        .saturating_mul(cfg.ready_status_bonus)
        .saturating_add(i64::from(gates.ready_for_qa).saturating_mul(cfg.ready_for_qa_bonus));

    let velocity_term = velocity_term(&team.velocity_averages(), cfg);
    let predictability_term = predictability_term(team.kpis.predictability, cfg);

    TeamScore {
        score: base
            .saturating_add(breakdown.total())
            .saturating_add(velocity_term)
            .saturating_add(predictability_term),
        base,
        breakdown,
        velocity_term,
        predictability_term,
    }
}

/// Rubric products saturate at the `i64` bounds; completion values in the
/// feed are not range checked.
fn base_points(team: &TeamStats, cfg: &ScoringConfig) -> i64 {
    let completed = i64::from(team.completed_features).saturating_mul(cfg.feature_complete_bonus);
    let in_progress = i64::from(team.in_progress_features).saturating_mul(cfg.in_progress_bonus);
    team.average_completion
        .saturating_mul(cfg.completion_multiplier)
        .saturating_add(completed)
        .saturating_add(in_progress)
}

/// Improvement from the first to the last sprint with a non-zero velocity
/// average. Needs two such sprints and only rewards gains.
pub fn velocity_term(averages: &[i64], cfg: &ScoringConfig) -> i64 {
    let mut reported = averages.iter().copied().filter(|average| *average != 0);
    let Some(first) = reported.next() else {
        return 0;
    };
    let Some(last) = reported.last() else {
        return 0;
    };
    let improvement = last.saturating_sub(first);
    if improvement > 0 {
        improvement.saturating_mul(cfg.velocity_improvement_bonus)
    } else {
        0
    }
}

pub fn predictability_term(predictability: i64, cfg: &ScoringConfig) -> i64 {
    if predictability >= cfg.predictability_high_threshold {
        cfg.predictability_high_bonus
    } else if predictability >= cfg.predictability_mid_threshold {
        cfg.predictability_mid_bonus
    } else {
        0
    }
}

pub fn scored_team(team: &TeamStats, cfg: &ScoringConfig) -> ScoredTeam {
    let scored = score_team(team, cfg);
    ScoredTeam {
        name: team.name.clone(),
        score: scored.score,
        score_breakdown: scored.breakdown,
        completion_rate: team.average_completion,
        features_completed: team.completed_features,
        total_features: team.total_features,
        kpis: team.kpis,
    }
}
