use super::View;
use crate::types::feature::FeatureRecord;
use crate::types::report::{Badges, SprintAnalytics, Summary, TeamDetail};
use crate::types::scoring::ScoredTeam;
use crate::types::stats::TeamStats;

pub fn to_markdown(view: &View<'_>) -> String {
    let mut output = String::new();
    match view {
        View::Analytics(analytics) => {
            output.push_str("# Sprint Game Report\n\n");
            push_summary(&mut output, &analytics.summary);
            push_leaderboard(&mut output, &analytics.leaderboard);
            push_badges(&mut output, &analytics.badges);
            push_progress(&mut output, analytics);
            push_source(&mut output, analytics);
        }
        View::Leaderboard(analytics) => {
            push_leaderboard(&mut output, &analytics.leaderboard);
            push_summary(&mut output, &analytics.summary);
        }
        View::Teams(analytics) => {
            output.push_str("## Teams\n\n");
            for team in analytics.team_stats.values() {
                push_team(&mut output, team);
            }
            push_summary(&mut output, &analytics.summary);
        }
        View::Team(detail) => push_team_detail(&mut output, detail),
        View::Progress(analytics) => {
            push_progress(&mut output, analytics);
            push_summary(&mut output, &analytics.summary);
        }
        View::Personas(analytics) => {
            output.push_str("## Personas\n\n");
            if analytics.persona_stats.is_empty() {
                output.push_str("- none\n");
            }
            for persona in analytics.persona_stats.values() {
                let teams: Vec<&str> = persona.teams.iter().map(String::as_str).collect();
                output.push_str(&format!(
                    "- {}: {}/{} completed, average {}% ({})\n",
                    persona.name,
                    persona.completed_features,
                    persona.total_features,
                    persona.average_completion,
                    teams.join(", ")
                ));
            }
        }
        View::Features(features) => push_features(&mut output, features),
    }
    output
}

fn push_summary(output: &mut String, summary: &Summary) {
    output.push_str("## Summary\n\n");
    output.push_str(&format!(
        "- features: {} ({} completed, {} in progress, {} not started)\n- teams: {}\n- personas: {}\n- overall completion: {}%\n\n",
        summary.total_features,
        summary.completed_features,
        summary.in_progress_features,
        summary.not_started_features,
        summary.total_teams,
        summary.total_personas,
        summary.overall_completion
    ));
}

fn push_leaderboard(output: &mut String, leaderboard: &[ScoredTeam]) {
    output.push_str("## Leaderboard\n\n");
    if leaderboard.is_empty() {
        output.push_str("- none\n\n");
        return;
    }
    output.push_str("| Rank | Team | Score | Completion | Completed | Momentum | Predictability |\n");
    output.push_str("|---|---|---|---|---|---|---|\n");
    for (index, team) in leaderboard.iter().enumerate() {
        output.push_str(&format!(
            "| {} | {} | {} | {}% | {}/{} | {} | {}% |\n",
            index + 1,
            team.name,
            team.score,
            team.completion_rate,
            team.features_completed,
            team.total_features,
            team.kpis.momentum,
            team.kpis.predictability
        ));
    }
    output.push('\n');
}

fn push_badges(output: &mut String, badges: &Badges) {
    output.push_str("## Badges\n\n");
    for category in badges.categories() {
        output.push_str(&format!("### {}\n\n", category.title));
        if category.entries.is_empty() {
            output.push_str("- none\n\n");
            continue;
        }
        for entry in &category.entries {
            let medal = entry
                .medal
                .as_deref()
                .map(|medal| format!("{medal} "))
                .unwrap_or_default();
            output.push_str(&format!(
                "{}. {}{} ({})\n",
                entry.rank, medal, entry.team, entry.value
            ));
        }
        output.push('\n');
    }
}

fn push_progress(output: &mut String, analytics: &SprintAnalytics) {
    output.push_str("## Sprint Progress\n\n");
    for (label, point) in &analytics.sprint_progress {
        output.push_str(&format!(
            "- {} ({}): {}% over {} items\n",
            label, point.date, point.average, point.count
        ));
    }
    output.push('\n');
}

fn push_source(output: &mut String, analytics: &SprintAnalytics) {
    let source = &analytics.source;
    output.push_str(&format!(
        "Source: {} rows, {} skipped, sha256 {}\n",
        source.data_rows, source.skipped_rows, source.sha256
    ));
}

fn push_team(output: &mut String, team: &TeamStats) {
    let gates = team.kpis.quality_gates;
    output.push_str(&format!(
        "### {}\n\n- features: {} ({} completed, {} in progress)\n- average completion: {}%\n- momentum: {}\n- predictability: {}%\n- gates: {} ready, {} ready for QA, {} blocked\n\n",
        team.name,
        team.total_features,
        team.completed_features,
        team.in_progress_features,
        team.average_completion,
        team.kpis.momentum,
        team.kpis.predictability,
        gates.ready,
        gates.ready_for_qa,
        gates.blocked
    ));
}

fn push_team_detail(output: &mut String, detail: &TeamDetail) {
    output.push_str(&format!("# {} (rank {})\n\n", detail.team.name, detail.rank));
    push_team(output, &detail.team);
    let features: Vec<&FeatureRecord> = detail.features.iter().collect();
    push_features(output, &features);
}

fn push_features(output: &mut String, features: &[&FeatureRecord]) {
    output.push_str(&format!("## Features ({})\n\n", features.len()));
    if features.is_empty() {
        output.push_str("- none\n");
        return;
    }
    for feature in features {
        let team = if feature.team_name.is_empty() {
            "unassigned"
        } else {
            feature.team_name.as_str()
        };
        output.push_str(&format!(
            "- [{}%] {} ({}, {})\n",
            feature.current_completion, feature.feature_name, team, feature.kind
        ));
    }
}
