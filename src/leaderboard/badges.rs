use crate::types::report::{BadgeCategory, BadgeEntry, Badges};
use crate::types::scoring::ScoredTeam;

const MEDALS: [&str; 3] = ["🥇", "🥈", "🥉"];

/// Derives the four badge categories from a sorted leaderboard. Each
/// category filters and ranks independently; ties keep leaderboard order.
pub fn derive_badges(leaderboard: &[ScoredTeam], top_n: usize) -> Badges {
    let sprint_stars = leaderboard
        .iter()
        .take(top_n)
        .enumerate()
        .map(|(index, team)| BadgeEntry {
            rank: index + 1,
            team: team.name.clone(),
            value: team.score,
            medal: MEDALS.get(index).map(|medal| medal.to_string()),
        })
        .collect();

    Badges {
        sprint_stars: BadgeCategory {
            id: "sprint-stars".to_string(),
            title: "Sprint Stars".to_string(),
            description: "Highest overall sprint score".to_string(),
            entries: sprint_stars,
        },
        comeback_crew: category(
            "comeback-crew",
            "Comeback Crew",
            "Strongest positive momentum across sprints",
            top_by(leaderboard, top_n, |team| team.kpis.momentum),
        ),
        predictability_pro: category(
            "predictability-pro",
            "Predictability Pro",
            "Most planned items delivered on time",
            top_by(leaderboard, top_n, |team| team.kpis.predictability),
        ),
        blocker_buster: category(
            "blocker-buster",
            "Blocker Buster",
            "Most items cleared through ready and QA gates",
            top_by(leaderboard, top_n, |team| {
                i64::from(team.kpis.quality_gates.cleared())
            }),
        ),
    }
}

fn category(id: &str, title: &str, description: &str, entries: Vec<BadgeEntry>) -> BadgeCategory {
    BadgeCategory {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        entries,
    }
}

/// Teams with a strictly positive metric, highest first, capped at `top_n`.
fn top_by<F>(leaderboard: &[ScoredTeam], top_n: usize, metric: F) -> Vec<BadgeEntry>
where
    F: Fn(&ScoredTeam) -> i64,
{
    let mut qualifying: Vec<(&ScoredTeam, i64)> = leaderboard
        .iter()
        .map(|team| (team, metric(team)))
        .filter(|(_, value)| *value > 0)
        .collect();
    qualifying.sort_by(|a, b| b.1.cmp(&a.1));

    qualifying
        .into_iter()
        .take(top_n)
        .enumerate()
        .map(|(index, (team, value))| BadgeEntry {
            rank: index + 1,
            team: team.name.clone(),
            value,
            medal: None,
        })
        .collect()
}
