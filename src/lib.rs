//! Sprint game analytics over a semicolon-delimited sprint-tracking export:
//! per-team KPIs, persona and burndown aggregates, rubric scoring, a ranked
//! leaderboard and badge categories.

pub mod aggregate;
pub mod analytics;
pub mod config;
pub mod error;
pub mod leaderboard;
pub mod parse;
pub mod report;
pub mod scoring;
pub mod types;
