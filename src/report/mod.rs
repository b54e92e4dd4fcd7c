pub mod json;
pub mod md;

use crate::error::Result;
use crate::types::feature::FeatureRecord;
use crate::types::report::{SprintAnalytics, TeamDetail};

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

/// Slice of an analytics pass requested by a caller.
#[derive(Debug, Clone)]
pub enum View<'a> {
    Analytics(&'a SprintAnalytics),
    Leaderboard(&'a SprintAnalytics),
    Teams(&'a SprintAnalytics),
    Team(&'a TeamDetail),
    Progress(&'a SprintAnalytics),
    Personas(&'a SprintAnalytics),
    Features(Vec<&'a FeatureRecord>),
}

pub fn render(view: &View<'_>, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(json::to_json(view)?),
        OutputFormat::Md => Ok(md::to_markdown(view)),
    }
}
