pub mod fields;

use crate::error::{Result, SprintboardError};
use crate::types::feature::{FeatureRecord, SprintLabel, SprintProgress};
use std::path::Path;

pub const FIELD_DELIMITER: char = ';';
pub const MIN_FIELDS: usize = 11;

/// Column of the first sprint snapshot; `S1..S5` and `IP` follow in order.
const FIRST_SPRINT_COLUMN: usize = 11;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedFeed {
    pub features: Vec<FeatureRecord>,
    /// 1-based line numbers of data rows dropped for having too few fields.
    pub skipped_lines: Vec<usize>,
}

/// Reads the whole feed in one go. A missing file is reported separately
/// from other read failures.
pub fn read_source(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            SprintboardError::SourceNotFound(path.display().to_string())
        } else {
            SprintboardError::SourceRead {
                path: path.display().to_string(),
                source,
            }
        }
    })
}

/// Parses the semicolon-delimited feed. The first non-blank line is the
/// header and is not inspected. Rows with fewer than [`MIN_FIELDS`] fields
/// are skipped; unparsable numbers fall back to defaults.
pub fn parse_features(content: &str) -> ParsedFeed {
    let mut feed = ParsedFeed::default();
    let rows = content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .skip(1);

    for (index, line) in rows {
        let values: Vec<&str> = line.split(FIELD_DELIMITER).collect();
        if values.len() < MIN_FIELDS {
            feed.skipped_lines.push(index + 1);
            continue;
        }
        feed.features.push(parse_record(&values));
    }

    if !feed.skipped_lines.is_empty() {
        tracing::warn!(
            skipped = feed.skipped_lines.len(),
            lines = ?feed.skipped_lines,
            "skipped rows with fewer than {MIN_FIELDS} fields"
        );
    }
    tracing::debug!(records = feed.features.len(), "parsed sprint feed");
    feed
}

fn parse_record(values: &[&str]) -> FeatureRecord {
    let field = |index: usize| values.get(index).copied();

    let mut sprint_progress = SprintProgress::default();
    for (offset, label) in SprintLabel::ALL.into_iter().enumerate() {
        sprint_progress.set(label, fields::int_or_none(field(FIRST_SPRINT_COLUMN + offset)));
    }

    FeatureRecord {
        team_name: fields::text(field(0)),
        priority: fields::int_or_zero(field(1)),
        kind: fields::text(field(2)),
        feature_name: fields::text(field(3)),
        epic_owner: fields::text(field(4)),
        scope: fields::text(field(5)),
        initial_status: fields::text(field(6)),
        planned_delivery_sprint: fields::text(field(7)),
        planned_due_date: fields::text(field(8)),
        comments: fields::text(field(9)),
        current_completion: fields::int_or_zero(field(10)),
        sprint_progress,
    }
}
