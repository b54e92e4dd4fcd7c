use serde::Serialize;
use std::fmt;

/// Sprint columns carried by the feed, in column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum SprintLabel {
    S1,
    S2,
    S3,
    S4,
    S5,
    #[serde(rename = "IP")]
    Ip,
}

impl SprintLabel {
    pub const ALL: [SprintLabel; 6] = [Self::S1, Self::S2, Self::S3, Self::S4, Self::S5, Self::Ip];

    /// Delivery sprints. The innovation/planning sprint is excluded from
    /// velocity, momentum and burndown.
    pub const DELIVERY: [SprintLabel; 5] = [Self::S1, Self::S2, Self::S3, Self::S4, Self::S5];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::S1 => "S1",
            Self::S2 => "S2",
            Self::S3 => "S3",
            Self::S4 => "S4",
            Self::S5 => "S5",
            Self::Ip => "IP",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|label| label.as_str().eq_ignore_ascii_case(value.trim()))
    }
}

impl fmt::Display for SprintLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-sprint completion snapshots for one record. `None` means the sprint
/// has no data, which is not the same as a recorded `0`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SprintProgress {
    #[serde(rename = "S1")]
    pub s1: Option<i64>,
    #[serde(rename = "S2")]
    pub s2: Option<i64>,
    #[serde(rename = "S3")]
    pub s3: Option<i64>,
    #[serde(rename = "S4")]
    pub s4: Option<i64>,
    #[serde(rename = "S5")]
    pub s5: Option<i64>,
    #[serde(rename = "IP")]
    pub ip: Option<i64>,
}

impl SprintProgress {
    pub fn get(&self, label: SprintLabel) -> Option<i64> {
        match label {
            SprintLabel::S1 => self.s1,
            SprintLabel::S2 => self.s2,
            SprintLabel::S3 => self.s3,
            SprintLabel::S4 => self.s4,
            SprintLabel::S5 => self.s5,
            SprintLabel::Ip => self.ip,
        }
    }

    pub fn set(&mut self, label: SprintLabel, value: Option<i64>) {
        let slot = match label {
            SprintLabel::S1 => &mut self.s1,
            SprintLabel::S2 => &mut self.s2,
            SprintLabel::S3 => &mut self.s3,
            SprintLabel::S4 => &mut self.s4,
            SprintLabel::S5 => &mut self.s5,
            SprintLabel::Ip => &mut self.ip,
        };
        *slot = value;
    }

    /// Non-null delivery sprint values in label order.
    pub fn delivery_values(&self) -> impl Iterator<Item = (SprintLabel, i64)> + '_ {
        SprintLabel::DELIVERY
            .into_iter()
            .filter_map(|label| self.get(label).map(|value| (label, value)))
    }

    /// First and latest non-null delivery sprint values, if any exist.
    pub fn first_and_latest(&self) -> Option<(i64, i64)> {
        let mut values = self.delivery_values().map(|(_, value)| value);
        let first = values.next()?;
        let latest = values.last().unwrap_or(first);
        Some((first, latest))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum QualityGate {
    Ready,
    ReadyForQa,
    Blocked,
    Other,
}

/// One row of the sprint-tracking feed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureRecord {
    pub team_name: String,
    pub priority: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub feature_name: String,
    pub epic_owner: String,
    pub scope: String,
    pub initial_status: String,
    pub planned_delivery_sprint: String,
    pub planned_due_date: String,
    pub comments: String,
    pub current_completion: i64,
    pub sprint_progress: SprintProgress,
}

/// Completion bucket used when filtering features.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionStatus {
    Completed,
    InProgress,
    NotStarted,
}

impl FeatureRecord {
    pub fn is_completed(&self) -> bool {
        self.current_completion == 100
    }

    pub fn is_in_progress(&self) -> bool {
        self.current_completion > 0 && self.current_completion < 100
    }

    pub fn is_not_started(&self) -> bool {
        self.current_completion == 0
    }

    pub fn matches_status(&self, status: CompletionStatus) -> bool {
        match status {
            CompletionStatus::Completed => self.is_completed(),
            CompletionStatus::InProgress => self.is_in_progress(),
            CompletionStatus::NotStarted => self.is_not_started(),
        }
    }
}
