use crate::error::SprintboardError;
use crate::types::feature::SprintLabel;
use crate::types::scoring::ScoringConfig;
use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;

pub const DEFAULT_SOURCE_PATH: &str = "data/Sanitized_data.csv";
pub const DEFAULT_BADGE_TOP_N: usize = 3;
const CALENDAR_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SprintboardConfig {
    pub source: Option<SourceConfig>,
    pub scoring: Option<ScoringOverrides>,
    pub calendar: Option<HashMap<String, String>>,
    pub badges: Option<BadgeConfig>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceConfig {
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScoringOverrides {
    pub completion_multiplier: Option<i64>,
    pub feature_complete_bonus: Option<i64>,
    pub in_progress_bonus: Option<i64>,
    pub velocity_improvement_bonus: Option<i64>,
    pub completed_threshold: Option<i64>,
    pub completed_bonus: Option<i64>,
    pub on_track_threshold: Option<i64>,
    pub on_track_bonus: Option<i64>,
    pub momentum_threshold: Option<i64>,
    pub momentum_bonus: Option<i64>,
    pub no_progress_penalty: Option<i64>,
    pub ready_status_bonus: Option<i64>,
    pub ready_for_qa_bonus: Option<i64>,
    pub predictability_high_threshold: Option<i64>,
    pub predictability_high_bonus: Option<i64>,
    pub predictability_mid_threshold: Option<i64>,
    pub predictability_mid_bonus: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BadgeConfig {
    pub top_n: Option<usize>,
}

/// Display dates for the delivery sprints. Fixed configuration, never
/// derived from the feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SprintCalendar {
    entries: Vec<(SprintLabel, NaiveDate)>,
}

impl Default for SprintCalendar {
    fn default() -> Self {
        let dates = [(10, 14), (10, 28), (11, 12), (11, 25), (12, 9)];
        let entries = SprintLabel::DELIVERY
            .into_iter()
            .zip(dates)
            .filter_map(|(label, (month, day))| {
                NaiveDate::from_ymd_opt(2025, month, day).map(|date| (label, date))
            })
            .collect();
        Self { entries }
    }
}

impl SprintCalendar {
    pub fn entries(&self) -> &[(SprintLabel, NaiveDate)] {
        &self.entries
    }

    pub fn date(&self, label: SprintLabel) -> Option<NaiveDate> {
        self.entries
            .iter()
            .find(|(entry, _)| *entry == label)
            .map(|(_, date)| *date)
    }

    /// Short label such as `14-Oct`.
    pub fn display_date(&self, label: SprintLabel) -> String {
        self.date(label)
            .map(|date| date.format("%-d-%b").to_string())
            .unwrap_or_default()
    }
}

macro_rules! resolve {
    ($overrides:expr, $defaults:expr, $($field:ident),+ $(,)?) => {
        ScoringConfig {
            $($field: $overrides.$field.unwrap_or($defaults.$field),)+
        }
    };
}

impl SprintboardConfig {
    pub fn source_path(&self) -> PathBuf {
        self.source
            .as_ref()
            .and_then(|source| source.path.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SOURCE_PATH))
    }

    pub fn scoring_config(&self) -> ScoringConfig {
        let defaults = ScoringConfig::default();
        match &self.scoring {
            Some(overrides) => resolve!(
                overrides,
                defaults,
                completion_multiplier,
                feature_complete_bonus,
                in_progress_bonus,
                velocity_improvement_bonus,
                completed_threshold,
                completed_bonus,
                on_track_threshold,
                on_track_bonus,
                momentum_threshold,
                momentum_bonus,
                no_progress_penalty,
                ready_status_bonus,
                ready_for_qa_bonus,
                predictability_high_threshold,
                predictability_high_bonus,
                predictability_mid_threshold,
                predictability_mid_bonus,
            ),
            None => defaults,
        }
    }

    pub fn badge_top_n(&self) -> usize {
        self.badges
            .as_ref()
            .and_then(|badges| badges.top_n)
            .unwrap_or(DEFAULT_BADGE_TOP_N)
    }

    pub fn calendar(&self) -> Result<SprintCalendar, SprintboardError> {
        let mut calendar = SprintCalendar::default();
        let Some(overrides) = &self.calendar else {
            return Ok(calendar);
        };

        for (key, value) in overrides {
            let label = SprintLabel::parse(key)
                .filter(|label| SprintLabel::DELIVERY.contains(label))
                .ok_or_else(|| {
                    SprintboardError::ConfigParse(format!(
                        "calendar contains unknown sprint label: {key}"
                    ))
                })?;
            let date = NaiveDate::parse_from_str(value.trim(), CALENDAR_DATE_FORMAT).map_err(
                |e| SprintboardError::ConfigParse(format!("calendar.{key} = {value:?}: {e}")),
            )?;
            if let Some(entry) = calendar.entries.iter_mut().find(|(entry, _)| *entry == label) {
                entry.1 = date;
            }
        }

        for pair in calendar.entries.windows(2) {
            let (earlier, later) = (pair[0], pair[1]);
            if later.1 <= earlier.1 {
                return Err(SprintboardError::ConfigParse(format!(
                    "calendar dates must increase: {} ({}) is not after {} ({})",
                    later.0, later.1, earlier.0, earlier.1
                )));
            }
        }

        Ok(calendar)
    }

    pub fn validate(&self) -> Result<(), SprintboardError> {
        let scoring = self.scoring_config();

        for (name, threshold) in [
            ("completed_threshold", scoring.completed_threshold),
            ("on_track_threshold", scoring.on_track_threshold),
            ("momentum_threshold", scoring.momentum_threshold),
            (
                "predictability_high_threshold",
                scoring.predictability_high_threshold,
            ),
            (
                "predictability_mid_threshold",
                scoring.predictability_mid_threshold,
            ),
        ] {
            if !(0..=100).contains(&threshold) {
                return Err(SprintboardError::ConfigParse(format!(
                    "scoring.{name} must be between 0 and 100"
                )));
            }
        }

        for (name, bonus) in [
            ("completion_multiplier", scoring.completion_multiplier),
            ("feature_complete_bonus", scoring.feature_complete_bonus),
            ("in_progress_bonus", scoring.in_progress_bonus),
            (
                "velocity_improvement_bonus",
                scoring.velocity_improvement_bonus,
            ),
            ("completed_bonus", scoring.completed_bonus),
            ("on_track_bonus", scoring.on_track_bonus),
            ("momentum_bonus", scoring.momentum_bonus),
            ("ready_status_bonus", scoring.ready_status_bonus),
            ("ready_for_qa_bonus", scoring.ready_for_qa_bonus),
            ("predictability_high_bonus", scoring.predictability_high_bonus),
            ("predictability_mid_bonus", scoring.predictability_mid_bonus),
        ] {
            if bonus < 0 {
                return Err(SprintboardError::ConfigParse(format!(
                    "scoring.{name} must not be negative"
                )));
            }
        }

        if scoring.no_progress_penalty > 0 {
            return Err(SprintboardError::ConfigParse(
                "scoring.no_progress_penalty must be zero or negative".to_string(),
            ));
        }

        if scoring.predictability_mid_threshold > scoring.predictability_high_threshold {
            return Err(SprintboardError::ConfigParse(format!(
                "scoring.predictability_mid_threshold ({}) exceeds predictability_high_threshold ({})",
                scoring.predictability_mid_threshold, scoring.predictability_high_threshold
            )));
        }

        if self.badge_top_n() == 0 {
            return Err(SprintboardError::ConfigParse(
                "badges.top_n must be greater than 0".to_string(),
            ));
        }

        self.calendar()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let cfg: SprintboardConfig = toml::from_str("").expect("empty config should parse");
        assert_eq!(cfg.scoring_config(), ScoringConfig::default());
        assert_eq!(cfg.badge_top_n(), 3);
        assert_eq!(cfg.source_path(), PathBuf::from(DEFAULT_SOURCE_PATH));
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn scoring_overrides_replace_only_named_constants() {
        let cfg: SprintboardConfig = toml::from_str(
            r#"
[scoring]
completion_multiplier = 12
no_progress_penalty = -5
"#,
        )
        .expect("config should parse");
        let scoring = cfg.scoring_config();
        assert_eq!(scoring.completion_multiplier, 12);
        assert_eq!(scoring.no_progress_penalty, -5);
        assert_eq!(scoring.feature_complete_bonus, 50);
        assert_eq!(scoring.predictability_mid_bonus, 5);
    }

    #[test]
    fn misspelled_scoring_key_is_rejected() {
        let err = toml::from_str::<SprintboardConfig>(
            r#"
[scoring]
completion_multipler = 20
"#,
        )
        .expect_err("unknown scoring key should be rejected");
        assert!(err.to_string().contains("completion_multipler"));
    }

    #[test]
    fn unknown_top_level_and_nested_keys_are_rejected() {
        for content in [
            "[scoring_rules]\ncompletion_multiplier = 12\n",
            "[source]\nfile = \"feed.csv\"\n",
            "[badges]\ntop = 5\n",
        ] {
            assert!(
                toml::from_str::<SprintboardConfig>(content).is_err(),
                "{content} should be rejected"
            );
        }
    }

    #[test]
    fn default_calendar_renders_short_dates() {
        let calendar = SprintCalendar::default();
        assert_eq!(calendar.entries().len(), 5);
        assert_eq!(calendar.display_date(SprintLabel::S1), "14-Oct");
        assert_eq!(calendar.display_date(SprintLabel::S5), "9-Dec");
        assert_eq!(calendar.display_date(SprintLabel::Ip), "");
    }

    #[test]
    fn calendar_override_replaces_single_sprint() {
        let cfg: SprintboardConfig = toml::from_str(
            r#"
[calendar]
S3 = "2025-11-14"
"#,
        )
        .expect("config should parse");
        let calendar = cfg.calendar().expect("calendar should resolve");
        assert_eq!(calendar.display_date(SprintLabel::S3), "14-Nov");
        assert_eq!(calendar.display_date(SprintLabel::S2), "28-Oct");
    }

    #[test]
    fn validate_rejects_unknown_calendar_label() {
        let cfg: SprintboardConfig = toml::from_str(
            r#"
[calendar]
IP = "2025-12-20"
"#,
        )
        .expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("unknown sprint label"));
    }

    #[test]
    fn validate_rejects_non_increasing_calendar() {
        let cfg: SprintboardConfig = toml::from_str(
            r#"
[calendar]
S2 = "2025-10-01"
"#,
        )
        .expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("calendar dates must increase"));
    }

    #[test]
    fn validate_rejects_malformed_calendar_date() {
        let cfg: SprintboardConfig = toml::from_str(
            r#"
[calendar]
S1 = "14-Oct"
"#,
        )
        .expect("config should parse");
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_rejects_positive_penalty() {
        let cfg: SprintboardConfig = toml::from_str(
            r#"
[scoring]
no_progress_penalty = 2
"#,
        )
        .expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("no_progress_penalty"));
    }

    #[test]
    fn validate_rejects_out_of_range_threshold() {
        let cfg: SprintboardConfig = toml::from_str(
            r#"
[scoring]
completed_threshold = 120
"#,
        )
        .expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err
            .to_string()
            .contains("scoring.completed_threshold must be between 0 and 100"));
    }

    #[test]
    fn validate_rejects_inverted_predictability_tiers() {
        let cfg: SprintboardConfig = toml::from_str(
            r#"
[scoring]
predictability_high_threshold = 50
predictability_mid_threshold = 70
"#,
        )
        .expect("config should parse");
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_badge_slots() {
        let cfg: SprintboardConfig = toml::from_str(
            r#"
[badges]
top_n = 0
"#,
        )
        .expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("badges.top_n"));
    }
}
