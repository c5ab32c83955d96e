//! User settings for Pocketbook
//!
//! Manages user preferences, most importantly the thresholds that decide which
//! recommendation a monthly summary carries.

use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::paths::PocketbookPaths;
use crate::error::PocketbookError;
use crate::storage::file_io::write_json_atomic;

/// Share of income that may be spent before a month is flagged for caution
pub const DEFAULT_CAUTION_RATIO: f64 = 0.80;

/// Savings rate below which the summary suggests saving more
pub const DEFAULT_TARGET_SAVINGS_RATE: f64 = 0.20;

/// Thresholds used to pick a monthly recommendation
///
/// - net balance below zero: overspending
/// - expenses above `caution_ratio` of income: caution
/// - otherwise: on track
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecommendationPolicy {
    #[serde(default = "default_caution_ratio")]
    pub caution_ratio: f64,

    #[serde(default = "default_target_savings_rate")]
    pub target_savings_rate: f64,
}

fn default_caution_ratio() -> f64 {
    DEFAULT_CAUTION_RATIO
}

fn default_target_savings_rate() -> f64 {
    DEFAULT_TARGET_SAVINGS_RATE
}

impl Default for RecommendationPolicy {
    fn default() -> Self {
        Self {
            caution_ratio: DEFAULT_CAUTION_RATIO,
            target_savings_rate: DEFAULT_TARGET_SAVINGS_RATE,
        }
    }
}

impl RecommendationPolicy {
    /// Check that both ratios are usable fractions
    pub fn validate(&self) -> Result<(), PocketbookError> {
        for (name, value) in [
            ("caution_ratio", self.caution_ratio),
            ("target_savings_rate", self.target_savings_rate),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(PocketbookError::Config(format!(
                    "{} must be between 0 and 1, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

/// User settings for Pocketbook
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Recommendation thresholds for monthly summaries
    #[serde(default)]
    pub recommendation: RecommendationPolicy,

    /// Date format preference (strftime format) for listings
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            recommendation: RecommendationPolicy::default(),
            date_format: default_date_format(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or use default settings if the file doesn't exist
    pub fn load_or_create(paths: &PocketbookPaths) -> Result<Self, PocketbookError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| PocketbookError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
            PocketbookError::Config(format!("Failed to parse settings file: {}", e))
        })?;
        settings.validate()?;

        Ok(settings)
    }

    /// Check the recommendation thresholds and the date format
    pub fn validate(&self) -> Result<(), PocketbookError> {
        self.recommendation.validate()?;
        validate_date_format(&self.date_format)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &PocketbookPaths) -> Result<(), PocketbookError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }
}

/// Check that `format` is a strftime format a plain date can be rendered with
pub fn validate_date_format(format: &str) -> Result<(), PocketbookError> {
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(PocketbookError::Config(format!(
            "date_format '{}' is not a valid strftime format",
            format
        )));
    }

    let mut rendered = String::new();
    if write!(rendered, "{}", NaiveDate::default().format(format)).is_err() {
        return Err(PocketbookError::Config(format!(
            "date_format '{}' uses fields a date does not have, such as a time or zone",
            format
        )));
    }
    Ok(())
}
