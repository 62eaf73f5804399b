//! Board configuration.
//!
//! Working-day grid bounds and the fixed slot length. Loaded from a
//! `board.toml` file when one is present, otherwise from the embedded
//! default.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;
use crate::models::HourRange;

/// Default configuration embedded in the binary.
const DEFAULT_CONFIG: &str = r#"
day_start_hour = 6
day_end_hour = 20
slot_duration_hours = 2
"#;

/// Planning grid settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// First hour shown on the grid.
    pub day_start_hour: u32,
    /// Hour the grid ends (exclusive).
    pub day_end_hour: u32,
    /// Length of every new placement (hours).
    pub slot_duration_hours: u32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            day_start_hour: 6,
            day_end_hour: 20,
            slot_duration_hours: 2,
        }
    }
}

impl BoardConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: BoardConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from `path`.
    ///
    /// Falls back to the embedded default when the file does not exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            tracing::info!("Loading board config from: {}", path.display());
            let contents = std::fs::read_to_string(path)?;
            return Self::from_toml_str(&contents);
        }

        tracing::warn!("{} not found, using default board configuration", path.display());
        Self::from_toml_str(DEFAULT_CONFIG)
    }

    /// Checks that the grid is non-empty, fits in a day, and that a slot
    /// fits in the grid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.day_end_hour > 24 {
            return Err(ConfigError::Invalid(format!(
                "day_end_hour {} exceeds 24",
                self.day_end_hour
            )));
        }
        if self.day_start_hour >= self.day_end_hour {
            return Err(ConfigError::Invalid(format!(
                "day_start_hour {} must be before day_end_hour {}",
                self.day_start_hour, self.day_end_hour
            )));
        }
        let day_length = self.working_day().duration();
        if self.slot_duration_hours == 0 || self.slot_duration_hours > day_length {
            return Err(ConfigError::Invalid(format!(
                "slot_duration_hours {} does not fit the working day",
                self.slot_duration_hours
            )));
        }
        Ok(())
    }

    /// The grid's hour range.
    pub fn working_day(&self) -> HourRange {
        HourRange::new(self.day_start_hour, self.day_end_hour)
    }

    /// Grid hours, in display order.
    pub fn hours(&self) -> impl Iterator<Item = u32> {
        self.day_start_hour..self.day_end_hour
    }
}
