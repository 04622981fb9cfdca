//! General application configuration.

use chrono::{FixedOffset, Offset, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_reference_offset() -> String {
    "+00:00".to_string()
}

fn default_timezone() -> String {
    "UTC".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Fixed offset used as "now" and for the current-month window on the
    /// tutor dashboard (e.g. "+02:00", "-05:30", "Z").
    #[serde(default = "default_reference_offset")]
    pub reference_offset: String,

    /// Timezone label stored on tutors registered without one.
    #[serde(default = "default_timezone")]
    pub default_timezone: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            reference_offset: default_reference_offset(),
            default_timezone: default_timezone(),
        }
    }
}

impl GeneralConfig {
    /// Parse `reference_offset`. `Z` and `UTC` (any case) mean `+00:00`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if the value is not `±HH:MM`.
    pub fn reference_offset(&self) -> Result<FixedOffset, ConfigError> {
        let raw = self.reference_offset.trim();
        if raw.eq_ignore_ascii_case("z") || raw.eq_ignore_ascii_case("utc") {
            return Ok(Utc.fix());
        }
        raw.parse::<FixedOffset>()
            .map_err(|e| ConfigError::InvalidValue {
                field: "general.reference_offset".to_string(),
                reason: format!("{raw:?} is not a UTC offset like +02:00 ({e})"),
            })
    }
}
