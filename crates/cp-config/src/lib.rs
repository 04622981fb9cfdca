//! # cp-config
//!
//! Layered configuration loading for ClassPilot using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`CLASSPILOT_*` prefix, `__` as separator)
//! 2. Project-level `.classpilot/config.toml`
//! 3. User-level `~/.config/classpilot/config.toml`
//! 4. Built-in defaults
//!
//! `CLASSPILOT_STORAGE__DATA_FILE` maps to `storage.data_file`,
//! `CLASSPILOT_GENERAL__REFERENCE_OFFSET` to `general.reference_offset`.
//!
//! ```no_run
//! use cp_config::ClassPilotConfig;
//!
//! let config = ClassPilotConfig::load_with_dotenv().expect("config");
//! println!("data file: {}", config.storage.data_file.display());
//! ```

mod error;
mod general;
mod storage;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use storage::StorageConfig;

use std::path::PathBuf;

use chrono::FixedOffset;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "CLASSPILOT_";

/// Project-local config file, relative to the working directory.
pub const LOCAL_CONFIG_PATH: &str = ".classpilot/config.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ClassPilotConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl ClassPilotConfig {
    /// Load configuration from TOML files and environment variables.
    ///
    /// Does not read `.env`; use [`Self::load_with_dotenv`] for that. The
    /// reference offset is validated here so a bad value fails at startup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source fails to parse or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load `.env` from the working directory, then [`Self::load`].
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`]. A missing `.env` is not an error.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate a config from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or a value is invalid.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.general.reference_offset()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect it or merge extra providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(LOCAL_CONFIG_PATH);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Path to the user-global config file.
    #[must_use]
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("classpilot").join("config.toml"))
    }

    /// Parsed dashboard reference offset.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `general.reference_offset` is malformed.
    pub fn reference_offset(&self) -> Result<FixedOffset, ConfigError> {
        self.general.reference_offset()
    }
}
