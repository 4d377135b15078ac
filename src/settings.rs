//! Environment-driven settings.
//!
//! Settings are read once at process start from `POTLUCK_*` environment
//! variables with `__` separating nesting levels, e.g.:
//!
//! ```text
//! POTLUCK_LOG__LEVEL=debug
//! POTLUCK_LOG__FORMAT=json
//! POTLUCK_GAME__SEED=42
//! POTLUCK_GAME__MAX_TURNS=500
//! ```
//!
//! The engine itself never reads settings; it takes a seed at
//! construction and nothing else. The driver owns this struct and
//! hands the relevant pieces to logging setup and engine construction.

use config::{Config, Environment};
use serde::Deserialize;

use crate::logging::{LogFormat, LogLevel};

/// Errors raised while reading settings from the environment.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// A variable was present but malformed, or the loader failed.
    #[error("failed to load settings from the environment: {source}")]
    Load {
        /// The underlying loader error.
        #[from]
        source: config::ConfigError,
    },
}

/// Settings related to logging.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct LogSettings {
    /// Minimum level of diagnostics to emit.
    #[serde(default)]
    pub level: LogLevel,

    /// Output format (console or json).
    #[serde(default)]
    pub format: LogFormat,
}

/// Settings for the game driver.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct GameSettings {
    /// Master seed. Absent means a non-reproducible run.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Safety cap on turns before a game is reported inconclusive.
    #[serde(default = "default_max_turns")]
    pub max_turns: u64,
}

const fn default_max_turns() -> u64 {
    1000
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            seed: None,
            max_turns: default_max_turns(),
        }
    }
}

/// Top-level settings for the process.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// Settings related to logging.
    #[serde(default)]
    pub log: LogSettings,

    /// Settings for the game driver.
    #[serde(default)]
    pub game: GameSettings,
}

impl Settings {
    /// Load settings from the environment.
    ///
    /// Unset variables fall back to their defaults; unknown variables
    /// under the prefix are ignored.
    ///
    /// # Errors
    ///
    /// [`SettingsError::Load`] when a present variable cannot be parsed
    /// into its typed field.
    pub fn load() -> Result<Self, SettingsError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("POTLUCK")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
