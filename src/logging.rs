//! Logging initialization.
//!
//! The engine emits structured `tracing` events; this module wires the
//! process-wide subscriber once at startup. Level and output format
//! come from [`LogSettings`](crate::settings::LogSettings); a
//! `RUST_LOG` environment filter, when present, overrides the
//! configured level.

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::settings::LogSettings;

/// Minimum level of diagnostics to emit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Per-draw and per-mutation detail.
    Debug,
    /// Key transitions: turns, landings, gains, wins.
    #[default]
    Info,
    /// Only unexpected-but-nonfatal conditions.
    Warning,
    /// Failures only.
    Error,
}

impl LogLevel {
    /// The `tracing` filter directive for this level.
    #[must_use]
    pub const fn as_filter(self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warning => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Output format for diagnostics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable console lines.
    #[default]
    Console,
    /// One JSON object per event.
    Json,
}

/// Install the process-wide subscriber.
///
/// Call once, before any engine is constructed; later calls would
/// panic inside `tracing-subscriber`, so the driver owns this.
pub fn init(settings: &LogSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.level.as_filter()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    match settings.format {
        LogFormat::Console => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_filters() {
        assert_eq!(LogLevel::Debug.as_filter(), "debug");
        assert_eq!(LogLevel::Warning.as_filter(), "warn");
    }

    #[test]
    fn test_defaults() {
        assert_eq!(LogLevel::default(), LogLevel::Info);
        assert_eq!(LogFormat::default(), LogFormat::Console);
    }

    #[test]
    fn test_level_deserializes_lowercase() {
        let level: LogLevel = serde_json::from_str("\"debug\"").unwrap();
        assert_eq!(level, LogLevel::Debug);

        let format: LogFormat = serde_json::from_str("\"json\"").unwrap();
        assert_eq!(format, LogFormat::Json);
    }
}
