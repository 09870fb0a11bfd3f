//! Environment configuration and logging setup.
//!
//! Settings are read from the process environment after loading `.env` (if
//! present). CLI flags override them where both exist.
//!
//! | Variable         | Default                          |
//! |------------------|----------------------------------|
//! | `GRIDCAST_MODEL` | `models/gb_gen_time_only.json`   |
//! | `GRIDCAST_LOG`   | `warn` (`RUST_LOG` wins if set)  |

use std::path::PathBuf;

use chrono::NaiveDate;
use tracing_subscriber::EnvFilter;

pub const MODEL_ENV: &str = "GRIDCAST_MODEL";
pub const LOG_ENV: &str = "GRIDCAST_LOG";

pub const DEFAULT_MODEL_PATH: &str = "models/gb_gen_time_only.json";
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Observation window pre-filled in the dashboard.
pub fn default_range() -> (NaiveDate, NaiveDate) {
    (
        NaiveDate::from_ymd_opt(2026, 2, 15).unwrap_or_default(),
        NaiveDate::from_ymd_opt(2026, 2, 18).unwrap_or_default(),
    )
}

/// Settings resolved from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvConfig {
    pub model_path: PathBuf,
    pub log_filter: String,
}

impl EnvConfig {
    /// Load `.env` (if any) and read the process environment.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve settings through an arbitrary lookup (used by tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        Self {
            model_path: non_empty(MODEL_ENV)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_MODEL_PATH)),
            log_filter: non_empty(LOG_ENV).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        }
    }
}

/// Where log lines go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    /// Used while the TUI owns the terminal.
    Discard,
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `default_filter`. Calling this twice is
/// harmless; the second call is ignored.
pub fn init_tracing(default_filter: &str, target: LogTarget) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(false);
    let _ = match target {
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogTarget::Discard => builder.with_writer(std::io::sink).try_init(),
    };
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn defaults_apply_when_unset() {
        let cfg = EnvConfig::from_lookup(|_| None);
        assert_eq!(cfg.model_path, PathBuf::from(DEFAULT_MODEL_PATH));
        assert_eq!(cfg.log_filter, "warn");
    }

    #[test]
    fn env_values_override_defaults() {
        let env: HashMap<&str, &str> = [(MODEL_ENV, "/srv/models/gb.json"), (LOG_ENV, " debug ")].into();
        let cfg = EnvConfig::from_lookup(|k| env.get(k).map(|v| (*v).to_string()));
        assert_eq!(cfg.model_path, PathBuf::from("/srv/models/gb.json"));
        assert_eq!(cfg.log_filter, "debug");
    }

    #[test]
    fn blank_values_fall_back() {
        let cfg = EnvConfig::from_lookup(|_| Some("   ".to_string()));
        assert_eq!(cfg.model_path, PathBuf::from(DEFAULT_MODEL_PATH));
    }

    #[test]
    fn default_range_is_ordered() {
        let (start, end) = default_range();
        assert!(start <= end);
    }
}
