//! Runner configuration read from the environment.
//!
//! | Variable              | Meaning                                      |
//! |-----------------------|----------------------------------------------|
//! | `BLOCKFALL_SEED`      | Fixed `u64` seed for the piece bag           |
//! | `BLOCKFALL_LOG`       | Log file path; logging is off when unset     |
//! | `BLOCKFALL_LOG_LEVEL` | `trace`, `debug`, `info`, `warn` or `error`  |
//!
//! Unparseable values fall back to the defaults.

use std::env;
use std::path::PathBuf;

use tracing::Level;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `None` seeds the bag from OS entropy.
    pub seed: Option<u64>,
    pub log_path: Option<PathBuf>,
    pub log_level: Level,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            log_path: None,
            log_level: Level::INFO,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup (the process environment in
    /// production, a map in tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .and_then(|s| if s.is_empty() { None } else { Some(s) })
        };

        let seed = non_empty("BLOCKFALL_SEED").and_then(|s| s.parse().ok());
        let log_path = non_empty("BLOCKFALL_LOG").map(PathBuf::from);
        let log_level = non_empty("BLOCKFALL_LOG_LEVEL")
            .and_then(|s| s.parse().ok())
            .unwrap_or(Level::INFO);

        Self {
            seed,
            log_path,
            log_level,
        }
    }
}
