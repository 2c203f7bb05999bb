use std::env;

use serde::{Deserialize, Serialize};

use self::import::ImportConfig;

pub mod import;

fn default_log_soft_errors() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub import: ImportConfig,
    /// Emit a warning for each soft error found while importing
    #[serde(default = "default_log_soft_errors")]
    pub log_soft_errors: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            import: ImportConfig::default(),
            log_soft_errors: default_log_soft_errors(),
        }
    }
}

impl Config {
    /// Defaults overridden by environment (and a `.env` file if present)
    pub fn new() -> Self {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Defaults overridden by whatever `var` returns for the `WORTWERK_*` keys
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let log_soft_errors = var("WORTWERK_LOG_SOFT_ERRORS")
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_log_soft_errors);

        Config {
            import: ImportConfig::from_vars(&var),
            log_soft_errors,
        }
    }
}
