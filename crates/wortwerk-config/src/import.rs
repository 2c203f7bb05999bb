use std::env;

use serde::{Deserialize, Serialize};

pub const MIN_SCORE: u8 = 1;
pub const MAX_SCORE: u8 = 10;
pub const DEFAULT_SCORE: u8 = 5;

fn default_score() -> u8 {
    DEFAULT_SCORE
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_downgrade_invalid() -> bool {
    true
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ImportConfig {
    /// Score used when the record's score is missing or out of range
    #[serde(default = "default_score")]
    pub default_score: u8,
    /// chrono format of the learned date
    #[serde(default = "default_date_format")]
    pub date_format: String,
    /// Keep records with invalid notation as generic words
    #[serde(default = "default_downgrade_invalid")]
    pub downgrade_invalid: bool,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            default_score: default_score(),
            date_format: default_date_format(),
            downgrade_invalid: default_downgrade_invalid(),
        }
    }
}

impl ImportConfig {
    pub fn new() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let default_score = var("WORTWERK_DEFAULT_SCORE")
            .and_then(|v| v.parse().ok())
            .filter(|s| (MIN_SCORE..=MAX_SCORE).contains(s))
            .unwrap_or_else(default_score);

        let date_format = var("WORTWERK_DATE_FORMAT").unwrap_or_else(default_date_format);

        let downgrade_invalid = var("WORTWERK_DOWNGRADE_INVALID")
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_downgrade_invalid);

        Self {
            default_score,
            date_format,
            downgrade_invalid,
        }
    }

    /// Configured default, pulled back into range if a config file set it wrong
    pub fn effective_default_score(&self) -> u8 {
        if (MIN_SCORE..=MAX_SCORE).contains(&self.default_score) {
            self.default_score
        } else {
            default_score()
        }
    }
}
