use chrono::{DateTime, NaiveDate, Utc};
use wortwerk_config::import::{MAX_SCORE, MIN_SCORE};
use wortwerk_core::Clock;

/// Score in [1,10], or `default` for anything else
pub fn parse_score(raw: &str, default: u8) -> u8 {
    raw.trim()
        .parse::<u8>()
        .ok()
        .filter(|s| (MIN_SCORE..=MAX_SCORE).contains(s))
        .unwrap_or(default)
}

/// Learned date at midnight UTC, or the clock's "now" when unparsable
pub fn parse_learned(raw: &str, format: &str, clock: &dyn Clock) -> DateTime<Utc> {
    match NaiveDate::parse_from_str(raw.trim(), format) {
        Ok(date) => date.and_hms_opt(0, 0, 0).map_or_else(|| clock.now(), |dt| dt.and_utc()),
        Err(e) => {
            tracing::debug!("Learned date '{}' unparsable ({}), using clock", raw, e);
            clock.now()
        }
    }
}

/// Comma-separated tags, trimmed, empties dropped
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
