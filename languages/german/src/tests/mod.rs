use chrono::{TimeZone, Utc};
use wortwerk_config::import::ImportConfig;
use wortwerk_core::FixedClock;
use wortwerk_types::{CategoryTag, ImportRecord};

use crate::word::DefaultWord;

mod import_tests;

pub(crate) fn clock() -> FixedClock {
    FixedClock(Utc.with_ymd_and_hms(2024, 3, 1, 8, 30, 0).unwrap())
}

pub(crate) fn record(notation: &str, category: &str) -> ImportRecord {
    ImportRecord {
        notation: notation.to_string(),
        meanings: "meaning".to_string(),
        third_meanings: String::new(),
        category: category.to_string(),
        user: "user".to_string(),
        learned: "2015-05-03".to_string(),
        score: "5".to_string(),
        tags: String::new(),
    }
}

/// Metadata for a word built straight from notation
pub(crate) fn base(notation: &str, category: &str) -> DefaultWord {
    DefaultWord::from_record(
        &record(notation, category),
        CategoryTag::from_tag(category),
        &ImportConfig::default(),
        &clock(),
    )
}
