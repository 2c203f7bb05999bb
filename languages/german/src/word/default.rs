use chrono::{DateTime, Utc};
use serde::Serialize;
use wortwerk_config::import::{DEFAULT_SCORE, ImportConfig, MAX_SCORE, MIN_SCORE};
use wortwerk_core::{Clock, Meaning, SoftError};
use wortwerk_types::{CategoryTag, ImportRecord};

use crate::score::{parse_learned, parse_score, parse_tags};

/// Fields shared by every word category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DefaultWord {
    lemma: String,
    meanings: Vec<Meaning>,
    third_meanings: Vec<Meaning>,
    category: CategoryTag,
    user: String,
    learned: DateTime<Utc>,
    score: u8,
    tags: Vec<String>,
    errors: Vec<SoftError>,
}

impl DefaultWord {
    /// Metadata of a record; the lemma starts out as the raw notation
    pub fn from_record(
        record: &ImportRecord,
        category: CategoryTag,
        config: &ImportConfig,
        clock: &dyn Clock,
    ) -> Self {
        let mut errors = Vec::new();
        let meanings = decode_meanings(&record.meanings, &mut errors);
        let third_meanings = decode_meanings(&record.third_meanings, &mut errors);

        Self {
            lemma: record.notation.trim().to_string(),
            meanings,
            third_meanings,
            category,
            user: record.user.clone(),
            learned: parse_learned(&record.learned, &config.date_format, clock),
            score: parse_score(&record.score, config.effective_default_score()),
            tags: parse_tags(&record.tags),
            errors,
        }
    }

    pub fn lemma(&self) -> &str {
        &self.lemma
    }

    pub fn meanings(&self) -> &[Meaning] {
        &self.meanings
    }

    pub fn third_meanings(&self) -> &[Meaning] {
        &self.third_meanings
    }

    pub fn category(&self) -> CategoryTag {
        self.category
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn learned(&self) -> DateTime<Utc> {
        self.learned
    }

    pub fn score(&self) -> u8 {
        self.score
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn errors(&self) -> &[SoftError] {
        &self.errors
    }

    /// Copy with a new score; out-of-range scores become the default
    pub fn with_score(self, score: u8) -> Self {
        let score = if (MIN_SCORE..=MAX_SCORE).contains(&score) {
            score
        } else {
            DEFAULT_SCORE
        };
        Self { score, ..self }
    }

    pub fn with_tags(self, tags: Vec<String>) -> Self {
        Self { tags, ..self }
    }

    pub(crate) fn with_lemma(self, lemma: impl Into<String>) -> Self {
        Self {
            lemma: lemma.into(),
            ..self
        }
    }

    pub(crate) fn push_error(&mut self, error: SoftError) {
        self.errors.push(error);
    }
}

fn decode_meanings(text: &str, errors: &mut Vec<SoftError>) -> Vec<Meaning> {
    Meaning::decode(text)
        .into_iter()
        .map(|decoded| {
            decoded.unwrap_or_else(|e| {
                errors.push(SoftError::MalformedMeaning(e.segment.clone()));
                e.into_meaning()
            })
        })
        .collect()
}
