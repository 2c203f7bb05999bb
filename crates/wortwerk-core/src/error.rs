use serde::Serialize;

/// Record could not be turned into a typed word
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImportError {
    #[error("Notation does not match {category} grammar: {notation}")]
    NotationMismatch {
        category: &'static str,
        notation: String,
    },

    #[error("Unsupported number of principal parts: {0}")]
    UnsupportedTemplate(usize),

    #[error("Unknown article code: {0}")]
    UnknownArticle(String),

    #[error("Invalid record: {0}")]
    InvalidRecord(String),
}

/// Problem that still allows the word to be built
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum SoftError {
    #[error("reflexive definition is invalid: {0}")]
    InvalidReflexive(String),

    #[error("argument case is invalid: {0}")]
    InvalidArgumentCase(String),

    #[error("meaning is malformed: {0}")]
    MalformedMeaning(String),
}
