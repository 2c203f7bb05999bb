use wortwerk_types::ImportRecord;

use crate::error::ImportError;

/// Builds typed words of one language from import records
pub trait LanguageImporter: Send + Sync {
    type Word;

    /// Language identifier (ISO 639-1 code: "de", "ja", ...)
    fn language_code(&self) -> &str;

    /// Build a typed word, failing when the notation is invalid
    fn import(&self, record: &ImportRecord) -> Result<Self::Word, ImportError>;

    /// Build a typed word, falling back to an untyped one on failure
    fn import_or_generic(&self, record: &ImportRecord) -> Self::Word;
}
