use wortwerk_config::Config;
use wortwerk_config::import::ImportConfig;
use wortwerk_core::{
    Clock, DefaultPreprocessor, ImportError, LanguageImporter, Preprocessor, SystemClock,
};
use wortwerk_types::{CategoryTag, ImportRecord};

use crate::word::{Adjective, DefaultWord, Noun, Verb, Word};

/// Turns import records into German words
pub struct GermanImporter {
    config: ImportConfig,
    log_soft_errors: bool,
    clock: Box<dyn Clock>,
    preprocessor: DefaultPreprocessor,
}

impl GermanImporter {
    /// Importer reading wall-clock time for missing dates
    pub fn new(config: &Config) -> Self {
        Self::with_clock(config, SystemClock)
    }

    pub fn with_clock(config: &Config, clock: impl Clock + 'static) -> Self {
        Self {
            config: config.import.clone(),
            log_soft_errors: config.log_soft_errors,
            clock: Box::new(clock),
            preprocessor: DefaultPreprocessor,
        }
    }

    fn normalize(&self, record: &ImportRecord) -> ImportRecord {
        let p = &self.preprocessor;
        ImportRecord {
            notation: p.process(&record.notation),
            meanings: p.process(&record.meanings),
            third_meanings: p.process(&record.third_meanings),
            category: record.category.trim().to_string(),
            user: record.user.trim().to_string(),
            learned: record.learned.trim().to_string(),
            score: record.score.trim().to_string(),
            tags: p.process(&record.tags),
        }
    }

    fn base(&self, record: &ImportRecord, category: CategoryTag) -> DefaultWord {
        DefaultWord::from_record(record, category, &self.config, self.clock.as_ref())
    }

    fn build(&self, record: &ImportRecord) -> Result<Word, ImportError> {
        let category = record.category_tag();
        let base = self.base(record, category);
        let notation = record.notation.as_str();

        if notation.is_empty() && category != CategoryTag::Generic {
            return Err(ImportError::InvalidRecord(format!(
                "empty notation for {category} record"
            )));
        }

        tracing::debug!("Importing '{}' as {}", notation, category);

        let word = match category {
            CategoryTag::Noun => Word::Noun(Noun::new(notation, base)?),
            CategoryTag::Verb => Word::Verb(Verb::new(notation, base)?),
            CategoryTag::Adjective => Word::Adjective(Adjective::new(notation, base)?),
            CategoryTag::Generic => Word::Generic(base),
        };

        if self.log_soft_errors {
            for error in word.errors() {
                tracing::warn!("'{}': {}", word.lemma(), error);
            }
        }

        Ok(word)
    }

    fn downgrade(&self, record: &ImportRecord, error: &ImportError) -> Word {
        tracing::warn!("Keeping '{}' as generic word: {}", record.notation, error);
        Word::Generic(self.base(record, CategoryTag::Generic))
    }

    /// Import a batch, keeping order.
    ///
    /// With `downgrade_invalid` set, records that fail hard come back as
    /// generic words instead of errors.
    pub fn import_all(&self, records: &[ImportRecord]) -> Vec<Result<Word, ImportError>> {
        let results: Vec<_> = records
            .iter()
            .map(|record| {
                if self.config.downgrade_invalid {
                    Ok(self.import_or_generic(record))
                } else {
                    self.import(record)
                }
            })
            .collect();

        let failed = results.iter().filter(|r| r.is_err()).count();
        let with_errors = results
            .iter()
            .filter(|r| r.as_ref().is_ok_and(|w| !w.errors().is_empty()))
            .count();
        tracing::info!(
            "Imported {} records ({} failed, {} with soft errors)",
            results.len(),
            failed,
            with_errors
        );

        results
    }
}

impl LanguageImporter for GermanImporter {
    type Word = Word;

    fn language_code(&self) -> &str {
        "de"
    }

    fn import(&self, record: &ImportRecord) -> Result<Word, ImportError> {
        self.build(&self.normalize(record))
    }

    fn import_or_generic(&self, record: &ImportRecord) -> Word {
        let record = self.normalize(record);
        self.build(&record)
            .unwrap_or_else(|e| self.downgrade(&record, &e))
    }
}
