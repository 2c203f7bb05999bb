pub mod clock;
pub mod error;
pub mod language;
pub mod meaning;
pub mod preprocess;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{ImportError, SoftError};
pub use language::LanguageImporter;
pub use meaning::{Meaning, MeaningError};
pub use preprocess::{DefaultPreprocessor, Preprocessor};
