pub mod article;
pub mod conjugation;
pub mod declension;
pub mod decline;
pub mod importer;
pub mod loader;
pub mod notation;
pub mod prefix;
pub mod score;
pub mod word;

#[cfg(test)]
mod tests;

pub use article::{Article, Case};
pub use conjugation::{Auxiliary, ConjugationTable, Conjugated, Person, Separated, Tense};
pub use declension::{Degree, Pattern};
pub use decline::{decline, umlautize};
pub use importer::GermanImporter;
pub use loader::RecordLoader;
pub use prefix::{Prefix, classify};
pub use word::{Adjective, Argument, DefaultWord, Noun, Reflexive, Verb, Word};
