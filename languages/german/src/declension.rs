//! Adjective ending tables.

use serde::{Deserialize, Serialize};

use crate::article::{Article, Case, Table, lookup};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Degree {
    Positive,
    Comparative,
    Superlative,
}

/// Which determiner (if any) precedes the adjective
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pattern {
    /// No determiner
    Strong,
    /// After ein-words
    Mixed,
    /// After der-words
    Weak,
}

// rows: der, die, das, plural; columns: N, A, D, G
const STRONG: Table<&str> = [
    ["~er", "~en", "~em", "~en"],
    ["~e", "~e", "~er", "~er"],
    ["~es", "~es", "~em", "~en"],
    ["~e", "~e", "~en", "~er"],
];

const MIXED: Table<&str> = [
    ["~er", "~en", "~en", "~en"],
    ["~e", "~e", "~en", "~en"],
    ["~es", "~es", "~en", "~en"],
    ["~en", "~en", "~en", "~en"],
];

const WEAK: Table<&str> = [
    ["~e", "~en", "~en", "~en"],
    ["~e", "~e", "~en", "~en"],
    ["~e", "~e", "~en", "~en"],
    ["~en", "~en", "~en", "~en"],
];

/// Encoded adjective ending for the given position
pub fn ending(pattern: Pattern, article: Article, plural: bool, case: Case) -> &'static str {
    let table = match pattern {
        Pattern::Strong => &STRONG,
        Pattern::Mixed => &MIXED,
        Pattern::Weak => &WEAK,
    };
    lookup(table, article, plural, case)
}
