//! Gender classes, grammatical cases and the article/determiner tables.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Gender class of a noun, used as a table key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Article {
    Der,
    Die,
    Das,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Case {
    Nominative,
    Accusative,
    Dative,
    Genitive,
}

impl Article {
    pub const ALL: [Article; 3] = [Article::Der, Article::Die, Article::Das];

    /// Dictionary code: r (der), e (die), s (das)
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "r" => Some(Article::Der),
            "e" => Some(Article::Die),
            "s" => Some(Article::Das),
            _ => None,
        }
    }
}

impl fmt::Display for Article {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(definite(*self, false, Case::Nominative))
    }
}

impl Case {
    pub const ALL: [Case; 4] = [Case::Nominative, Case::Accusative, Case::Dative, Case::Genitive];

    /// Case letter as used in verb arguments: N, A, D, G
    pub fn from_letter(letter: &str) -> Option<Self> {
        match letter {
            "N" => Some(Case::Nominative),
            "A" => Some(Case::Accusative),
            "D" => Some(Case::Dative),
            "G" => Some(Case::Genitive),
            _ => None,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Table column: the three genders in the singular, one column for plural
pub(crate) fn column(article: Article, plural: bool) -> usize {
    if plural {
        return 3;
    }
    match article {
        Article::Der => 0,
        Article::Die => 1,
        Article::Das => 2,
    }
}

pub(crate) type Table<T> = [[T; 4]; 4];

// rows: der, die, das, plural; columns: N, A, D, G
const DEFINITE: Table<&str> = [
    ["der", "den", "dem", "des"],
    ["die", "die", "der", "der"],
    ["das", "das", "dem", "des"],
    ["die", "die", "den", "der"],
];

const EIN_WORD_ENDINGS: Table<&str> = [
    ["", "en", "em", "es"],
    ["e", "e", "er", "er"],
    ["", "", "em", "es"],
    ["e", "e", "en", "er"],
];

const DER_WORD_ENDINGS: Table<&str> = [
    ["er", "en", "em", "es"],
    ["e", "e", "er", "er"],
    ["es", "es", "em", "es"],
    ["e", "e", "en", "er"],
];

pub(crate) fn lookup<T: Copy>(table: &Table<T>, article: Article, plural: bool, case: Case) -> T {
    table[column(article, plural)][case.index()]
}

/// Definite article surface form
pub fn definite(article: Article, plural: bool, case: Case) -> &'static str {
    lookup(&DEFINITE, article, plural, case)
}

/// Indefinite article surface form; empty where German has none
pub fn indefinite(article: Article, plural: bool, case: Case) -> String {
    determiner("ein", article, plural, case)
}

/// Declined ein-word (ein, kein, mein, unser, ...).
///
/// A trailing `e` on the stem is trimmed before the ending is applied.
pub fn determiner(stem: &str, article: Article, plural: bool, case: Case) -> String {
    let stem = stem.strip_suffix('e').unwrap_or(stem);

    if stem == "ein" && plural && matches!(case, Case::Nominative | Case::Accusative) {
        return String::new();
    }

    format!("{stem}{}", lookup(&EIN_WORD_ENDINGS, article, plural, case))
}

/// Declined der-word (dies, jen, jed, welch, ...)
pub fn der_word(stem: &str, article: Article, plural: bool, case: Case) -> String {
    let stem = stem.strip_suffix('e').unwrap_or(stem);
    format!("{stem}{}", lookup(&DER_WORD_ENDINGS, article, plural, case))
}
