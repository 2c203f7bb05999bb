use std::fmt;

use serde::{Deserialize, Serialize};

/// One vocabulary entry as supplied by an import collaborator
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportRecord {
    /// Encoded German notation, e.g. "jung,⍨er,⍨sten"
    pub notation: String,
    /// Source-language meanings, `;`-separated
    pub meanings: String,
    /// Third-language meanings, `;`-separated
    pub third_meanings: String,
    pub category: String,
    pub user: String,
    /// `YYYY-MM-DD`
    pub learned: String,
    pub score: String,
    /// Comma-separated
    pub tags: String,
}

impl ImportRecord {
    /// Field order used by tab-separated import files
    pub const FIELD_COUNT: usize = 8;

    pub fn category_tag(&self) -> CategoryTag {
        CategoryTag::from_tag(&self.category)
    }

    /// Build from fields in import order, None on a wrong field count
    pub fn from_fields(fields: &[&str]) -> Option<Self> {
        let [notation, meanings, third_meanings, category, user, learned, score, tags] = fields
        else {
            return None;
        };

        Some(Self {
            notation: notation.to_string(),
            meanings: meanings.to_string(),
            third_meanings: third_meanings.to_string(),
            category: category.to_string(),
            user: user.to_string(),
            learned: learned.to_string(),
            score: score.to_string(),
            tags: tags.to_string(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryTag {
    Noun,
    Verb,
    #[serde(rename = "adj")]
    Adjective,
    Generic,
}

impl CategoryTag {
    /// Anything other than the three typed tags is generic
    pub fn from_tag(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "noun" => CategoryTag::Noun,
            "verb" => CategoryTag::Verb,
            "adj" => CategoryTag::Adjective,
            _ => CategoryTag::Generic,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryTag::Noun => "noun",
            CategoryTag::Verb => "verb",
            CategoryTag::Adjective => "adj",
            CategoryTag::Generic => "generic",
        }
    }
}

impl fmt::Display for CategoryTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
