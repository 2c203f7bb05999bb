use serde::Serialize;
use wortwerk_core::ImportError;

use super::default::DefaultWord;
use crate::article::{Article, Case, definite};
use crate::decline::decline_all;
use crate::notation;

/// Article code for nouns that only exist in the plural
const PLURAL_ONLY_CODE: &str = "pl";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Noun {
    #[serde(flatten)]
    base: DefaultWord,
    articles: Vec<Article>,
    plural_endings: Vec<String>,
    genitive_endings: Vec<String>,
    plural_only: bool,
}

impl Noun {
    /// Build from notation such as `r Anspruch,⍨e,~s`
    pub fn new(notation: &str, base: DefaultWord) -> Result<Self, ImportError> {
        let parsed = notation::parse_noun(notation).ok_or_else(|| ImportError::NotationMismatch {
            category: "noun",
            notation: notation.to_string(),
        })?;

        let mut articles = Vec::new();
        let mut plural_only = false;
        for code in &parsed.articles {
            if code == PLURAL_ONLY_CODE {
                plural_only = true;
                continue;
            }
            let article =
                Article::from_code(code).ok_or_else(|| ImportError::UnknownArticle(code.clone()))?;
            if !articles.contains(&article) {
                articles.push(article);
            }
        }

        Ok(Self {
            base: base.with_lemma(parsed.lemma),
            articles,
            plural_endings: parsed.plurals,
            genitive_endings: parsed.genitives,
            plural_only,
        })
    }

    pub fn base(&self) -> &DefaultWord {
        &self.base
    }

    pub fn lemma(&self) -> &str {
        self.base.lemma()
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn plural_endings(&self) -> &[String] {
        &self.plural_endings
    }

    pub fn genitive_endings(&self) -> &[String] {
        &self.genitive_endings
    }

    pub fn is_plural_only(&self) -> bool {
        self.plural_only
    }

    pub fn plurals(&self) -> Vec<String> {
        if self.plural_only {
            return vec![self.lemma().to_string()];
        }
        decline_all(self.lemma(), &self.plural_endings)
    }

    pub fn genitives(&self) -> Vec<String> {
        if self.plural_only {
            return Vec::new();
        }
        decline_all(self.lemma(), &self.genitive_endings)
    }

    /// Noun forms for a case and number.
    ///
    /// Plural-only nouns answer every request with their plural forms.
    pub fn decline(&self, case: Case, plural: bool) -> Vec<String> {
        if plural || self.plural_only {
            let plurals = self.plurals();
            if case != Case::Dative {
                return plurals;
            }
            return plurals
                .into_iter()
                .map(|p| {
                    if p.ends_with('n') || p.ends_with('s') {
                        p
                    } else {
                        format!("{p}n")
                    }
                })
                .collect();
        }

        match case {
            Case::Genitive if !self.genitive_endings.is_empty() => self.genitives(),
            _ => vec![self.lemma().to_string()],
        }
    }

    /// Declined forms preceded by the matching definite article
    pub fn with_definite_article(&self, case: Case, plural: bool) -> Vec<String> {
        let forms = self.decline(case, plural);

        if plural || self.plural_only {
            let article = definite(Article::Die, true, case);
            return forms.iter().map(|f| format!("{article} {f}")).collect();
        }
        if self.articles.is_empty() {
            return forms;
        }

        self.articles
            .iter()
            .flat_map(|a| {
                let article = definite(*a, false, case);
                forms.iter().map(move |f| format!("{article} {f}"))
            })
            .collect()
    }
}
