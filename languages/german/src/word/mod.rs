pub mod adjective;
pub mod default;
pub mod noun;
pub mod verb;

use serde::Serialize;
use wortwerk_core::SoftError;
use wortwerk_types::CategoryTag;

pub use adjective::Adjective;
pub use default::DefaultWord;
pub use noun::Noun;
pub use verb::{Argument, Reflexive, Verb};

use crate::conjugation::{Conjugated, Person, Tense};

/// A vocabulary entry of any category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Word {
    Noun(Noun),
    Verb(Verb),
    Adjective(Adjective),
    Generic(DefaultWord),
}

impl Word {
    pub fn base(&self) -> &DefaultWord {
        match self {
            Word::Noun(noun) => noun.base(),
            Word::Verb(verb) => verb.base(),
            Word::Adjective(adjective) => adjective.base(),
            Word::Generic(base) => base,
        }
    }

    pub fn lemma(&self) -> &str {
        self.base().lemma()
    }

    pub fn category(&self) -> CategoryTag {
        self.base().category()
    }

    pub fn errors(&self) -> &[SoftError] {
        self.base().errors()
    }

    pub fn as_noun(&self) -> Option<&Noun> {
        match self {
            Word::Noun(noun) => Some(noun),
            _ => None,
        }
    }

    pub fn as_verb(&self) -> Option<&Verb> {
        match self {
            Word::Verb(verb) => Some(verb),
            _ => None,
        }
    }

    pub fn as_adjective(&self) -> Option<&Adjective> {
        match self {
            Word::Adjective(adjective) => Some(adjective),
            _ => None,
        }
    }

    /// Every generated surface form, lemma first, without duplicates
    pub fn surface_forms(&self) -> Vec<String> {
        let mut forms = vec![self.lemma().to_string()];

        match self {
            Word::Noun(noun) => {
                forms.extend(noun.plurals());
                forms.extend(noun.genitives());
            }
            Word::Verb(verb) => {
                for tense in [Tense::Present, Tense::Preterite] {
                    for person in Person::ALL {
                        forms.extend(verb.conjugate(tense, person).iter().filter_map(form_text));
                    }
                }
                forms.extend(verb.past_participles().iter().filter_map(form_text));
            }
            Word::Adjective(adjective) => {
                forms.extend(adjective.comparatives());
                forms.extend(adjective.superlatives());
            }
            Word::Generic(_) => {}
        }

        let mut seen = std::collections::HashSet::new();
        forms.retain(|f| seen.insert(f.clone()));
        forms
    }

    /// Display summary of the word
    pub fn metadata(&self) -> serde_json::Value {
        let base = self.base();
        let mut metadata = serde_json::json!({
            "lemma": base.lemma(),
            "category": base.category().as_str(),
            "meanings": base.meanings().iter().map(ToString::to_string).collect::<Vec<_>>(),
            "score": base.score(),
            "learned": base.learned().format("%Y-%m-%d").to_string(),
            "errors": base.errors().iter().map(ToString::to_string).collect::<Vec<_>>(),
        });

        let extra = match self {
            Word::Noun(noun) => serde_json::json!({
                "articles": noun.articles().iter().map(ToString::to_string).collect::<Vec<_>>(),
                "plurals": noun.plurals(),
                "genitives": noun.genitives(),
            }),
            Word::Verb(verb) => serde_json::json!({
                "prefix": verb.prefix().text,
                "separable": verb.prefix().separable,
                "participles": verb
                    .past_participles()
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>(),
            }),
            Word::Adjective(adjective) => serde_json::json!({
                "comparatives": adjective.comparatives(),
                "superlatives": adjective.superlatives(),
            }),
            Word::Generic(_) => serde_json::json!({}),
        };

        if let (Some(target), serde_json::Value::Object(extra)) = (metadata.as_object_mut(), extra) {
            target.extend(extra);
        }
        metadata
    }
}

fn form_text(form: &Conjugated) -> Option<String> {
    form.as_form().map(str::to_string)
}
