//! Person/tense paradigms derived from a verb's principal parts.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::decline::{MISSING, attach};
use crate::prefix::Prefix;

const PRESENT_SUFFIXES: [&str; 6] = ["e", "st", "t", "", "t", ""];
const WEAK_PRETERITE_SUFFIXES: [&str; 6] = ["te", "test", "te", "ten", "tet", "ten"];
const STRONG_PRETERITE_SUFFIXES: [&str; 6] = ["", "st", "", "en", "t", "en"];

const HABEN: [&str; 6] = ["habe", "hast", "hat", "haben", "habt", "haben"];
const SEIN: [&str; 6] = ["bin", "bist", "ist", "sind", "seid", "sind"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Person {
    S1,
    S2,
    S3,
    P1,
    P2,
    P3,
}

impl Person {
    pub const ALL: [Person; 6] = [
        Person::S1,
        Person::S2,
        Person::S3,
        Person::P1,
        Person::P2,
        Person::P3,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Persons whose present form is the infinitive itself
    fn takes_infinitive(self) -> bool {
        matches!(self, Person::P1 | Person::P3)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tense {
    Present,
    Preterite,
    Perfect,
}

/// Perfect-tense helper verb
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Auxiliary {
    Have,
    Be,
}

impl Auxiliary {
    /// Third-person singular as written in notation: "hat" or "ist"
    pub fn from_word(word: &str) -> Option<Self> {
        match word {
            "hat" => Some(Auxiliary::Have),
            "ist" => Some(Auxiliary::Be),
            _ => None,
        }
    }

    pub fn infinitive(&self) -> &'static str {
        match self {
            Auxiliary::Have => "haben",
            Auxiliary::Be => "sein",
        }
    }

    pub fn present(&self, person: Person) -> &'static str {
        match self {
            Auxiliary::Have => HABEN[person.index()],
            Auxiliary::Be => SEIN[person.index()],
        }
    }
}

/// One conjugated form, or the marker that the verb has none for that slot
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Conjugated {
    Form(String),
    Missing,
}

impl Conjugated {
    fn from_source(source: &str) -> Self {
        if source == MISSING {
            Conjugated::Missing
        } else {
            Conjugated::Form(source.to_string())
        }
    }

    pub fn as_form(&self) -> Option<&str> {
        match self {
            Conjugated::Form(form) => Some(form),
            Conjugated::Missing => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Conjugated::Missing)
    }

    fn map(&self, f: impl FnOnce(&str) -> String) -> Self {
        match self {
            Conjugated::Form(form) => Conjugated::Form(f(form)),
            Conjugated::Missing => Conjugated::Missing,
        }
    }
}

impl fmt::Display for Conjugated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Conjugated::Form(form) => f.write_str(form),
            Conjugated::Missing => f.write_str(MISSING),
        }
    }
}

/// A conjugated form with its separable prefix detached
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Separated {
    Form { stem: String, prefix: String },
    Missing,
}

impl Separated {
    /// Detach `prefix` from the front of the form when it is separable.
    ///
    /// Forms that were supplied without the prefix keep their text as the
    /// stem.
    pub fn split(form: &Conjugated, prefix: &Prefix) -> Self {
        let Conjugated::Form(form) = form else {
            return Separated::Missing;
        };

        if !prefix.is_separable() {
            return Separated::Form {
                stem: form.clone(),
                prefix: String::new(),
            };
        }

        let stem = form
            .strip_prefix(prefix.text.as_str())
            .filter(|rest| !rest.is_empty())
            .unwrap_or(form);

        Separated::Form {
            stem: stem.to_string(),
            prefix: prefix.text.clone(),
        }
    }

    /// Main-clause word order: "fällt durch"
    pub fn to_clause_order(&self) -> Option<String> {
        match self {
            Separated::Form { stem, prefix } if prefix.is_empty() => Some(stem.clone()),
            Separated::Form { stem, prefix } => Some(format!("{stem} {prefix}")),
            Separated::Missing => None,
        }
    }
}

/// Principal parts as supplied by notation; empty lists are derived
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrincipalParts {
    pub infinitive: String,
    /// Present forms for S1..P3
    pub persons: [Vec<String>; 6],
    pub preterite: Vec<String>,
    pub participle: Vec<String>,
}

/// Infinitive without its trailing "en" or "n"
pub fn present_stem(infinitive: &str) -> &str {
    infinitive
        .strip_suffix("en")
        .or_else(|| infinitive.strip_suffix('n'))
        .unwrap_or(infinitive)
}

impl PrincipalParts {
    /// Stem for rule-based forms, taken from an explicit P1 when present
    pub fn stem(&self) -> &str {
        match self.persons[Person::P1.index()].first() {
            Some(p1) if p1 != MISSING => present_stem(p1),
            _ => present_stem(&self.infinitive),
        }
    }

    /// The source marks this person as non-existent
    pub fn is_missing(&self, person: Person) -> bool {
        let source = &self.persons[person.index()];
        !source.is_empty() && source.iter().all(|s| s == MISSING)
    }

    pub fn present(&self, person: Person) -> Vec<Conjugated> {
        let source = &self.persons[person.index()];
        if !source.is_empty() {
            return source.iter().map(|s| Conjugated::from_source(s)).collect();
        }

        let form = if person.takes_infinitive() {
            self.infinitive.clone()
        } else {
            attach(self.stem(), PRESENT_SUFFIXES[person.index()])
        };
        vec![Conjugated::Form(form)]
    }

    pub fn preterite(&self, person: Person) -> Vec<Conjugated> {
        if self.is_missing(person) {
            return vec![Conjugated::Missing];
        }

        if self.preterite.is_empty() {
            let suffix = WEAK_PRETERITE_SUFFIXES[person.index()];
            return vec![Conjugated::Form(attach(self.stem(), suffix))];
        }

        let suffix = STRONG_PRETERITE_SUFFIXES[person.index()];
        self.preterite
            .iter()
            .map(|s| Conjugated::from_source(s).map(|form| attach(form, suffix)))
            .collect()
    }

    /// Explicit participles, or the regular "ge-…-t" participle
    pub fn participles(&self, prefix: &Prefix) -> Vec<Conjugated> {
        if !self.participle.is_empty() {
            return self
                .participle
                .iter()
                .map(|s| Conjugated::from_source(s))
                .collect();
        }

        let stem = self.stem();
        let form = if self.infinitive.ends_with("ieren") || prefix.is_inseparable() {
            attach(stem, "t")
        } else if prefix.is_separable() {
            let rest = stem.strip_prefix(prefix.text.as_str()).unwrap_or(stem);
            format!("{}ge{}", prefix.text, attach(rest, "t"))
        } else {
            format!("ge{}", attach(stem, "t"))
        };
        vec![Conjugated::Form(form)]
    }

    pub fn perfect(
        &self,
        person: Person,
        auxiliaries: &[Auxiliary],
        prefix: &Prefix,
    ) -> Vec<Conjugated> {
        if self.is_missing(person) {
            return vec![Conjugated::Missing];
        }

        let participles = self.participles(prefix);
        auxiliaries
            .iter()
            .flat_map(|aux| {
                participles
                    .iter()
                    .map(move |pp| pp.map(|pp| format!("{} {pp}", aux.present(person))))
            })
            .collect()
    }
}

/// Every person of every tense, in Person::ALL order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConjugationTable {
    pub present: [Vec<Conjugated>; 6],
    pub preterite: [Vec<Conjugated>; 6],
    pub perfect: [Vec<Conjugated>; 6],
    pub participles: Vec<Conjugated>,
}

impl ConjugationTable {
    pub fn build(parts: &PrincipalParts, auxiliaries: &[Auxiliary], prefix: &Prefix) -> Self {
        Self {
            present: Person::ALL.map(|p| parts.present(p)),
            preterite: Person::ALL.map(|p| parts.preterite(p)),
            perfect: Person::ALL.map(|p| parts.perfect(p, auxiliaries, prefix)),
            participles: parts.participles(prefix),
        }
    }

    pub fn get(&self, tense: Tense, person: Person) -> &[Conjugated] {
        match tense {
            Tense::Present => &self.present[person.index()],
            Tense::Preterite => &self.preterite[person.index()],
            Tense::Perfect => &self.perfect[person.index()],
        }
    }
}
