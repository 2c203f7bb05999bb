use serde::Serialize;
use wortwerk_core::{ImportError, SoftError};

use super::default::DefaultWord;
use crate::article::Case;
use crate::conjugation::{
    Auxiliary, ConjugationTable, Conjugated, Person, PrincipalParts, Separated, Tense,
};
use crate::notation::{self, ArgumentNotation, PREFIX_MARK, split_alternatives};
use crate::prefix::{Prefix, classify};

const REFLEXIVE_PRONOUN: &str = "sich";

const ACCUSATIVE_PRONOUNS: [&str; 6] = ["mich", "dich", "sich", "uns", "euch", "sich"];
const DATIVE_PRONOUNS: [&str; 6] = ["mir", "dir", "sich", "uns", "euch", "sich"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum Reflexive {
    #[default]
    None,
    Accusative,
    Dative,
}

impl Reflexive {
    /// Reflexive pronoun for a person, None for non-reflexive verbs
    pub fn pronoun(&self, person: Person) -> Option<&'static str> {
        match self {
            Reflexive::None => None,
            Reflexive::Accusative => Some(ACCUSATIVE_PRONOUNS[person.index()]),
            Reflexive::Dative => Some(DATIVE_PRONOUNS[person.index()]),
        }
    }
}

/// Prepositional object, e.g. "auf (A)"
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Argument {
    pub preposition: String,
    pub case: Case,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verb {
    #[serde(flatten)]
    base: DefaultWord,
    auxiliaries: Vec<Auxiliary>,
    prefix: Prefix,
    noun_component: Option<String>,
    adjective_component: Option<String>,
    parts: PrincipalParts,
    reflexive: Reflexive,
    arguments: Vec<Argument>,
}

impl Verb {
    /// Build from notation such as `durch|fallen,fiel,ist durchgefallen+durch (A)`.
    ///
    /// The number of comma-separated parts selects the template:
    /// 1 (regular), 3 (+ preterite, participle), 5 (+ S2, S3) or
    /// 9 (S1..P3, preterite, participle).
    pub fn new(notation: &str, mut base: DefaultWord) -> Result<Self, ImportError> {
        let mismatch = || ImportError::NotationMismatch {
            category: "verb",
            notation: notation.to_string(),
        };
        let parsed = notation::parse_verb(notation).ok_or_else(mismatch)?;

        let mut parts = PrincipalParts::default();
        let mut auxiliaries = Vec::new();
        let slots = &parsed.parts;

        let participle_slot = match slots.len() {
            1 => None,
            3 | 5 => {
                parts.preterite = forms(&slots[1]).ok_or_else(mismatch)?;
                if slots.len() == 5 {
                    parts.persons[Person::S2.index()] = forms(&slots[3]).ok_or_else(mismatch)?;
                    parts.persons[Person::S3.index()] = forms(&slots[4]).ok_or_else(mismatch)?;
                }
                Some(&slots[2])
            }
            9 => {
                for (person, slot) in Person::ALL.iter().zip(&slots[1..7]) {
                    parts.persons[person.index()] = forms(slot).ok_or_else(mismatch)?;
                }
                parts.preterite = forms(&slots[7]).ok_or_else(mismatch)?;
                Some(&slots[8])
            }
            n => return Err(ImportError::UnsupportedTemplate(n)),
        };

        if let Some(slot) = participle_slot {
            let (helpers, participle) = split_auxiliaries(slot).ok_or_else(mismatch)?;
            auxiliaries = helpers;
            parts.participle = forms(participle).ok_or_else(mismatch)?;
        }
        if auxiliaries.is_empty() {
            auxiliaries.push(Auxiliary::Have);
        }

        let (reflexive, arguments) = read_arguments(&parsed.arguments, &mut base);

        let mut words: Vec<&str> = slots[0].split_whitespace().collect();
        let verb_word = words.pop().ok_or_else(mismatch)?;
        let (noun_component, adjective_component) = bound_components(&words);

        let prefix = classify(verb_word);
        parts.infinitive = verb_word.replace(PREFIX_MARK, "");

        let lemma = slots[0]
            .replace(PREFIX_MARK, "")
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");

        tracing::debug!(
            "Verb '{}': {} parts, prefix '{}' (separable: {})",
            lemma,
            slots.len(),
            prefix.text,
            prefix.separable
        );

        Ok(Self {
            base: base.with_lemma(lemma),
            auxiliaries,
            prefix,
            noun_component,
            adjective_component,
            parts,
            reflexive,
            arguments,
        })
    }

    pub fn base(&self) -> &DefaultWord {
        &self.base
    }

    /// Full lemma including bound components, e.g. "Sport treiben"
    pub fn lemma(&self) -> &str {
        self.base.lemma()
    }

    /// The verb proper, e.g. "treiben"
    pub fn infinitive(&self) -> &str {
        &self.parts.infinitive
    }

    pub fn auxiliaries(&self) -> &[Auxiliary] {
        &self.auxiliaries
    }

    pub fn prefix(&self) -> &Prefix {
        &self.prefix
    }

    pub fn noun_component(&self) -> Option<&str> {
        self.noun_component.as_deref()
    }

    pub fn adjective_component(&self) -> Option<&str> {
        self.adjective_component.as_deref()
    }

    pub fn principal_parts(&self) -> &PrincipalParts {
        &self.parts
    }

    pub fn reflexive(&self) -> Reflexive {
        self.reflexive
    }

    pub fn arguments(&self) -> &[Argument] {
        &self.arguments
    }

    pub fn conjugate(&self, tense: Tense, person: Person) -> Vec<Conjugated> {
        match tense {
            Tense::Present => self.parts.present(person),
            Tense::Preterite => self.parts.preterite(person),
            Tense::Perfect => self.parts.perfect(person, &self.auxiliaries, &self.prefix),
        }
    }

    /// Conjugated forms with a separable prefix detached.
    ///
    /// Perfect forms are built on the participle, which is never split.
    pub fn separated(&self, tense: Tense, person: Person) -> Vec<Separated> {
        let keep = Prefix::none();
        let prefix = match tense {
            Tense::Present | Tense::Preterite => &self.prefix,
            Tense::Perfect => &keep,
        };

        self.conjugate(tense, person)
            .iter()
            .map(|form| Separated::split(form, prefix))
            .collect()
    }

    pub fn past_participles(&self) -> Vec<Conjugated> {
        self.parts.participles(&self.prefix)
    }

    pub fn conjugation_table(&self) -> ConjugationTable {
        ConjugationTable::build(&self.parts, &self.auxiliaries, &self.prefix)
    }
}

/// Alternatives of a form slot with prefix marks removed; None if the slot
/// carries anything but forms
fn forms(slot: &str) -> Option<Vec<String>> {
    if slot.contains(char::is_whitespace) {
        return None;
    }
    Some(
        split_alternatives(slot)
            .into_iter()
            .map(|f| f.replace(PREFIX_MARK, ""))
            .collect(),
    )
}

/// "hat/ist geschwommen" -> ([Have, Be], "geschwommen")
fn split_auxiliaries(slot: &str) -> Option<(Vec<Auxiliary>, &str)> {
    let Some((head, participle)) = slot.split_once(char::is_whitespace) else {
        return Some((Vec::new(), slot));
    };

    let auxiliaries = head
        .split(notation::ALTERNATIVE_SEPARATOR)
        .map(Auxiliary::from_word)
        .collect::<Option<Vec<_>>>()?;
    Some((auxiliaries, participle.trim()))
}

fn read_arguments(
    arguments: &[ArgumentNotation],
    base: &mut DefaultWord,
) -> (Reflexive, Vec<Argument>) {
    let mut reflexive = Reflexive::None;
    let mut rest = arguments;

    if let Some((first, tail)) = arguments.split_first() {
        if first.preposition == REFLEXIVE_PRONOUN {
            rest = tail;
            match first.case.as_deref().and_then(Case::from_letter) {
                Some(Case::Accusative) => reflexive = Reflexive::Accusative,
                Some(Case::Dative) => reflexive = Reflexive::Dative,
                _ => {
                    let detail = describe(first);
                    tracing::warn!("Invalid reflexive definition '{}'", detail);
                    base.push_error(SoftError::InvalidReflexive(detail));
                }
            }
        }
    }

    let arguments = rest
        .iter()
        .filter_map(|arg| {
            let case = match arg.case.as_deref() {
                None => Case::Genitive,
                Some(letter) => match Case::from_letter(letter) {
                    Some(case) => case,
                    None => {
                        let detail = describe(arg);
                        tracing::warn!("Invalid argument case '{}'", detail);
                        base.push_error(SoftError::InvalidArgumentCase(detail));
                        return None;
                    }
                },
            };
            Some(Argument {
                preposition: arg.preposition.clone(),
                case,
            })
        })
        .collect();

    (reflexive, arguments)
}

fn describe(arg: &ArgumentNotation) -> String {
    match &arg.case {
        Some(case) => format!("{} ({})", arg.preposition, case),
        None => arg.preposition.clone(),
    }
}

/// Words before the verb: capitalized ones are nouns, the rest adjectives
fn bound_components(words: &[&str]) -> (Option<String>, Option<String>) {
    let mut nouns = Vec::new();
    let mut adjectives = Vec::new();

    for word in words {
        if word.chars().next().is_some_and(char::is_uppercase) {
            nouns.push(*word);
        } else {
            adjectives.push(*word);
        }
    }

    (joined(&nouns), joined(&adjectives))
}

fn joined(words: &[&str]) -> Option<String> {
    (!words.is_empty()).then(|| words.join(" "))
}
