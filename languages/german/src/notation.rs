//! Structural grammars for the compact notation of each word category.
//!
//! A notation is `lemma[,alt1[,alt2]]` where every slot after the lemma may
//! hold `/`-separated alternatives. Verbs may carry a trailing argument block
//! introduced by `+`. The grammars only decompose; interpretation of the
//! captured slots belongs to the word constructors.

use lazy_static::lazy_static;
use regex::Regex;

/// Separator between alternatives inside a slot
pub const ALTERNATIVE_SEPARATOR: char = '/';
/// Separator between verb arguments
pub const ARGUMENT_SEPARATOR: char = '+';
/// Explicit split between a separable prefix and the verb
pub const PREFIX_MARK: char = '|';

const LETTER: &str = "a-zA-ZäöüÄÖÜß";

lazy_static! {
    static ref ENDINGS: String = {
        let alternative = format!("(?:-|[~⍨][{LETTER}]*|[{LETTER}]+)");
        format!(r"{alternative}(?:/{alternative})*")
    };

    static ref NOUN: Regex = Regex::new(&format!(
        r"^(?:([a-z]+(?:/[a-z]+)*)\s+)?([A-ZÄÖÜ][{LETTER}]*(?:[- ][{LETTER}]+)*)(?:\s*,\s*({endings})?)?(?:\s*,\s*({endings})?)?$",
        endings = *ENDINGS
    ))
    .unwrap();

    static ref ADJECTIVE: Regex = Regex::new(&format!(
        r"^([a-zäöüß]+)(?:\s*,\s*({endings})?)?(?:\s*,\s*({endings})?)?$",
        endings = *ENDINGS
    ))
    .unwrap();

    static ref VERB_LEMMA: Regex =
        Regex::new(&format!(r"^(?:[{LETTER}]+\s+)*[a-zäöüß][a-zäöüß|]*$")).unwrap();

    static ref VERB_SLOT: Regex = Regex::new(&format!(
        r"^(?:(?:hat|ist)(?:/(?:hat|ist))*\s+)?(?:-|[{LETTER}|]+)(?:/(?:-|[{LETTER}|]+))*$"
    ))
    .unwrap();

    static ref VERB_ARGUMENT: Regex = Regex::new(&format!(
        r"^([{LETTER}]+(?:\s+[{LETTER}]+)*)\s*(?:\(\s*([{LETTER}]*)\s*\))?$"
    ))
    .unwrap();
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NounNotation {
    /// Raw article codes, validated by the noun constructor
    pub articles: Vec<String>,
    pub lemma: String,
    pub plurals: Vec<String>,
    pub genitives: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjectiveNotation {
    pub lemma: String,
    pub comparatives: Vec<String>,
    pub superlatives: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerbNotation {
    /// Comma-separated principal parts, lemma first, still carrying marks
    pub parts: Vec<String>,
    pub arguments: Vec<ArgumentNotation>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentNotation {
    pub preposition: String,
    /// Content of the parenthetical, None when absent
    pub case: Option<String>,
}

fn alternatives(slot: Option<regex::Match<'_>>) -> Vec<String> {
    slot.map(|m| split_alternatives(m.as_str()))
        .unwrap_or_default()
}

/// Split a slot into its trimmed, non-empty alternatives
pub fn split_alternatives(slot: &str) -> Vec<String> {
    slot.split(ALTERNATIVE_SEPARATOR)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn parse_noun(notation: &str) -> Option<NounNotation> {
    let caps = NOUN.captures(notation.trim())?;

    Some(NounNotation {
        articles: alternatives(caps.get(1)),
        lemma: caps.get(2)?.as_str().to_string(),
        plurals: alternatives(caps.get(3)),
        genitives: alternatives(caps.get(4)),
    })
}

pub fn parse_adjective(notation: &str) -> Option<AdjectiveNotation> {
    let caps = ADJECTIVE.captures(notation.trim())?;

    Some(AdjectiveNotation {
        lemma: caps.get(1)?.as_str().to_string(),
        comparatives: alternatives(caps.get(2)),
        superlatives: alternatives(caps.get(3)),
    })
}

pub fn parse_verb(notation: &str) -> Option<VerbNotation> {
    let mut blocks = notation.trim().split(ARGUMENT_SEPARATOR);
    let main = blocks.next()?.trim();

    let parts: Vec<String> = main.split(',').map(|p| p.trim().to_string()).collect();
    let (lemma, slots) = parts.split_first()?;
    if !VERB_LEMMA.is_match(lemma) {
        return None;
    }
    if !slots.iter().all(|slot| VERB_SLOT.is_match(slot)) {
        return None;
    }

    let arguments = blocks
        .map(|block| {
            let caps = VERB_ARGUMENT.captures(block.trim())?;
            Some(ArgumentNotation {
                preposition: caps.get(1)?.as_str().split_whitespace().collect::<Vec<_>>().join(" "),
                case: caps.get(2).map(|c| c.as_str().to_string()),
            })
        })
        .collect::<Option<Vec<_>>>()?;

    Some(VerbNotation { parts, arguments })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noun_with_plural() {
        let noun = parse_noun("Verabredung,~en").unwrap();
        assert_eq!(noun.lemma, "Verabredung");
        assert_eq!(noun.plurals, vec!["~en"]);
        assert!(noun.genitives.is_empty());
        assert!(noun.articles.is_empty());
    }

    #[test]
    fn noun_with_umlaut_plural_and_genitive() {
        let noun = parse_noun("r Anspruch, ⍨e, ~s/~es").unwrap();
        assert_eq!(noun.articles, vec!["r"]);
        assert_eq!(noun.lemma, "Anspruch");
        assert_eq!(noun.plurals, vec!["⍨e"]);
        assert_eq!(noun.genitives, vec!["~s", "~es"]);
    }

    #[test]
    fn noun_with_full_form_plural() {
        let noun = parse_noun("s Jurastudium,Jurastudien").unwrap();
        assert_eq!(noun.plurals, vec!["Jurastudien"]);
    }

    #[test]
    fn noun_rejections() {
        assert!(parse_noun("Verabredung!,~en").is_none());
        assert!(parse_noun("verabredung,~en").is_none());
        assert!(parse_noun("Haus,⍨er,~es,~e").is_none());
        assert!(parse_noun("Çay,~s").is_none());
        assert!(parse_noun("").is_none());
    }

    #[test]
    fn adjective_grammar() {
        let adj = parse_adjective("jung,⍨er,⍨sten").unwrap();
        assert_eq!(adj.lemma, "jung");
        assert_eq!(adj.comparatives, vec!["⍨er"]);
        assert_eq!(adj.superlatives, vec!["⍨sten"]);

        assert_eq!(parse_adjective("schmal").unwrap().comparatives, Vec::<String>::new());
        assert!(parse_adjective("Jung,⍨er").is_none());
        assert!(parse_adjective("jolí,~er").is_none());
        assert!(parse_adjective("jung,⍨er,⍨sten,x").is_none());
    }

    #[test]
    fn verb_grammar() {
        let verb = parse_verb("sein, bin, bist, ist, sein, seid, sein, war, ist gewesen").unwrap();
        assert_eq!(verb.parts.len(), 9);
        assert_eq!(verb.parts[8], "ist gewesen");

        let verb = parse_verb("durch|fallen,fiel,ist durchgefallen+durch (A)").unwrap();
        assert_eq!(verb.parts[0], "durch|fallen");
        assert_eq!(
            verb.arguments,
            vec![ArgumentNotation {
                preposition: "durch".to_string(),
                case: Some("A".to_string()),
            }]
        );
    }

    #[test]
    fn verb_argument_without_case() {
        let verb = parse_verb("freuen+sich+auf (A)").unwrap();
        assert_eq!(verb.arguments[0].case, None);
        assert_eq!(verb.arguments[1].case.as_deref(), Some("A"));
    }

    #[test]
    fn verb_rejections() {
        assert!(parse_verb("Fallen").is_none());
        assert!(parse_verb("fallen, fiel!").is_none());
        assert!(parse_verb("fallen+(A)").is_none());
    }
}
