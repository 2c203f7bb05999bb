use std::fmt;

use serde::{Deserialize, Serialize};

const SEPARATOR: char = ';';

/// One gloss with an optional qualifier, e.g. "bank (financial)"
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meaning {
    pub main: String,
    pub parenthetical: String,
}

/// A segment whose parentheses could not be decoded
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("cannot decode meaning segment '{segment}'")]
pub struct MeaningError {
    pub segment: String,
}

impl MeaningError {
    /// The segment kept verbatim, for callers that keep going
    pub fn into_meaning(self) -> Meaning {
        Meaning::new(self.segment, String::new())
    }
}

impl Meaning {
    pub fn new(main: impl Into<String>, parenthetical: impl Into<String>) -> Self {
        Self {
            main: main.into(),
            parenthetical: parenthetical.into(),
        }
    }

    /// Decode a single segment: `main` or `main (parenthetical)`
    pub fn parse(segment: &str) -> Result<Self, MeaningError> {
        let segment = segment.trim();
        let fail = || MeaningError {
            segment: segment.to_string(),
        };

        let opens = segment.matches('(').count();
        let closes = segment.matches(')').count();

        if opens == 0 && closes == 0 {
            return Ok(Self::new(segment, ""));
        }
        if opens != 1 || closes != 1 {
            return Err(fail());
        }

        let (Some(open), Some(close)) = (segment.find('('), segment.rfind(')')) else {
            return Err(fail());
        };
        // Nothing may follow the closing parenthesis
        if close < open || close != segment.len() - 1 {
            return Err(fail());
        }

        Ok(Self::new(
            segment[..open].trim(),
            segment[open + 1..close].trim(),
        ))
    }

    /// Decode a `;`-separated list; empty segments are skipped
    pub fn decode(text: &str) -> Vec<Result<Self, MeaningError>> {
        text.split(SEPARATOR)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(Self::parse)
            .collect()
    }

    pub fn has_parenthetical(&self) -> bool {
        !self.parenthetical.is_empty()
    }
}

impl fmt::Display for Meaning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_parenthetical() {
            write!(f, "{} ({})", self.main, self.parenthetical)
        } else {
            f.write_str(&self.main)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_segment() {
        assert_eq!(Meaning::parse(" junior ").unwrap(), Meaning::new("junior", ""));
    }

    #[test]
    fn trailing_parenthetical() {
        let meaning = Meaning::parse("to fail (an exam)").unwrap();
        assert_eq!(meaning.main, "to fail");
        assert_eq!(meaning.parenthetical, "an exam");
        assert_eq!(meaning.to_string(), "to fail (an exam)");
    }

    #[test]
    fn text_after_parenthetical_is_rejected() {
        let err = Meaning::parse("to fail (an exam) badly").unwrap_err();
        assert_eq!(err.segment, "to fail (an exam) badly");
        assert_eq!(err.into_meaning().main, "to fail (an exam) badly");
    }

    #[test]
    fn two_groups_are_rejected() {
        assert!(Meaning::parse("a (b) (c)").is_err());
        assert!(Meaning::parse("a (b").is_err());
        assert!(Meaning::parse("a )b(").is_err());
    }

    #[test]
    fn decode_splits_and_skips_empty() {
        let decoded = Meaning::decode("appointment; date (romantic);;");
        assert_eq!(decoded.len(), 2);
        assert_eq!(decoded[0], Ok(Meaning::new("appointment", "")));
        assert_eq!(decoded[1], Ok(Meaning::new("date", "romantic")));
    }

    #[test]
    fn decode_keeps_failures_in_place() {
        let decoded = Meaning::decode("a; b (c) d; e");
        assert!(decoded[0].is_ok());
        assert!(decoded[1].is_err());
        assert!(decoded[2].is_ok());
    }
}
