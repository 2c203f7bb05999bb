use serde::Serialize;
use wortwerk_core::ImportError;

use super::default::DefaultWord;
use crate::article::{Article, Case};
use crate::declension::{Degree, Pattern, ending};
use crate::decline::{STEM_MARKER, attach, decline_all};
use crate::notation;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Adjective {
    #[serde(flatten)]
    base: DefaultWord,
    comparative_endings: Vec<String>,
    superlative_endings: Vec<String>,
}

impl Adjective {
    /// Build from notation such as `jung,⍨er,⍨sten`
    pub fn new(notation: &str, base: DefaultWord) -> Result<Self, ImportError> {
        let parsed =
            notation::parse_adjective(notation).ok_or_else(|| ImportError::NotationMismatch {
                category: "adjective",
                notation: notation.to_string(),
            })?;

        Ok(Self {
            base: base.with_lemma(parsed.lemma),
            comparative_endings: parsed.comparatives,
            superlative_endings: parsed.superlatives,
        })
    }

    pub fn base(&self) -> &DefaultWord {
        &self.base
    }

    pub fn lemma(&self) -> &str {
        self.base.lemma()
    }

    pub fn comparative_endings(&self) -> &[String] {
        &self.comparative_endings
    }

    pub fn superlative_endings(&self) -> &[String] {
        &self.superlative_endings
    }

    pub fn comparatives(&self) -> Vec<String> {
        decline_all(self.lemma(), &self.comparative_endings)
    }

    /// Superlatives in their "am …sten" shape, e.g. "jüngsten"
    pub fn superlatives(&self) -> Vec<String> {
        decline_all(self.lemma(), &self.superlative_endings)
    }

    /// Attributive forms, one per stem alternative of the degree
    pub fn decline(
        &self,
        degree: Degree,
        pattern: Pattern,
        article: Article,
        plural: bool,
        case: Case,
    ) -> Vec<String> {
        let suffix = ending(pattern, article, plural, case).trim_start_matches(STEM_MARKER);

        self.stems(degree)
            .iter()
            .map(|stem| attach(stem, suffix))
            .collect()
    }

    fn stems(&self, degree: Degree) -> Vec<String> {
        let lemma = self.lemma();
        match degree {
            Degree::Positive => vec![lemma.to_string()],
            Degree::Comparative => {
                let comparatives = self.comparatives();
                if comparatives.is_empty() {
                    vec![format!("{lemma}er")]
                } else {
                    comparatives
                }
            }
            Degree::Superlative => {
                let mut superlatives = self.superlatives();
                if superlatives.is_empty() {
                    // Uniform "+sten"; ignores stem-final consonants
                    superlatives.push(format!("{lemma}sten"));
                }
                superlatives
                    .into_iter()
                    .map(|s| s.strip_suffix("en").map(str::to_string).unwrap_or(s))
                    .collect()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::base;

    fn adjective(notation: &str) -> Adjective {
        Adjective::new(notation, base(notation, "adj")).unwrap()
    }

    #[test]
    fn comparison() {
        let jung = adjective("jung,⍨er,⍨sten");
        assert_eq!(jung.comparatives(), ["jünger"]);
        assert_eq!(jung.superlatives(), ["jüngsten"]);

        let sauber = adjective("sauber,⍨er");
        assert_eq!(sauber.comparatives(), ["saüberer"]);
        assert!(sauber.superlatives().is_empty());
    }

    #[test]
    fn positive_declension() {
        let neu = adjective("neu,~er,~sten");
        assert_eq!(
            neu.decline(Degree::Positive, Pattern::Strong, Article::Der, false, Case::Nominative),
            ["neuer"]
        );
        assert_eq!(
            neu.decline(Degree::Positive, Pattern::Weak, Article::Die, false, Case::Nominative),
            ["neue"]
        );
        assert_eq!(
            neu.decline(Degree::Positive, Pattern::Mixed, Article::Das, true, Case::Genitive),
            ["neuen"]
        );
    }

    #[test]
    fn compared_declension() {
        let neu = adjective("neu,~er,~sten");
        assert_eq!(
            neu.decline(Degree::Comparative, Pattern::Strong, Article::Das, false, Case::Nominative),
            ["neueres"]
        );
        assert_eq!(
            neu.decline(Degree::Superlative, Pattern::Weak, Article::Der, false, Case::Nominative),
            ["neuste"]
        );
        assert_eq!(
            neu.decline(Degree::Superlative, Pattern::Weak, Article::Der, true, Case::Dative),
            ["neusten"]
        );
    }

    #[test]
    fn fallback_stems() {
        let klein = adjective("klein");
        assert_eq!(
            klein.decline(Degree::Comparative, Pattern::Weak, Article::Die, false, Case::Nominative),
            ["kleinere"]
        );
        assert_eq!(
            klein.decline(Degree::Superlative, Pattern::Strong, Article::Der, false, Case::Nominative),
            ["kleinster"]
        );
    }

    #[test]
    fn stem_final_e_merges() {
        let leise = adjective("leise,~r,~sten");
        assert_eq!(
            leise.decline(Degree::Positive, Pattern::Strong, Article::Der, false, Case::Nominative),
            ["leiser"]
        );
        assert_eq!(
            leise.decline(Degree::Positive, Pattern::Weak, Article::Die, false, Case::Nominative),
            ["leise"]
        );
    }
}
