use serde::{Deserialize, Serialize};

use crate::notation::PREFIX_MARK;

/// Compound directional particles, checked first so that "hervor" wins
/// over "her"
const SEPARABLE_TIER_1: &[&str] = &[
    "auseinander", "hinterher", "gegenüber", "beisammen",
    "herunter", "hinunter", "zusammen", "entgegen", "entlang",
    "heraus", "herein", "herauf", "herüber", "herbei", "hervor", "heran", "herum",
    "hinaus", "hinein", "hinauf", "hinüber", "hinzu", "hinab",
    "voraus", "vorbei", "vorüber", "voran",
    "daneben", "darauf", "daran", "davon", "dazu",
    "zurück", "weiter", "empor", "umher",
];

/// Free-standing words used as particles
const SEPARABLE_TIER_2: &[&str] = &[
    "nieder", "bereit", "durch", "statt", "fehl", "fest", "frei", "hoch",
    "heim", "teil", "fort", "weg", "los",
];

const SEPARABLE_TIER_3: &[&str] = &[
    "unter", "über", "nach", "auf", "aus", "bei", "dar", "ein", "her", "hin",
    "mit", "vor", "ab", "an", "da", "um", "zu",
];

const INSEPARABLE: &[&str] = &[
    "hinter", "wider", "unter", "über", "miss", "durch", "emp", "ent", "zer",
    "ver", "be", "er", "ge", "um",
];

/// Whole-word lemmas where a separable candidate is only a look-alike
const SEPARABLE_EXCEPTIONS: &[(&str, &[&str])] = &[
    ("fehl", &["fehlen"]),
    ("teil", &["teilen"]),
    ("los", &["losen"]),
    ("ab", &["abonnieren"]),
    ("an", &["analysieren", "angeln", "ankern", "antworten"]),
    ("bei", &["beichten", "beißen"]),
    ("da", &["dämmern", "danken", "datieren", "dauern"]),
    ("dar", &["darben"]),
    ("ein", &["einigen"]),
    ("her", &["herrschen"]),
    ("hin", &["hindern", "hinken", "hinterfragen", "hintergehen", "hinterlassen", "hinterlegen"]),
    ("um", &["umarmen", "umgeben", "umringen"]),
    ("unter", &["unterbrechen", "unterhalten", "unterrichten", "unterschreiben", "unterstützen", "untersuchen"]),
    ("über", &["überholen", "überlegen", "übernachten", "überraschen", "übertreiben", "überweisen", "überzeugen"]),
    ("zu", &["zucken", "zupfen"]),
];

/// Whole-word lemmas that only look like they carry an inseparable prefix
const INSEPARABLE_EXCEPTIONS: &[(&str, &[&str])] = &[
    ("be", &["bellen", "beten", "beißen"]),
    ("er", &["erben", "ernten"]),
    ("ge", &["geben", "gehen", "gelten", "gießen"]),
];

/// Leading particle of a verb
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Prefix {
    pub text: String,
    pub separable: bool,
}

impl Prefix {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn separable(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            separable: true,
        }
    }

    pub fn inseparable(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            separable: false,
        }
    }

    pub fn is_none(&self) -> bool {
        self.text.is_empty()
    }

    pub fn is_separable(&self) -> bool {
        self.separable && !self.text.is_empty()
    }

    pub fn is_inseparable(&self) -> bool {
        !self.separable && !self.text.is_empty()
    }
}

/// Determine the prefix of a (single-word) verb lemma.
///
/// An explicit `|` mark always wins. Otherwise the separable tiers are
/// scanned in order, then the inseparable list.
pub fn classify(lemma: &str) -> Prefix {
    if let Some((prefix, _)) = lemma.split_once(PREFIX_MARK) {
        if !prefix.is_empty() {
            return Prefix::separable(prefix);
        }
    }

    for tier in [SEPARABLE_TIER_1, SEPARABLE_TIER_2, SEPARABLE_TIER_3] {
        if let Some(prefix) = find_prefix(lemma, tier, SEPARABLE_EXCEPTIONS) {
            return Prefix::separable(prefix);
        }
    }

    match find_prefix(lemma, INSEPARABLE, INSEPARABLE_EXCEPTIONS) {
        Some(prefix) => Prefix::inseparable(prefix),
        None => Prefix::none(),
    }
}

fn find_prefix(
    lemma: &str,
    candidates: &[&'static str],
    exceptions: &[(&str, &[&str])],
) -> Option<&'static str> {
    candidates.iter().copied().find(|prefix| {
        let Some(rest) = lemma.strip_prefix(prefix) else {
            return false;
        };
        // A prefix needs a verb behind it
        if rest.chars().count() < 2 {
            return false;
        }
        !is_exception(prefix, lemma, exceptions)
    })
}

fn is_exception(prefix: &str, lemma: &str, exceptions: &[(&str, &[&str])]) -> bool {
    exceptions
        .iter()
        .any(|(p, lemmas)| *p == prefix && lemmas.contains(&lemma))
}
