//! Stem mutation: turning a stem plus an encoded ending into a surface form.

/// Attach the rest of the encoding to the stem as-is
pub const STEM_MARKER: char = '~';
/// Umlautize the stem, then attach the rest of the encoding
pub const UMLAUT_MARKER: char = '⍨';
/// The form does not exist
pub const MISSING: &str = "-";

/// Produce the surface form for one encoded ending.
///
/// Empty encodings and the missing sentinel yield an empty string. Anything
/// that starts with neither marker is a complete replacement form.
pub fn decline(stem: &str, encoded: &str) -> String {
    if encoded.is_empty() || encoded == MISSING {
        return String::new();
    }

    if let Some(rest) = encoded.strip_prefix(STEM_MARKER) {
        return format!("{stem}{rest}");
    }
    if let Some(rest) = encoded.strip_prefix(UMLAUT_MARKER) {
        return format!("{}{rest}", umlautize(stem));
    }

    encoded.to_string()
}

/// Decline every encoding, dropping the ones that produce nothing
pub fn decline_all(stem: &str, encodings: &[String]) -> Vec<String> {
    encodings
        .iter()
        .map(|e| decline(stem, e))
        .filter(|s| !s.is_empty())
        .collect()
}

/// Umlautize the rightmost of all a/o/u occurrences in the stem.
///
/// The candidates are compared across vowel kinds, so "sauber" becomes
/// "saüber" rather than "säuber".
pub fn umlautize(stem: &str) -> String {
    let target = stem
        .char_indices()
        .filter(|(_, c)| umlaut_of(*c).is_some())
        .last();

    match target {
        Some((idx, c)) => {
            let mut out = String::with_capacity(stem.len() + 1);
            out.push_str(&stem[..idx]);
            out.extend(umlaut_of(c));
            out.push_str(&stem[idx + c.len_utf8()..]);
            out
        }
        None => stem.to_string(),
    }
}

fn umlaut_of(c: char) -> Option<char> {
    match c {
        'a' => Some('ä'),
        'o' => Some('ö'),
        'u' => Some('ü'),
        _ => None,
    }
}

/// Append an inflectional suffix with the usual junction rules.
///
/// A `t`-initial suffix after a stem ending in `t` gets an `e` inserted
/// (`arbeit` + `t` = `arbeitet`), and an `e`-initial suffix after a form
/// ending in `e` loses its `e` (`brachte` + `en` = `brachten`).
pub(crate) fn attach(stem: &str, suffix: &str) -> String {
    if suffix.is_empty() {
        return stem.to_string();
    }
    if stem.ends_with('t') && suffix.starts_with('t') {
        return format!("{stem}e{suffix}");
    }
    if stem.ends_with('e') && suffix.starts_with('e') {
        return format!("{stem}{}", &suffix[1..]);
    }
    format!("{stem}{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_and_umlaut_suffixes() {
        assert_eq!(decline("jung", "⍨er"), "jünger");
        assert_eq!(decline("schmal", "~er"), "schmaler");
        assert_eq!(decline("Anspruch", "⍨e"), "Ansprüche");
        assert_eq!(decline("Vater", "⍨"), "Väter");
        assert_eq!(decline("Lehrer", "~"), "Lehrer");
    }

    #[test]
    fn rightmost_vowel_wins_across_kinds() {
        assert_eq!(decline("sauber", "⍨er"), "saüberer");
        assert_eq!(umlautize("Wort"), "Wört");
        assert_eq!(umlautize("schnell"), "schnell");
    }

    #[test]
    fn capital_initial_vowel_is_left_alone() {
        assert_eq!(umlautize("Ofen"), "Ofen");
        assert_eq!(umlautize("Apfel"), "Apfel");
        assert_eq!(decline("Ofen", "⍨"), "Ofen");
        assert_eq!(decline("Apfel", "⍨"), "Apfel");
    }

    #[test]
    fn empty_and_missing_yield_nothing() {
        for stem in ["jung", "Haus", ""] {
            assert_eq!(decline(stem, "-"), "");
            assert_eq!(decline(stem, ""), "");
        }
        assert!(decline_all("Haus", &[]).is_empty());
        assert!(decline_all("Haus", &["-".to_string()]).is_empty());
    }

    #[test]
    fn full_form_replaces_stem() {
        assert_eq!(decline("Jurastudium", "Jurastudien"), "Jurastudien");
    }

    #[test]
    fn decline_all_keeps_order() {
        let forms = decline_all("Joghurt", &["~s".to_string(), "-".to_string(), "~e".to_string()]);
        assert_eq!(forms, vec!["Joghurts", "Joghurte"]);
    }

    #[test]
    fn junction_rules() {
        assert_eq!(attach("arbeit", "t"), "arbeitet");
        assert_eq!(attach("arbeit", "te"), "arbeitete");
        assert_eq!(attach("brachte", "en"), "brachten");
        assert_eq!(attach("mach", "st"), "machst");
        assert_eq!(attach("fiel", ""), "fiel");
    }
}
