use chrono::{TimeZone, Utc};
use wortwerk_config::Config;
use wortwerk_core::{Clock, ImportError, LanguageImporter, Meaning, SoftError};
use wortwerk_types::{CategoryTag, ImportRecord};

use super::{clock, record};
use crate::article::{Article, Case};
use crate::importer::GermanImporter;
use crate::word::{Reflexive, Word};

fn importer() -> GermanImporter {
    GermanImporter::with_clock(&Config::default(), clock())
}

fn strict_importer() -> GermanImporter {
    let mut config = Config::default();
    config.import.downgrade_invalid = false;
    GermanImporter::with_clock(&config, clock())
}

#[test]
fn test_adjective_end_to_end() {
    let record = ImportRecord {
        notation: "jung,⍨er,⍨sten".to_string(),
        meanings: "junior".to_string(),
        third_meanings: "kezdő".to_string(),
        category: "adj".to_string(),
        user: "user".to_string(),
        learned: "2015-05-03".to_string(),
        score: "5".to_string(),
        tags: "person".to_string(),
    };

    let word = importer().import(&record).unwrap();
    let Word::Adjective(adjective) = &word else {
        panic!("expected adjective, got {:?}", word.category());
    };

    assert_eq!(adjective.lemma(), "jung");
    assert_eq!(adjective.comparatives(), ["jünger"]);
    assert_eq!(adjective.superlatives(), ["jüngsten"]);
    assert_eq!(word.base().meanings(), [Meaning::new("junior", "")]);
    assert_eq!(word.base().third_meanings(), [Meaning::new("kezdő", "")]);
    assert_eq!(word.base().tags(), ["person"]);
    assert_eq!(word.base().score(), 5);
    assert_eq!(
        word.base().learned(),
        Utc.with_ymd_and_hms(2015, 5, 3, 0, 0, 0).unwrap()
    );
    assert_eq!(word.category(), CategoryTag::Adjective);
}

#[test]
fn test_noun_end_to_end() {
    let word = importer().import(&record("e Verabredung,~en", "noun")).unwrap();
    let noun = word.as_noun().unwrap();
    assert_eq!(noun.lemma(), "Verabredung");
    assert_eq!(noun.articles(), [Article::Die]);
    assert_eq!(noun.plurals(), ["Verabredungen"]);
    assert_eq!(
        noun.with_definite_article(Case::Dative, false),
        ["der Verabredung"]
    );
}

#[test]
fn test_verb_end_to_end() {
    let word = importer()
        .import(&record("freuen+sich (A)+auf (A)", "verb"))
        .unwrap();
    let verb = word.as_verb().unwrap();
    assert_eq!(verb.infinitive(), "freuen");
    assert_eq!(verb.reflexive(), Reflexive::Accusative);
    assert_eq!(verb.arguments().len(), 1);
    assert_eq!(verb.arguments()[0].case, Case::Accusative);
    assert!(word.errors().is_empty());
}

#[test]
fn test_decomposed_umlauts_are_normalized() {
    let word = importer()
        .import(&record("ju\u{0308}nger,~e", "adj"))
        .unwrap();
    assert_eq!(word.lemma(), "jünger");
}

#[test]
fn test_invalid_score_and_date_default() {
    let record = ImportRecord {
        score: "0".to_string(),
        learned: "03.05.2015".to_string(),
        ..record("Haus,⍨er", "noun")
    };
    let word = importer().import(&record).unwrap();
    assert_eq!(word.base().score(), 5);
    assert_eq!(word.base().learned(), clock().now());
}

#[test]
fn test_hard_failures() {
    let importer = strict_importer();

    let err = importer.import(&record("Haus!,⍨er", "noun")).unwrap_err();
    assert!(matches!(err, ImportError::NotationMismatch { category: "noun", .. }));

    let err = importer.import(&record("schön,~er", "noun")).unwrap_err();
    assert!(matches!(err, ImportError::NotationMismatch { .. }));

    let err = importer.import(&record("fahren,fuhr", "verb")).unwrap_err();
    assert_eq!(err, ImportError::UnsupportedTemplate(2));

    let err = importer.import(&record("q Haus,⍨er", "noun")).unwrap_err();
    assert_eq!(err, ImportError::UnknownArticle("q".to_string()));

    let results = importer.import_all(&[record("Haus!", "noun"), record("rot", "adj")]);
    assert!(results[0].is_err());
    assert!(results[1].is_ok());
}

#[test]
fn test_downgrade_to_generic() {
    let importer = importer();
    let word = importer.import_or_generic(&record("Straße,,~n,~", "noun"));
    assert!(matches!(word, Word::Generic(_)));
    assert_eq!(word.category(), CategoryTag::Generic);
    assert_eq!(word.lemma(), "Straße,,~n,~");

    let results = importer.import_all(&[record("Haus!", "noun"), record("rot", "adj")]);
    assert!(results.iter().all(Result::is_ok));
    assert!(matches!(results[0], Ok(Word::Generic(_))));
}

#[test]
fn test_blank_notation_is_invalid_record() {
    let importer = strict_importer();

    for category in ["noun", "verb", "adj"] {
        let err = importer.import(&record(" \t ", category)).unwrap_err();
        assert!(matches!(err, ImportError::InvalidRecord(_)), "{category}: {err:?}");
    }

    let word = importer.import(&record("", "phrase")).unwrap();
    assert!(matches!(word, Word::Generic(_)));

    let word = importer.import_or_generic(&record("", "noun"));
    assert_eq!(word.category(), CategoryTag::Generic);
}

#[test]
fn test_other_categories_are_generic() {
    let word = importer().import(&record("guten Morgen!", "phrase")).unwrap();
    assert!(matches!(word, Word::Generic(_)));
    assert_eq!(word.lemma(), "guten Morgen!");
    assert_eq!(word.surface_forms(), ["guten Morgen!"]);
}

#[test]
fn test_soft_errors_do_not_block_construction() {
    let record = ImportRecord {
        meanings: "to be happy (about) really".to_string(),
        ..record("freuen+sich", "verb")
    };
    let word = importer().import(&record).unwrap();
    assert_eq!(
        word.errors(),
        [
            SoftError::MalformedMeaning("to be happy (about) really".to_string()),
            SoftError::InvalidReflexive("sich".to_string()),
        ]
    );
}

#[test]
fn test_surface_forms_and_metadata() {
    let word = importer().import(&record("r Anspruch,⍨e,~s", "noun")).unwrap();
    assert_eq!(word.surface_forms(), ["Anspruch", "Ansprüche", "Anspruchs"]);

    let metadata = word.metadata();
    assert_eq!(metadata["lemma"], "Anspruch");
    assert_eq!(metadata["category"], "noun");
    assert_eq!(metadata["articles"][0], "der");
    assert_eq!(metadata["plurals"][0], "Ansprüche");
    assert_eq!(metadata["learned"], "2015-05-03");
}

#[test]
fn test_serialized_shape() {
    let word = importer().import(&record("jung,⍨er,⍨sten", "adj")).unwrap();
    let json = serde_json::to_value(&word).unwrap();
    assert_eq!(json["kind"], "adjective");
    assert_eq!(json["lemma"], "jung");
    assert_eq!(json["category"], "adj");
    assert_eq!(json["comparative_endings"][0], "⍨er");
}

#[test]
fn test_language_code() {
    assert_eq!(importer().language_code(), "de");
}
