use unicode_normalization::UnicodeNormalization;

pub trait Preprocessor {
    // Composed umlauts so that "ü" is one char for the grammars
    fn process(&self, text: &str) -> String {
        let text = text.trim();

        if text.is_empty() {
            return String::new();
        }

        text.nfc()
            .collect::<String>()
            .replace(['\n', '\r', '\t'], " ")
            .trim()
            .to_string()
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}
