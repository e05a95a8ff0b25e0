// core/src/variants.rs
//
// Collaborator seams shared by the search and transliteration crates.

use serde::{Deserialize, Serialize};

/// An alternate surface form of a search term and the rule that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Variant {
    pub text: String,
    pub rule: String,
}

impl Variant {
    pub fn new<T: Into<String>, R: Into<String>>(text: T, rule: R) -> Self {
        Self {
            text: text.into(),
            rule: rule.into(),
        }
    }
}

/// Trait that sandhi variant generators implement to plug into the search engine.
pub trait VariantGenerator {
    /// Alternate forms of `term`. The term itself is not included.
    fn variations(&self, term: &str) -> Vec<Variant>;
}

impl<F> VariantGenerator for F
where
    F: Fn(&str) -> Vec<Variant>,
{
    fn variations(&self, term: &str) -> Vec<Variant> {
        self(term)
    }
}

/// Trait for converting between Devanagari and a display script.
///
/// Implemented by the transliteration engine so that callers can feed the
/// search engine text in whatever script the reader has selected.
pub trait ScriptConverter {
    /// Devanagari → the script registered under `code`.
    fn to_script(&self, text: &str, code: &str) -> String;

    /// Any supported script → Devanagari. `hint` names the script the text
    /// is believed to be in, when the caller knows it.
    fn to_devanagari(&self, text: &str, hint: Option<&str>) -> String;
}

/// Converter that leaves every text untouched (Devanagari-only callers).
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityConverter;

impl ScriptConverter for IdentityConverter {
    fn to_script(&self, text: &str, _code: &str) -> String {
        text.to_string()
    }

    fn to_devanagari(&self, text: &str, _hint: Option<&str>) -> String {
        text.to_string()
    }
}
