//! libsanskrit-core
//!
//! Character classes, match types, configuration and sandhi rule tables
//! shared by the script-specific crates (libtranslit, libsearch).
//!
//! Public API:
//! - `chars` - Devanagari character classes (combining marks, consonants, nasals)
//! - `MatchSpan` / `SearchResults` - Match spans returned by searches
//! - `SandhiRules` - Table-driven sandhi variant generator
//! - `VariantGenerator` / `ScriptConverter` - Collaborator traits
//! - `Config` - Configuration shared by all crates
use serde::{Deserialize, Serialize};

pub mod chars;

pub mod span;
pub use span::{MatchContext, MatchSpan, MatchType, SearchResults};

pub mod variants;
pub use variants::{IdentityConverter, ScriptConverter, Variant, VariantGenerator};

pub mod sandhi;
pub use sandhi::{RulePosition, SandhiRule, SandhiRules};

/// Code of the source script every text is stored in.
pub const SOURCE_SCRIPT: &str = "sa";

/// Generic configuration shared by transliteration and search.
///
/// Crate-specific options (sandhi rules, extra script files) belong in
/// `SearchConfig` or `TranslitConfig` in their respective crates.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Language code of the script source texts are written in.
    pub source_script: String,

    // Matching
    /// Compare text without case folding
    pub case_sensitive: bool,
    /// Chars of surrounding text kept on each side of a match
    pub context_length: usize,
    /// Maximum number of matches returned per search (0 = unlimited)
    pub max_results: usize,

    // Rendering
    /// Class attribute put on highlight wrappers
    pub highlight_class: String,

    // Cache Management
    /// Maximum number of entries in the term -> variants cache
    pub max_cache_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_script: SOURCE_SCRIPT.to_string(),
            case_sensitive: false,
            context_length: 50,
            max_results: 100,
            highlight_class: "search-highlight".to_string(),
            max_cache_size: 1000,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<Self> {
        use anyhow::Context;
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("parsing config {}", path.display()))?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(&self, path: P) -> anyhow::Result<()> {
        use anyhow::Context;
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("writing config {}", path.display()))?;
        Ok(())
    }

    /// Load configuration from TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Whether `code` names the source script (no conversion needed).
    pub fn is_source_script(&self, code: &str) -> bool {
        code == self.source_script
    }

    pub fn set_case_sensitive(&mut self, enabled: bool) {
        self.case_sensitive = enabled;
    }

    /// Set the maximum number of results. 0 disables truncation.
    pub fn set_max_results(&mut self, max: usize) {
        self.max_results = max;
    }

    pub fn set_context_length(&mut self, chars: usize) {
        self.context_length = chars;
    }

    /// Set the highlight class. Empty strings are ignored.
    pub fn set_highlight_class(&mut self, class: &str) {
        if !class.is_empty() {
            self.highlight_class = class.to_string();
        }
    }
}

/// Utility helpers.
pub mod utils {
    use once_cell::sync::Lazy;
    use regex::Regex;
    use unicode_normalization::UnicodeNormalization;

    static TRAILING_DANDAS: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"\s*[।॥]+\s*$").expect("valid danda pattern"));

    /// Compose to NFC. Offsets computed afterwards refer to this form.
    pub fn nfc(s: &str) -> String {
        s.nfc().collect::<String>()
    }

    /// Normalize input strings (NFC) and trim whitespace.
    pub fn normalize(s: &str) -> String {
        nfc(s).trim().to_string()
    }

    pub fn char_len(s: &str) -> usize {
        s.chars().count()
    }

    /// Byte offset of the char at `pos`; `pos == char_len` maps to `s.len()`.
    pub fn char_to_byte(s: &str, pos: usize) -> Option<usize> {
        if pos == 0 {
            return Some(0);
        }
        let mut count = 0;
        for (byte, _) in s.char_indices() {
            if count == pos {
                return Some(byte);
            }
            count += 1;
        }
        (count == pos).then_some(s.len())
    }

    /// Substring of `len` chars starting at char `start`, clamped to the text.
    pub fn char_slice(s: &str, start: usize, len: usize) -> String {
        s.chars().skip(start).take(len).collect()
    }

    /// Lowercase a single char without changing the char count.
    pub fn fold_char(c: char) -> char {
        let mut lower = c.to_lowercase();
        match (lower.next(), lower.next()) {
            (Some(l), None) => l,
            _ => c,
        }
    }

    /// Remove trailing danda / double danda and the whitespace around them.
    pub fn strip_trailing_dandas(s: &str) -> String {
        TRAILING_DANDAS.replace(s, "").into_owned()
    }

    /// Split a comma separated list of search terms (`"सद्भिः, सद्भिर्"`).
    pub fn split_terms(s: &str) -> Vec<String> {
        s.split(',')
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nfc_composes_decomposed_marks() {
        // Bengali o-sign arrives as e-sign + aa-sign in some sources.
        let decomposed = "\u{0995}\u{09C7}\u{09BE}";
        assert_eq!(utils::nfc(decomposed), "\u{0995}\u{09CB}");
        assert_eq!(utils::normalize("  राम  "), "राम");
    }

    #[test]
    fn char_offsets() {
        let s = "अब c";
        assert_eq!(utils::char_to_byte(s, 0), Some(0));
        assert_eq!(utils::char_to_byte(s, 2), Some(6));
        assert_eq!(utils::char_to_byte(s, 4), Some(s.len()));
        assert_eq!(utils::char_to_byte(s, 5), None);
        assert_eq!(utils::char_slice(s, 1, 10), "ब c");
    }

    #[test]
    fn dandas_and_terms() {
        assert_eq!(utils::strip_trailing_dandas("नारायणेति ॥ "), "नारायणेति");
        assert_eq!(utils::strip_trailing_dandas("अ।ब"), "अ।ब");
        assert_eq!(
            utils::split_terms("सद्भिः, सद्भिर् ,,"),
            vec!["सद्भिः".to_string(), "सद्भिर्".to_string()]
        );
    }

    #[test]
    fn config_toml_roundtrip() {
        let mut cfg = Config::default();
        cfg.set_max_results(5);
        cfg.set_highlight_class("");
        let s = cfg.to_toml_string().unwrap();
        let back = Config::from_toml_str(&s).unwrap();
        assert_eq!(back, cfg);
        assert_eq!(back.highlight_class, "search-highlight");

        let partial = Config::from_toml_str("max_results = 3").unwrap();
        assert_eq!(partial.max_results, 3);
        assert_eq!(partial.context_length, 50);
    }

    #[test]
    fn config_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("core.toml");
        let cfg = Config::default();
        cfg.save_toml(&path).unwrap();
        assert_eq!(Config::load_toml(&path).unwrap(), cfg);
        assert!(Config::load_toml(dir.path().join("missing.toml")).is_err());
    }
}
