//! Search configuration that extends the base `Config` from core.
//!
//! This configuration includes:
//! - All generic options from `libsanskrit_core::Config` (flattened via serde)
//! - Sandhi rule strings for the default variant generator
//! - Pratika identification options
//!
//! # Example
//!
//! ```rust
//! use libsearch::SearchConfig;
//!
//! let config = SearchConfig::from_toml_str("enable_sandhi = false\nmax_results = 10").unwrap();
//! assert!(!config.enable_sandhi);
//! assert_eq!(config.base().max_results, 10);
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Base configuration fields (case folding, context, highlight class, cache)
    #[serde(flatten)]
    pub base: libsanskrit_core::Config,

    /// Run the sandhi-aware strategy as part of `search`
    pub enable_sandhi: bool,

    /// Rules for the default sandhi generator (see `SandhiRules::from_rules`)
    pub sandhi_rules: Vec<String>,

    /// Treat anusvara and a written class nasal before a stop as equal
    pub homorganic_nasals: bool,

    /// Shortest stem a quotation may leave once its iti suffix is removed
    pub pratika_min_stem_chars: usize,

    /// Class put on quotation words by `mark_pratikas`
    pub pratika_bold_class: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base: libsanskrit_core::Config::default(),
            enable_sandhi: true,
            sandhi_rules: standard_sandhi_rules(),
            homorganic_nasals: true,
            pratika_min_stem_chars: 2,
            pratika_bold_class: "pratika-grahana-bold".to_string(),
        }
    }
}

impl SearchConfig {
    /// Convert this search config into the base config.
    pub fn into_base(self) -> libsanskrit_core::Config {
        self.base
    }

    pub fn base(&self) -> &libsanskrit_core::Config {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut libsanskrit_core::Config {
        &mut self.base
    }

    pub fn set_enable_sandhi(&mut self, enabled: bool) {
        self.enable_sandhi = enabled;
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<Self> {
        use anyhow::Context;
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config = Self::from_toml_str(&content)
            .with_context(|| format!("parsing config {}", path.display()))?;
        Ok(config)
    }
}

/// Default word-final sandhi equivalences.
///
/// - `म्` ↔ `ं` anywhere in the word
/// - visarga before voiced sounds (`ः` ↔ `ो`, `ः` ↔ `र्`) and before
///   palatals (`ः` → `श्`)
/// - final `त्` voicing (`त्` ↔ `द्`) and assimilation (`त्` → `न्`, `च्`, `ल्`)
pub fn standard_sandhi_rules() -> Vec<String> {
    [
        "*म्=ं", "ः=ो", "ः=र्", "ः>श्", "त्=द्", "त्>न्", "त्>च्", "त्>ल्",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_roundtrip_keeps_flattened_base() {
        let mut cfg = SearchConfig::default();
        cfg.base_mut().set_max_results(7);
        cfg.set_enable_sandhi(false);
        let s = cfg.to_toml_string().unwrap();
        let back = SearchConfig::from_toml_str(&s).unwrap();
        assert_eq!(back, cfg);
        assert_eq!(back.base().max_results, 7);
    }

    #[test]
    fn config_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("search.toml");
        let mut cfg = SearchConfig::default();
        cfg.pratika_min_stem_chars = 3;
        cfg.base_mut().set_highlight_class("hit");
        std::fs::write(&path, cfg.to_toml_string().unwrap()).unwrap();
        assert_eq!(SearchConfig::load_toml(&path).unwrap(), cfg);

        assert!(SearchConfig::load_toml(dir.path().join("missing.toml")).is_err());
        let broken = dir.path().join("broken.toml");
        std::fs::write(&broken, "enable_sandhi = ").unwrap();
        let err = SearchConfig::load_toml(&broken).unwrap_err();
        assert!(err.to_string().starts_with("parsing config"));
    }

    #[test]
    fn standard_rules_parse() {
        let rules = libsanskrit_core::SandhiRules::from_rules(&standard_sandhi_rules());
        // four two-way rules, four one-way
        assert_eq!(rules.len(), 12);
    }
}
