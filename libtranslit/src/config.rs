//! Transliteration configuration that extends the base `Config` from core.
//!
//! Adds the script used when no target is given and an optional directory
//! of extra `ScriptMapping` TOML files merged into the registry.
//!
//! # Example
//!
//! ```rust
//! use libtranslit::TranslitConfig;
//!
//! let config = TranslitConfig::from_toml_str("default_script = \"kn\"").unwrap();
//! assert_eq!(config.default_script, "kn");
//! assert_eq!(config.base().context_length, 50);
//! ```
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct TranslitConfig {
    #[serde(flatten)]
    pub base: libsanskrit_core::Config,

    /// Target script when the caller names none.
    pub default_script: String,

    /// Directory of extra script mapping files (`*.toml`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scripts_dir: Option<PathBuf>,
}

impl Default for TranslitConfig {
    fn default() -> Self {
        Self {
            base: libsanskrit_core::Config::default(),
            default_script: libsanskrit_core::SOURCE_SCRIPT.to_string(),
            scripts_dir: None,
        }
    }
}

impl TranslitConfig {
    pub fn into_base(self) -> libsanskrit_core::Config {
        self.base
    }

    pub fn base(&self) -> &libsanskrit_core::Config {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut libsanskrit_core::Config {
        &mut self.base
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

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
