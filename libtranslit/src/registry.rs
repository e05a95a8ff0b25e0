// libtranslit/src/registry.rs
//
// Registry of script mappings keyed by language code.
//
// The registry is filled once (built-in tables plus optional TOML files)
// and only read afterwards. Each registered mapping is prepared into
// substitution tables so per-call transliteration does no table building.

use std::path::Path;

use ahash::AHashMap;
use once_cell::sync::Lazy;
use tracing::{debug, warn};

use libsanskrit_core::SOURCE_SCRIPT;

use crate::mapping::{Replacer, ScriptMapping};
use crate::reverse::RomanTable;
use crate::scripts;

/// Process-wide registry of the built-in scripts.
pub static BUILTIN: Lazy<ScriptRegistry> = Lazy::new(ScriptRegistry::builtin);

/// A mapping together with its prepared lookup tables.
#[derive(Debug, Clone)]
pub(crate) struct PreparedScript {
    pub(crate) mapping: ScriptMapping,
    pub(crate) forward: Replacer,
    pub(crate) reverse: Replacer,
    pub(crate) roman: Option<RomanTable>,
    pub(crate) consonants: Vec<String>,
}

impl PreparedScript {
    fn new(mapping: ScriptMapping) -> Self {
        let forward = Replacer::from_pairs(
            mapping
                .mapping
                .iter()
                .map(|(s, t)| (s.as_str(), t.as_str())),
        );
        // target -> source; a later duplicate target wins
        let reverse = Replacer::from_pairs(
            mapping
                .mapping
                .iter()
                .chain(mapping.special_combinations.iter())
                .map(|(s, t)| (t.as_str(), s.as_str())),
        );
        let roman = mapping.is_romanization.then(|| RomanTable::new(&mapping));
        let consonants = mapping.script_consonants();
        Self {
            mapping,
            forward,
            reverse,
            roman,
            consonants,
        }
    }

    pub(crate) fn is_identity(&self) -> bool {
        self.forward.is_empty() && self.mapping.special_combinations.is_empty()
    }
}

/// Script mappings keyed by language code.
#[derive(Debug, Clone)]
pub struct ScriptRegistry {
    source: String,
    scripts: AHashMap<String, PreparedScript>,
}

impl ScriptRegistry {
    /// Registry holding only the source script.
    pub fn new() -> Self {
        let mut registry = Self {
            source: SOURCE_SCRIPT.to_string(),
            scripts: AHashMap::new(),
        };
        registry.register(ScriptMapping::identity(SOURCE_SCRIPT, "Devanagari"));
        registry
    }

    /// Treat `code` as the source script: text asked for in it is returned
    /// unchanged. The previous source mapping stays registered.
    pub fn with_source(mut self, code: &str) -> Self {
        if !self.contains(code) {
            self.register(ScriptMapping::identity(code, "Devanagari"));
        }
        self.source = code.to_string();
        self
    }

    /// Source script plus the nine built-in targets.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for mapping in scripts::all() {
            registry.register(mapping);
        }
        debug!(count = registry.len(), "built-in scripts registered");
        registry
    }

    /// Add or replace the mapping for `mapping.code`.
    pub fn register(&mut self, mapping: ScriptMapping) {
        let code = mapping.code.clone();
        if self.scripts.insert(code.clone(), PreparedScript::new(mapping)).is_some() {
            debug!(%code, "replaced script mapping");
        }
    }

    /// Load one mapping file and register it. Returns its code.
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> anyhow::Result<String> {
        let mapping = ScriptMapping::load_toml(path)?;
        let code = mapping.code.clone();
        self.register(mapping);
        Ok(code)
    }

    /// Register every `*.toml` mapping in `dir`. Unreadable or malformed
    /// files are skipped. Returns the number of mappings loaded.
    pub fn load_dir<P: AsRef<Path>>(&mut self, dir: P) -> anyhow::Result<usize> {
        use anyhow::Context;
        let dir = dir.as_ref();
        let mut paths: Vec<_> = std::fs::read_dir(dir)
            .with_context(|| format!("reading scripts dir {}", dir.display()))?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| p.extension().is_some_and(|ext| ext == "toml"))
            .collect();
        paths.sort();

        let mut loaded = 0;
        for path in paths {
            match self.load_file(&path) {
                Ok(code) => {
                    debug!(%code, path = %path.display(), "loaded script mapping");
                    loaded += 1;
                }
                Err(e) => warn!(path = %path.display(), error = %e, "skipping script mapping"),
            }
        }
        Ok(loaded)
    }

    pub fn source_script(&self) -> &str {
        &self.source
    }

    pub fn get(&self, code: &str) -> Option<&ScriptMapping> {
        self.scripts.get(code).map(|p| &p.mapping)
    }

    pub(crate) fn prepared(&self, code: &str) -> Option<&PreparedScript> {
        self.scripts.get(code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.scripts.contains_key(code)
    }

    /// Registered codes, sorted.
    pub fn codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.scripts.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }

    pub fn len(&self) -> usize {
        self.scripts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scripts.is_empty()
    }
}

impl Default for ScriptRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_ten_scripts() {
        let r = ScriptRegistry::builtin();
        assert_eq!(r.len(), 10);
        assert_eq!(
            r.codes(),
            vec!["bn", "en", "gu", "kn", "ml", "or", "pa", "sa", "ta", "te"]
        );
        assert!(r.prepared("sa").unwrap().is_identity());
        assert!(r.get("en").unwrap().is_romanization);
    }

    #[test]
    fn load_dir_skips_bad_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("xx.toml"),
            "code = \"xx\"\nname = \"Test\"\nmapping = [[\"क\", \"k\"]]\n",
        )
        .unwrap();
        std::fs::write(dir.path().join("broken.toml"), "code = ").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let mut r = ScriptRegistry::new();
        assert_eq!(r.load_dir(dir.path()).unwrap(), 1);
        assert_eq!(r.get("xx").unwrap().lookup("क"), Some("k"));
        assert!(r.load_dir(dir.path().join("missing")).is_err());
    }
}
