//! Script mapping tables.
//!
//! A `ScriptMapping` is data: ordered pairs of Devanagari source strings and
//! their rendering in one target script. The built-in scripts live in
//! `crate::scripts`; extra ones can be loaded from TOML files of the form
//!
//! ```toml
//! code = "xx"
//! name = "Example"
//! mapping = [["क", "k"], ["ा", "aa"]]
//! special_combinations = [["क्ष", "x"]]
//! ```

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use libsanskrit_core::chars;

/// Anusvara preference of a script.
///
/// Many South Indian and Bengali printing traditions write `ಂ` where the
/// Devanagari source spells out a class nasal with virama.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnusvaraRules {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// The script's anusvara sign.
    pub anusvara: String,
    /// Nasal consonant + virama sequences in the target script.
    pub nasals_with_virama: Vec<String>,
    /// Consonants before which the written nasal is kept.
    #[serde(default)]
    pub compound_consonants: Vec<String>,
    /// Also collapse a nasal + virama at the end of a word.
    #[serde(default)]
    pub final_nasal_to_anusvara: bool,
}

fn default_enabled() -> bool {
    true
}

impl AnusvaraRules {
    pub fn new(anusvara: &str, nasals_with_virama: &[&str]) -> Self {
        Self {
            enabled: true,
            anusvara: anusvara.to_string(),
            nasals_with_virama: nasals_with_virama.iter().map(|s| s.to_string()).collect(),
            compound_consonants: Vec::new(),
            final_nasal_to_anusvara: false,
        }
    }

    pub fn keep_before(mut self, consonants: &[&str]) -> Self {
        self.compound_consonants = consonants.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn collapse_final(mut self, enabled: bool) -> Self {
        self.final_nasal_to_anusvara = enabled;
        self
    }

    pub fn is_compound_exception(&self, consonant: &str) -> bool {
        self.compound_consonants.iter().any(|c| c == consonant)
    }
}

/// Mapping from Devanagari to one target script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptMapping {
    pub code: String,
    pub name: String,
    /// Source → target pairs, in insertion order.
    #[serde(default)]
    pub mapping: Vec<(String, String)>,
    /// Conjuncts converted before the generic map, in insertion order.
    #[serde(default)]
    pub special_combinations: Vec<(String, String)>,
    /// Latin-based target: consonant values carry an inherent `a`.
    #[serde(default)]
    pub is_romanization: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anusvara: Option<AnusvaraRules>,
}

impl ScriptMapping {
    /// Mapping that leaves text unchanged (the source script).
    pub fn identity(code: &str, name: &str) -> Self {
        Self {
            code: code.to_string(),
            name: name.to_string(),
            mapping: Vec::new(),
            special_combinations: Vec::new(),
            is_romanization: false,
            anusvara: None,
        }
    }

    /// Build a mapping from static tables.
    pub fn from_tables(
        code: &str,
        name: &str,
        mapping: &[(&str, &str)],
        special_combinations: &[(&str, &str)],
    ) -> Self {
        let own = |pairs: &[(&str, &str)]| {
            pairs
                .iter()
                .map(|(a, b)| (a.to_string(), b.to_string()))
                .collect::<Vec<_>>()
        };
        Self {
            mapping: own(mapping),
            special_combinations: own(special_combinations),
            ..Self::identity(code, name)
        }
    }

    pub fn romanized(mut self) -> Self {
        self.is_romanization = true;
        self
    }

    pub fn with_anusvara(mut self, rules: AnusvaraRules) -> Self {
        self.anusvara = Some(rules);
        self
    }

    /// Anusvara rules, if present and enabled.
    pub fn anusvara_rules(&self) -> Option<&AnusvaraRules> {
        self.anusvara.as_ref().filter(|r| r.enabled)
    }

    /// Target for a source string from the generic map. Later pairs win.
    pub fn lookup(&self, source: &str) -> Option<&str> {
        self.mapping
            .iter()
            .rev()
            .find(|(s, _)| s == source)
            .map(|(_, t)| t.as_str())
    }

    /// Target renderings of the Devanagari consonants (plus `ळ`), in varga
    /// order. Unmapped consonants are left out.
    pub fn script_consonants(&self) -> Vec<String> {
        let mut buf = [0u8; 4];
        chars::CONSONANTS
            .iter()
            .chain(std::iter::once(&'ळ'))
            .filter_map(|c| self.lookup(c.encode_utf8(&mut buf)).map(str::to_string))
            .collect()
    }

    /// Load a mapping from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Load a mapping from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<Self> {
        use anyhow::Context;
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading script mapping {}", path.display()))?;
        let mapping = Self::from_toml_str(&content)
            .with_context(|| format!("parsing script mapping {}", path.display()))?;
        Ok(mapping)
    }
}

/// Greedy longest-key-first substitution table.
///
/// At each position the longest key present wins; unmatched chars are
/// copied through. Output is never rescanned, so values cannot chain.
#[derive(Debug, Clone, Default)]
pub(crate) struct Replacer {
    map: AHashMap<String, String>,
    // distinct key lengths in chars, longest first
    lengths: Vec<usize>,
}

impl Replacer {
    /// Build from pairs; a later duplicate key replaces the earlier one.
    pub(crate) fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut map = AHashMap::new();
        let mut lengths = Vec::new();
        for (key, value) in pairs {
            if key.is_empty() {
                continue;
            }
            let n = key.chars().count();
            if !lengths.contains(&n) {
                lengths.push(n);
            }
            map.insert(key.to_string(), value.to_string());
        }
        lengths.sort_unstable_by(|a, b| b.cmp(a));
        Self { map, lengths }
    }

    pub(crate) fn get(&self, key: &str) -> Option<&str> {
        self.map.get(key).map(String::as_str)
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub(crate) fn replace_all(&self, text: &str) -> String {
        if self.map.is_empty() {
            return text.to_string();
        }
        let chars: Vec<char> = text.chars().collect();
        let mut out = String::with_capacity(text.len());
        let mut key = String::new();
        let mut i = 0;

        'scan: while i < chars.len() {
            for &n in self.lengths.iter() {
                if i + n > chars.len() {
                    continue;
                }
                key.clear();
                key.extend(&chars[i..i + n]);
                if let Some(value) = self.map.get(&key) {
                    out.push_str(value);
                    i += n;
                    continue 'scan;
                }
            }
            out.push(chars[i]);
            i += 1;
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replacer_prefers_longest_key() {
        let r = Replacer::from_pairs([("a", "1"), ("ab", "2"), ("a", "3")]);
        assert_eq!(r.replace_all("abac"), "23c");
        assert_eq!(r.get("a"), Some("3"));
    }

    #[test]
    fn consonants_follow_mapping() {
        let m = ScriptMapping::from_tables("xx", "Test", &[("क", "k"), ("ग", "g"), ("क", "q")], &[]);
        assert_eq!(m.script_consonants(), vec!["q".to_string(), "g".to_string()]);
        assert!(ScriptMapping::identity("sa", "Devanagari").script_consonants().is_empty());
    }

    #[test]
    fn toml_roundtrip() {
        let m = ScriptMapping::from_tables("xx", "Test", &[("क", "k")], &[("क्ष", "x")])
            .with_anusvara(AnusvaraRules::new("M", &["n_"]).collapse_final(true));
        let s = m.to_toml_string().unwrap();
        assert_eq!(ScriptMapping::from_toml_str(&s).unwrap(), m);

        let parsed = ScriptMapping::from_toml_str(
            "code = \"yy\"\nname = \"Y\"\nmapping = [[\"अ\", \"a\"]]\n",
        )
        .unwrap();
        assert_eq!(parsed.lookup("अ"), Some("a"));
        assert!(parsed.special_combinations.is_empty());
        assert!(parsed.anusvara_rules().is_none());
    }
}
