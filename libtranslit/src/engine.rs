//! Devanagari → target script conversion.
//!
//! Conversion runs in four passes over the NFC text:
//!
//! 1. special combinations (conjuncts such as `क्ष`), in table order;
//! 2. for romanizations, consonant + virama / vowel sign, dropping the
//!    consonant's inherent `a`;
//! 3. the generic character map;
//! 4. anusvara normalization for scripts that prefer `ಂ` over a written
//!    class nasal.
//!
//! Conversion never fails. Unknown script codes leave the text unchanged.

use std::sync::Arc;

use tracing::{trace, warn};

use libsanskrit_core::chars::{self, VIRAMA};
use libsanskrit_core::{utils, ScriptConverter, SOURCE_SCRIPT};

use crate::config::TranslitConfig;
use crate::mapping::AnusvaraRules;
use crate::registry::{PreparedScript, ScriptRegistry, BUILTIN};
use crate::reverse;

/// Transliterate Devanagari `text` into the script registered as `code`,
/// using the built-in registry.
pub fn transliterate(text: &str, code: &str) -> String {
    transliterate_with(&BUILTIN, text, code)
}

/// Transliterate with an explicit registry.
pub fn transliterate_with(registry: &ScriptRegistry, text: &str, code: &str) -> String {
    if text.is_empty() || code == registry.source_script() {
        return text.to_string();
    }
    let Some(script) = registry.prepared(code) else {
        warn!(%code, "no script mapping registered, text left unchanged");
        return text.to_string();
    };
    if script.is_identity() {
        return text.to_string();
    }
    convert(script, &utils::nfc(text))
}

fn convert(script: &PreparedScript, text: &str) -> String {
    let code = script.mapping.code.as_str();

    let mut out = apply_special_combinations(script, text);
    trace!(%code, %out, "special combinations");

    if script.mapping.is_romanization {
        out = romanize_consonants(script, &out);
        trace!(%code, %out, "inherent vowels");
    }

    out = script.forward.replace_all(&out);
    trace!(%code, %out, "character map");

    if let Some(rules) = script.mapping.anusvara_rules() {
        out = normalize_anusvara(rules, &script.consonants, &out);
        trace!(%code, %out, "anusvara");
    }

    out
}

fn push_sign(script: &PreparedScript, out: &mut String, sign: char) {
    let mut buf = [0u8; 4];
    match script.forward.get(sign.encode_utf8(&mut buf)) {
        Some(value) => out.push_str(value),
        None => out.push(sign),
    }
}

fn apply_special_combinations(script: &PreparedScript, text: &str) -> String {
    let roman = script.mapping.is_romanization;
    let mut current = text.to_string();

    for (source, target) in script.mapping.special_combinations.iter() {
        if source.is_empty() || !current.contains(source.as_str()) {
            continue;
        }
        let mut out = String::with_capacity(current.len());
        let mut rest = current.as_str();

        while let Some(idx) = rest.find(source.as_str()) {
            out.push_str(&rest[..idx]);
            rest = &rest[idx + source.len()..];
            match rest.chars().next() {
                // क्षि -> kṣi, not kṣai
                Some(sign) if roman && (sign == VIRAMA || chars::is_matra(sign)) => {
                    out.push_str(target.strip_suffix('a').unwrap_or(target));
                    push_sign(script, &mut out, sign);
                    rest = &rest[sign.len_utf8()..];
                }
                _ => out.push_str(target),
            }
        }
        out.push_str(rest);
        current = out;
    }

    current
}

fn romanize_consonants(script: &PreparedScript, text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut buf = [0u8; 4];
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if let Some(&sign) = chars.get(i + 1) {
            if chars::is_consonant(c) && (sign == VIRAMA || chars::is_matra(sign)) {
                if let Some(value) = script.forward.get(c.encode_utf8(&mut buf)) {
                    out.push_str(value.strip_suffix('a').unwrap_or(value));
                    push_sign(script, &mut out, sign);
                    i += 2;
                    continue;
                }
            }
        }
        out.push(c);
        i += 1;
    }

    out
}

/// Whether a nasal + virama followed by `after` becomes an anusvara.
fn collapses(rules: &AnusvaraRules, consonants: &[String], after: &str) -> bool {
    match after.chars().next() {
        None => rules.final_nasal_to_anusvara,
        Some(c) if chars::is_end_of_word(c) => rules.final_nasal_to_anusvara,
        Some(_) => consonants
            .iter()
            .find(|k| after.starts_with(k.as_str()))
            .is_some_and(|k| !rules.is_compound_exception(k)),
    }
}

fn normalize_anusvara(rules: &AnusvaraRules, consonants: &[String], text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    'scan: while let Some(c) = rest.chars().next() {
        for nasal in rules.nasals_with_virama.iter() {
            if let Some(after) = rest.strip_prefix(nasal.as_str()) {
                if !nasal.is_empty() && collapses(rules, consonants, after) {
                    out.push_str(&rules.anusvara);
                    rest = after;
                    continue 'scan;
                }
            }
        }
        out.push(c);
        rest = &rest[c.len_utf8()..];
    }

    out
}

/// Transliteration front end over a shared registry.
#[derive(Debug, Clone)]
pub struct Transliterator {
    registry: Arc<ScriptRegistry>,
}

impl Transliterator {
    pub fn new(registry: ScriptRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    /// Built-in scripts plus any mapping files in `config.scripts_dir`,
    /// with the configured source script.
    pub fn from_config(config: &TranslitConfig) -> anyhow::Result<Self> {
        let mut registry = ScriptRegistry::builtin();
        if !config.base.is_source_script(SOURCE_SCRIPT) {
            registry = registry.with_source(&config.base.source_script);
        }
        if let Some(dir) = config.scripts_dir.as_ref() {
            registry.load_dir(dir)?;
        }
        Ok(Self::new(registry))
    }

    pub fn registry(&self) -> &ScriptRegistry {
        &self.registry
    }

    pub fn transliterate(&self, text: &str, code: &str) -> String {
        transliterate_with(&self.registry, text, code)
    }

    /// Target script → Devanagari.
    pub fn reverse(&self, text: &str, code: &str) -> String {
        reverse::reverse_transliterate_with(&self.registry, text, code)
    }
}

impl Default for Transliterator {
    fn default() -> Self {
        Self::new(ScriptRegistry::builtin())
    }
}

impl ScriptConverter for Transliterator {
    fn to_script(&self, text: &str, code: &str) -> String {
        self.transliterate(text, code)
    }

    fn to_devanagari(&self, text: &str, hint: Option<&str>) -> String {
        reverse::to_devanagari_with(&self.registry, text, hint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::ScriptMapping;

    #[test]
    fn inherent_vowel_dropped_before_signs() {
        assert_eq!(transliterate("कि", "en"), "ki");
        assert_eq!(transliterate("क्", "en"), "k");
        assert_eq!(transliterate("क", "en"), "ka");
        assert_eq!(transliterate("क्षि", "en"), "kṣi");
        assert_eq!(transliterate("ज्ञानम्", "en"), "jñānam");
    }

    #[test]
    fn special_combinations_run_in_order() {
        let mut registry = ScriptRegistry::new();
        registry.register(ScriptMapping::from_tables(
            "xx",
            "Test",
            &[("क", "k"), ("ष", "s"), ("्", "")],
            &[("क्ष", "X"), ("X", "Y")],
        ));
        assert_eq!(transliterate_with(&registry, "क्षक", "xx"), "Yk");
    }

    #[test]
    fn anusvara_pass_respects_exceptions() {
        let rules = AnusvaraRules::new("M", &["n_"])
            .keep_before(&["y"])
            .collapse_final(true);
        let consonants = vec!["k".to_string(), "y".to_string()];
        assert_eq!(normalize_anusvara(&rules, &consonants, "an_ka"), "aMka");
        assert_eq!(normalize_anusvara(&rules, &consonants, "an_ya"), "an_ya");
        assert_eq!(normalize_anusvara(&rules, &consonants, "an_ an_"), "aM aM");
        assert_eq!(normalize_anusvara(&rules, &consonants, "an_a"), "an_a");

        let medial_only = AnusvaraRules::new("M", &["n_"]);
        assert_eq!(normalize_anusvara(&medial_only, &consonants, "an_"), "an_");
    }

    #[test]
    fn converter_trait_uses_registry() {
        let t = Transliterator::default();
        let conv: &dyn ScriptConverter = &t;
        assert_eq!(conv.to_script("राम", "kn"), "ರಾಮ");
        assert_eq!(conv.to_devanagari("ರಾಮ", None), "राम");
        assert_eq!(conv.to_script("राम", "sa"), "राम");
    }

    #[test]
    fn configured_source_script_is_left_alone() {
        let config = TranslitConfig::from_toml_str("source_script = \"dev\"").unwrap();
        let t = Transliterator::from_config(&config).unwrap();
        assert_eq!(t.registry().source_script(), "dev");
        assert_eq!(t.transliterate("रामः", "dev"), "रामः");
        assert_eq!(t.reverse("रामः", "dev"), "रामः");
        assert_eq!(t.transliterate("राम", "kn"), "ರಾಮ");

        let default = Transliterator::from_config(&TranslitConfig::default()).unwrap();
        assert_eq!(default.registry().source_script(), SOURCE_SCRIPT);
        assert!(!default.registry().contains("dev"));
    }
}
