//! Target script → Devanagari.
//!
//! Native scripts invert their mapping table: every target string maps back
//! to its source (a later duplicate target wins) and the longest target
//! string present at each position is substituted.
//!
//! Romanizations cannot be inverted that way because consonants carry an
//! inherent `a`. They are parsed instead: a consonant followed by a vowel
//! takes that vowel's sign, by `a` takes nothing, and by anything else
//! takes a virama (`dharma` → `धर्म`).

use ahash::AHashMap;
use tracing::warn;

use libsanskrit_core::chars::{self, VIRAMA};
use libsanskrit_core::utils;

use crate::mapping::ScriptMapping;
use crate::registry::{ScriptRegistry, BUILTIN};

/// Latin letters with IAST diacritics.
const IAST_LETTERS: &str = "āīūṛṝḷḹṅñṭḍṇśṣṃḥḻ";

#[derive(Debug, Clone)]
enum Token {
    Consonant(String),
    Vowel(char),
    Other(String),
}

/// Parse table for a romanization.
#[derive(Debug, Clone, Default)]
pub(crate) struct RomanTable {
    tokens: AHashMap<String, Token>,
    lengths: Vec<usize>,
}

impl RomanTable {
    pub(crate) fn new(mapping: &ScriptMapping) -> Self {
        let mut table = Self::default();

        for (source, target) in mapping.mapping.iter() {
            let mut it = source.chars();
            let token = match (it.next(), it.next()) {
                (Some(c), None) if chars::is_consonant(c) => match target.strip_suffix('a') {
                    Some(stem) if !stem.is_empty() => Token::Consonant(source.clone()),
                    _ => Token::Other(source.clone()),
                },
                (Some(c), None) if chars::is_independent_vowel(c) => Token::Vowel(c),
                // vowel signs and virama come out of the vowel tokens
                (Some(c), None) if chars::is_matra(c) || c == VIRAMA => continue,
                _ => Token::Other(source.clone()),
            };
            let key = match &token {
                Token::Consonant(_) => target.strip_suffix('a').unwrap_or(target),
                _ => target.as_str(),
            };
            table.insert(key, token);
        }

        for (source, target) in mapping.special_combinations.iter() {
            if let Some(stem) = target.strip_suffix('a').filter(|s| !s.is_empty()) {
                table.insert(stem, Token::Consonant(source.clone()));
            }
        }

        table.lengths.sort_unstable_by(|a, b| b.cmp(a));
        table
    }

    fn insert(&mut self, key: &str, token: Token) {
        if key.is_empty() {
            return;
        }
        let n = key.chars().count();
        if !self.lengths.contains(&n) {
            self.lengths.push(n);
        }
        self.tokens.insert(key.to_string(), token);
    }

    fn longest<F>(&self, chars: &[char], at: usize, accept: F) -> Option<(usize, &Token)>
    where
        F: Fn(&Token) -> bool,
    {
        let mut key = String::new();
        for &n in self.lengths.iter() {
            if at + n > chars.len() {
                continue;
            }
            key.clear();
            key.extend(&chars[at..at + n]);
            if let Some(token) = self.tokens.get(&key).filter(|t| accept(t)) {
                return Some((n, token));
            }
        }
        None
    }

    pub(crate) fn parse(&self, text: &str) -> String {
        let chars: Vec<char> = text.chars().map(utils::fold_char).collect();
        let mut out = String::with_capacity(text.len() * 3);
        let mut i = 0;

        while i < chars.len() {
            match self.longest(&chars, i, |_| true) {
                Some((n, Token::Consonant(dev))) => {
                    out.push_str(dev);
                    i += n;
                    match self.longest(&chars, i, |t| matches!(t, Token::Vowel(_))) {
                        Some((m, Token::Vowel(v))) => {
                            if let Some(sign) = chars::vowel_sign(*v) {
                                out.push(sign);
                            }
                            i += m;
                        }
                        _ => out.push(VIRAMA),
                    }
                }
                Some((n, Token::Vowel(v))) => {
                    out.push(*v);
                    i += n;
                }
                Some((n, Token::Other(dev))) => {
                    out.push_str(dev);
                    i += n;
                }
                None => {
                    out.push(chars[i]);
                    i += 1;
                }
            }
        }

        out
    }
}

/// Convert `text` written in the script `code` back to Devanagari, using
/// the built-in registry.
pub fn reverse_transliterate(text: &str, code: &str) -> String {
    reverse_transliterate_with(&BUILTIN, text, code)
}

pub fn reverse_transliterate_with(registry: &ScriptRegistry, text: &str, code: &str) -> String {
    if text.is_empty() || code == registry.source_script() {
        return text.to_string();
    }
    let Some(script) = registry.prepared(code) else {
        warn!(%code, "no script mapping registered, text left unchanged");
        return text.to_string();
    };
    let text = utils::nfc(text);
    let out = match script.roman.as_ref() {
        Some(table) => table.parse(&text),
        None => script.reverse.replace_all(&text),
    };
    utils::nfc(&out)
}

/// Guess the script of `text` from Unicode blocks.
///
/// The first char from a non-Devanagari Indic block decides. Otherwise
/// Devanagari text is `sa` and Latin letters are `en`.
pub fn detect_script(text: &str) -> Option<&'static str> {
    let mut devanagari = false;
    let mut latin = false;

    for c in text.chars() {
        let code = match c as u32 {
            0x0980..=0x09FF => "bn",
            0x0A00..=0x0A7F => "pa",
            0x0A80..=0x0AFF => "gu",
            0x0B00..=0x0B7F => "or",
            0x0B80..=0x0BFF => "ta",
            0x0C00..=0x0C7F => "te",
            0x0C80..=0x0CFF => "kn",
            0x0D00..=0x0D7F => "ml",
            _ => {
                if chars::is_devanagari(c) {
                    devanagari = true;
                } else if c.is_ascii_alphabetic() || IAST_LETTERS.contains(utils::fold_char(c)) {
                    latin = true;
                }
                continue;
            }
        };
        return Some(code);
    }

    if devanagari {
        Some(libsanskrit_core::SOURCE_SCRIPT)
    } else if latin {
        Some("en")
    } else {
        None
    }
}

/// Devanagari form of `text`, whatever script it is in.
///
/// Devanagari text is returned unchanged. Otherwise `hint` names the script
/// when given and registered, else it is detected.
pub fn to_devanagari(text: &str, hint: Option<&str>) -> String {
    to_devanagari_with(&BUILTIN, text, hint)
}

pub fn to_devanagari_with(registry: &ScriptRegistry, text: &str, hint: Option<&str>) -> String {
    let source = registry.source_script();
    let Some(detected) = detect_script(text) else {
        return text.to_string();
    };
    if detected == source {
        return text.to_string();
    }
    let code = hint
        .filter(|h| *h != source && registry.contains(h))
        .unwrap_or(detected);
    reverse_transliterate_with(registry, text, code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iast_parsing() {
        assert_eq!(reverse_transliterate("namaḥ", "en"), "नमः");
        assert_eq!(reverse_transliterate("dharmakṣetre", "en"), "धर्मक्षेत्रे");
        assert_eq!(reverse_transliterate("Kṛṣṇa", "en"), "कृष्ण");
        assert_eq!(reverse_transliterate("oṃ tat sat", "en"), "ॐ तत् सत्");
        assert_eq!(reverse_transliterate("śrī rāmaḥ ||", "en"), "श्री रामः ॥");
    }

    #[test]
    fn native_scripts_invert_table() {
        assert_eq!(reverse_transliterate("ನಮಃ", "kn"), "नमः");
        assert_eq!(reverse_transliterate("ক্ষেত্র", "bn"), "क्षेत्र");
        assert_eq!(reverse_transliterate("राम", "sa"), "राम");
        assert_eq!(reverse_transliterate("ನಮಃ", "zz"), "ನಮಃ");
    }

    #[test]
    fn detection() {
        assert_eq!(detect_script("ನಮಃ"), Some("kn"));
        assert_eq!(detect_script("নমঃ"), Some("bn"));
        assert_eq!(detect_script("नमः"), Some("sa"));
        assert_eq!(detect_script("namaḥ"), Some("en"));
        assert_eq!(detect_script("123 ।"), Some("sa"));
        assert_eq!(detect_script("12"), None);
    }

    #[test]
    fn to_devanagari_leaves_source_alone() {
        assert_eq!(to_devanagari("नमः", Some("kn")), "नमः");
        assert_eq!(to_devanagari("నమః", None), "नमः");
        assert_eq!(to_devanagari("namaḥ", Some("en")), "नमः");
    }
}
