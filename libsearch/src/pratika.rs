//! Pratika (quotation word) identification.
//!
//! A pratika is a word a commentary quotes from its source, marked by a
//! fused or separate इति: `नारायणेति`, `रामम् इति`. The identifier decides
//! whether a word is such a quotation and recovers the quoted forms, which
//! are then searched for in the source text.

use once_cell::sync::Lazy;
use phf::phf_set;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use tracing::debug;

use libsanskrit_core::{chars, utils, ScriptConverter};

use crate::iti::SandhiMap;
use crate::variants::{attach_ending, is_well_formed};

const ITI: &str = "इति";

/// Particles that are quoted with इति far more often as discourse markers
/// than as source words (`चेति`, `तथेति`, `अपीति`).
static INDECLINABLES: phf::Set<&'static str> = phf_set! {
    "च", "वा", "न", "एव", "तु", "हि", "अपि", "इव", "अथ", "तथा", "यथा",
    "किम्", "इति", "ननु", "खलु", "किल", "उत", "वै", "अतः", "यतः", "ततः",
    "इह", "अत्र", "तत्र", "यत्र", "कुत्र", "एवम्", "इत्थम्", "पुनः", "यदि",
    "चेत्", "तदा", "यदा", "कदा", "सदा", "मा", "नो", "अहो", "हन्त", "ओम्",
    "तावत्", "यावत्", "सह", "विना",
};

/// Words whose ending merely looks like a fused इति.
static LOOKALIKES: phf::Set<&'static str> = phf_set! {
    "प्रीति", "रीति", "नीति", "भीति", "गीति", "प्रतीति", "सङ्गीति", "संगीति",
    "मिति", "प्रमिति", "समिति", "अनुमिति", "उपमिति",
    "भूति", "विभूति", "अनुभूति", "प्रसूति", "सम्भूति", "संभूति", "आहूति",
};

/// Sentence-final candidates: a word ending in ति (or a word followed by a
/// separate इति) in Devanagari, Kannada, Telugu or Tamil, then dandas.
static QUOTATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"[\x{0900}-\x{0963}\x{0966}-\x{097F}\x{0B80}-\x{0BFF}\x{0C00}-\x{0C7F}\x{0C80}-\x{0CFF}]+",
        r"(?:\s+(?:इति|ಇತಿ|ఇతి|இதி)|ति|ತಿ|తి|தி)",
        r"(\s*[।॥]+)",
    ))
    .expect("valid quotation pattern")
});

/// Verdict for one word.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PratikaResult {
    pub is_pratika: bool,
    /// The fused suffix that identified it, or `इति` for the separate form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

impl PratikaResult {
    fn rejected() -> Self {
        Self::default()
    }

    fn accepted(pattern: &str) -> Self {
        Self {
            is_pratika: true,
            pattern: Some(pattern.to_string()),
        }
    }
}

/// Recognizes iti quotations.
#[derive(Debug, Clone)]
pub struct PratikaIdentifier {
    min_stem_chars: usize,
    map: &'static SandhiMap,
}

impl Default for PratikaIdentifier {
    fn default() -> Self {
        Self::new(2)
    }
}

impl PratikaIdentifier {
    /// `min_stem_chars`: shortest base (in chars) left once the iti suffix is
    /// removed.
    pub fn new(min_stem_chars: usize) -> Self {
        Self {
            min_stem_chars,
            map: SandhiMap::standard(),
        }
    }

    pub fn min_stem_chars(&self) -> usize {
        self.min_stem_chars
    }

    fn clean(word: &str) -> String {
        utils::strip_trailing_dandas(&utils::normalize(word))
            .trim()
            .to_string()
    }

    /// Whether `word` (Devanagari) is a quotation.
    pub fn identify_pratika(&self, word: &str) -> PratikaResult {
        let word = Self::clean(word);
        let verdict = self.identify_clean(&word);
        debug!(%word, is_pratika = verdict.is_pratika, pattern = ?verdict.pattern, "pratika check");
        verdict
    }

    fn identify_clean(&self, word: &str) -> PratikaResult {
        if word.is_empty() || LOOKALIKES.contains(word) {
            return PratikaResult::rejected();
        }

        let parts: Vec<&str> = word.split_whitespace().collect();
        match parts.as_slice() {
            [quoted, ITI] => {
                return if self.valid_stem(quoted, &[""]) {
                    PratikaResult::accepted(ITI)
                } else {
                    PratikaResult::rejected()
                };
            }
            [_] => {}
            _ => return PratikaResult::rejected(),
        }

        match self.map.longest_suffix(word) {
            Some((suffix, endings)) => {
                let base = &word[..word.len() - suffix.len()];
                if self.valid_stem(base, endings) {
                    PratikaResult::accepted(suffix)
                } else {
                    PratikaResult::rejected()
                }
            }
            None => PratikaResult::rejected(),
        }
    }

    /// Non-empty, long enough, starts with a letter, and none of its
    /// reconstructed forms is a particle.
    fn valid_stem(&self, base: &str, endings: &[&str]) -> bool {
        if base.is_empty() || utils::char_len(base) < self.min_stem_chars {
            return false;
        }
        if base.starts_with(chars::is_combining_mark) {
            return false;
        }
        !endings
            .iter()
            .map(|e| attach_ending(base, e))
            .any(|form| INDECLINABLES.contains(form.as_str()))
    }

    /// Quoted forms to search for, most likely first. Empty when `word` is
    /// not a quotation.
    ///
    /// Every fused suffix the word ends with contributes its candidate
    /// endings, longest suffix first, so `रामायेति` yields `रामाय` before
    /// the weaker readings.
    pub fn extract_searchable_forms(&self, word: &str) -> Vec<String> {
        let word = Self::clean(word);
        let verdict = self.identify_clean(&word);
        if !verdict.is_pratika {
            return Vec::new();
        }

        let mut forms: Vec<String> = Vec::new();
        let mut push = |form: String| {
            let form = utils::nfc(&form);
            if !form.is_empty() && is_well_formed(&form) && !forms.contains(&form) {
                forms.push(form);
            }
        };

        if verdict.pattern.as_deref() == Some(ITI) {
            if let Some(quoted) = word.split_whitespace().next() {
                push(quoted.to_string());
            }
        }

        for (suffix, endings) in self.map.reverse_patterns() {
            let Some(base) = word.strip_suffix(suffix) else {
                continue;
            };
            let base = base.trim_end();
            if base.is_empty() || base.starts_with(chars::is_combining_mark) {
                continue;
            }
            for ending in endings.iter() {
                push(attach_ending(base, ending));
            }
        }

        forms
    }

    /// Wrap sentence-final quotations in `<span class="{class}">`.
    ///
    /// Only the word is wrapped; the dandas stay outside. Candidates in other
    /// scripts are checked through `converter`.
    pub fn mark_pratikas(&self, text: &str, converter: &dyn ScriptConverter, class: &str) -> String {
        let text = utils::nfc(text);
        let marked = QUOTATION.replace_all(&text, |caps: &Captures| {
            let whole = &caps[0];
            let dandas = caps.get(1).map_or("", |m| m.as_str());
            let word = &whole[..whole.len() - dandas.len()];
            let devanagari = converter.to_devanagari(word, None);
            if self.identify_pratika(&devanagari).is_pratika {
                format!("<span class=\"{class}\">{word}</span>{dandas}")
            } else {
                whole.to_string()
            }
        });
        utils::nfc(&marked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use libsanskrit_core::IdentityConverter;

    #[test]
    fn fused_iti_is_recognized() {
        let id = PratikaIdentifier::default();
        let r = id.identify_pratika("नारायणेति");
        assert!(r.is_pratika);
        assert_eq!(r.pattern.as_deref(), Some("ेति"));
        assert_eq!(id.identify_pratika("राममिति ॥").pattern.as_deref(), Some("मिति"));
        assert_eq!(id.identify_pratika("हरीति").pattern.as_deref(), Some("ीति"));
    }

    #[test]
    fn separate_iti_is_recognized() {
        let id = PratikaIdentifier::default();
        let r = id.identify_pratika("रामः इति");
        assert_eq!(r, PratikaResult::accepted("इति"));
        assert!(!id.identify_pratika("च इति").is_pratika);
        assert!(!id.identify_pratika("राम कृष्ण इति").is_pratika);
    }

    #[test]
    fn rejects_non_quotations() {
        let id = PratikaIdentifier::default();
        for w in ["नारायण", "", "प्रीति", "समिति", "चेति", "तथेति", "अपीति", "एवेति", "त्विति", "किमिति"] {
            assert!(!id.identify_pratika(w).is_pratika, "{w}");
        }
    }

    #[test]
    fn min_stem_length_applies() {
        assert!(!PratikaIdentifier::new(2).identify_pratika("केति").is_pratika);
        assert!(PratikaIdentifier::new(1).identify_pratika("केति").is_pratika);

        // a bare suffix quotes nothing, whatever the minimum
        let lax = PratikaIdentifier::new(0);
        assert!(!lax.identify_pratika("ेति").is_pratika);
        assert!(lax.extract_searchable_forms("ेति").is_empty());
        assert!(!lax.identify_pratika("इति").is_pratika);
        assert!(!PratikaIdentifier::new(8).identify_pratika("नारायणेति").is_pratika);
    }

    #[test]
    fn searchable_forms() {
        let id = PratikaIdentifier::default();
        assert_eq!(id.extract_searchable_forms("नारायणेति"), vec!["नारायण", "नारायणा"]);
        assert_eq!(id.extract_searchable_forms("राममिति"), vec!["रामम्", "रामाम्"]);
        assert_eq!(id.extract_searchable_forms("गुर्विति")[0], "गुरु");
        assert_eq!(id.extract_searchable_forms("रामः इति")[0], "रामः");
        assert!(id.extract_searchable_forms("नारायण").is_empty());
    }

    #[test]
    fn marks_sentence_final_quotations() {
        let id = PratikaIdentifier::default();
        let out = id.mark_pratikas("नारायणेति । चेति । गच्छति", &IdentityConverter, "q");
        assert_eq!(out, "<span class=\"q\">नारायणेति</span> । चेति । गच्छति");

        let out = id.mark_pratikas("उक्तं रामः इति॥", &IdentityConverter, "q");
        assert_eq!(out, "उक्तं <span class=\"q\">रामः इति</span>॥");
    }
}
