//! Alternate surface forms of a search term.
//!
//! - `pratika_variations`: the word with its iti suffix removed, or the
//!   word with an iti suffix added, following the `SandhiMap` tables.
//! - `phonetic_variants`: spelling equivalences used by exact word search.
//! - `case_ending_variations`: declined forms of a nominal stem.

use ahash::AHashSet;

use libsanskrit_core::chars::{self, VIRAMA};
use libsanskrit_core::{utils, Variant};

use crate::iti::SandhiMap;

const ITI_TAIL: &str = "ति";

/// Append a table ending to `base`.
///
/// Independent vowels written after a consonant become vowel signs (`अ`
/// becomes nothing); after consonant + virama the virama gives way to the
/// sign. Other endings are appended as written.
pub fn attach_ending(base: &str, ending: &str) -> String {
    let mut it = ending.chars();
    let vowel = match (it.next(), it.next()) {
        (Some(v), None) if chars::is_independent_vowel(v) => v,
        _ => return format!("{base}{ending}"),
    };

    let mut stem: Vec<char> = base.chars().collect();
    let last = stem.last().copied();
    let before_last = stem.len().checked_sub(2).and_then(|i| stem.get(i).copied());

    let joins = match last {
        Some(c) if chars::is_consonant(c) => true,
        Some(VIRAMA) if before_last.is_some_and(chars::is_consonant) => {
            stem.pop();
            true
        }
        _ => false,
    };
    if !joins {
        return format!("{base}{ending}");
    }

    let mut out: String = stem.into_iter().collect();
    if let Some(sign) = chars::vowel_sign(vowel) {
        out.push(sign);
    }
    out
}

/// Vowel signs and viramas only follow consonants; nothing starts with a sign.
pub fn is_well_formed(word: &str) -> bool {
    let mut prev: Option<char> = None;
    for c in word.chars() {
        if (chars::is_matra(c) || c == VIRAMA) && !prev.is_some_and(chars::is_consonant) {
            return false;
        }
        prev = Some(c);
    }
    !word.starts_with(chars::is_combining_mark)
}

/// Iti-quotation variants of `term`.
///
/// Reverse: for every fused suffix the term ends with (longest first, all
/// of them), the candidate source forms. Forward: unless the term already
/// ends in `ति`, the iti form for every table ending the term ends with.
/// Each variant's `rule` names the pattern (`"ेति->stem"`, `"stem->ेति"`,
/// `"म्->मिति"`). Duplicate texts keep the first label.
pub fn pratika_variations(map: &SandhiMap, term: &str) -> Vec<Variant> {
    let term = utils::nfc(term);
    let mut out: Vec<Variant> = Vec::new();
    let mut seen: AHashSet<String> = AHashSet::new();
    let mut push = |text: String, label: String| {
        if !text.is_empty() && text != term && is_well_formed(&text) && seen.insert(text.clone()) {
            out.push(Variant::new(text, label));
        }
    };

    for (pattern, endings) in map.reverse_patterns() {
        let Some(base) = term.strip_suffix(pattern) else {
            continue;
        };
        for &ending in endings.iter() {
            let label = if ending.is_empty() { "stem" } else { ending };
            push(attach_ending(base, ending), format!("{pattern}->{label}"));
        }
    }

    if !term.ends_with(ITI_TAIL) {
        for (ending, suffix) in map.forward_patterns() {
            if ending.is_empty() {
                if term.chars().last().is_some_and(|c| !chars::is_combining_mark(c)) {
                    push(format!("{term}{suffix}"), format!("stem->{suffix}"));
                }
            } else if let Some(base) = term.strip_suffix(ending) {
                push(format!("{base}{suffix}"), format!("{ending}->{suffix}"));
            } else if let Some(base) = strip_vowel_sign(&term, ending) {
                push(join_suffix(base, suffix), format!("{ending}->{suffix}"));
            }
        }
    }

    out
}

/// `term` minus the vowel sign of the independent vowel `ending`, when the
/// term ends in that sign after a consonant.
fn strip_vowel_sign<'a>(term: &'a str, ending: &str) -> Option<&'a str> {
    let mut it = ending.chars();
    let sign = match (it.next(), it.next()) {
        (Some(v), None) => chars::vowel_sign(v)?,
        _ => return None,
    };
    let base = term.strip_suffix(sign)?;
    base.chars().last().filter(|c| chars::is_consonant(*c))?;
    Some(base)
}

/// `base` (ending in a consonant) + fused suffix. A suffix that begins with
/// a consonant is joined through a virama (`गुर` + `वीति` → `गुर्वीति`).
fn join_suffix(base: &str, suffix: &str) -> String {
    match suffix.chars().next() {
        Some(c) if chars::is_consonant(c) => format!("{base}{VIRAMA}{suffix}"),
        _ => format!("{base}{suffix}"),
    }
}

/// Spelling equivalences for exact word search, the term itself first:
/// every `म्` as `ं`, every `ं` as `म्`, every `ः` as `स्`, and a final
/// `स्` as `ः`.
pub fn phonetic_variants(term: &str) -> Vec<String> {
    let term = utils::nfc(term);
    let mut out = vec![term.clone()];

    if term.contains("म्") {
        out.push(term.replace("म्", "ं"));
    }
    if term.contains('ं') {
        out.push(term.replace('ं', "म्"));
    }
    if term.contains('ः') {
        out.push(term.replace('ः', "स्"));
    }
    if let Some(base) = term.strip_suffix("स्") {
        out.push(format!("{base}ः"));
    }

    let mut seen = AHashSet::new();
    out.retain(|v| seen.insert(v.clone()));
    out
}

/// Masculine / neuter endings, singular to plural, plus sandhi forms.
const MASCULINE_ENDINGS: &[&str] = &[
    "", "ः", "म्", "ं", "स्य", "ेन", "ाय", "ात्", "े", "ौ", "योः", "ाभ्याम्", "ाः", "ान्",
    "ैः", "भिः", "भ्यः", "ेभ्यः", "ानाम्", "ेषु", "ो",
];

const FEMININE_ENDINGS: &[&str] = &[
    "ा", "ाम्", "या", "यै", "यां", "याः", "यैः", "ानाम्", "ासु",
];

/// Declined forms of `stem`: the bare stem, then each case ending with its
/// `म्`/`ं` spelling variant. NFC, first occurrence kept.
pub fn case_ending_variations(stem: &str) -> Vec<String> {
    let stem = utils::nfc(stem);
    if stem.is_empty() {
        return Vec::new();
    }
    let mut out = vec![stem.clone()];

    for ending in MASCULINE_ENDINGS.iter().chain(FEMININE_ENDINGS.iter()) {
        let form = utils::nfc(&format!("{stem}{ending}"));
        let with_anusvara = form.contains("म्").then(|| utils::nfc(&form.replace("म्", "ं")));
        let with_nasal = form.contains('ं').then(|| utils::nfc(&form.replace('ं', "म्")));
        out.push(form);
        out.extend(with_anusvara);
        out.extend(with_nasal);
    }

    let mut seen = AHashSet::new();
    out.retain(|v| seen.insert(v.clone()));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(vs: &[Variant]) -> Vec<&str> {
        vs.iter().map(|v| v.text.as_str()).collect()
    }

    #[test]
    fn attach_turns_vowels_into_signs() {
        assert_eq!(attach_ending("नारायण", "अ"), "नारायण");
        assert_eq!(attach_ending("नारायण", "आ"), "नारायणा");
        assert_eq!(attach_ending("गुर्", "उ"), "गुरु");
        assert_eq!(attach_ending("राम", "म्"), "रामम्");
        assert_eq!(attach_ending("", "इ"), "इ");
    }

    #[test]
    fn well_formedness() {
        assert!(is_well_formed("नारायणा"));
        assert!(!is_well_formed("रामााय"));
        assert!(!is_well_formed("ाय"));
    }

    #[test]
    fn reverse_variations_strip_iti() {
        let vs = pratika_variations(SandhiMap::standard(), "नारायणेति");
        assert_eq!(texts(&vs), vec!["नारायण", "नारायणा"]);
        assert_eq!(vs[0].rule, "ेति->stem");
        assert_eq!(vs[1].rule, "ेति->आ");
    }

    #[test]
    fn forward_variations_add_iti() {
        let vs = pratika_variations(SandhiMap::standard(), "नारायण");
        assert_eq!(texts(&vs), vec!["नारायणेति"]);
        assert_eq!(vs[0].rule, "stem->ेति");

        let vs = pratika_variations(SandhiMap::standard(), "रामम्");
        assert!(vs.iter().any(|v| v.text == "राममिति" && v.rule == "म्->मिति"));

        let vs = pratika_variations(SandhiMap::standard(), "हरि");
        assert!(vs.iter().any(|v| v.text == "हरीति" && v.rule == "इ->ीति"));

        let vs = pratika_variations(SandhiMap::standard(), "गुरु");
        assert!(vs.iter().any(|v| v.text == "गुर्वीति"));
    }

    #[test]
    fn phonetic_equivalences() {
        assert_eq!(phonetic_variants("नारायणम्"), vec!["नारायणम्", "नारायणं"]);
        assert_eq!(phonetic_variants("रामः"), vec!["रामः", "रामस्"]);
        assert_eq!(phonetic_variants("मनस्"), vec!["मनस्", "मनः"]);
        assert_eq!(phonetic_variants("राम"), vec!["राम"]);
    }

    #[test]
    fn case_endings() {
        let forms = case_ending_variations("देव");
        assert_eq!(forms[0], "देव");
        for f in ["देवः", "देवम्", "देवं", "देवस्य", "देवेन", "देवानाम्", "देवानां", "देवासु"] {
            assert!(forms.contains(&f.to_string()), "missing {f}");
        }
        let unique: AHashSet<&String> = forms.iter().collect();
        assert_eq!(unique.len(), forms.len());
        assert!(case_ending_variations("").is_empty());
    }
}
