//! Devanagari character classes used by transliteration and search.
//!
//! Everything here operates on single `char`s of NFC text. Vowel signs,
//! virama, anusvara, visarga and candrabindu are "combining marks" in the
//! sense used by the search engine: they attach to the preceding akshara
//! and may be absorbed into a match that ends on a bare consonant.

use phf::{phf_map, phf_set};

pub const VIRAMA: char = '\u{094D}';
pub const ANUSVARA: char = '\u{0902}';
pub const VISARGA: char = '\u{0903}';
pub const CANDRABINDU: char = '\u{0901}';
pub const AVAGRAHA: char = '\u{093D}';
pub const DANDA: char = '\u{0964}';
pub const DOUBLE_DANDA: char = '\u{0965}';
pub const OM: char = '\u{0950}';

/// Vedic accent marks that may follow a syllable in accented texts.
pub const VEDIC_MARKS: [char; 2] = ['\u{1CF5}', '\u{1CF6}'];

/// The 33 Devanagari consonants in varga order.
pub const CONSONANTS: [char; 33] = [
    'क', 'ख', 'ग', 'घ', 'ङ', //
    'च', 'छ', 'ज', 'झ', 'ञ', //
    'ट', 'ठ', 'ड', 'ढ', 'ण', //
    'त', 'थ', 'द', 'ध', 'न', //
    'प', 'फ', 'ब', 'भ', 'म', //
    'य', 'र', 'ल', 'व', //
    'श', 'ष', 'स', 'ह',
];

/// Dependent vowel signs (matras).
pub const MATRAS: [char; 13] = [
    'ा', 'ि', 'ी', 'ु', 'ू', 'ृ', 'ॄ', 'ॢ', 'ॣ', 'े', 'ै', 'ो', 'ौ',
];

static COMBINING_MARKS: phf::Set<char> = phf_set! {
    'ं', 'ः', 'ँ',
    'ा', 'ि', 'ी', 'ु', 'ू', 'े', 'ै', 'ो', 'ौ',
    'ृ', 'ॄ', 'ॢ', 'ॣ',
    '्',
    '\u{1CF5}', '\u{1CF6}',
};

static VOWEL_SIGNS: phf::Map<char, char> = phf_map! {
    'आ' => 'ा',
    'इ' => 'ि',
    'ई' => 'ी',
    'उ' => 'ु',
    'ऊ' => 'ू',
    'ऋ' => 'ृ',
    'ॠ' => 'ॄ',
    'ऌ' => 'ॢ',
    'ॡ' => 'ॣ',
    'ए' => 'े',
    'ऐ' => 'ै',
    'ओ' => 'ो',
    'औ' => 'ौ',
};

/// Whether `c` is a mark that attaches to the preceding akshara.
pub fn is_combining_mark(c: char) -> bool {
    COMBINING_MARKS.contains(&c)
}

/// Whether the last char of `s` is a combining mark. Empty strings are not.
pub fn ends_with_combining_mark(s: &str) -> bool {
    s.chars().last().is_some_and(is_combining_mark)
}

pub fn is_consonant(c: char) -> bool {
    CONSONANTS.contains(&c) || c == 'ळ'
}

pub fn is_matra(c: char) -> bool {
    MATRAS.contains(&c)
}

/// Whether `c` is an independent Devanagari vowel letter.
pub fn is_independent_vowel(c: char) -> bool {
    c == 'अ' || VOWEL_SIGNS.contains_key(&c)
}

/// Dependent sign for an independent vowel (`आ` → `ा`). `अ` has none.
pub fn vowel_sign(independent: char) -> Option<char> {
    VOWEL_SIGNS.get(&independent).copied()
}

/// Independent vowel for a dependent sign (`ा` → `आ`).
pub fn independent_vowel(sign: char) -> Option<char> {
    VOWEL_SIGNS
        .entries()
        .find(|(_, s)| **s == sign)
        .map(|(v, _)| *v)
}

/// Homorganic nasal of a stop consonant's varga.
///
/// Semivowels, sibilants and `ह` have no class nasal.
pub fn class_nasal(consonant: char) -> Option<char> {
    match consonant {
        'क' | 'ख' | 'ग' | 'घ' | 'ङ' => Some('ङ'),
        'च' | 'छ' | 'ज' | 'झ' | 'ञ' => Some('ञ'),
        'ट' | 'ठ' | 'ड' | 'ढ' | 'ण' => Some('ण'),
        'त' | 'थ' | 'द' | 'ध' | 'न' => Some('न'),
        'प' | 'फ' | 'ब' | 'भ' | 'म' => Some('म'),
        _ => None,
    }
}

pub fn is_nasal(c: char) -> bool {
    matches!(c, 'ङ' | 'ञ' | 'ण' | 'न' | 'म')
}

pub fn is_sentence_end(c: char) -> bool {
    c == DANDA || c == DOUBLE_DANDA
}

/// Boundary used by exact word search: whitespace, dandas and the
/// ASCII punctuation `,;'"()[]{}/<>`.
pub fn is_word_boundary(c: char) -> bool {
    c.is_whitespace()
        || is_sentence_end(c)
        || matches!(
            c,
            ',' | ';' | '\'' | '"' | '(' | ')' | '[' | ']' | '{' | '}' | '/' | '<' | '>'
        )
}

/// End-of-word context for final-nasal collapsing in transliteration:
/// whitespace, dandas and `,.;:!?()[]{}"'`.
pub fn is_end_of_word(c: char) -> bool {
    c.is_whitespace()
        || is_sentence_end(c)
        || matches!(
            c,
            ',' | '.' | ';' | ':' | '!' | '?' | '(' | ')' | '[' | ']' | '{' | '}' | '"' | '\''
        )
}

/// Whether `c` lies in the Devanagari block.
pub fn is_devanagari(c: char) -> bool {
    ('\u{0900}'..='\u{097F}').contains(&c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combining_marks_cover_endings() {
        for c in ['ं', 'ः', 'ँ', 'ा', 'े', '्', '\u{1CF5}'] {
            assert!(is_combining_mark(c), "{c} should be a mark");
        }
        for c in ['क', 'अ', ' ', DANDA] {
            assert!(!is_combining_mark(c));
        }
        assert!(ends_with_combining_mark("नारायणं"));
        assert!(!ends_with_combining_mark("नारायण"));
        assert!(!ends_with_combining_mark(""));
    }

    #[test]
    fn vowel_sign_roundtrip() {
        assert_eq!(vowel_sign('आ'), Some('ा'));
        assert_eq!(vowel_sign('अ'), None);
        assert_eq!(independent_vowel('ी'), Some('ई'));
        assert!(is_independent_vowel('अ'));
    }

    #[test]
    fn class_nasals() {
        assert_eq!(class_nasal('क'), Some('ङ'));
        assert_eq!(class_nasal('द'), Some('न'));
        assert_eq!(class_nasal('य'), None);
    }
}
