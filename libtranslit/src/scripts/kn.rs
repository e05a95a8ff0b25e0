//! Kannada script.
//!
//! Kannada prints anusvara for a nasal before a stop and at word end, but
//! keeps the written nasal before nasals and semivowels.

use crate::mapping::{AnusvaraRules, ScriptMapping};

const MAPPING: &[(&str, &str)] = &[
    ("ॐ", "ಓಂ"),
    ("अ", "ಅ"), ("आ", "ಆ"), ("इ", "ಇ"), ("ई", "ಈ"), ("उ", "ಉ"), ("ऊ", "ಊ"), ("ऋ", "ಋ"), ("ॠ", "ೠ"), ("ऌ", "ಌ"), ("ॡ", "ೡ"), ("ए", "ಏ"), ("ऐ", "ಐ"), ("ओ", "ಓ"), ("औ", "ಔ"),
    ("क", "ಕ"), ("ख", "ಖ"), ("ग", "ಗ"), ("घ", "ಘ"), ("ङ", "ಙ"),
    ("च", "ಚ"), ("छ", "ಛ"), ("ज", "ಜ"), ("झ", "ಝ"), ("ञ", "ಞ"),
    ("ट", "ಟ"), ("ठ", "ಠ"), ("ड", "ಡ"), ("ढ", "ಢ"), ("ण", "ಣ"),
    ("त", "ತ"), ("थ", "ಥ"), ("द", "ದ"), ("ध", "ಧ"), ("न", "ನ"),
    ("प", "ಪ"), ("फ", "ಫ"), ("ब", "ಬ"), ("भ", "ಭ"), ("म", "ಮ"),
    ("य", "ಯ"), ("र", "ರ"), ("ल", "ಲ"), ("व", "ವ"),
    ("श", "ಶ"), ("ष", "ಷ"), ("स", "ಸ"), ("ह", "ಹ"),
    ("ळ", "ಳ"),
    ("ा", "ಾ"), ("ि", "ಿ"), ("ी", "ೀ"), ("ु", "ು"), ("ू", "ೂ"), ("ृ", "ೃ"), ("ॄ", "ೄ"), ("ॢ", "ೢ"), ("ॣ", "ೣ"), ("े", "ೇ"), ("ै", "ೈ"), ("ो", "ೋ"), ("ौ", "ೌ"),
    ("्", "್"), ("ं", "ಂ"), ("ः", "ಃ"), ("ँ", "ಁ"), ("ऽ", "ಽ"),
    ("०", "೦"), ("१", "೧"), ("२", "೨"), ("३", "೩"), ("४", "೪"), ("५", "೫"), ("६", "೬"), ("७", "೭"), ("८", "೮"), ("९", "೯"),
];

const SPECIAL_COMBINATIONS: &[(&str, &str)] = &[("क्ष", "ಕ್ಷ"), ("ज्ञ", "ಜ್ಞ"), ("श्र", "ಶ್ರ")];

pub fn mapping() -> ScriptMapping {
    ScriptMapping::from_tables("kn", "Kannada", MAPPING, SPECIAL_COMBINATIONS).with_anusvara(
        AnusvaraRules::new("ಂ", &["ಙ್", "ಞ್", "ಣ್", "ನ್", "ಮ್"])
            .keep_before(&["ಙ", "ಞ", "ಣ", "ನ", "ಮ", "ಯ", "ರ", "ಲ", "ವ"])
            .collapse_final(true),
    )
}
