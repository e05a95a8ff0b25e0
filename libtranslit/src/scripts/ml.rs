//! Malayalam script.

use crate::mapping::{AnusvaraRules, ScriptMapping};

const MAPPING: &[(&str, &str)] = &[
    ("ॐ", "ഓം"),
    ("अ", "അ"), ("आ", "ആ"), ("इ", "ഇ"), ("ई", "ഈ"), ("उ", "ഉ"), ("ऊ", "ഊ"), ("ऋ", "ഋ"), ("ॠ", "ൠ"), ("ऌ", "ഌ"), ("ॡ", "ൡ"), ("ए", "ഏ"), ("ऐ", "ഐ"), ("ओ", "ഓ"), ("औ", "ഔ"),
    ("क", "ക"), ("ख", "ഖ"), ("ग", "ഗ"), ("घ", "ഘ"), ("ङ", "ങ"),
    ("च", "ച"), ("छ", "ഛ"), ("ज", "ജ"), ("झ", "ഝ"), ("ञ", "ഞ"),
    ("ट", "ട"), ("ठ", "ഠ"), ("ड", "ഡ"), ("ढ", "ഢ"), ("ण", "ണ"),
    ("त", "ത"), ("थ", "ഥ"), ("द", "ദ"), ("ध", "ധ"), ("न", "ന"),
    ("प", "പ"), ("फ", "ഫ"), ("ब", "ബ"), ("भ", "ഭ"), ("म", "മ"),
    ("य", "യ"), ("र", "ര"), ("ल", "ല"), ("व", "വ"),
    ("श", "ശ"), ("ष", "ഷ"), ("स", "സ"), ("ह", "ഹ"),
    ("ळ", "ള"),
    ("ा", "ാ"), ("ि", "ി"), ("ी", "ീ"), ("ु", "ു"), ("ू", "ൂ"), ("ृ", "ൃ"), ("ॄ", "ൄ"), ("ॢ", "ൢ"), ("ॣ", "ൣ"), ("े", "േ"), ("ै", "ൈ"), ("ो", "ോ"), ("ौ", "ൌ"),
    ("्", "്"), ("ं", "ം"), ("ः", "ഃ"), ("ँ", "ഁ"), ("ऽ", "ഽ"),
    ("०", "൦"), ("१", "൧"), ("२", "൨"), ("३", "൩"), ("४", "൪"), ("५", "൫"), ("६", "൬"), ("७", "൭"), ("८", "൮"), ("९", "൯"),
];

const SPECIAL_COMBINATIONS: &[(&str, &str)] = &[("क्ष", "ക്ഷ"), ("ज्ञ", "ജ്ഞ"), ("श्र", "ശ്ര")];

pub fn mapping() -> ScriptMapping {
    ScriptMapping::from_tables("ml", "Malayalam", MAPPING, SPECIAL_COMBINATIONS).with_anusvara(
        AnusvaraRules::new("ം", &["ങ്", "ഞ്", "ണ്", "ന്", "മ്"])
            .keep_before(&["ങ", "ഞ", "ണ", "ന", "മ", "യ", "ര", "ല", "വ"])
            .collapse_final(true),
    )
}
