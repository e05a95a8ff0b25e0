//! Telugu script.

use crate::mapping::{AnusvaraRules, ScriptMapping};

const MAPPING: &[(&str, &str)] = &[
    ("ॐ", "ఓం"),
    ("अ", "అ"), ("आ", "ఆ"), ("इ", "ఇ"), ("ई", "ఈ"), ("उ", "ఉ"), ("ऊ", "ఊ"), ("ऋ", "ఋ"), ("ॠ", "ౠ"), ("ऌ", "ఌ"), ("ॡ", "ౡ"), ("ए", "ఏ"), ("ऐ", "ఐ"), ("ओ", "ఓ"), ("औ", "ఔ"),
    ("क", "క"), ("ख", "ఖ"), ("ग", "గ"), ("घ", "ఘ"), ("ङ", "ఙ"),
    ("च", "చ"), ("छ", "ఛ"), ("ज", "జ"), ("झ", "ఝ"), ("ञ", "ఞ"),
    ("ट", "ట"), ("ठ", "ఠ"), ("ड", "డ"), ("ढ", "ఢ"), ("ण", "ణ"),
    ("त", "త"), ("थ", "థ"), ("द", "ద"), ("ध", "ధ"), ("न", "న"),
    ("प", "ప"), ("फ", "ఫ"), ("ब", "బ"), ("भ", "భ"), ("म", "మ"),
    ("य", "య"), ("र", "ర"), ("ल", "ల"), ("व", "వ"),
    ("श", "శ"), ("ष", "ష"), ("स", "స"), ("ह", "హ"),
    ("ळ", "ళ"),
    ("ा", "ా"), ("ि", "ి"), ("ी", "ీ"), ("ु", "ు"), ("ू", "ూ"), ("ृ", "ృ"), ("ॄ", "ౄ"), ("ॢ", "ౢ"), ("ॣ", "ౣ"), ("े", "ే"), ("ै", "ై"), ("ो", "ో"), ("ौ", "ౌ"),
    ("्", "్"), ("ं", "ం"), ("ः", "ః"), ("ँ", "ఁ"), ("ऽ", "ఽ"),
    ("०", "౦"), ("१", "౧"), ("२", "౨"), ("३", "౩"), ("४", "౪"), ("५", "౫"), ("६", "౬"), ("७", "౭"), ("८", "౮"), ("९", "౯"),
];

const SPECIAL_COMBINATIONS: &[(&str, &str)] = &[("क्ष", "క్ష"), ("ज्ञ", "జ్ఞ"), ("श्र", "శ్ర")];

pub fn mapping() -> ScriptMapping {
    ScriptMapping::from_tables("te", "Telugu", MAPPING, SPECIAL_COMBINATIONS).with_anusvara(
        AnusvaraRules::new("ం", &["ఙ్", "ఞ్", "ణ్", "న్", "మ్"])
            .keep_before(&["ఙ", "ఞ", "ణ", "న", "మ", "య", "ర", "ల", "వ"])
            .collapse_final(true),
    )
}
