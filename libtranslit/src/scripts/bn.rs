//! Bengali script.

use crate::mapping::{AnusvaraRules, ScriptMapping};

const MAPPING: &[(&str, &str)] = &[
    ("ॐ", "ওঁ"),
    ("अ", "অ"), ("आ", "আ"), ("इ", "ই"), ("ई", "ঈ"), ("उ", "উ"), ("ऊ", "ঊ"), ("ऋ", "ঋ"), ("ॠ", "ৠ"), ("ऌ", "ঌ"), ("ॡ", "ৡ"), ("ए", "এ"), ("ऐ", "ঐ"), ("ओ", "ও"), ("औ", "ঔ"),
    ("क", "ক"), ("ख", "খ"), ("ग", "গ"), ("घ", "ঘ"), ("ङ", "ঙ"),
    ("च", "চ"), ("छ", "ছ"), ("ज", "জ"), ("झ", "ঝ"), ("ञ", "ঞ"),
    ("ट", "ট"), ("ठ", "ঠ"), ("ड", "ড"), ("ढ", "ঢ"), ("ण", "ণ"),
    ("त", "ত"), ("थ", "থ"), ("द", "দ"), ("ध", "ধ"), ("न", "ন"),
    ("प", "প"), ("फ", "ফ"), ("ब", "ব"), ("भ", "ভ"), ("म", "ম"),
    ("य", "য"), ("र", "র"), ("ल", "ল"), ("व", "ব"),
    ("श", "শ"), ("ष", "ষ"), ("स", "স"), ("ह", "হ"),
    ("ळ", "ল"),
    ("ा", "া"), ("ि", "ি"), ("ी", "ী"), ("ु", "ু"), ("ू", "ূ"), ("ृ", "ৃ"), ("ॄ", "ৄ"), ("ॢ", "ৢ"), ("ॣ", "ৣ"), ("े", "ে"), ("ै", "ৈ"), ("ो", "ো"), ("ौ", "ৌ"),
    ("्", "্"), ("ं", "ং"), ("ः", "ঃ"), ("ँ", "ঁ"), ("ऽ", "ঽ"),
    ("०", "০"), ("१", "১"), ("२", "২"), ("३", "৩"), ("४", "৪"), ("५", "৫"), ("६", "৬"), ("७", "৭"), ("८", "৮"), ("९", "৯"),
];

const SPECIAL_COMBINATIONS: &[(&str, &str)] = &[("क्ष", "ক্ষ"), ("ज्ञ", "জ্ঞ"), ("श्र", "শ্র")];

pub fn mapping() -> ScriptMapping {
    ScriptMapping::from_tables("bn", "Bengali", MAPPING, SPECIAL_COMBINATIONS).with_anusvara(
        AnusvaraRules::new("ং", &["ঙ্", "ঞ্", "ণ্", "ন্", "ম্"])
            .keep_before(&["ঙ", "ঞ", "ণ", "ন", "ম", "য", "র", "ল", "ব"])
            .collapse_final(true),
    )
}
