//! Tamil script (Grantha-extended).
//!
//! Tamil writes one letter per stop series, so aspirated and voiced stops
//! collapse onto the plain letter. Anusvara is written as ம்.

use crate::mapping::ScriptMapping;

const MAPPING: &[(&str, &str)] = &[
    ("ॐ", "ௐ"),
    ("अ", "அ"), ("आ", "ஆ"), ("इ", "இ"), ("ई", "ஈ"), ("उ", "உ"), ("ऊ", "ஊ"), ("ऋ", "ரு"), ("ॠ", "ரூ"), ("ऌ", "லு"), ("ॡ", "லூ"), ("ए", "ஏ"), ("ऐ", "ஐ"), ("ओ", "ஓ"), ("औ", "ஔ"),
    ("क", "க"), ("ख", "க"), ("ग", "க"), ("घ", "க"), ("ङ", "ங"),
    ("च", "ச"), ("छ", "ச"), ("ज", "ஜ"), ("झ", "ஜ"), ("ञ", "ஞ"),
    ("ट", "ட"), ("ठ", "ட"), ("ड", "ட"), ("ढ", "ட"), ("ण", "ண"),
    ("त", "த"), ("थ", "த"), ("द", "த"), ("ध", "த"), ("न", "ந"),
    ("प", "ப"), ("फ", "ப"), ("ब", "ப"), ("भ", "ப"), ("म", "ம"),
    ("य", "ய"), ("र", "ர"), ("ल", "ல"), ("व", "வ"),
    ("श", "ஶ"), ("ष", "ஷ"), ("स", "ஸ"), ("ह", "ஹ"),
    ("ळ", "ள"),
    ("ा", "ா"), ("ि", "ி"), ("ी", "ீ"), ("ु", "ு"), ("ू", "ூ"), ("ृ", "்ரு"), ("ॄ", "்ரூ"), ("ॢ", "்லு"), ("ॣ", "்லூ"), ("े", "ே"), ("ै", "ை"), ("ो", "ோ"), ("ौ", "ௌ"),
    ("्", "்"), ("ं", "ம்"), ("ः", "ஃ"), ("ँ", "ம்"),
    ("०", "௦"), ("१", "௧"), ("२", "௨"), ("३", "௩"), ("४", "௪"), ("५", "௫"), ("६", "௬"), ("७", "௭"), ("८", "௮"), ("९", "௯"),
];

const SPECIAL_COMBINATIONS: &[(&str, &str)] = &[("क्ष", "க்ஷ"), ("ज्ञ", "ஜ்ஞ"), ("श्र", "ஶ்ர")];

pub fn mapping() -> ScriptMapping {
    ScriptMapping::from_tables("ta", "Tamil", MAPPING, SPECIAL_COMBINATIONS)
}
