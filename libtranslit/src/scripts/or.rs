//! Odia script.

use crate::mapping::ScriptMapping;

const MAPPING: &[(&str, &str)] = &[
    ("ॐ", "ଓଁ"),
    ("अ", "ଅ"), ("आ", "ଆ"), ("इ", "ଇ"), ("ई", "ଈ"), ("उ", "ଉ"), ("ऊ", "ଊ"), ("ऋ", "ଋ"), ("ॠ", "ୠ"), ("ऌ", "ଌ"), ("ॡ", "ୡ"), ("ए", "ଏ"), ("ऐ", "ଐ"), ("ओ", "ଓ"), ("औ", "ଔ"),
    ("क", "କ"), ("ख", "ଖ"), ("ग", "ଗ"), ("घ", "ଘ"), ("ङ", "ଙ"),
    ("च", "ଚ"), ("छ", "ଛ"), ("ज", "ଜ"), ("झ", "ଝ"), ("ञ", "ଞ"),
    ("ट", "ଟ"), ("ठ", "ଠ"), ("ड", "ଡ"), ("ढ", "ଢ"), ("ण", "ଣ"),
    ("त", "ତ"), ("थ", "ଥ"), ("द", "ଦ"), ("ध", "ଧ"), ("न", "ନ"),
    ("प", "ପ"), ("फ", "ଫ"), ("ब", "ବ"), ("भ", "ଭ"), ("म", "ମ"),
    ("य", "ଯ"), ("र", "ର"), ("ल", "ଲ"), ("व", "ୱ"),
    ("श", "ଶ"), ("ष", "ଷ"), ("स", "ସ"), ("ह", "ହ"),
    ("ळ", "ଳ"),
    ("ा", "ା"), ("ि", "ି"), ("ी", "ୀ"), ("ु", "ୁ"), ("ू", "ୂ"), ("ृ", "ୃ"), ("ॄ", "ୄ"), ("ॢ", "ୢ"), ("ॣ", "ୣ"), ("े", "େ"), ("ै", "ୈ"), ("ो", "ୋ"), ("ौ", "ୌ"),
    ("्", "୍"), ("ं", "ଂ"), ("ः", "ଃ"), ("ँ", "ଁ"), ("ऽ", "ଽ"),
    ("०", "୦"), ("१", "୧"), ("२", "୨"), ("३", "୩"), ("४", "୪"), ("५", "୫"), ("६", "୬"), ("७", "୭"), ("८", "୮"), ("९", "୯"),
];

const SPECIAL_COMBINATIONS: &[(&str, &str)] = &[("क्ष", "କ୍ଷ"), ("ज्ञ", "ଜ୍ଞ"), ("श्र", "ଶ୍ର")];

pub fn mapping() -> ScriptMapping {
    ScriptMapping::from_tables("or", "Odia", MAPPING, SPECIAL_COMBINATIONS)
}
