//! Gujarati script.

use crate::mapping::ScriptMapping;

const MAPPING: &[(&str, &str)] = &[
    ("ॐ", "ૐ"),
    ("अ", "અ"), ("आ", "આ"), ("इ", "ઇ"), ("ई", "ઈ"), ("उ", "ઉ"), ("ऊ", "ઊ"), ("ऋ", "ઋ"), ("ॠ", "ૠ"), ("ऌ", "ઌ"), ("ॡ", "ૡ"), ("ए", "એ"), ("ऐ", "ઐ"), ("ओ", "ઓ"), ("औ", "ઔ"),
    ("क", "ક"), ("ख", "ખ"), ("ग", "ગ"), ("घ", "ઘ"), ("ङ", "ઙ"),
    ("च", "ચ"), ("छ", "છ"), ("ज", "જ"), ("झ", "ઝ"), ("ञ", "ઞ"),
    ("ट", "ટ"), ("ठ", "ઠ"), ("ड", "ડ"), ("ढ", "ઢ"), ("ण", "ણ"),
    ("त", "ત"), ("थ", "થ"), ("द", "દ"), ("ध", "ધ"), ("न", "ન"),
    ("प", "પ"), ("फ", "ફ"), ("ब", "બ"), ("भ", "ભ"), ("म", "મ"),
    ("य", "ય"), ("र", "ર"), ("ल", "લ"), ("व", "વ"),
    ("श", "શ"), ("ष", "ષ"), ("स", "સ"), ("ह", "હ"),
    ("ळ", "ળ"),
    ("ा", "ા"), ("ि", "િ"), ("ी", "ી"), ("ु", "ુ"), ("ू", "ૂ"), ("ृ", "ૃ"), ("ॄ", "ૄ"), ("ॢ", "ૢ"), ("ॣ", "ૣ"), ("े", "ે"), ("ै", "ૈ"), ("ो", "ો"), ("ौ", "ૌ"),
    ("्", "્"), ("ं", "ં"), ("ः", "ઃ"), ("ँ", "ઁ"), ("ऽ", "ઽ"),
    ("०", "૦"), ("१", "૧"), ("२", "૨"), ("३", "૩"), ("४", "૪"), ("५", "૫"), ("६", "૬"), ("७", "૭"), ("८", "૮"), ("९", "૯"),
];

const SPECIAL_COMBINATIONS: &[(&str, &str)] = &[("क्ष", "ક્ષ"), ("ज्ञ", "જ્ઞ"), ("श्र", "શ્ર")];

pub fn mapping() -> ScriptMapping {
    ScriptMapping::from_tables("gu", "Gujarati", MAPPING, SPECIAL_COMBINATIONS)
}
