//! Gurmukhi script.
//!
//! Gurmukhi has no vocalic r/l or retroflex sibilant; those are spelled out
//! with ਰਿ / ਲ੍ਰਿ and ਸ਼.

use crate::mapping::ScriptMapping;

const MAPPING: &[(&str, &str)] = &[
    ("ॐ", "ਓਂ"),
    ("अ", "ਅ"), ("आ", "ਆ"), ("इ", "ਇ"), ("ई", "ਈ"), ("उ", "ਉ"), ("ऊ", "ਊ"), ("ऋ", "ਰਿ"), ("ॠ", "ਰੀ"), ("ऌ", "ਲ੍ਰਿ"), ("ॡ", "ਲ੍ਰੀ"), ("ए", "ਏ"), ("ऐ", "ਐ"), ("ओ", "ਓ"), ("औ", "ਔ"),
    ("क", "ਕ"), ("ख", "ਖ"), ("ग", "ਗ"), ("घ", "ਘ"), ("ङ", "ਙ"),
    ("च", "ਚ"), ("छ", "ਛ"), ("ज", "ਜ"), ("झ", "ਝ"), ("ञ", "ਞ"),
    ("ट", "ਟ"), ("ठ", "ਠ"), ("ड", "ਡ"), ("ढ", "ਢ"), ("ण", "ਣ"),
    ("त", "ਤ"), ("थ", "ਥ"), ("द", "ਦ"), ("ध", "ਧ"), ("न", "ਨ"),
    ("प", "ਪ"), ("फ", "ਫ"), ("ब", "ਬ"), ("भ", "ਭ"), ("म", "ਮ"),
    ("य", "ਯ"), ("र", "ਰ"), ("ल", "ਲ"), ("व", "ਵ"),
    ("श", "ਸ਼"), ("ष", "ਸ਼"), ("स", "ਸ"), ("ह", "ਹ"),
    ("ळ", "ਲ਼"),
    ("ा", "ਾ"), ("ि", "ਿ"), ("ी", "ੀ"), ("ु", "ੁ"), ("ू", "ੂ"), ("ृ", "੍ਰਿ"), ("ॄ", "੍ਰੀ"), ("ॢ", "੍ਲ੍ਰਿ"), ("ॣ", "੍ਲ੍ਰੀ"), ("े", "ੇ"), ("ै", "ੈ"), ("ो", "ੋ"), ("ौ", "ੌ"),
    ("्", "੍"), ("ं", "ਂ"), ("ः", "ਃ"), ("ँ", "ਁ"),
    ("०", "੦"), ("१", "੧"), ("२", "੨"), ("३", "੩"), ("४", "੪"), ("५", "੫"), ("६", "੬"), ("७", "੭"), ("८", "੮"), ("९", "੯"),
];

const SPECIAL_COMBINATIONS: &[(&str, &str)] = &[("क्ष", "ਕ੍ਸ਼"), ("ज्ञ", "ਜ੍ਞ"), ("श्र", "ਸ਼੍ਰ")];

pub fn mapping() -> ScriptMapping {
    ScriptMapping::from_tables("pa", "Gurmukhi", MAPPING, SPECIAL_COMBINATIONS)
}
