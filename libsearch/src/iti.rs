// libsearch/src/iti.rs
//
// Sandhi of a word with the quotative particle इति.
//
// A commentary quotes a word of its source by appending इति, and the two
// fuse: नारायण + इति → नारायणेति, हरि + इति → हरीति, रामम् + इति → राममिति.
// The tables below list the fused suffixes in both directions. They are
// fixed data, matched by plain string suffix tests.

use once_cell::sync::Lazy;

/// Fused iti suffix → word endings it may have come from. `""` is the bare
/// stem.
const REVERSE: &[(&str, &[&str])] = &[
    // vowel endings
    ("ेति", &["", "अ", "आ"]),
    ("ीति", &["इ", "ई"]),
    ("ूति", &["उ", "ऊ"]),
    ("वीति", &["उ", "ऊ"]),
    ("विति", &["उ", "ऊ"]),
    ("रिति", &["ऋ", "ॠ"]),
    ("लिति", &["ऌ", "ॡ"]),
    ("ैति", &["ए", "ै"]),
    ("ावीति", &["ओ", "औ"]),
    ("ाविति", &["ओ", "औ"]),
    ("ोऽति", &["ओ"]),
    // singular case endings
    ("येति", &["य", "या", "ाय"]),
    ("ेणेति", &["ेण"]),
    ("ादिति", &["ात्"]),
    ("स्येति", &["स्य"]),
    ("मिति", &["म्", "ाम्"]),
    ("यामिति", &["याम्"]),
    // dual
    ("ौति", &["औ"]),
    ("ोरिति", &["योः"]),
    ("भ्यामिति", &["भ्याम्"]),
    // plural
    ("ानिति", &["ान्"]),
    ("ैरिति", &["ैः"]),
    ("भिरिति", &["भिः"]),
    ("ेभ्यरिति", &["ेभ्यः"]),
    ("ानामिति", &["ानाम्"]),
    ("णामिति", &["णाम्"]),
    ("ष्विति", &["ेषु"]),
    ("स्विति", &["सु"]),
    ("यारिति", &["याः"]),
    // visarga kept or dropped before a separate इति
    ("ाः इति", &["ाः"]),
    ("ा इति", &["ाः"]),
];

/// Word ending → fused iti suffix.
const FORWARD: &[(&str, &str)] = &[
    ("", "ेति"),
    ("अ", "ेति"),
    ("आ", "ेति"),
    ("इ", "ीति"),
    ("ई", "ीति"),
    ("उ", "वीति"),
    ("ऊ", "वीति"),
    ("ऋ", "रिति"),
    ("ॠ", "रिति"),
    ("ऌ", "लिति"),
    ("ॡ", "लिति"),
    ("ए", "ैति"),
    ("े", "ैति"),
    ("ऐ", "ैति"),
    ("ै", "ैति"),
    ("ओ", "ावीति"),
    ("औ", "ौति"),
    ("य", "येति"),
    ("या", "येति"),
    ("ाय", "ायेति"),
    ("ेण", "ेणेति"),
    ("ात्", "ादिति"),
    ("स्य", "स्येति"),
    ("म्", "मिति"),
    ("ाम्", "मिति"),
    ("याम्", "यामिति"),
    ("योः", "ोरिति"),
    ("भ्याम्", "भ्यामिति"),
    ("ान्", "ानिति"),
    ("ैः", "ैरिति"),
    ("भिः", "भिरिति"),
    ("ेभ्यः", "ेभ्यरिति"),
    ("ानाम्", "ानामिति"),
    ("णाम्", "णामिति"),
    ("ेषु", "ष्विति"),
    ("सु", "स्विति"),
    ("याः", "यारिति"),
    ("ाः", "ाः इति"),
];

static STANDARD: Lazy<SandhiMap> = Lazy::new(|| SandhiMap::new(REVERSE, FORWARD));

/// The iti sandhi tables, each kept sorted longest pattern first.
///
/// Sorting is stable, so patterns of equal length keep table order.
#[derive(Debug, Clone)]
pub struct SandhiMap {
    reverse: Vec<(&'static str, &'static [&'static str])>,
    forward: Vec<(&'static str, &'static str)>,
}

impl SandhiMap {
    pub fn new(
        reverse: &[(&'static str, &'static [&'static str])],
        forward: &[(&'static str, &'static str)],
    ) -> Self {
        let mut reverse = reverse.to_vec();
        let mut forward = forward.to_vec();
        reverse.sort_by_key(|(k, _)| std::cmp::Reverse(k.chars().count()));
        forward.sort_by_key(|(k, _)| std::cmp::Reverse(k.chars().count()));
        Self { reverse, forward }
    }

    /// Shared instance holding the standard tables.
    pub fn standard() -> &'static SandhiMap {
        &STANDARD
    }

    /// `(fused suffix, source endings)`, longest suffix first.
    pub fn reverse_patterns(&self) -> &[(&'static str, &'static [&'static str])] {
        &self.reverse
    }

    /// `(word ending, fused suffix)`, longest ending first.
    pub fn forward_patterns(&self) -> &[(&'static str, &'static str)] {
        &self.forward
    }

    /// Source endings for a fused suffix.
    pub fn endings_for(&self, suffix: &str) -> Option<&'static [&'static str]> {
        self.reverse
            .iter()
            .find(|(k, _)| *k == suffix)
            .map(|(_, v)| *v)
    }

    /// Fused suffix for a word ending.
    pub fn suffix_for(&self, ending: &str) -> Option<&'static str> {
        self.forward
            .iter()
            .find(|(k, _)| *k == ending)
            .map(|(_, v)| *v)
    }

    /// Longest fused suffix `word` ends with.
    pub fn longest_suffix(&self, word: &str) -> Option<(&'static str, &'static [&'static str])> {
        self.reverse
            .iter()
            .find(|(k, _)| word.ends_with(k))
            .copied()
    }
}

impl Default for SandhiMap {
    fn default() -> Self {
        STANDARD.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_sizes() {
        let map = SandhiMap::standard();
        assert_eq!(map.reverse_patterns().len(), 31);
        assert_eq!(map.forward_patterns().len(), 38);
    }

    #[test]
    fn patterns_sorted_longest_first() {
        let map = SandhiMap::standard();
        let lens: Vec<usize> = map
            .reverse_patterns()
            .iter()
            .map(|(k, _)| k.chars().count())
            .collect();
        assert!(lens.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(map.forward_patterns().last().map(|(k, _)| *k), Some(""));
    }

    #[test]
    fn duplicate_dual_ending_resolves_to_auti() {
        assert_eq!(SandhiMap::standard().suffix_for("औ"), Some("ौति"));
        assert_eq!(SandhiMap::standard().suffix_for("ओ"), Some("ावीति"));
    }

    #[test]
    fn longest_suffix_wins() {
        let map = SandhiMap::standard();
        assert_eq!(map.longest_suffix("रामायेति").map(|(k, _)| k), Some("येति"));
        assert_eq!(map.longest_suffix("देवानामिति").map(|(k, _)| k), Some("ानामिति"));
        assert_eq!(map.endings_for("मिति"), Some(&["म्", "ाम्"][..]));
        assert!(map.longest_suffix("राम").is_none());
    }
}
