//! Table-driven sandhi equivalences for expanding search terms.
//!
//! This is not a sandhi grammar. It is a fixed list of surface rewrites that
//! approximate how a word's final sound changes when it meets the next word
//! (`रामः` → `रामो`, `तत्` → `तद्`) plus the anusvara / class-nasal
//! interchange. Every rule that applies produces one variant; rules are
//! never chained.
use ahash::AHashSet;

use tracing::warn;

use crate::chars::{self, ANUSVARA, VIRAMA};
use crate::utils;
use crate::variants::{Variant, VariantGenerator};

/// Where in a word a rule may fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RulePosition {
    /// Only at the end of a word.
    Final,
    /// At every occurrence inside the word.
    Anywhere,
}

/// A single rewrite `from` → `to`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SandhiRule {
    pub from: String,
    pub to: String,
    pub position: RulePosition,
}

impl SandhiRule {
    pub fn new(from: &str, to: &str, position: RulePosition) -> Self {
        Self {
            from: utils::nfc(from),
            to: utils::nfc(to),
            position,
        }
    }

    /// Label recorded on matches found through this rule.
    pub fn label(&self) -> String {
        format!("{}->{}", self.from, self.to)
    }

    fn apply(&self, word: &str) -> Option<String> {
        match self.position {
            RulePosition::Final => {
                let base = word.strip_suffix(self.from.as_str())?;
                if base.is_empty() {
                    return None;
                }
                Some(format!("{}{}", base, self.to))
            }
            RulePosition::Anywhere => {
                if !word.contains(self.from.as_str()) {
                    return None;
                }
                Some(word.replace(self.from.as_str(), &self.to))
            }
        }
    }
}

/// Ordered set of sandhi rewrites.
#[derive(Debug, Clone, Default)]
pub struct SandhiRules {
    rules: Vec<SandhiRule>,
    homorganic_nasals: bool,
}

impl SandhiRules {
    /// Create an empty rule set with homorganic nasal handling off.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a rule set from textual rules.
    ///
    /// Formats:
    /// - `"ः=ो"`  word-final, both directions
    /// - `"ः>श्"` word-final, one direction only
    /// - `"*म्=ं"` anywhere in the word (prefix `*`, combinable with `>`)
    ///
    /// Malformed entries are skipped.
    pub fn from_rules(rules: &[String]) -> Self {
        let mut sr = SandhiRules::new();

        for raw in rules.iter() {
            let text = raw.trim();
            let (position, body) = match text.strip_prefix('*') {
                Some(rest) => (RulePosition::Anywhere, rest),
                None => (RulePosition::Final, text),
            };

            if let Some((a, b)) = body.split_once('>') {
                let (a, b) = (a.trim(), b.trim());
                if !a.is_empty() && !b.is_empty() {
                    sr.add_rule_unidirectional(a, b, position);
                    continue;
                }
            } else if let Some((a, b)) = body.split_once('=') {
                let (a, b) = (a.trim(), b.trim());
                if !a.is_empty() && !b.is_empty() {
                    sr.add_rule(a, b, position);
                    continue;
                }
            }
            warn!(rule = %raw, "ignoring malformed sandhi rule");
        }

        sr
    }

    /// Enable anusvara ↔ class nasal + virama before stops.
    pub fn with_homorganic_nasals(mut self, enabled: bool) -> Self {
        self.homorganic_nasals = enabled;
        self
    }

    pub fn homorganic_nasals(&self) -> bool {
        self.homorganic_nasals
    }

    /// Add a rule in both directions.
    pub fn add_rule(&mut self, from: &str, to: &str, position: RulePosition) {
        self.rules.push(SandhiRule::new(from, to, position));
        self.rules.push(SandhiRule::new(to, from, position));
    }

    /// Add a rule in one direction only.
    pub fn add_rule_unidirectional(&mut self, from: &str, to: &str, position: RulePosition) {
        self.rules.push(SandhiRule::new(from, to, position));
    }

    pub fn rules(&self) -> &[SandhiRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty() && !self.homorganic_nasals
    }

    /// Alternatives for a single word, excluding the word itself.
    pub fn word_alternatives(&self, word: &str) -> Vec<Variant> {
        let word = utils::nfc(word);
        let mut seen: AHashSet<String> = AHashSet::new();
        seen.insert(word.clone());
        let mut out = Vec::new();

        for rule in self.rules.iter() {
            if let Some(text) = rule.apply(&word) {
                if seen.insert(text.clone()) {
                    out.push(Variant::new(text, rule.label()));
                }
            }
        }

        if self.homorganic_nasals {
            for v in homorganic_variants(&word) {
                if seen.insert(v.text.clone()) {
                    out.push(v);
                }
            }
        }

        out
    }

    /// Expand a (possibly multi-word) term word by word, returning at most
    /// `limit` variants (0 = no limit). The unchanged term is not included.
    pub fn expand_words(&self, term: &str, limit: usize) -> Vec<Variant> {
        let words: Vec<&str> = term.split_whitespace().collect();
        if words.is_empty() {
            return vec![];
        }

        // Start with one empty sequence and no rules applied.
        let mut results: Vec<(Vec<String>, Vec<String>)> = vec![(Vec::new(), Vec::new())];

        for word in words.iter() {
            let mut alts = vec![Variant::new(utils::nfc(word), String::new())];
            alts.extend(self.word_alternatives(word));

            let mut next = Vec::new();
            'outer: for (seq, labels) in results.iter() {
                for alt in alts.iter() {
                    let mut ns = seq.clone();
                    ns.push(alt.text.clone());
                    let mut nl = labels.clone();
                    if !alt.rule.is_empty() {
                        nl.push(alt.rule.clone());
                    }
                    next.push((ns, nl));
                    if limit > 0 && next.len() > limit {
                        break 'outer;
                    }
                }
            }
            results = next;
        }

        results
            .into_iter()
            .filter(|(_, labels)| !labels.is_empty())
            .map(|(seq, labels)| Variant::new(seq.join(" "), labels.join(",")))
            .take(if limit > 0 { limit } else { usize::MAX })
            .collect()
    }

    /// Whether `b` is reachable from `a` by one application of the rules.
    pub fn is_equivalent(&self, a: &str, b: &str) -> bool {
        let (a, b) = (utils::nfc(a), utils::nfc(b));
        a == b || self.word_alternatives(&a).iter().any(|v| v.text == b)
    }
}

impl VariantGenerator for SandhiRules {
    fn variations(&self, term: &str) -> Vec<Variant> {
        self.expand_words(term, 64)
    }
}

/// `शंकर` ↔ `शङ्कर`: anusvara before a stop is read as that stop's nasal.
fn homorganic_variants(word: &str) -> Vec<Variant> {
    let chars: Vec<char> = word.chars().collect();
    let mut out = Vec::new();

    // anusvara -> nasal + virama
    let mut expanded = String::new();
    let mut changed = false;
    for (i, &c) in chars.iter().enumerate() {
        if c == ANUSVARA {
            if let Some(nasal) = chars.get(i + 1).and_then(|&n| chars::class_nasal(n)) {
                expanded.push(nasal);
                expanded.push(VIRAMA);
                changed = true;
                continue;
            }
        }
        expanded.push(c);
    }
    if changed {
        out.push(Variant::new(expanded, "homorganic:ं->nasal"));
    }

    // nasal + virama -> anusvara, only before a stop of the same class
    let mut collapsed = String::new();
    let mut changed = false;
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if chars::is_nasal(c) && chars.get(i + 1) == Some(&VIRAMA) {
            if let Some(&next) = chars.get(i + 2) {
                if chars::class_nasal(next) == Some(c) {
                    collapsed.push(ANUSVARA);
                    changed = true;
                    i += 2;
                    continue;
                }
            }
        }
        collapsed.push(c);
        i += 1;
    }
    if changed {
        out.push(Variant::new(collapsed, "homorganic:nasal->ं"));
    }

    out
}
