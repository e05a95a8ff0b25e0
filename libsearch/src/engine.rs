// libsearch/src/engine.rs
//
// Search engine combining direct, sandhi-aware and quotation (pratika
// grahana) matching over NFC-normalized Devanagari text.
//
// Generated term variants are cached per engine in an LRU keyed by the
// variant family and the term, so repeated searches for the same term (one
// per page of a commentary) reuse them.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use libsanskrit_core::{
    chars, utils, MatchSpan, MatchType, SandhiRules, SearchResults, Variant, VariantGenerator,
};

use crate::config::SearchConfig;
use crate::highlight::{highlight_with, SpanMarker};
use crate::iti::SandhiMap;
use crate::variants::{phonetic_variants, pratika_variations};

/// Cap on variants taken from the sandhi generator for multi-word terms.
const SANDHI_VARIANT_LIMIT: usize = 64;

const DEFAULT_CACHE_CAPACITY: NonZeroUsize = match NonZeroUsize::new(1000) {
    Some(n) => n,
    None => panic!("cache capacity must be non-zero"),
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum VariantKind {
    Sandhi,
    Pratika,
}

/// A text to search, with an id and free-form metadata passed through to
/// its results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub metadata: serde_json::Map<String, Value>,
}

impl Document {
    pub fn new(id: &str, text: &str) -> Self {
        Self {
            id: id.to_string(),
            text: text.to_string(),
            metadata: serde_json::Map::new(),
        }
    }
}

/// Results for one document of `search_multiple`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentResults {
    pub id: String,
    pub metadata: serde_json::Map<String, Value>,
    #[serde(flatten)]
    pub results: SearchResults,
}

/// NFC text with its chars, and the chars compared against (lowercased
/// unless the search is case sensitive). Both vectors have equal length.
struct Haystack {
    chars: Vec<char>,
    folded: Vec<char>,
}

impl Haystack {
    fn new(text: &str, case_sensitive: bool) -> Self {
        let chars: Vec<char> = utils::nfc(text).chars().collect();
        let folded = if case_sensitive {
            chars.clone()
        } else {
            chars.iter().map(|&c| utils::fold_char(c)).collect()
        };
        Self { chars, folded }
    }

    /// Next occurrence of `needle` at or after `from`.
    fn find(&self, needle: &[char], from: usize) -> Option<usize> {
        if needle.is_empty() || needle.len() > self.folded.len() {
            return None;
        }
        (from..=self.folded.len() - needle.len()).find(|&i| self.folded[i..i + needle.len()] == *needle)
    }

    fn is_boundary_before(&self, pos: usize) -> bool {
        pos == 0 || chars::is_word_boundary(self.chars[pos - 1])
    }

    fn is_boundary_after(&self, end: usize) -> bool {
        self.chars.get(end).map_or(true, |&c| chars::is_word_boundary(c))
    }
}

/// Sanskrit-aware search engine.
pub struct SanskritSearch {
    config: SearchConfig,
    generator: Option<Box<dyn VariantGenerator>>,
    iti: &'static SandhiMap,
    cache: RefCell<lru::LruCache<(VariantKind, String), Vec<Variant>>>,
    cache_hits: RefCell<usize>,
    cache_misses: RefCell<usize>,
}

impl SanskritSearch {
    /// Create an engine. Unless `enable_sandhi` is off, sandhi variants come
    /// from `SandhiRules` built from the configured rule strings.
    pub fn new(config: SearchConfig) -> Self {
        let generator: Option<Box<dyn VariantGenerator>> = config.enable_sandhi.then(|| {
            Box::new(
                SandhiRules::from_rules(&config.sandhi_rules)
                    .with_homorganic_nasals(config.homorganic_nasals),
            ) as Box<dyn VariantGenerator>
        });
        let capacity = NonZeroUsize::new(config.base.max_cache_size).unwrap_or(DEFAULT_CACHE_CAPACITY);
        Self {
            config,
            generator,
            iti: SandhiMap::standard(),
            cache: RefCell::new(lru::LruCache::new(capacity)),
            cache_hits: RefCell::new(0),
            cache_misses: RefCell::new(0),
        }
    }

    /// Replace the sandhi variant generator.
    pub fn with_generator(mut self, generator: Box<dyn VariantGenerator>) -> Self {
        self.set_generator(Some(generator));
        self
    }

    /// Set or remove the sandhi variant generator. Cached variants are
    /// dropped.
    pub fn set_generator(&mut self, generator: Option<Box<dyn VariantGenerator>>) {
        self.generator = generator;
        self.clear_cache();
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    fn haystack(&self, text: &str) -> Haystack {
        Haystack::new(text, self.config.base.case_sensitive)
    }

    fn fold(&self, term: &str) -> Vec<char> {
        if self.config.base.case_sensitive {
            term.chars().collect()
        } else {
            term.chars().map(utils::fold_char).collect()
        }
    }

    /// NFC term and haystack, or `None` when either is empty.
    fn prepare(&self, term: &str, text: &str) -> Option<(String, Haystack)> {
        let term = utils::nfc(term);
        if term.is_empty() || text.is_empty() {
            return None;
        }
        Some((term, self.haystack(text)))
    }

    fn cached_variants<F>(&self, kind: VariantKind, term: &str, generate: F) -> Vec<Variant>
    where
        F: FnOnce() -> Vec<Variant>,
    {
        let key = (kind, term.to_string());
        if let Some(cached) = self.cache.borrow_mut().get(&key) {
            *self.cache_hits.borrow_mut() += 1;
            return cached.clone();
        }
        *self.cache_misses.borrow_mut() += 1;

        let variants = generate();
        self.cache.borrow_mut().put(key, variants.clone());
        variants
    }

    fn sandhi_variants(&self, term: &str) -> Vec<Variant> {
        let Some(generator) = self.generator.as_ref() else {
            return Vec::new();
        };
        self.cached_variants(VariantKind::Sandhi, term, || {
            let mut variants = generator.variations(term);
            variants.retain(|v| v.text != term && !v.text.is_empty());
            variants.truncate(SANDHI_VARIANT_LIMIT);
            variants
        })
    }

    fn pratika_variants(&self, term: &str) -> Vec<Variant> {
        self.cached_variants(VariantKind::Pratika, term, || pratika_variations(self.iti, term))
    }

    /// Substring scan. A term that does not end in a combining mark is
    /// extended over the marks that follow it in the text (`नारायण` matches
    /// `नारायणं` whole); scanning resumes after the term, not the extension.
    fn direct_in(&self, term: &str, hay: &Haystack) -> Vec<MatchSpan> {
        let needle = self.fold(term);
        let extend = !chars::ends_with_combining_mark(term);
        let context = self.config.base.context_length;

        let mut matches = Vec::new();
        let mut from = 0;
        while let Some(pos) = hay.find(&needle, from) {
            let mut length = needle.len();
            if extend {
                while hay
                    .chars
                    .get(pos + length)
                    .is_some_and(|&c| chars::is_combining_mark(c))
                {
                    length += 1;
                }
            }
            matches.push(MatchSpan::new(&hay.chars, pos, length, MatchType::Direct, context));
            from = pos + needle.len();
        }
        matches
    }

    /// Direct matches of `term` in `text`, in text order.
    pub fn direct_search(&self, term: &str, text: &str) -> Vec<MatchSpan> {
        match self.prepare(term, text) {
            Some((term, hay)) => self.direct_in(&term, &hay),
            None => Vec::new(),
        }
    }

    /// Whole-word matches of `term` or one of its spellings (`म्`/`ं`,
    /// `ः`/`स्`). Boundaries are whitespace, dandas and common ASCII
    /// punctuation; they are not part of the match. Not truncated.
    pub fn exact_word_search(&self, term: &str, text: &str) -> SearchResults {
        let Some((term, hay)) = self.prepare(term, text) else {
            return SearchResults::empty();
        };
        let context = self.config.base.context_length;
        let mut results = SearchResults::for_term(&term);

        for variant in phonetic_variants(&term) {
            let needle = self.fold(&variant);
            let mut from = 0;
            while let Some(pos) = hay.find(&needle, from) {
                let end = pos + needle.len();
                if hay.is_boundary_before(pos) && hay.is_boundary_after(end) {
                    let mut span = MatchSpan::new(&hay.chars, pos, needle.len(), MatchType::Exact, context);
                    if variant != term {
                        span.variant = Some(variant.clone());
                    }
                    results.push_unique_position(span);
                }
                from = pos + 1;
            }
        }

        results.finalize(0);
        debug!(term = %term, count = results.count, "exact word search");
        results
    }

    fn sandhi_in(&self, term: &str, hay: &Haystack) -> Vec<MatchSpan> {
        let mut matches = Vec::new();
        for variant in self.sandhi_variants(term) {
            for mut span in self.direct_in(&variant.text, hay) {
                span.match_type = MatchType::Sandhi;
                span.sandhi_rule = Some(variant.rule.clone());
                span.original_term = Some(term.to_string());
                matches.push(span);
            }
        }
        matches
    }

    /// Direct matches of the sandhi variants of `term`. Empty without a
    /// generator.
    pub fn sandhi_aware_search(&self, term: &str, text: &str) -> Vec<MatchSpan> {
        match self.prepare(term, text) {
            Some((term, hay)) => self.sandhi_in(&term, &hay),
            None => Vec::new(),
        }
    }

    fn pratika_in(&self, term: &str, hay: &Haystack) -> Vec<MatchSpan> {
        let variants = self.pratika_variants(term);
        debug!(term = %term, variants = variants.len(), "pratika grahana variants");

        let mut matches = Vec::new();
        for variant in variants {
            for mut span in self.direct_in(&variant.text, hay) {
                span.match_type = MatchType::PratikaGrahana;
                span.pratika_pattern = Some(variant.rule.clone());
                span.original_term = Some(term.to_string());
                matches.push(span);
            }
        }
        matches
    }

    /// Direct matches of the iti-quotation variants of `term`: the quoted
    /// form for a plain word, the source forms for a quotation.
    pub fn pratika_grahana_search(&self, term: &str, text: &str) -> Vec<MatchSpan> {
        match self.prepare(term, text) {
            Some((term, hay)) => self.pratika_in(&term, &hay),
            None => Vec::new(),
        }
    }

    fn collect(&self, term: &str, hay: &Haystack, with_pratika: bool) -> SearchResults {
        let mut results = SearchResults::for_term(term);
        for span in self.direct_in(term, hay) {
            results.push_unique(span);
        }
        if self.config.enable_sandhi {
            for span in self.sandhi_in(term, hay) {
                results.push_unique(span);
            }
        }
        if with_pratika {
            for span in self.pratika_in(term, hay) {
                results.push_unique(span);
            }
        }
        results.finalize(self.config.base.max_results);
        results
    }

    /// Direct and sandhi-aware matches, deduplicated by span, sorted by
    /// position and cut to `max_results`.
    pub fn search(&self, term: &str, text: &str) -> SearchResults {
        let Some((term, hay)) = self.prepare(term, text) else {
            return SearchResults::empty();
        };
        let results = self.collect(&term, &hay, false);
        debug!(term = %term, count = results.count, "search");
        results
    }

    /// `search` plus iti-quotation matches.
    pub fn search_with_pratika_grahana(&self, term: &str, text: &str) -> SearchResults {
        let Some((term, hay)) = self.prepare(term, text) else {
            return SearchResults::empty();
        };
        let results = self.collect(&term, &hay, true);
        debug!(term = %term, count = results.count, "search with pratika grahana");
        results
    }

    /// `search` in every document; documents without matches are left out.
    pub fn search_multiple(&self, term: &str, documents: &[Document]) -> Vec<DocumentResults> {
        documents
            .iter()
            .filter_map(|doc| {
                let results = self.search(term, &doc.text);
                (results.count > 0).then(|| DocumentResults {
                    id: doc.id.clone(),
                    metadata: doc.metadata.clone(),
                    results,
                })
            })
            .collect()
    }

    /// `search` in the string fields of `data` named by dot paths
    /// (`"verse.text"`, `"commentaries.0.text"`). Fields that are missing,
    /// not strings or without matches are left out.
    pub fn search_structured(
        &self,
        term: &str,
        data: &Value,
        fields: &[&str],
    ) -> BTreeMap<String, SearchResults> {
        let mut out = BTreeMap::new();
        for &field in fields {
            let Some(text) = lookup_path(data, field).and_then(Value::as_str) else {
                continue;
            };
            let results = self.search(term, text);
            if results.count > 0 {
                out.insert(field.to_string(), results);
            }
        }
        out
    }

    /// `search` for each comma separated term (`"सद्भिः, सद्भिर्"`), merged
    /// keeping the first match at each position.
    pub fn search_terms(&self, terms: &str, text: &str) -> SearchResults {
        let mut merged = SearchResults::for_term(terms.trim());
        for term in utils::split_terms(terms) {
            for span in self.search(&term, text).matches {
                merged.push_unique_position(span);
            }
        }
        merged.finalize(self.config.base.max_results);
        merged
    }

    /// Wrap `matches` in `<span class="{highlight_class}" data-type="…">`.
    pub fn highlight_matches(&self, text: &str, matches: &[MatchSpan]) -> String {
        highlight_with(text, matches, &SpanMarker::new(&self.config.base.highlight_class))
    }

    /// Get cache statistics for monitoring.
    ///
    /// Returns (hits, misses) tuple.
    pub fn cache_stats(&self) -> (usize, usize) {
        (*self.cache_hits.borrow(), *self.cache_misses.borrow())
    }

    pub fn cache_size(&self) -> usize {
        self.cache.borrow().len()
    }

    pub fn cache_capacity(&self) -> usize {
        self.cache.borrow().cap().get()
    }

    /// Clear cached variants and reset the statistics.
    pub fn clear_cache(&self) {
        self.cache.borrow_mut().clear();
        *self.cache_hits.borrow_mut() = 0;
        *self.cache_misses.borrow_mut() = 0;
    }
}

impl Default for SanskritSearch {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

/// Follow a dot path through objects and (by numeric segment) arrays.
fn lookup_path<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(value, |current, key| match current {
        Value::Object(map) => map.get(key),
        Value::Array(items) => key.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn engine() -> SanskritSearch {
        SanskritSearch::default()
    }

    #[test]
    fn direct_search_extends_bare_stem() {
        let m = engine().direct_search("नारायण", "नारायणं नारायणः");
        assert_eq!(m.len(), 2);
        assert_eq!((m[0].position, m[0].length), (0, 7));
        assert_eq!(m[0].matched_text, "नारायणं");
        assert_eq!((m[1].position, m[1].length), (8, 7));
    }

    #[test]
    fn explicit_ending_is_not_extended() {
        let e = engine();
        assert!(e.direct_search("नारायणं", "नारायणो गच्छति").is_empty());
        let m = e.direct_search("नारायणं", "नारायणं");
        assert_eq!(m[0].length, 7);
    }

    #[test]
    fn direct_search_folds_case() {
        let m = engine().direct_search("Rama", "rAMa and RAMA");
        assert_eq!(m.len(), 2);
        assert_eq!(m[1].matched_text, "RAMA");

        let mut config = SearchConfig::default();
        config.base_mut().set_case_sensitive(true);
        assert!(SanskritSearch::new(config).direct_search("Rama", "rama").is_empty());
    }

    #[test]
    fn empty_inputs_give_empty_results() {
        let e = engine();
        assert_eq!(e.search("", "राम").count, 0);
        assert_eq!(e.search("राम", "").count, 0);
        assert!(e.direct_search("", "").is_empty());
        assert_eq!(e.exact_word_search("", "राम").count, 0);
    }

    #[test]
    fn exact_word_search_respects_boundaries() {
        let r = engine().exact_word_search("राम", "राम रामः (राम) श्रीराम");
        let positions: Vec<usize> = r.matches.iter().map(|m| m.position).collect();
        assert_eq!(positions, vec![0, 10]);
        assert!(r.matches.iter().all(|m| m.match_type == MatchType::Exact && m.length == 3));
    }

    #[test]
    fn exact_word_search_uses_spellings() {
        let r = engine().exact_word_search("रामम्", "रामं गच्छति। रामम्");
        assert_eq!(r.count, 2);
        assert_eq!(r.matches[0].variant.as_deref(), Some("रामं"));
        assert_eq!(r.matches[1].variant, None);

        let r = engine().exact_word_search("मनः", "मनस् ॥");
        assert_eq!(r.count, 1);
        assert_eq!(r.matches[0].variant.as_deref(), Some("मनस्"));
    }

    #[test]
    fn sandhi_variants_are_tagged() {
        let m = engine().sandhi_aware_search("रामः", "रामो गच्छति");
        assert_eq!(m.len(), 1);
        assert_eq!(m[0].match_type, MatchType::Sandhi);
        assert_eq!(m[0].original_term.as_deref(), Some("रामः"));
        assert!(m[0].sandhi_rule.is_some());
    }

    #[test]
    fn disabled_sandhi_finds_direct_only() {
        let mut config = SearchConfig::default();
        config.set_enable_sandhi(false);
        let e = SanskritSearch::new(config);
        assert_eq!(e.search("रामः", "रामो गच्छति").count, 0);
        assert!(e.sandhi_aware_search("रामः", "रामो").is_empty());
    }

    #[test]
    fn custom_generator_is_used() {
        let e = engine().with_generator(Box::new(|term: &str| {
            vec![Variant::new(format!("{term}स्य"), "genitive")]
        }));
        let r = e.search("देव", "देवस्य");
        assert!(r
            .matches
            .iter()
            .any(|m| m.match_type == MatchType::Sandhi && m.sandhi_rule.as_deref() == Some("genitive")));
    }

    #[test]
    fn results_are_truncated() {
        let mut config = SearchConfig::default();
        config.base_mut().set_max_results(2);
        let r = SanskritSearch::new(config).search("क", "क क क क");
        assert_eq!(r.count, 2);
        assert_eq!(r.matches[1].position, 2);
    }

    #[test]
    fn pratika_search_finds_quotation() {
        let r = engine().search_with_pratika_grahana("नारायण", "नारायणं नारायणः नारायणेति");
        assert_eq!(r.count, 4);
        let quoted = r
            .matches
            .iter()
            .find(|m| m.match_type == MatchType::PratikaGrahana)
            .unwrap();
        assert_eq!(quoted.matched_text, "नारायणेति");
        assert_eq!(quoted.pratika_pattern.as_deref(), Some("stem->ेति"));
        assert_eq!(quoted.original_term.as_deref(), Some("नारायण"));
    }

    #[test]
    fn structured_and_multiple() {
        let e = engine();
        let data = json!({
            "verse": { "text": "धर्मक्षेत्रे कुरुक्षेत्रे" },
            "commentaries": [ { "text": "धर्मक्षेत्र इति" }, { "text": "अन्यत्" } ],
            "number": 1
        });
        let r = e.search_structured(
            "क्षेत्र",
            &data,
            &["verse.text", "commentaries.0.text", "commentaries.1.text", "number", "missing.path"],
        );
        assert_eq!(r.keys().collect::<Vec<_>>(), vec!["commentaries.0.text", "verse.text"]);
        assert_eq!(r["verse.text"].count, 2);

        let docs = vec![Document::new("a", "राम"), Document::new("b", "कृष्ण")];
        let hits = e.search_multiple("कृष्ण", &docs);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "b");
    }

    #[test]
    fn comma_separated_terms() {
        let r = engine().search_terms("सद्भिः, सद्भिर्", "सद्भिर्गच्छति सद्भिः");
        assert_eq!(r.count, 2);
        assert_eq!(r.search_term, "सद्भिः, सद्भिर्");
    }

    #[test]
    fn variant_cache_stats() {
        let e = engine();
        assert_eq!(e.cache_capacity(), 1000);
        e.search("रामः", "रामो");
        e.search("रामः", "रामः");
        assert_eq!(e.cache_stats(), (1, 1));
        assert_eq!(e.cache_size(), 1);
        e.search_with_pratika_grahana("रामः", "रामः");
        assert_eq!(e.cache_size(), 2);
        e.clear_cache();
        assert_eq!(e.cache_stats(), (0, 0));
        assert_eq!(e.cache_size(), 0);
    }
}
