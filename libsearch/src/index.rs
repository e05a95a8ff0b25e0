// libsearch/src/index.rs
//
// In-memory word index over a document set, used to skip documents that
// cannot contain a term before running the full search on the rest.

use ahash::{AHashMap, AHashSet};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use libsanskrit_core::utils;

use crate::engine::{Document, DocumentResults, SanskritSearch};

static WORD_SEPARATORS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s.,;!?()\[\]{}।॥]+").expect("valid separator pattern"));

/// Words of `text`, split on whitespace, dandas and `.,;!?()[]{}`. Unique,
/// in order of first appearance.
pub fn extract_words(text: &str) -> Vec<String> {
    let text = utils::nfc(text);
    let mut seen = AHashSet::new();
    WORD_SEPARATORS
        .split(&text)
        .filter(|w| !w.is_empty())
        .filter(|w| seen.insert(*w))
        .map(str::to_string)
        .collect()
}

/// Word → indices of the documents containing it.
#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    documents: usize,
    terms: AHashMap<String, Vec<usize>>,
}

impl SearchIndex {
    pub fn build(documents: &[Document]) -> Self {
        let mut terms: AHashMap<String, Vec<usize>> = AHashMap::new();
        for (i, doc) in documents.iter().enumerate() {
            for word in extract_words(&doc.text) {
                terms.entry(word).or_default().push(i);
            }
        }
        debug!(documents = documents.len(), words = terms.len(), "search index built");
        Self {
            documents: documents.len(),
            terms,
        }
    }

    /// Number of documents indexed.
    pub fn len(&self) -> usize {
        self.documents
    }

    pub fn is_empty(&self) -> bool {
        self.documents == 0
    }

    /// Number of distinct words.
    pub fn word_count(&self) -> usize {
        self.terms.len()
    }

    /// Documents containing exactly `word`.
    pub fn documents_with(&self, word: &str) -> &[usize] {
        self.terms.get(word).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Ascending indices of the documents having a word that contains one
    /// of the words of `term` (`नारायण` selects a document with `नारायणं`).
    pub fn candidates(&self, term: &str) -> Vec<usize> {
        let query = extract_words(term);
        let mut docs: Vec<usize> = self
            .terms
            .iter()
            .filter(|(word, _)| query.iter().any(|q| word.contains(q.as_str())))
            .flat_map(|(_, ids)| ids.iter().copied())
            .collect();
        docs.sort_unstable();
        docs.dedup();
        docs
    }
}

/// `search_multiple` restricted to the documents `index` selects for
/// `term`. `documents` must be the slice the index was built from.
pub fn search_with_index(
    engine: &SanskritSearch,
    term: &str,
    index: &SearchIndex,
    documents: &[Document],
) -> Vec<DocumentResults> {
    let relevant: Vec<Document> = index
        .candidates(term)
        .into_iter()
        .filter_map(|i| documents.get(i).cloned())
        .collect();
    debug!(term, candidates = relevant.len(), "indexed search");
    engine.search_multiple(term, &relevant)
}
