//! libsearch crate root
//!
//! Search over Sanskrit text that understands how words change shape in
//! running text: inflected endings, sandhi at word boundaries, and
//! quotation with इति (pratika grahana).
//!
//! Public API exported here:
//! - `SanskritSearch` (direct, exact word, sandhi and quotation search)
//! - `PratikaIdentifier` for sentence-final quotations
//! - `CrossReference` for selection → page highlighting across scripts
//! - `SearchIndex` for narrowing a document set
//! - `highlight_with` / `strip_highlight_markers`
//! - `SearchConfig`

pub mod config;
pub mod crossref;
pub mod engine;
pub mod highlight;
pub mod index;
pub mod iti;
pub mod pratika;
pub mod variants;

pub use config::{standard_sandhi_rules, SearchConfig};
pub use crossref::{CrossReference, PageHighlight};
pub use engine::{Document, DocumentResults, SanskritSearch};
pub use highlight::{highlight_with, strip_highlight_markers, HighlightMarker, SpanMarker};
pub use index::{extract_words, search_with_index, SearchIndex};
pub use iti::SandhiMap;
pub use pratika::{PratikaIdentifier, PratikaResult};
pub use variants::{case_ending_variations, phonetic_variants, pratika_variations};

pub use libsanskrit_core::{MatchSpan, MatchType, SearchResults, Variant, VariantGenerator};
