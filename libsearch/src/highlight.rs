//! Rendering of match spans as inline markup.
//!
//! Spans are applied last to first so earlier byte offsets stay valid while
//! tags are inserted. Positions are char offsets into the NFC form of the
//! text the spans were found in; spans from another text are skipped, not
//! clamped.

use once_cell::sync::Lazy;
use regex::Regex;

use libsanskrit_core::{utils, MatchSpan};

static SPAN_TAGS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<span class="[^"]*" data-type="[^"]*">|</span>"#).expect("valid span tag pattern")
});

/// Produces the opening and closing markup around one match.
pub trait HighlightMarker {
    fn open(&self, span: &MatchSpan) -> String;
    fn close(&self, span: &MatchSpan) -> String;
}

/// `<span class="{class}" data-type="{type}">…</span>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanMarker {
    pub class: String,
}

impl SpanMarker {
    pub fn new(class: &str) -> Self {
        Self {
            class: class.to_string(),
        }
    }
}

impl Default for SpanMarker {
    fn default() -> Self {
        Self::new("search-highlight")
    }
}

impl HighlightMarker for SpanMarker {
    fn open(&self, span: &MatchSpan) -> String {
        format!(
            "<span class=\"{}\" data-type=\"{}\">",
            self.class, span.match_type
        )
    }

    fn close(&self, _span: &MatchSpan) -> String {
        "</span>".to_string()
    }
}

/// Wrap every match of `matches` in `marker`'s tags.
///
/// Spans that fall outside the text, or that overlap a span already
/// wrapped, are left out. Without matches the text is returned untouched.
pub fn highlight_with(text: &str, matches: &[MatchSpan], marker: &dyn HighlightMarker) -> String {
    if matches.is_empty() {
        return text.to_string();
    }
    let text = utils::nfc(text);

    let mut ordered: Vec<&MatchSpan> = matches.iter().filter(|m| m.length > 0).collect();
    ordered.sort_by(|a, b| b.position.cmp(&a.position).then(b.length.cmp(&a.length)));

    let mut out = text.clone();
    let mut applied: Vec<&MatchSpan> = Vec::new();
    for span in ordered {
        if applied.iter().any(|a| a.overlaps(span)) {
            continue;
        }
        // Offsets come from the untouched text; everything after `range.end`
        // has already been rewritten, everything before it has not.
        let Some(range) = span.byte_range(&text) else {
            continue;
        };
        out.insert_str(range.end, &marker.close(span));
        out.insert_str(range.start, &marker.open(span));
        applied.push(span);
    }

    utils::nfc(&out)
}

/// Remove the tags written by `SpanMarker`.
pub fn strip_highlight_markers(html: &str) -> String {
    SPAN_TAGS.replace_all(html, "").into_owned()
}
