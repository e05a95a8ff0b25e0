//! Cross-reference between a source text and its commentaries.
//!
//! A reader selects a word in one pane (in whatever script that pane is
//! displayed in) and the matching places are highlighted in a page of
//! another. Selections that are quotations (`नारायणेति ।`) are searched by
//! their quoted forms; sentence-final quotations on the page are set in the
//! configured bold class.
//!
//! Match positions refer to the page text passed in. A different page, or
//! the same page after any edit, needs a new call.

use serde::{Deserialize, Serialize};
use tracing::debug;

use libsanskrit_core::{utils, ScriptConverter, SearchResults};

use crate::engine::SanskritSearch;
use crate::pratika::PratikaIdentifier;
use crate::variants::case_ending_variations;

/// Highlighted page and the matches behind it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageHighlight {
    /// Terms searched, in the page's script.
    pub terms: Vec<String>,
    pub results: SearchResults,
    pub html: String,
}

pub struct CrossReference {
    engine: SanskritSearch,
    identifier: PratikaIdentifier,
    converter: Box<dyn ScriptConverter>,
}

impl CrossReference {
    pub fn new(engine: SanskritSearch, converter: Box<dyn ScriptConverter>) -> Self {
        let identifier = PratikaIdentifier::new(engine.config().pratika_min_stem_chars);
        Self {
            engine,
            identifier,
            converter,
        }
    }

    pub fn engine(&self) -> &SanskritSearch {
        &self.engine
    }

    pub fn identifier(&self) -> &PratikaIdentifier {
        &self.identifier
    }

    fn clean(text: &str) -> String {
        utils::strip_trailing_dandas(&utils::normalize(text))
            .trim()
            .to_string()
    }

    /// Terms to look for when `selection` (written in `lang`) is picked.
    ///
    /// A quotation yields its quoted forms, most likely first, written in
    /// `lang`; anything else yields the selection without trailing dandas.
    pub fn search_terms_for(&self, selection: &str, lang: &str) -> Vec<String> {
        let cleaned = Self::clean(selection);
        if cleaned.is_empty() {
            return Vec::new();
        }

        let devanagari = Self::clean(&self.converter.to_devanagari(&cleaned, Some(lang)));
        let forms = self.identifier.extract_searchable_forms(&devanagari);
        if forms.is_empty() {
            return vec![cleaned];
        }

        let mut terms: Vec<String> = Vec::with_capacity(forms.len());
        for form in forms {
            let term = utils::nfc(&self.converter.to_script(&form, lang));
            if !term.is_empty() && !terms.contains(&term) {
                terms.push(term);
            }
        }
        debug!(selection = %cleaned, ?terms, "quotation selection expanded");
        terms
    }

    /// Search `page` for everything `selection` stands for and render it.
    ///
    /// Matches of all terms are merged keeping the first at each position.
    /// The highlighted page then has its quotations marked.
    pub fn highlight_page(&self, selection: &str, page: &str, lang: &str) -> PageHighlight {
        let terms = self.search_terms_for(selection, lang);
        let mut results = SearchResults::for_term(&Self::clean(selection));
        for term in terms.iter() {
            for span in self.engine.search(term, page).matches {
                results.push_unique_position(span);
            }
        }
        results.finalize(self.engine.config().base.max_results);

        let html = if results.is_empty() {
            utils::nfc(page)
        } else {
            self.engine.highlight_matches(page, &results.matches)
        };
        let html = self.identifier.mark_pratikas(
            &html,
            self.converter.as_ref(),
            &self.engine.config().pratika_bold_class,
        );

        PageHighlight {
            terms,
            results,
            html,
        }
    }

    /// Search `page` for the declined forms of `stem`.
    ///
    /// Each case form is written in `lang` and searched; the first match at
    /// a position is kept, with `variant` naming the Devanagari form.
    pub fn pratika_case_search(&self, stem: &str, page: &str, lang: &str) -> SearchResults {
        let stem = Self::clean(stem);
        let mut results = SearchResults::for_term(&stem);
        if stem.is_empty() || page.is_empty() {
            return results;
        }

        let devanagari = self.converter.to_devanagari(&stem, Some(lang));
        let forms = case_ending_variations(&devanagari);
        debug!(stem = %stem, forms = forms.len(), "case form search");

        for form in forms {
            let written = self.converter.to_script(&form, lang);
            for mut span in self.engine.search(&written, page).matches {
                span.variant = Some(form.clone());
                results.push_unique_position(span);
            }
        }
        results.finalize(0);
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use libsanskrit_core::IdentityConverter;

    fn xref() -> CrossReference {
        CrossReference::new(SanskritSearch::default(), Box::new(IdentityConverter))
    }

    #[test]
    fn quotation_selection_searches_quoted_forms() {
        let x = xref();
        assert_eq!(x.search_terms_for("नारायणेति ॥", "sa"), vec!["नारायण", "नारायणा"]);
        assert_eq!(x.search_terms_for("धर्मक्षेत्रे।", "sa"), vec!["धर्मक्षेत्रे"]);
        assert!(x.search_terms_for(" । ", "sa").is_empty());
    }

    #[test]
    fn page_is_highlighted_and_marked() {
        let x = xref();
        let page = "नारायणं नमस्कृत्य । नारायणेति ।";
        let out = x.highlight_page("नारायणेति", page, "sa");
        assert_eq!(out.results.count, 2);
        assert_eq!(out.results.matches[0].position, 0);
        assert!(out
            .html
            .starts_with("<span class=\"search-highlight\" data-type=\"direct\">नारायणं</span>"));
        assert_eq!(crate::strip_highlight_markers(&out.html), page);
    }

    #[test]
    fn quotation_without_match_is_still_marked() {
        let x = xref();
        let out = x.highlight_page("कृष्ण", "रामेति ।", "sa");
        assert_eq!(out.results.count, 0);
        assert_eq!(out.html, "<span class=\"pratika-grahana-bold\">रामेति</span> ।");
    }

    #[test]
    fn case_forms_are_found() {
        let x = xref();
        let r = x.pratika_case_search("देव", "देवेन सह देवानां च", "sa");
        assert_eq!(r.count, 2);
        // the bare stem comes first and claims both positions
        assert_eq!(r.matches[0].matched_text, "देवे");
        assert_eq!(r.matches[0].variant.as_deref(), Some("देव"));
        assert_eq!(r.matches[1].position, 9);

        let r = x.pratika_case_search("देव", "देवानाम् इति", "sa");
        assert_eq!(r.count, 1);
    }
}
