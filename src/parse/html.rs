//! Basic HTML extraction: title, meta description, and headings.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use scraper::{Html, Selector};

use super::parse_selector_with_fallback;

// CSS selector strings
const TITLE_SELECTOR_STR: &str = "title";
const META_DESCRIPTION_SELECTOR_STR: &str = "meta[name='description']";

/// Heading levels, in evaluation order.
pub const HEADING_LEVELS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_with_fallback(TITLE_SELECTOR_STR, "title extraction"));

static META_DESCRIPTION_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    parse_selector_with_fallback(META_DESCRIPTION_SELECTOR_STR, "meta description extraction")
});

static HEADING_SELECTORS: LazyLock<Vec<(&'static str, Selector)>> = LazyLock::new(|| {
    HEADING_LEVELS
        .iter()
        .copied()
        .map(|level| (level, parse_selector_with_fallback(level, "heading extraction")))
        .collect()
});

/// Result of looking for `<meta name="description">`.
///
/// Element presence and usable content are tracked separately: the scoring
/// component passes on presence alone, while the report falls back to its
/// sentinel when the `content` attribute is missing.
#[derive(Debug, Clone, Default)]
pub struct MetaDescription {
    /// Whether the element exists in the document.
    pub element_present: bool,
    /// Trimmed `content` attribute value, when present.
    pub content: Option<String>,
}

/// Extracts the page title from an HTML document.
///
/// Searches for the first `<title>` element and returns its text content,
/// trimmed of whitespace. Returns `None` when the element is absent or its
/// text is empty after trimming.
pub fn extract_title(document: &Html) -> Option<String> {
    let element = document.select(&TITLE_SELECTOR).next()?;
    // text() handles HTML entities and nested tags correctly
    let title: String = element.text().collect::<String>().trim().to_string();
    if title.is_empty() {
        log::debug!("Title element present but empty");
        None
    } else {
        Some(title)
    }
}

/// Extracts the meta description from an HTML document.
///
/// Searches for the first `<meta name="description">` and reads its
/// `content` attribute, trimmed of whitespace.
pub fn extract_meta_description(document: &Html) -> MetaDescription {
    match document.select(&META_DESCRIPTION_SELECTOR).next() {
        Some(element) => MetaDescription {
            element_present: true,
            content: element
                .value()
                .attr("content")
                .map(|content| content.trim().to_string()),
        },
        None => MetaDescription::default(),
    }
}

/// Returns a headings map with all six levels present and empty.
pub(crate) fn empty_headings() -> BTreeMap<String, Vec<String>> {
    HEADING_LEVELS
        .iter()
        .map(|level| (level.to_string(), Vec::new()))
        .collect()
}

/// Extracts every heading, grouped by level.
///
/// For each of `h1`..`h6`, collects the trimmed text of every matching
/// element in document order. Levels with no headings map to an empty
/// vector; the key is never omitted.
pub fn extract_headings(document: &Html) -> BTreeMap<String, Vec<String>> {
    HEADING_SELECTORS
        .iter()
        .map(|(level, selector)| {
            let texts: Vec<String> = document
                .select(selector)
                .map(|element| element.text().collect::<String>().trim().to_string())
                .collect();
            (level.to_string(), texts)
        })
        .collect()
}
