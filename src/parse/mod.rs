//! HTML parsing and signal extraction.
//!
//! This module extracts the on-page SEO signals from fetched HTML:
//! - Page title and meta description
//! - Headings (h1 through h6, in document order)
//! - Image alt-text coverage
//! - Internal/external link counts
//!
//! All parsing is done using CSS selectors via the `scraper` crate.

mod html;
mod images;
mod links;

use std::collections::BTreeMap;

use scraper::{Html, Selector};

pub use html::{extract_headings, extract_meta_description, extract_title, HEADING_LEVELS};
pub use images::extract_image_alt_coverage;
pub use links::extract_link_counts;

/// Parses a CSS selector with a safe fallback.
///
/// If parsing fails, logs an error and returns a selector that matches nothing
/// (`*:not(*)`). This prevents panics while allowing the code to continue.
pub(crate) fn parse_selector_with_fallback(selector_str: &str, context: &str) -> Selector {
    Selector::parse(selector_str).unwrap_or_else(|e| {
        log::error!(
            "Failed to parse CSS selector '{}' in {}: {}. Using fallback selector.",
            selector_str,
            context,
            e
        );
        // Known-valid selector that won't match anything
        Selector::parse("*:not(*)").expect(
            "Fallback selector '*:not(*)' should always parse - this is a programming error",
        )
    })
}

/// All extracted on-page signals for one document.
///
/// This is what the scoring layer consumes; it never touches the DOM.
#[derive(Debug, Clone)]
pub struct PageSignals {
    /// Title text, `None` when the element is absent or empty.
    pub title: Option<String>,
    /// Meta description content, `None` when absent.
    pub description: Option<String>,
    /// Whether a `<meta name="description">` element exists at all. The
    /// description component scores on element presence even when the
    /// `content` attribute is missing.
    pub has_meta_description: bool,
    /// Trimmed heading text per level; keys `"h1"`..`"h6"` always present.
    pub headings: BTreeMap<String, Vec<String>>,
    /// Anchors classified as internal.
    pub internal_links: usize,
    /// Anchors classified as external.
    pub external_links: usize,
    /// Images with a non-empty `alt` attribute.
    pub images_with_alt: usize,
    /// All `<img>` elements.
    pub total_images: usize,
}

impl Default for PageSignals {
    fn default() -> Self {
        Self {
            title: None,
            description: None,
            has_meta_description: false,
            headings: html::empty_headings(),
            internal_links: 0,
            external_links: 0,
            images_with_alt: 0,
            total_images: 0,
        }
    }
}

/// Extracts all on-page signals from a raw HTML body.
///
/// `scraper` is error-tolerant, so malformed markup degrades to partial
/// signals rather than failing the audit.
///
/// # Arguments
///
/// * `body` - The raw HTML to parse
/// * `url` - The audited URL, used to classify links as internal/external
pub fn extract_signals(body: &str, url: &str) -> PageSignals {
    let document = Html::parse_document(body);

    let title = extract_title(&document);
    let meta_description = extract_meta_description(&document);
    let headings = extract_headings(&document);
    let coverage = extract_image_alt_coverage(&document);
    let link_counts = extract_link_counts(&document, url);

    PageSignals {
        title,
        description: meta_description.content,
        has_meta_description: meta_description.element_present,
        headings,
        internal_links: link_counts.internal,
        external_links: link_counts.external,
        images_with_alt: coverage.with_alt,
        total_images: coverage.total,
    }
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
