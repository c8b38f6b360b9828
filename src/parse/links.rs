//! Link extraction and internal/external classification.

use std::sync::LazyLock;

use scraper::{Html, Selector};

use super::parse_selector_with_fallback;

const ANCHOR_SELECTOR_STR: &str = "a[href]";

static ANCHOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_with_fallback(ANCHOR_SELECTOR_STR, "link extraction"));

/// Internal/external link counts for a document.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinkCounts {
    /// Anchors pointing back at the audited site.
    pub internal: usize,
    /// Everything else with an `href`.
    pub external: usize,
}

/// Classifies a single `href` against the audited URL.
///
/// A link is internal when the literal `href` contains the audited URL as a
/// substring, or when it is a root-relative path. This is deliberately
/// naive string matching, not URL-authority comparison: `href` values on a
/// different scheme or with a trailing-slash mismatch can misclassify.
fn is_internal(href: &str, url: &str) -> bool {
    href.contains(url) || href.starts_with('/')
}

/// Counts anchors with an `href`, classified as internal or external.
pub fn extract_link_counts(document: &Html, url: &str) -> LinkCounts {
    let mut counts = LinkCounts::default();
    for element in document.select(&ANCHOR_SELECTOR) {
        // The selector guarantees the attribute exists
        let Some(href) = element.value().attr("href") else {
            continue;
        };
        if is_internal(href, url) {
            counts.internal += 1;
        } else {
            counts.external += 1;
        }
    }
    counts
}
