//! Image alt-text coverage extraction.

use std::sync::LazyLock;

use scraper::{Html, Selector};

use super::parse_selector_with_fallback;

const IMG_SELECTOR_STR: &str = "img";

static IMG_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_with_fallback(IMG_SELECTOR_STR, "image extraction"));

/// Alt-text coverage counts for a document.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageAltCoverage {
    /// Images with a non-empty `alt` attribute.
    pub with_alt: usize,
    /// All `<img>` elements.
    pub total: usize,
}

/// Counts images and how many of them carry a non-empty `alt` attribute.
///
/// An `alt=""` attribute counts as missing; decorative placeholders carry
/// no SEO signal.
pub fn extract_image_alt_coverage(document: &Html) -> ImageAltCoverage {
    let mut coverage = ImageAltCoverage::default();
    for element in document.select(&IMG_SELECTOR) {
        coverage.total += 1;
        if element
            .value()
            .attr("alt")
            .is_some_and(|alt| !alt.is_empty())
        {
            coverage.with_alt += 1;
        }
    }
    coverage
}
