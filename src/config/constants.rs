//! Configuration constants.
//!
//! This module defines the constants used throughout the analyzer: the
//! request identity, the PageSpeed endpoint, sentinel strings for missing
//! page elements, and the scoring weights and thresholds.

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default User-Agent string for HTTP requests.
///
/// A minimal browser-like identity. Some sites serve degraded or blocked
/// responses to clients without one. Users can override this via the
/// `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";

/// PageSpeed Insights API endpoint (v5).
pub const PAGESPEED_ENDPOINT: &str =
    "https://www.googleapis.com/pagespeedonline/v5/runPagespeed";

/// Sentinel reported when the page has no `<title>` element.
pub const NO_TITLE_SENTINEL: &str = "No title found";

/// Sentinel reported when the page has no usable meta description.
pub const NO_DESCRIPTION_SENTINEL: &str = "No description found";

// Scoring weights and thresholds
/// Points awarded per passing on-page component (title, description,
/// headings, image alt coverage, internal links).
pub const COMPONENT_WEIGHT: f64 = 10.0;
/// Fraction of images that must carry alt text for the alt component to pass.
pub const ALT_COVERAGE_THRESHOLD: f64 = 0.7;
/// Divisor applied to the 0-100 PageSpeed score before it joins the sum.
pub const PAGE_SPEED_DIVISOR: f64 = 10.0;
/// Maximum attainable composite score: five weighted components plus the
/// scaled PageSpeed contribution.
pub const MAX_SEO_SCORE: f64 = 60.0;
