//! Audit result data model.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::parse::PageSignals;

/// Severity of a priority issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    /// Must fix: directly hurts ranking.
    High,
    /// Should fix: meaningful but not critical.
    Medium,
    /// Nice to fix: minor signal.
    Low,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::High => f.write_str("High"),
            Severity::Medium => f.write_str("Medium"),
            Severity::Low => f.write_str("Low"),
        }
    }
}

/// A single remediation issue surfaced by the audit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    /// What is wrong, e.g. "Missing title tag".
    pub message: String,
    /// How urgently it should be addressed.
    pub severity: Severity,
}

impl Issue {
    pub(crate) fn new(message: &str, severity: Severity) -> Self {
        Self {
            message: message.to_string(),
            severity,
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} priority", self.message, self.severity)
    }
}

/// The result of one successful SEO analysis.
///
/// Constructed once per `analyze` call and immutable afterwards. Heading
/// keys `"h1"` through `"h6"` are always present, with empty vectors for
/// levels the page does not use.
#[derive(Debug, Clone, Serialize)]
pub struct AuditReport {
    /// The audited URL.
    pub url: String,
    /// Page title, or `"No title found"`.
    pub title: String,
    /// Meta description, or `"No description found"`.
    pub description: String,
    /// Trimmed heading text per level, in document order.
    pub headings: BTreeMap<String, Vec<String>>,
    /// Anchors whose literal `href` contains the audited URL.
    pub internal_links: usize,
    /// All remaining anchors with an `href`.
    pub external_links: usize,
    /// Images carrying a non-empty `alt` attribute.
    pub images_with_alt: usize,
    /// Total `<img>` elements on the page.
    pub total_images: usize,
    /// PageSpeed performance score in [0, 100]; 0 when the call failed or
    /// no API key was configured.
    pub page_speed_score: f64,
    /// Weighted composite score, at most 60.
    pub seo_score: f64,
    /// Remediation issues in fixed evaluation order.
    pub priority_issues: Vec<Issue>,
}

impl AuditReport {
    pub(crate) fn new(
        url: &str,
        signals: PageSignals,
        page_speed_score: f64,
        seo_score: f64,
        priority_issues: Vec<Issue>,
    ) -> Self {
        Self {
            url: url.to_string(),
            title: signals
                .title
                .unwrap_or_else(|| crate::config::NO_TITLE_SENTINEL.to_string()),
            description: signals
                .description
                .unwrap_or_else(|| crate::config::NO_DESCRIPTION_SENTINEL.to_string()),
            headings: signals.headings,
            internal_links: signals.internal_links,
            external_links: signals.external_links,
            images_with_alt: signals.images_with_alt,
            total_images: signals.total_images,
            page_speed_score,
            seo_score,
            priority_issues,
        }
    }
}
