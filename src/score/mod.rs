//! Composite scoring and priority-issue detection.
//!
//! Five binary on-page components worth 10 points each, plus the PageSpeed
//! score scaled down to a 0-10 contribution, for a maximum of 60. Issues
//! are evaluated in a fixed order; only failing components produce one.

use crate::config::{ALT_COVERAGE_THRESHOLD, COMPONENT_WEIGHT, PAGE_SPEED_DIVISOR};
use crate::models::{Issue, Severity};
use crate::parse::PageSignals;

fn weight_if(passes: bool) -> f64 {
    if passes {
        COMPONENT_WEIGHT
    } else {
        0.0
    }
}

fn has_any_heading(signals: &PageSignals) -> bool {
    signals.headings.values().any(|texts| !texts.is_empty())
}

/// Whether enough images carry alt text for the component to pass.
///
/// A page with no images scores 0 here rather than dividing by zero; the
/// component rewards demonstrated alt coverage, and there is none to show.
fn alt_coverage_passes(signals: &PageSignals) -> bool {
    if signals.total_images == 0 {
        return false;
    }
    (signals.images_with_alt as f64 / signals.total_images as f64) > ALT_COVERAGE_THRESHOLD
}

/// Computes the weighted composite SEO score.
///
/// # Arguments
///
/// * `signals` - Extracted on-page signals
/// * `page_speed_score` - PageSpeed score in [0, 100], already scaled from
///   the API's [0, 1] range (0 when the call failed)
///
/// # Returns
///
/// The sum of the five component scores plus `page_speed_score / 10`, in
/// [0, 60].
pub fn seo_score(signals: &PageSignals, page_speed_score: f64) -> f64 {
    let title_score = weight_if(signals.title.is_some());
    let desc_score = weight_if(signals.has_meta_description);
    let headings_score = weight_if(has_any_heading(signals));
    let image_alt_score = weight_if(alt_coverage_passes(signals));
    let link_score = weight_if(signals.internal_links >= 1);

    title_score + desc_score + headings_score + image_alt_score + link_score
        + page_speed_score / PAGE_SPEED_DIVISOR
}

/// Builds the ordered list of priority issues.
///
/// Conditions are evaluated in a fixed order (title, description, headings,
/// image alt text, internal links); the order of the returned list is part
/// of the report contract.
pub fn priority_issues(signals: &PageSignals) -> Vec<Issue> {
    let mut issues = Vec::new();

    if signals.title.is_none() {
        issues.push(Issue::new("Missing title tag", Severity::High));
    }
    if !signals.has_meta_description {
        issues.push(Issue::new("Missing meta description", Severity::High));
    }
    if !has_any_heading(signals) {
        issues.push(Issue::new("No headings found", Severity::Medium));
    }
    if signals.images_with_alt == 0 {
        issues.push(Issue::new("Images missing alt text", Severity::Low));
    }
    if signals.internal_links == 0 {
        issues.push(Issue::new("No internal links found", Severity::Medium));
    }

    issues
}
