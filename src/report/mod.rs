//! Terminal rendering of audit results.

use colored::*;

use crate::config::MAX_SEO_SCORE;
use crate::models::{AuditReport, Severity};
use crate::parse::HEADING_LEVELS;

fn severity_label(severity: Severity) -> ColoredString {
    match severity {
        Severity::High => "High".red().bold(),
        Severity::Medium => "Medium".yellow(),
        Severity::Low => "Low".blue(),
    }
}

/// Renders a full audit report for the terminal.
///
/// Heading levels with no entries render as `None`, matching the report
/// export template.
pub fn render_report(report: &AuditReport) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n", "SEO Audit Report".bold().underline()));
    out.push_str(&format!("{} {}\n\n", "URL:".bold(), report.url));

    out.push_str(&format!("{} {}\n", "Title:".bold(), report.title));
    out.push_str(&format!("{} {}\n\n", "Description:".bold(), report.description));

    out.push_str(&format!("{}\n", "Headings:".bold()));
    for level in HEADING_LEVELS {
        let texts = report
            .headings
            .get(level)
            .map(Vec::as_slice)
            .unwrap_or_default();
        let rendered = if texts.is_empty() {
            "None".to_string()
        } else {
            texts.join(", ")
        };
        out.push_str(&format!("  {}: {}\n", level.to_uppercase(), rendered));
    }
    out.push('\n');

    out.push_str(&format!(
        "{} {} internal, {} external\n",
        "Links:".bold(),
        report.internal_links,
        report.external_links
    ));
    out.push_str(&format!(
        "{} {}/{} images with alt text\n",
        "Images:".bold(),
        report.images_with_alt,
        report.total_images
    ));
    out.push_str(&format!(
        "{} {:.0}/100\n",
        "Page speed:".bold(),
        report.page_speed_score
    ));
    out.push_str(&format!(
        "{} {:.1}/{:.0}\n",
        "SEO score:".bold(),
        report.seo_score,
        MAX_SEO_SCORE
    ));

    out.push('\n');
    if report.priority_issues.is_empty() {
        out.push_str(&format!("{}\n", "No priority issues found.".green()));
    } else {
        out.push_str(&format!("{}\n", "Priority issues:".bold()));
        for issue in &report.priority_issues {
            out.push_str(&format!(
                "  - {} ({} priority)\n",
                issue.message,
                severity_label(issue.severity)
            ));
        }
    }

    out
}
