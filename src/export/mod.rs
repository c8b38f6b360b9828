//! Report export.
//!
//! Builds the fixed HTML report fragment and hands it to an external PDF
//! renderer when one is supplied. PDF rasterization itself is out of scope
//! for this crate; [`PdfRenderer`] is the seam for it.

use std::path::Path;

use anyhow::{Context, Result};

use crate::config::MAX_SEO_SCORE;
use crate::models::AuditReport;

/// Renders an HTML fragment to PDF bytes.
///
/// Implementations wrap whatever rendering backend the caller has available
/// (a headless browser, wkhtmltopdf, a hosted conversion API, ...).
pub trait PdfRenderer {
    /// Converts the given HTML fragment into PDF bytes.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend fails to render the fragment.
    fn render(&self, html: &str) -> Result<Vec<u8>>;
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Builds the fixed HTML report fragment for a successful audit.
///
/// The template embeds the title, description, link counts, page-speed
/// score, composite score, and the ordered issue list. This is the exact
/// fragment handed to a [`PdfRenderer`].
pub fn report_html(report: &AuditReport) -> String {
    let mut issues = String::new();
    if report.priority_issues.is_empty() {
        issues.push_str("<li>No priority issues found.</li>");
    } else {
        for issue in &report.priority_issues {
            issues.push_str(&format!("<li>{}</li>", escape_html(&issue.to_string())));
        }
    }

    format!(
        "<html>\
         <head><title>SEO Audit Report</title></head>\
         <body>\
         <h1>SEO Audit Report</h1>\
         <p><b>URL:</b> {url}</p>\
         <p><b>Title:</b> {title}</p>\
         <p><b>Description:</b> {description}</p>\
         <p><b>Internal links:</b> {internal} | <b>External links:</b> {external}</p>\
         <p><b>Page speed score:</b> {page_speed:.0}/100</p>\
         <p><b>SEO score:</b> {score:.1}/{max:.0}</p>\
         <h2>Priority issues</h2>\
         <ul>{issues}</ul>\
         </body>\
         </html>",
        url = escape_html(&report.url),
        title = escape_html(&report.title),
        description = escape_html(&report.description),
        internal = report.internal_links,
        external = report.external_links,
        page_speed = report.page_speed_score,
        score = report.seo_score,
        max = MAX_SEO_SCORE,
        issues = issues,
    )
}

/// Writes the HTML report fragment to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_html_report(report: &AuditReport, path: &Path) -> Result<()> {
    std::fs::write(path, report_html(report))
        .with_context(|| format!("Failed to write HTML report to {}", path.display()))
}

/// Renders the report through the given PDF backend and writes the bytes.
///
/// # Errors
///
/// Returns an error if rendering fails or the file cannot be written.
pub fn export_pdf(renderer: &dyn PdfRenderer, report: &AuditReport, path: &Path) -> Result<()> {
    let pdf_bytes = renderer
        .render(&report_html(report))
        .context("PDF renderer failed")?;
    std::fs::write(path, pdf_bytes)
        .with_context(|| format!("Failed to write PDF report to {}", path.display()))
}
