//! seo_audit library: single-page SEO analysis
//!
//! This library fetches a web page, extracts on-page SEO signals (title, meta
//! description, headings, image alt-text coverage, internal/external links,
//! and an external page-speed score), computes a weighted composite score,
//! and surfaces prioritized remediation issues.
//!
//! # Example
//!
//! ```no_run
//! use seo_audit::{analyze, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     url: "https://example.com".to_string(),
//!     ..Default::default()
//! };
//!
//! let report = analyze(&config).await?;
//! println!("SEO score: {:.1}/60 ({} issues)",
//!          report.seo_score, report.priority_issues.len());
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context.

#![warn(missing_docs)]

pub mod config;
mod error_handling;
pub mod export;
mod fetch;
pub mod initialization;
mod models;
mod pagespeed;
mod parse;
pub mod report;
mod score;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{AuditError, InitializationError};
pub use models::{AuditReport, Issue, Severity};
pub use run::analyze;

// Internal run module (contains the analysis pipeline)
mod run {
    use log::{debug, info};

    use crate::config::Config;
    use crate::error_handling::AuditError;
    use crate::initialization::init_client;
    use crate::models::AuditReport;
    use crate::{fetch, pagespeed, parse, score};

    /// Runs a single SEO analysis against the configured URL.
    ///
    /// This is the main entry point for the library. It fetches the page,
    /// extracts on-page signals, queries the PageSpeed API (when an API key
    /// is configured), computes the composite score, and assembles the
    /// ordered list of priority issues.
    ///
    /// Each call is independent: one fetch attempt, no retries, no caching,
    /// and no shared state between calls.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the audit (URL, timeout, API key, etc.)
    ///
    /// # Returns
    ///
    /// A populated [`AuditReport`] on success. The report is either a full
    /// success record or an error; there are no partial results.
    ///
    /// # Errors
    ///
    /// * [`AuditError::FetchStatus`] if the page returns a non-success status
    /// * [`AuditError::Transport`] if the request itself fails
    /// * [`AuditError::Extraction`] if the body cannot be read or processed
    ///
    /// # Example
    ///
    /// ```no_run
    /// use seo_audit::{analyze, Config};
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = Config {
    ///     url: "https://example.com".to_string(),
    ///     ..Default::default()
    /// };
    /// let report = analyze(&config).await?;
    /// println!("{} internal links", report.internal_links);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn analyze(config: &Config) -> Result<AuditReport, AuditError> {
        let client = init_client(config).map_err(AuditError::Transport)?;

        info!("Fetching {}", config.url);
        let body = fetch::fetch_page(&client, &config.url).await?;
        debug!("Fetched {} bytes from {}", body.len(), config.url);

        let signals = parse::extract_signals(&body, &config.url);
        debug!(
            "Extracted signals: title={}, {} internal / {} external links, {}/{} images with alt",
            signals.title.is_some(),
            signals.internal_links,
            signals.external_links,
            signals.images_with_alt,
            signals.total_images
        );

        let page_speed_score = pagespeed::fetch_page_speed_score(
            &client,
            &config.url,
            config.pagespeed_api_key.as_deref(),
        )
        .await;

        let seo_score = score::seo_score(&signals, page_speed_score);
        let priority_issues = score::priority_issues(&signals);
        info!(
            "Analysis of {} complete: score {:.1}/60, {} issues",
            config.url,
            seo_score,
            priority_issues.len()
        );

        Ok(AuditReport::new(
            &config.url,
            signals,
            page_speed_score,
            seo_score,
            priority_issues,
        ))
    }
}
