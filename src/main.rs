//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `seo_audit` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{ensure, Context, Result};
use clap::Parser;
use std::process;

use seo_audit::export::write_html_report;
use seo_audit::initialization::init_logger_with;
use seo_audit::report::render_report;
use seo_audit::{analyze, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists)
    // This allows setting PAGESPEED_API_KEY in .env without exporting it manually
    let _ = dotenvy::dotenv();

    // Parse command-line arguments into Config
    let config = Config::parse();

    // Initialize logger based on config
    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    // Reject URLs the fetch layer could never handle before making a request
    let parsed = url::Url::parse(&config.url)
        .with_context(|| format!("Invalid URL '{}': include the scheme, e.g. https://example.com", config.url))?;
    ensure!(
        matches!(parsed.scheme(), "http" | "https"),
        "Unsupported URL scheme '{}': only http and https are supported",
        parsed.scheme()
    );

    match analyze(&config).await {
        Ok(report) => {
            print!("{}", render_report(&report));

            if let Some(path) = &config.export_html {
                write_html_report(&report, path)?;
                println!("HTML report written to {}", path.display());
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("seo_audit error: {e}");
            process::exit(1);
        }
    }
}
