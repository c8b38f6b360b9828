//! Error type definitions.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Terminal errors for a single `analyze` call.
///
/// An audit result is either a full success record or one of these; there
/// are no partial results. Fetch-level variants occur before any extraction,
/// `Extraction` covers everything after the status check.
#[derive(Error, Debug)]
pub enum AuditError {
    /// The page responded with a non-success status code.
    #[error("Failed to fetch the page (Status Code: {code})")]
    FetchStatus {
        /// The HTTP status code returned by the server.
        code: u16,
    },

    /// The request itself failed (DNS, connect, timeout, TLS, ...).
    #[error("Failed to fetch the page: {0}")]
    Transport(#[from] ReqwestError),

    /// A failure while reading or processing the fetched document.
    #[error("{0}")]
    Extraction(String),
}
