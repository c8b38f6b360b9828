//! Initialization of shared resources.
//!
//! This module provides functions to initialize the HTTP client and the
//! logger before an audit runs.

mod client;
mod logger;

pub use client::init_client;
pub use logger::init_logger_with;
