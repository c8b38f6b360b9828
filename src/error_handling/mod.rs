//! Error handling for the audit pipeline.
//!
//! The pipeline has a two-tier error taxonomy: fetch errors (bad status or
//! transport failure) short-circuit before any extraction happens, while
//! extraction errors carry only a message. The PageSpeed sub-call never
//! surfaces here; its failures default the score to 0.

mod types;

pub use types::{AuditError, InitializationError};
