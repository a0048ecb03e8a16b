//! Tracing, logging, and redaction (shared setup).

/// Initialize process-wide observability (tracing/logging).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(tracing::LogFormat::from_env());
}

/// Tracing configuration (filters, layers).
pub mod tracing;

/// Redaction of confidential values at the logging boundary.
pub mod redaction;

pub use redaction::{Confidential, REDACTED};
