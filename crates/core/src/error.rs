//! Error model shared by every crate of the tool.

use thiserror::Error;

/// Result type used across the tool.
pub type Result<T> = core::result::Result<T, Error>;

/// Failure of a reconciliation run.
///
/// The variants mirror how a failure is handled: configuration problems abort
/// before any network call, undecodable payloads fail immediately, and
/// transport/remote-status failures are eligible for the whole-operation retry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Missing argument, unreadable or malformed configuration file.
    #[error("{0}")]
    Configuration(String),

    /// A request or response body could not be (de)serialized.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// Connection refused, timeout, or any other transport failure.
    #[error("transport error: {0}")]
    Transport(String),

    /// The remote engine answered with a non-2xx status.
    #[error("remote engine responded with status {status}: {body}")]
    Status { status: u16, body: String },
}

impl Error {
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }

    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Whether the whole-operation retry policy applies to this failure.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Status { .. })
    }
}
