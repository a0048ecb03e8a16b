use thiserror::Error;

pub type EngineResult<T> = Result<T, EngineError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error(transparent)]
    Client(#[from] bpms_auth_core::Error),

    /// The remote store reported a different number of created authorizations
    /// than derived from configuration (strict mode only).
    #[error("{scope} authorizations: expected {expected} to be created, remote reported {actual}")]
    CountMismatch {
        scope: &'static str,
        expected: u64,
        actual: u64,
    },
}

impl EngineError {
    pub fn is_retryable(&self) -> bool {
        match self {
            EngineError::Client(e) => e.is_retryable(),
            EngineError::CountMismatch { .. } => false,
        }
    }
}
