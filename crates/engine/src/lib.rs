//! Reconciliation engine: wipe generated authorizations, then recreate the
//! exact set implied by configuration.
//!
//! ## Design
//!
//! - `clean → create`, both always executed, in that order
//! - Derivation is protocol-agnostic; only the wired [`AuthorizationClient`] differs
//! - One fixed-delay retry policy wraps each top-level operation as a whole
//! - No checkpointing: a failed run leaves a mixed state the next run reconciles
//!
//! [`AuthorizationClient`]: bpms_auth_client::AuthorizationClient

pub mod error;
pub mod reconciler;
pub mod report;
pub mod retry;

pub use error::{EngineError, EngineResult};
pub use reconciler::{Reconciler, ReconcilerConfig};
pub use report::{CreateReport, ReconcileReport};
pub use retry::{RetryPolicy, retry};
