use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use bpms_auth_core::{AuthorizationGrant, Result};

/// Protocol generation of the remote authorization API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApiGeneration {
    /// Record-by-record search/delete/create.
    #[default]
    Targeted,
    /// Bulk delete and batched creates returning counts.
    Bulk,
}

impl ApiGeneration {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiGeneration::Targeted => "targeted",
            ApiGeneration::Bulk => "bulk",
        }
    }
}

impl core::fmt::Display for ApiGeneration {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown authorization api '{0}' (expected 'targeted' or 'bulk')")]
pub struct UnknownApiGeneration(pub String);

impl FromStr for ApiGeneration {
    type Err = UnknownApiGeneration;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "targeted" => Ok(ApiGeneration::Targeted),
            "bulk" => Ok(ApiGeneration::Bulk),
            other => Err(UnknownApiGeneration(other.to_string())),
        }
    }
}

/// Operations the reconciliation engine needs from the remote store.
///
/// Implementations adapt these to one wire protocol; callers never branch on
/// which implementation is wired in.
///
/// All counts are the ones reported by the implementation: the number of ids
/// processed for record-by-record protocols, the server-returned count for bulk
/// ones.
#[async_trait]
pub trait AuthorizationClient: Send + Sync {
    fn generation(&self) -> ApiGeneration;

    /// Remove every authorization previously generated by this tool.
    ///
    /// Administrator authorizations must survive.
    async fn remove_generated(&self) -> Result<u64>;

    async fn create_process_definition_grants(&self, grants: &[AuthorizationGrant]) -> Result<u64>;

    async fn create_process_instance_grants(&self, grants: &[AuthorizationGrant]) -> Result<u64>;
}

#[async_trait]
impl<C> AuthorizationClient for Arc<C>
where
    C: AuthorizationClient + ?Sized,
{
    fn generation(&self) -> ApiGeneration {
        (**self).generation()
    }

    async fn remove_generated(&self) -> Result<u64> {
        (**self).remove_generated().await
    }

    async fn create_process_definition_grants(&self, grants: &[AuthorizationGrant]) -> Result<u64> {
        (**self).create_process_definition_grants(grants).await
    }

    async fn create_process_instance_grants(&self, grants: &[AuthorizationGrant]) -> Result<u64> {
        (**self).create_process_instance_grants(grants).await
    }
}
