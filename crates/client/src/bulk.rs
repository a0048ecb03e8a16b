//! Bulk protocol (`/api/extended/authorizations`).

use async_trait::async_trait;
use reqwest::{Method, Url};
use serde::{Deserialize, Serialize};
use tracing::debug;

use bpms_auth_core::{AuthorizationGrant, CountResult, Result, Role};

use crate::client::{ApiGeneration, AuthorizationClient};
use crate::http::HttpTransport;

const BASE: [&str; 3] = ["api", "extended", "authorizations"];

/// Element of the bulk process-definition create body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessDefinitionAssignment {
    pub group_id: Role,
    pub process_definition_id: String,
}

impl From<&AuthorizationGrant> for ProcessDefinitionAssignment {
    fn from(grant: &AuthorizationGrant) -> Self {
        Self {
            group_id: grant.group_id.clone(),
            process_definition_id: grant.resource_id.clone(),
        }
    }
}

/// Client for engines exposing the extended bulk endpoints.
///
/// The server identifies which authorizations this tool generated; the client
/// only relays counts.
#[derive(Debug, Clone)]
pub struct BulkClient {
    http: HttpTransport,
}

impl BulkClient {
    pub fn new(http: HttpTransport) -> Self {
        Self { http }
    }

    pub async fn delete_all(&self) -> Result<CountResult> {
        let url = self.endpoint(&["delete"])?;
        let response = self.http.send(self.http.request(Method::DELETE, url)).await?;
        HttpTransport::read_json(response).await
    }

    pub async fn create_process_definitions(
        &self,
        assignments: &[ProcessDefinitionAssignment],
    ) -> Result<CountResult> {
        debug!(?assignments, "Create process definition authorizations");
        self.post_batch("process-definition", assignments).await
    }

    pub async fn create_process_instances(&self, roles: &[Role]) -> Result<CountResult> {
        debug!(?roles, "Create process instance authorizations");
        self.post_batch("process-instance", roles).await
    }

    fn endpoint(&self, tail: &[&str]) -> Result<Url> {
        let segments: Vec<&str> = BASE.iter().chain(tail).copied().collect();
        self.http.endpoint(&segments)
    }

    async fn post_batch<T: Serialize>(&self, resource: &str, body: &[T]) -> Result<CountResult> {
        let url = self.endpoint(&[resource, "create"])?;
        let request = HttpTransport::with_json(self.http.request(Method::POST, url), body)?;
        let response = self.http.send(request).await?;
        HttpTransport::read_json(response).await
    }
}

#[async_trait]
impl AuthorizationClient for BulkClient {
    fn generation(&self) -> ApiGeneration {
        ApiGeneration::Bulk
    }

    async fn remove_generated(&self) -> Result<u64> {
        Ok(self.delete_all().await?.count)
    }

    async fn create_process_definition_grants(&self, grants: &[AuthorizationGrant]) -> Result<u64> {
        if grants.is_empty() {
            debug!("No process definition authorizations to create");
            return Ok(0);
        }
        let assignments: Vec<ProcessDefinitionAssignment> =
            grants.iter().map(ProcessDefinitionAssignment::from).collect();
        Ok(self.create_process_definitions(&assignments).await?.count)
    }

    async fn create_process_instance_grants(&self, grants: &[AuthorizationGrant]) -> Result<u64> {
        if grants.is_empty() {
            debug!("No process instance authorizations to create");
            return Ok(0);
        }
        let roles: Vec<Role> = grants.iter().map(|g| g.group_id.clone()).collect();
        Ok(self.create_process_instances(&roles).await?.count)
    }
}
