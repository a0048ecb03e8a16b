//! Record-by-record protocol (`/api/authorization`).

use async_trait::async_trait;
use reqwest::Method;
use tracing::{debug, info};

use bpms_auth_core::{
    AuthorizationGrant, AuthorizationRecord, PROCESS_DEFINITION_SCOPE, PROCESS_INSTANCE_SCOPE,
    PermissionKind, Result, SearchScope, select_for_removal,
};

use crate::client::{ApiGeneration, AuthorizationClient};
use crate::http::HttpTransport;

const API: &str = "api";
const AUTHORIZATION: &str = "authorization";

/// Client for engines exposing only the plain authorization resource.
///
/// Removal searches both generated scopes and deletes the matches one request
/// per id. Administrator records are always kept, and so are process-definition
/// records whose permission set differs from the one this tool grants.
/// Creation posts one grant per request.
#[derive(Debug, Clone)]
pub struct TargetedClient {
    http: HttpTransport,
    permission_filter: bool,
}

impl TargetedClient {
    pub fn new(http: HttpTransport) -> Self {
        Self {
            http,
            permission_filter: false,
        }
    }

    /// Ask the server to narrow searches to the permission set this tool
    /// grants within each scope (`permissions` query parameter).
    pub fn with_permission_filter(mut self, enabled: bool) -> Self {
        self.permission_filter = enabled;
        self
    }

    /// Query parameters for a scope search.
    pub fn search_params(&self, scope: &SearchScope) -> Vec<(&'static str, String)> {
        let mut params = vec![("resourceType", scope.resource_type.code().to_string())];
        if let Some(resource_id) = scope.resource_id {
            params.push(("resourceId", resource_id.to_string()));
        }
        if self.permission_filter {
            params.push(("permissions", PermissionKind::join(scope.expected_permissions())));
        }
        params
    }

    pub async fn search(&self, scope: &SearchScope) -> Result<Vec<AuthorizationRecord>> {
        let params = self.search_params(scope);
        debug!(?params, "Get authorizations");

        let url = self.http.endpoint(&[API, AUTHORIZATION])?;
        let response = self
            .http
            .send(self.http.request(Method::GET, url).query(&params))
            .await?;

        HttpTransport::read_json(response).await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        debug!(id, "Delete authorization");

        let url = self.http.endpoint(&[API, AUTHORIZATION, id])?;
        self.http.send(self.http.request(Method::DELETE, url)).await?;
        Ok(())
    }

    pub async fn create(&self, grant: &AuthorizationGrant) -> Result<()> {
        debug!(?grant, "Create authorization");

        let url = self.http.endpoint(&[API, AUTHORIZATION, "create"])?;
        let request = HttpTransport::with_json(self.http.request(Method::POST, url), grant)?;
        self.http.send(request).await?;
        Ok(())
    }

    async fn removable_ids(&self, scope: &SearchScope, label: &str) -> Result<Vec<String>> {
        let records = self.search(scope).await?;
        info!(scope = label, found = records.len(), "Authorizations found");
        debug!(scope = label, ?records, "Authorization details");

        Ok(select_for_removal(&records, scope.removal_filter()))
    }

    async fn create_each(&self, grants: &[AuthorizationGrant]) -> Result<u64> {
        for grant in grants {
            self.create(grant).await?;
        }
        Ok(grants.len() as u64)
    }
}

#[async_trait]
impl AuthorizationClient for TargetedClient {
    fn generation(&self) -> ApiGeneration {
        ApiGeneration::Targeted
    }

    async fn remove_generated(&self) -> Result<u64> {
        let mut ids = self
            .removable_ids(&PROCESS_DEFINITION_SCOPE, "process_definition")
            .await?;
        ids.extend(
            self.removable_ids(&PROCESS_INSTANCE_SCOPE, "process_instance")
                .await?,
        );

        for id in &ids {
            self.delete(id).await?;
        }

        Ok(ids.len() as u64)
    }

    async fn create_process_definition_grants(&self, grants: &[AuthorizationGrant]) -> Result<u64> {
        self.create_each(grants).await
    }

    async fn create_process_instance_grants(&self, grants: &[AuthorizationGrant]) -> Result<u64> {
        self.create_each(grants).await
    }
}
