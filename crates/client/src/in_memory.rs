//! In-memory authorization store for tests/dev.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use bpms_auth_core::{
    AuthorizationGrant, AuthorizationRecord, Error, PROCESS_DEFINITION_SCOPE,
    PROCESS_INSTANCE_SCOPE, ResourceKind, Result, Role, SearchScope, select_for_removal,
};

use crate::client::{ApiGeneration, AuthorizationClient};

/// An authorization held by [`InMemoryAuthorizationClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredAuthorization {
    pub id: String,
    pub group_id: Role,
    pub resource_id: String,
    pub resource_type: ResourceKind,
    pub permissions: Vec<String>,
}

impl StoredAuthorization {
    fn matches(&self, scope: &SearchScope) -> bool {
        self.resource_type == scope.resource_type
            && scope.resource_id.is_none_or(|id| id == self.resource_id)
    }

    fn as_record(&self) -> AuthorizationRecord {
        AuthorizationRecord::new(self.id.clone(), self.group_id.clone())
            .with_permissions(self.permissions.iter().cloned())
    }
}

#[derive(Debug, Default)]
struct StoreState {
    next_id: u64,
    authorizations: Vec<StoredAuthorization>,
    deleted: Vec<String>,
    created: Vec<AuthorizationGrant>,
}

/// Authorization store emulating the targeted protocol's semantics.
///
/// - No IO
/// - Ids are assigned sequentially (`auth-1`, `auth-2`, ...)
/// - Removal applies the same exclusions as the remote-backed client
#[derive(Debug, Default)]
pub struct InMemoryAuthorizationClient {
    state: Mutex<StoreState>,
}

impl InMemoryAuthorizationClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an authorization as if created by someone else; returns its id.
    pub fn seed(&self, grant: AuthorizationGrant) -> Result<String> {
        let mut state = self.lock()?;
        Ok(Self::insert(&mut state, grant))
    }

    /// Current content of the store.
    pub fn authorizations(&self) -> Result<Vec<StoredAuthorization>> {
        Ok(self.lock()?.authorizations.clone())
    }

    /// Ids removed so far, in removal order.
    pub fn deleted_ids(&self) -> Result<Vec<String>> {
        Ok(self.lock()?.deleted.clone())
    }

    /// Grants created through the client, in creation order.
    pub fn created_grants(&self) -> Result<Vec<AuthorizationGrant>> {
        Ok(self.lock()?.created.clone())
    }

    fn lock(&self) -> Result<MutexGuard<'_, StoreState>> {
        self.state
            .lock()
            .map_err(|_| Error::transport("in-memory store lock poisoned"))
    }

    fn insert(state: &mut StoreState, grant: AuthorizationGrant) -> String {
        state.next_id += 1;
        let id = format!("auth-{}", state.next_id);
        state.authorizations.push(StoredAuthorization {
            id: id.clone(),
            group_id: grant.group_id,
            resource_id: grant.resource_id,
            resource_type: grant.resource_type,
            permissions: grant.permissions.iter().map(|p| p.as_str().to_string()).collect(),
        });
        id
    }

    fn create_all(&self, grants: &[AuthorizationGrant]) -> Result<u64> {
        let mut state = self.lock()?;
        for grant in grants {
            state.created.push(grant.clone());
            Self::insert(&mut state, grant.clone());
        }
        Ok(grants.len() as u64)
    }
}

#[async_trait]
impl AuthorizationClient for InMemoryAuthorizationClient {
    fn generation(&self) -> ApiGeneration {
        ApiGeneration::Targeted
    }

    async fn remove_generated(&self) -> Result<u64> {
        let mut state = self.lock()?;

        let mut ids = Vec::new();
        for scope in [PROCESS_DEFINITION_SCOPE, PROCESS_INSTANCE_SCOPE] {
            let records: Vec<AuthorizationRecord> = state
                .authorizations
                .iter()
                .filter(|a| a.matches(&scope))
                .map(StoredAuthorization::as_record)
                .collect();
            ids.extend(select_for_removal(&records, scope.removal_filter()));
        }

        state.authorizations.retain(|a| !ids.contains(&a.id));
        state.deleted.extend(ids.iter().cloned());

        Ok(ids.len() as u64)
    }

    async fn create_process_definition_grants(&self, grants: &[AuthorizationGrant]) -> Result<u64> {
        self.create_all(grants)
    }

    async fn create_process_instance_grants(&self, grants: &[AuthorizationGrant]) -> Result<u64> {
        self.create_all(grants)
    }
}
