//! Authorization records exchanged with the remote engine.

use serde::{Deserialize, Serialize};

use crate::{PermissionKind, ResourceKind, Role};

/// Authorization type code for a grant (as opposed to global/revoke).
pub const AUTH_TYPE_GRANT: i32 = 1;

/// Wildcard resource id: every resource of the given type.
pub const ANY_RESOURCE: &str = "*";

/// A grant sent to the remote authorization store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizationGrant {
    #[serde(rename = "type")]
    pub grant_type: i32,
    pub group_id: Role,
    pub resource_id: String,
    pub resource_type: ResourceKind,
    pub permissions: Vec<PermissionKind>,
}

impl AuthorizationGrant {
    /// `CREATE_INSTANCE` + `READ` on one process definition.
    pub fn process_definition(process_definition_id: impl Into<String>, role: Role) -> Self {
        Self::new(ResourceKind::ProcessDefinition, process_definition_id, role)
    }

    /// `CREATE` on every process instance.
    pub fn process_instance(role: Role) -> Self {
        Self::new(ResourceKind::ProcessInstance, ANY_RESOURCE, role)
    }

    fn new(resource_type: ResourceKind, resource_id: impl Into<String>, role: Role) -> Self {
        Self {
            grant_type: AUTH_TYPE_GRANT,
            group_id: role,
            resource_id: resource_id.into(),
            resource_type,
            permissions: resource_type.granted_permissions().to_vec(),
        }
    }
}

/// An authorization as returned by the search endpoint.
///
/// Only the fields needed to decide on removal are kept; anything else the
/// engine returns is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizationRecord {
    pub id: String,
    #[serde(default)]
    pub group_id: Option<Role>,
    #[serde(default)]
    pub permissions: Option<Vec<String>>,
}

impl AuthorizationRecord {
    pub fn new(id: impl Into<String>, group_id: impl Into<Role>) -> Self {
        Self {
            id: id.into(),
            group_id: Some(group_id.into()),
            permissions: None,
        }
    }

    pub fn with_permissions<I, S>(mut self, permissions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.permissions = Some(permissions.into_iter().map(Into::into).collect());
        self
    }

    /// Records owned by the administrator group are never touched.
    pub fn is_protected(&self) -> bool {
        self.group_id.as_ref().is_some_and(Role::is_admin)
    }
}

/// Body returned by the bulk endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountResult {
    pub count: u64,
}
