//! `bpms-auth-core`: authorization provisioning domain.
//!
//! This crate contains the **pure** parts of the tool: the declarative
//! configuration model, the authorization records exchanged with the remote
//! engine, and the rules that turn one into the other. No IO.

pub mod config;
pub mod derive;
pub mod error;
pub mod grant;
pub mod permissions;
pub mod removal;
pub mod resource;
pub mod roles;

pub use config::{AuthConfig, AuthDefinition, ProcessDefinitionAuthConfig};
pub use derive::{GrantPlan, distinct_roles};
pub use error::{Error, Result};
pub use grant::{
    ANY_RESOURCE, AUTH_TYPE_GRANT, AuthorizationGrant, AuthorizationRecord, CountResult,
};
pub use permissions::PermissionKind;
pub use removal::{
    PROCESS_DEFINITION_SCOPE, PROCESS_INSTANCE_SCOPE, SearchScope, select_for_removal,
};
pub use resource::ResourceKind;
pub use roles::Role;
