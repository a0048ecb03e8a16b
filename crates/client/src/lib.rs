//! Authorization client: the remote authorization store as a capability.
//!
//! Two protocol generations are supported behind [`AuthorizationClient`]:
//!
//! - [`TargetedClient`]: search, then delete/create record by record
//!   (`/api/authorization`).
//! - [`BulkClient`]: server-side bulk delete and batched creates
//!   (`/api/extended/authorizations`).
//!
//! [`InMemoryAuthorizationClient`] emulates the store for tests/dev.

pub mod bulk;
pub mod client;
pub mod http;
pub mod in_memory;
pub mod targeted;

pub use bulk::{BulkClient, ProcessDefinitionAssignment};
pub use client::{ApiGeneration, AuthorizationClient, UnknownApiGeneration};
pub use http::HttpTransport;
pub use in_memory::{InMemoryAuthorizationClient, StoredAuthorization};
pub use targeted::TargetedClient;
