use serde::{Deserialize, Serialize};

/// Permission names understood by the remote engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PermissionKind {
    Read,
    CreateInstance,
    Create,
}

impl PermissionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PermissionKind::Read => "READ",
            PermissionKind::CreateInstance => "CREATE_INSTANCE",
            PermissionKind::Create => "CREATE",
        }
    }

    /// Comma-joined wire form used by search query parameters.
    pub fn join(permissions: &[PermissionKind]) -> String {
        permissions
            .iter()
            .map(PermissionKind::as_str)
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl core::fmt::Display for PermissionKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
