use serde::{Deserialize, Serialize};

use crate::PermissionKind;

/// Resource type of an authorization, transmitted as the engine's numeric code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum ResourceKind {
    ProcessDefinition,
    ProcessInstance,
}

impl ResourceKind {
    pub const fn code(self) -> u8 {
        match self {
            ResourceKind::ProcessDefinition => 6,
            ResourceKind::ProcessInstance => 8,
        }
    }

    /// Permissions this tool grants on the resource type.
    pub const fn granted_permissions(self) -> &'static [PermissionKind] {
        match self {
            ResourceKind::ProcessDefinition => {
                &[PermissionKind::CreateInstance, PermissionKind::Read]
            }
            ResourceKind::ProcessInstance => &[PermissionKind::Create],
        }
    }
}

impl From<ResourceKind> for u8 {
    fn from(kind: ResourceKind) -> Self {
        kind.code()
    }
}

impl TryFrom<u8> for ResourceKind {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            6 => Ok(ResourceKind::ProcessDefinition),
            8 => Ok(ResourceKind::ProcessInstance),
            other => Err(format!("unsupported resource type code {other}")),
        }
    }
}

impl core::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.code())
    }
}
