//! Declarative configuration model (one `AuthConfig` per file).
//!
//! ```yaml
//! authorization:
//!   process_definitions:
//!     - process_definition_id: Process_1
//!       roles: [officer, citizen]
//! ```
//!
//! Unknown fields are ignored so that files may carry other sections.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::{Error, Result, Role};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthConfig {
    pub authorization: AuthDefinition,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthDefinition {
    #[serde(default)]
    pub process_definitions: Vec<ProcessDefinitionAuthConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessDefinitionAuthConfig {
    pub process_definition_id: String,
    #[serde(default)]
    pub roles: Vec<Role>,
}

impl AuthConfig {
    pub fn new(process_definitions: Vec<ProcessDefinitionAuthConfig>) -> Self {
        Self {
            authorization: AuthDefinition {
                process_definitions,
            },
        }
    }

    /// Parse and validate one YAML configuration document.
    pub fn from_yaml(bytes: &[u8]) -> Result<Self> {
        let config: AuthConfig = serde_yaml::from_slice(bytes)
            .map_err(|e| Error::configuration(format!("malformed configuration: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        for (idx, pd) in self.process_definitions().enumerate() {
            if pd.process_definition_id.trim().is_empty() {
                return Err(Error::configuration(format!(
                    "process_definitions[{idx}]: process_definition_id must not be empty"
                )));
            }
        }
        Ok(())
    }

    pub fn process_definitions(&self) -> impl Iterator<Item = &ProcessDefinitionAuthConfig> {
        self.authorization.process_definitions.iter()
    }
}

impl ProcessDefinitionAuthConfig {
    pub fn new<I, R>(process_definition_id: impl Into<String>, roles: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<Cow<'static, str>>,
    {
        Self {
            process_definition_id: process_definition_id.into(),
            roles: roles.into_iter().map(Role::new).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_process_definitions_in_file_order() {
        let yaml = br#"
authorization:
  process_definitions:
    - process_definition_id: Process_1
      roles:
        - officer
        - citizen
    - process_definition_id: business-process
      roles: [officer]
"#;

        let config = AuthConfig::from_yaml(yaml).unwrap();

        assert_eq!(
            config,
            AuthConfig::new(vec![
                ProcessDefinitionAuthConfig::new("Process_1", ["officer", "citizen"]),
                ProcessDefinitionAuthConfig::new("business-process", ["officer"]),
            ])
        );
    }

    #[test]
    fn ignores_unknown_fields() {
        let yaml = br#"
version: 2
authorization:
  owner: platform-team
  process_definitions:
    - process_definition_id: Process_2
      description: citizen onboarding
      roles: [citizen]
"#;

        let config = AuthConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.process_definitions().count(), 1);
    }

    #[test]
    fn missing_lists_default_to_empty() {
        let config = AuthConfig::from_yaml(b"authorization: {}\n").unwrap();
        assert_eq!(config.process_definitions().count(), 0);

        let yaml = b"authorization:\n  process_definitions:\n    - process_definition_id: p\n";
        let config = AuthConfig::from_yaml(yaml).unwrap();
        assert!(config.authorization.process_definitions[0].roles.is_empty());
    }

    #[test]
    fn rejects_empty_process_definition_id() {
        let yaml = br#"
authorization:
  process_definitions:
    - process_definition_id: ''
      roles: [officer]
"#;
        let err = AuthConfig::from_yaml(yaml).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn rejects_malformed_yaml() {
        let err = AuthConfig::from_yaml(b"authorization: [unclosed").unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }
}
