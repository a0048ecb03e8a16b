//! Configuration file loading.

use std::path::{Path, PathBuf};

use tracing::{debug, error};

use bpms_auth_core::{AuthConfig, Error, Result};

/// Load every file, in order. The first unreadable or invalid file aborts.
pub fn load_auth_configs(paths: &[PathBuf]) -> Result<Vec<AuthConfig>> {
    paths.iter().map(|path| load_auth_config(path)).collect()
}

pub fn load_auth_config(path: &Path) -> Result<AuthConfig> {
    let invalid = |reason: String| {
        error!(path = %path.display(), reason, "Invalid authorization configuration");
        Error::configuration(format!("Invalid configuration: {}", path.display()))
    };

    let bytes = std::fs::read(path).map_err(|e| invalid(e.to_string()))?;
    let config = AuthConfig::from_yaml(&bytes).map_err(|e| invalid(e.to_string()))?;

    debug!(
        path = %path.display(),
        process_definitions = config.authorization.process_definitions.len(),
        "Loaded authorization configuration"
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use bpms_auth_core::ProcessDefinitionAuthConfig;

    use super::*;

    fn fixture(name: &str) -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
    }

    #[test]
    fn loads_files_in_order() {
        let configs =
            load_auth_configs(&[fixture("test-config1.yml"), fixture("test-config2.yml")]).unwrap();

        assert_eq!(
            configs,
            vec![
                AuthConfig::new(vec![
                    ProcessDefinitionAuthConfig::new("Process_1", ["officer", "citizen"]),
                    ProcessDefinitionAuthConfig::new("business-process", ["officer"]),
                ]),
                AuthConfig::new(vec![ProcessDefinitionAuthConfig::new("Process_2", ["citizen"])]),
            ]
        );
    }

    #[test]
    fn missing_file_names_the_path() {
        let path = fixture("does-not-exist.yml");
        let err = load_auth_config(&path).unwrap_err();

        assert_eq!(
            err,
            Error::configuration(format!("Invalid configuration: {}", path.display()))
        );
    }

    #[test]
    fn malformed_file_is_rejected() {
        let err = load_auth_configs(&[fixture("test-config1.yml"), fixture("invalid-config.yml")])
            .unwrap_err();
        assert!(matches!(err, Error::Configuration(msg) if msg.contains("invalid-config.yml")));
    }
}
