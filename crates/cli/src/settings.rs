//! Validated run settings.

use std::path::{Path, PathBuf};
use std::time::Duration;

use bpms_auth_client::ApiGeneration;
use bpms_auth_core::{Error, Result};
use bpms_auth_engine::{ReconcilerConfig, RetryPolicy};
use bpms_auth_observability::Confidential;

use crate::Args;

pub const MISSING_URL: &str = "Bpms url is not found";
pub const MISSING_TOKEN: &str = "Bpms token is not found";
pub const MISSING_AUTH_FILES: &str = "Config files are not found";

/// Everything a run needs, checked before any network activity.
#[derive(Debug, Clone)]
pub struct Settings {
    pub bpms_url: String,
    pub token: Confidential<String>,
    pub auth_files: Vec<PathBuf>,
    pub api: ApiGeneration,
    pub permission_filter: bool,
    pub retry: RetryPolicy,
    pub strict_counts: bool,
}

impl Settings {
    pub fn from_args(args: Args) -> Result<Self> {
        let bpms_url = required(args.bpms_url, MISSING_URL)?;
        let token_path = args
            .bpms_token
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or_else(|| Error::configuration(MISSING_TOKEN))?;
        let auth_files = split_auth_files(args.auth_files.as_deref().unwrap_or_default());
        if auth_files.is_empty() {
            return Err(Error::configuration(MISSING_AUTH_FILES));
        }
        let token = read_token(&token_path)?;

        Ok(Self {
            bpms_url,
            token,
            auth_files,
            api: args.auth_api,
            permission_filter: args.permission_filter,
            retry: RetryPolicy::fixed(
                args.retry_max_attempts,
                Duration::from_millis(args.retry_delay_ms),
            ),
            strict_counts: args.strict_counts,
        })
    }

    pub fn reconciler_config(&self) -> ReconcilerConfig {
        ReconcilerConfig::default()
            .with_retry(self.retry)
            .with_strict_counts(self.strict_counts)
    }
}

fn required(value: Option<String>, missing: &str) -> Result<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| Error::configuration(missing))
}

/// Split the comma-separated file list, ignoring empty entries.
pub fn split_auth_files(value: &str) -> Vec<PathBuf> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
        .collect()
}

/// Read the token file verbatim (UTF-8).
///
/// The value is sent as an HTTP header, so only visible ASCII is accepted;
/// line breaks, spaces and non-ASCII characters are rejected, not stripped.
pub fn read_token(path: &Path) -> Result<Confidential<String>> {
    let token = std::fs::read_to_string(path).map_err(|e| {
        Error::configuration(format!("Bpms token file {} cannot be read: {e}", path.display()))
    })?;

    if token.is_empty() {
        return Err(Error::configuration(format!(
            "Bpms token file {} is empty",
            path.display()
        )));
    }
    if !token.chars().all(|c| c.is_ascii_graphic()) {
        return Err(Error::configuration(format!(
            "Bpms token file {} contains characters not allowed in a header",
            path.display()
        )));
    }

    Ok(Confidential::new(token))
}
