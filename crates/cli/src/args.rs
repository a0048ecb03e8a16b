use std::path::PathBuf;

use clap::{ArgAction, Parser};

use bpms_auth_client::ApiGeneration;

/// Recreate BPMS authorizations from declarative role mappings.
///
/// Arguments use the `--KEY=value` form; each one can also come from the
/// environment variable of the same name.
#[derive(Debug, Clone, Parser)]
#[command(name = "bpms-auth-generator", version)]
pub struct Args {
    /// Base URL of the business-process engine.
    #[arg(long = "BPMS_URL", env = "BPMS_URL")]
    pub bpms_url: Option<String>,

    /// File holding the access token.
    #[arg(long = "BPMS_TOKEN", env = "BPMS_TOKEN")]
    pub bpms_token: Option<PathBuf>,

    /// Comma-separated authorization configuration files (YAML).
    #[arg(long = "AUTH_FILES", env = "AUTH_FILES")]
    pub auth_files: Option<String>,

    /// Protocol generation of the authorization API: `targeted` or `bulk`.
    #[arg(long = "AUTH_API", env = "AUTH_API", default_value = "targeted")]
    pub auth_api: ApiGeneration,

    /// Send the granted permission sets as a search filter (targeted api only).
    #[arg(
        long = "PERMISSION_FILTER",
        env = "PERMISSION_FILTER",
        default_value_t = false,
        action = ArgAction::Set
    )]
    pub permission_filter: bool,

    /// Attempts per operation (clean, create) before giving up.
    #[arg(long = "RETRY_MAX_ATTEMPTS", env = "RETRY_MAX_ATTEMPTS", default_value_t = 3)]
    pub retry_max_attempts: u32,

    /// Delay between attempts, in milliseconds.
    #[arg(long = "RETRY_DELAY_MS", env = "RETRY_DELAY_MS", default_value_t = 1000)]
    pub retry_delay_ms: u64,

    /// Fail when the engine reports fewer/more created authorizations than configured.
    #[arg(
        long = "STRICT_COUNTS",
        env = "STRICT_COUNTS",
        default_value_t = false,
        action = ArgAction::Set
    )]
    pub strict_counts: bool,
}
