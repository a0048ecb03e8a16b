//! Runtime wiring.

use std::sync::Arc;

use anyhow::Context;
use tracing::info;

use bpms_auth_client::{
    ApiGeneration, AuthorizationClient, BulkClient, HttpTransport, TargetedClient,
};
use bpms_auth_core::Result;
use bpms_auth_engine::{ReconcileReport, Reconciler};

use crate::{Args, Settings, load_auth_configs};

/// Client for the configured protocol generation.
pub fn build_client(settings: &Settings) -> Result<Arc<dyn AuthorizationClient>> {
    let http = HttpTransport::new(&settings.bpms_url, settings.token.clone())?;

    Ok(match settings.api {
        ApiGeneration::Targeted => Arc::new(
            TargetedClient::new(http).with_permission_filter(settings.permission_filter),
        ),
        ApiGeneration::Bulk => Arc::new(BulkClient::new(http)),
    })
}

/// One full run. Arguments and every configuration file are validated before
/// the first request is sent.
pub async fn run(args: Args) -> anyhow::Result<ReconcileReport> {
    let settings = Settings::from_args(args)?;
    let configs = load_auth_configs(&settings.auth_files)?;
    let client = build_client(&settings)?;

    info!(
        bpms_url = %settings.bpms_url,
        api = %settings.api,
        files = settings.auth_files.len(),
        max_attempts = settings.retry.max_attempts,
        "Reconciling authorizations"
    );

    let reconciler = Reconciler::new(client, settings.reconciler_config());
    reconciler
        .reconcile(&configs)
        .await
        .context("authorization reconciliation failed")
}
