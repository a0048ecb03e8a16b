//! `clean → create` orchestration.

use tracing::{debug, info, warn};

use bpms_auth_client::AuthorizationClient;
use bpms_auth_core::{AuthConfig, GrantPlan};

use crate::{CreateReport, EngineError, EngineResult, ReconcileReport, RetryPolicy, retry};

/// Reconciliation engine configuration.
#[derive(Debug, Clone, Default)]
pub struct ReconcilerConfig {
    /// Policy applied to each of clean and create as a whole
    pub retry: RetryPolicy,
    /// Fail when the remote reports a created count different from the derived one
    pub strict_counts: bool,
}

impl ReconcilerConfig {
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn with_strict_counts(mut self, strict: bool) -> Self {
        self.strict_counts = strict;
        self
    }
}

/// Drives one reconciliation run against an [`AuthorizationClient`].
#[derive(Debug)]
pub struct Reconciler<C> {
    client: C,
    config: ReconcilerConfig,
}

impl<C: AuthorizationClient> Reconciler<C> {
    pub fn new(client: C, config: ReconcilerConfig) -> Self {
        Self { client, config }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Clean, then create. Create runs even when nothing was deleted and clean
    /// runs even when `configs` is empty.
    pub async fn reconcile(&self, configs: &[AuthConfig]) -> EngineResult<ReconcileReport> {
        let deleted = self.clean_authorizations().await?;
        let created = self.create_authorizations(configs).await?;
        Ok(ReconcileReport { deleted, created })
    }

    /// Remove every authorization previously generated by this tool.
    pub async fn clean_authorizations(&self) -> EngineResult<u64> {
        info!(api = %self.client.generation(), "Deleting authorizations...");

        let deleted = retry(&self.config.retry, "clean_authorizations", || async {
            self.client.remove_generated().await.map_err(EngineError::from)
        })
        .await?;

        info!(deleted, "Authorizations deleted: {}", deleted);
        Ok(deleted)
    }

    /// Create every authorization implied by `configs`.
    pub async fn create_authorizations(
        &self,
        configs: &[AuthConfig],
    ) -> EngineResult<CreateReport> {
        info!(api = %self.client.generation(), "Creating authorizations...");

        let plan = GrantPlan::derive(configs);
        debug!(
            process_definition = plan.process_definition_grants().len(),
            process_instance = plan.process_instance_grants().len(),
            "Derived authorizations"
        );

        let report = retry(&self.config.retry, "create_authorizations", || {
            self.create_plan(&plan)
        })
        .await?;

        info!(
            process_definition = report.process_definition,
            process_instance = report.process_instance,
            "Authorizations created: {}",
            report.total()
        );
        Ok(report)
    }

    async fn create_plan(&self, plan: &GrantPlan) -> EngineResult<CreateReport> {
        let definitions = plan.process_definition_grants();
        let process_definition = self
            .client
            .create_process_definition_grants(definitions)
            .await?;
        self.check_count("process definition", definitions.len(), process_definition)?;

        let instances = plan.process_instance_grants();
        let process_instance = self
            .client
            .create_process_instance_grants(instances)
            .await?;
        self.check_count("process instance", instances.len(), process_instance)?;

        Ok(CreateReport {
            process_definition,
            process_instance,
        })
    }

    fn check_count(&self, scope: &'static str, expected: usize, actual: u64) -> EngineResult<()> {
        let expected = expected as u64;
        if expected == actual {
            return Ok(());
        }

        if self.config.strict_counts {
            return Err(EngineError::CountMismatch {
                scope,
                expected,
                actual,
            });
        }

        warn!(scope, expected, actual, "Created authorization count differs from configuration");
        Ok(())
    }
}
