//! Derivation of the desired authorization set from configuration.
//!
//! - One process-definition grant per `(process_definition_id, role)` pair, in
//!   file order, duplicates included.
//! - One process-instance grant per distinct role across all files, in
//!   first-seen order.

use std::collections::HashSet;

use crate::{AuthConfig, AuthorizationGrant, Role};

/// Every grant a reconciliation run must create.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GrantPlan {
    process_definition: Vec<AuthorizationGrant>,
    process_instance: Vec<AuthorizationGrant>,
}

impl GrantPlan {
    pub fn derive(configs: &[AuthConfig]) -> Self {
        let process_definition = configs
            .iter()
            .flat_map(AuthConfig::process_definitions)
            .flat_map(|pd| {
                pd.roles.iter().map(|role| {
                    AuthorizationGrant::process_definition(&pd.process_definition_id, role.clone())
                })
            })
            .collect();

        let process_instance = distinct_roles(configs)
            .into_iter()
            .map(AuthorizationGrant::process_instance)
            .collect();

        Self {
            process_definition,
            process_instance,
        }
    }

    pub fn process_definition_grants(&self) -> &[AuthorizationGrant] {
        &self.process_definition
    }

    pub fn process_instance_grants(&self) -> &[AuthorizationGrant] {
        &self.process_instance
    }

    pub fn total(&self) -> usize {
        self.process_definition.len() + self.process_instance.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Distinct roles across every process definition of every file, first-seen order.
pub fn distinct_roles(configs: &[AuthConfig]) -> Vec<Role> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut roles = Vec::new();

    for role in configs
        .iter()
        .flat_map(AuthConfig::process_definitions)
        .flat_map(|pd| pd.roles.iter())
    {
        if seen.insert(role.as_str()) {
            roles.push(role.clone());
        }
    }

    roles
}
