/// Counts reported by the client for one create operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CreateReport {
    pub process_definition: u64,
    pub process_instance: u64,
}

impl CreateReport {
    pub fn total(&self) -> u64 {
        self.process_definition + self.process_instance
    }
}

/// Outcome of a full `clean → create` run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    pub deleted: u64,
    pub created: CreateReport,
}
