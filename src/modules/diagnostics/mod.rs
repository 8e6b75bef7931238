use std::sync::{Arc, Mutex, PoisonError};

use tracing::error;

use crate::error::FetchError;

pub const FAILURE_PREFIX: &str = "Failed to fetch data";

pub trait Diagnostics: Send + Sync + 'static {
    fn report(&self, failure: &FetchError);
}

/// Operator-facing channel: one `error` event per failed cycle.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn report(&self, failure: &FetchError) {
        error!(error = %failure, "{FAILURE_PREFIX}");
    }
}

// keeps every record in memory, used when embedding the controller and in tests
#[derive(Clone, Debug, Default)]
pub struct MemoryDiagnostics {
    records: Arc<Mutex<Vec<String>>>,
}

impl MemoryDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<String> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Diagnostics for MemoryDiagnostics {
    fn report(&self, failure: &FetchError) {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(format!("{FAILURE_PREFIX}: {failure}"));
    }
}
