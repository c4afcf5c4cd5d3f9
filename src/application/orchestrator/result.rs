//! Orchestrator Results

use crate::domain::ports::StatusResult;
use crate::error::BerthError;

/// Status of one workload, or why it could not be computed
#[derive(Debug)]
pub struct StatusEntry {
    pub name: String,
    pub result: Result<StatusResult, BerthError>,
}

impl StatusEntry {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}
