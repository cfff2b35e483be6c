use chrono::{DateTime, Local};

use crate::Decision;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Welcome,
    PickingSource,
    PickingDestination,
    Review,
    FileList,
}

#[derive(Debug, Clone)]
pub struct ScanResult {
    pub photos_found: usize,
    pub duration: std::time::Duration,
    pub timestamp: DateTime<Local>,
}

/// Counters for the current review session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReviewSummary {
    pub kept: usize,
    pub discarded: usize,
    pub copy_failures: usize,
}

impl ReviewSummary {
    pub fn record(&mut self, decision: Decision) {
        match decision {
            Decision::Keep => self.kept += 1,
            Decision::Discard => self.discarded += 1,
        }
    }

    #[must_use]
    pub const fn decided(&self) -> usize {
        self.kept + self.discarded
    }
}
