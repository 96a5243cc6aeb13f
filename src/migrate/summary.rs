//! Aggregate counters across migrated epics.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::plan::MigrationRecord;
use crate::error::Result;

/// Default location of the persisted summary.
pub const DEFAULT_SUMMARY_PATH: &str = "migration_summary.json";

/// Totals over a batch plus the per-epic records they were computed from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MigrationSummary {
    pub total_epics: usize,
    pub total_stories: usize,
    pub total_estimated_points: u32,
    pub epics: Vec<MigrationRecord>,
}

impl MigrationSummary {
    #[must_use]
    pub fn from_records(records: Vec<MigrationRecord>) -> Self {
        Self {
            total_epics: records.len(),
            total_stories: records.iter().map(|r| r.story_count).sum(),
            total_estimated_points: records.iter().map(|r| r.estimated_total_points).sum(),
            epics: records,
        }
    }

    /// Write the summary as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        info!(path = %path.display(), epics = self.total_epics, "wrote migration summary");
        Ok(())
    }
}
