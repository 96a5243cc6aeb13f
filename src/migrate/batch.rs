//! Sequential batch parsing with per-document fault isolation.

use std::path::{Path, PathBuf};

use tracing::warn;

use super::plan::{MigrationPlan, MigrationRecord, TrackerSettings};
use super::summary::MigrationSummary;
use crate::epic::{Epic, EpicParser};
use crate::error::{MigrateError, Result};

/// One input document and what became of it.
#[derive(Debug)]
pub struct BatchEntry {
    pub source: String,
    pub outcome: Result<Epic>,
}

impl BatchEntry {
    /// File name of the source, or the whole identifier if it has none.
    #[must_use]
    pub fn display_name(&self) -> String {
        Path::new(&self.source)
            .file_name()
            .map_or_else(|| self.source.clone(), |name| name.to_string_lossy().into_owned())
    }
}

/// Results of a batch run, in input order.
#[derive(Debug, Default)]
pub struct BatchReport {
    entries: Vec<BatchEntry>,
}

impl BatchReport {
    #[must_use]
    pub fn entries(&self) -> &[BatchEntry] {
        &self.entries
    }

    /// Successfully parsed epics, in input order.
    pub fn epics(&self) -> impl Iterator<Item = &Epic> {
        self.entries.iter().filter_map(|entry| entry.outcome.as_ref().ok())
    }

    /// Failed sources with their errors, in input order.
    pub fn failures(&self) -> impl Iterator<Item = (&str, &MigrateError)> {
        self.entries
            .iter()
            .filter_map(|entry| entry.outcome.as_ref().err().map(|err| (entry.source.as_str(), err)))
    }

    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.failures().count()
    }

    /// Migration plans for every parsed epic.
    #[must_use]
    pub fn plans(&self, settings: &TrackerSettings) -> Vec<MigrationPlan> {
        self.epics()
            .map(|epic| MigrationPlan::from_epic(epic, settings))
            .collect()
    }

    /// Summary over the successfully parsed epics only.
    #[must_use]
    pub fn summary(&self) -> MigrationSummary {
        MigrationSummary::from_records(self.epics().map(MigrationRecord::from_epic).collect())
    }
}

/// Parse every file in `paths`, continuing past unreadable ones.
#[must_use]
pub fn parse_batch(parser: &EpicParser, paths: &[PathBuf]) -> BatchReport {
    parse_batch_with(
        parser,
        paths.iter().map(|path| path.display().to_string()),
        |source| {
            std::fs::read_to_string(source).map_err(|err| MigrateError::ReadDocument {
                path: source.to_string(),
                source: err,
            })
        },
    )
}

/// Parse documents obtained through `load`, one entry per source.
///
/// A loader error is recorded against its source and the batch moves on.
pub fn parse_batch_with<I, S, F>(parser: &EpicParser, sources: I, mut load: F) -> BatchReport
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
    F: FnMut(&str) -> Result<String>,
{
    let entries = sources
        .into_iter()
        .map(|source| {
            let source: String = source.into();
            let outcome = load(&source).map(|content| parser.parse(&content, source.clone()));
            if let Err(err) = &outcome {
                warn!(source = %source, error = %err, "skipping epic document");
            }
            BatchEntry { source, outcome }
        })
        .collect();
    BatchReport { entries }
}
