//! Locating epic documents on disk.

use std::io;
use std::path::{Path, PathBuf};

use glob::Pattern;
use tracing::debug;

use crate::error::{MigrateError, Result};

pub const DEFAULT_INPUT_DIR: &str = "docs/prd";
pub const DEFAULT_PATTERN: &str = "epic-*.md";

/// Regular files directly inside `dir` whose names match `pattern`, sorted.
///
/// # Errors
///
/// - [`MigrateError::Pattern`] if `pattern` is not a valid glob
/// - [`MigrateError::NoInputs`] if nothing matches, including a missing `dir`
/// - [`MigrateError::Io`] if `dir` exists but cannot be listed
pub fn discover_documents(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let matcher =
        Pattern::new(pattern).map_err(|err| MigrateError::Pattern(format!("{pattern}: {err}")))?;

    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Err(no_inputs(dir, pattern));
        }
        Err(err) => return Err(err.into()),
    };

    let mut documents = Vec::new();
    for entry in entries {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        if matcher.matches(&entry.file_name().to_string_lossy()) {
            documents.push(entry.path());
        }
    }

    if documents.is_empty() {
        return Err(no_inputs(dir, pattern));
    }

    documents.sort();
    debug!(dir = %dir.display(), count = documents.len(), "discovered epic documents");
    Ok(documents)
}

fn no_inputs(dir: &Path, pattern: &str) -> MigrateError {
    MigrateError::NoInputs(dir.join(pattern).display().to_string())
}
