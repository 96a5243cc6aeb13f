//! Shared state handed to every command.

use std::path::PathBuf;

use crate::cli::{Cli, OutputFormat};
use crate::config::Config;
use crate::error::Result;

pub struct AppContext {
    pub config: Config,
    pub output_format: OutputFormat,
    /// Directory `epicport.toml` and relative paths resolve against
    pub project_root: PathBuf,
}

impl AppContext {
    /// Build the context from parsed CLI flags and the layered config.
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory or config cannot be loaded.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let project_root = std::env::current_dir()?;
        let config = Config::load(cli.config.as_deref(), &project_root)?;
        Ok(Self {
            config,
            output_format: cli.output_format(),
            project_root,
        })
    }

    /// Resolve a possibly relative path against the project root.
    #[must_use]
    pub fn resolve(&self, path: &std::path::Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.project_root.join(path)
        }
    }
}
