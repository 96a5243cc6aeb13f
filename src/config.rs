use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::discovery::{DEFAULT_INPUT_DIR, DEFAULT_PATTERN};
use crate::epic::StoryAnnotator;
use crate::epic::estimate::BASELINE_LABELS;
use crate::error::{MigrateError, Result};
use crate::migrate::{DEFAULT_PROJECT_KEY, DEFAULT_SUMMARY_PATH, RendererKind, TrackerSettings};

/// Project-level config file looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = "epicport.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub tracker: TrackerConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Layer defaults, config files and `EPICPORT_*` environment overrides.
    ///
    /// An explicit path (argument or `EPICPORT_CONFIG`) replaces the global and
    /// project files and must exist.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file cannot be read or parsed, or an
    /// environment override has an invalid value.
    pub fn load(explicit_path: Option<&Path>, project_root: &Path) -> Result<Self> {
        Self::load_with_env(explicit_path, project_root, |key| std::env::var(key).ok())
    }

    /// [`Config::load`] with a custom environment lookup.
    ///
    /// # Errors
    ///
    /// See [`Config::load`].
    pub fn load_with_env<F>(explicit_path: Option<&Path>, project_root: &Path, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| env("EPICPORT_CONFIG").map(PathBuf::from));

        if let Some(path) = explicit {
            let patch = Self::load_patch(&path)?
                .ok_or_else(|| MigrateError::ConfigNotFound(path.display().to_string()))?;
            config.merge_patch(patch);
        } else {
            if let Some(global) = Self::load_global()? {
                config.merge_patch(global);
            }
            if let Some(project) = Self::load_patch(&project_root.join(PROJECT_CONFIG_FILE))? {
                config.merge_patch(project);
            }
        }

        config.apply_env_overrides(&env)?;

        Ok(config)
    }

    fn load_global() -> Result<Option<ConfigPatch>> {
        let Some(dir) = dirs::config_dir() else {
            return Ok(None);
        };
        Self::load_patch(&dir.join("epicport/config.toml"))
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|err| MigrateError::Config(format!("read config {}: {err}", path.display())))?;
        let patch = toml::from_str(&raw)
            .map_err(|err| MigrateError::Config(format!("parse config {}: {err}", path.display())))?;
        Ok(Some(patch))
    }

    fn merge_patch(&mut self, patch: ConfigPatch) {
        if let Some(patch) = patch.input {
            self.input.merge(patch);
        }
        if let Some(patch) = patch.tracker {
            self.tracker.merge(patch);
        }
        if let Some(patch) = patch.output {
            self.output.merge(patch);
        }
    }

    fn apply_env_overrides(&mut self, env: &impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(value) = env("EPICPORT_INPUT_DIR") {
            self.input.dir = PathBuf::from(value);
        }
        if let Some(value) = env("EPICPORT_INPUT_PATTERN") {
            self.input.pattern = value;
        }

        if let Some(value) = env("EPICPORT_PROJECT_KEY") {
            self.tracker.project_key = value;
        }
        if let Some(value) = env("EPICPORT_BASELINE_LABELS") {
            self.tracker.baseline_labels = parse_list(&value);
        }
        if let Some(value) = env("EPICPORT_RENDERER") {
            self.tracker.renderer = value.parse().map_err(|err| {
                MigrateError::Config(format!("invalid EPICPORT_RENDERER value {value}: {err}"))
            })?;
        }

        if let Some(value) = env("EPICPORT_SUMMARY_PATH") {
            self.output.summary_path = PathBuf::from(value);
        }
        if let Some(value) = env("EPICPORT_WRITE_SUMMARY") {
            self.output.write_summary = parse_bool("EPICPORT_WRITE_SUMMARY", &value)?;
        }

        self.validate()
    }

    fn validate(&self) -> Result<()> {
        if self.tracker.project_key.trim().is_empty() {
            return Err(MigrateError::MissingConfig("tracker.project_key".to_string()));
        }
        if self.input.pattern.trim().is_empty() {
            return Err(MigrateError::MissingConfig("input.pattern".to_string()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    #[serde(default = "default_input_dir")]
    pub dir: PathBuf,
    #[serde(default = "default_pattern")]
    pub pattern: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            dir: default_input_dir(),
            pattern: default_pattern(),
        }
    }
}

impl InputConfig {
    fn merge(&mut self, patch: InputPatch) {
        if let Some(value) = patch.dir {
            self.dir = value;
        }
        if let Some(value) = patch.pattern {
            self.pattern = value;
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackerConfig {
    #[serde(default = "default_project_key")]
    pub project_key: String,
    /// Labels every epic and story receives
    #[serde(default = "default_baseline_labels")]
    pub baseline_labels: Vec<String>,
    #[serde(default)]
    pub renderer: RendererKind,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            project_key: default_project_key(),
            baseline_labels: default_baseline_labels(),
            renderer: RendererKind::default(),
        }
    }
}

impl TrackerConfig {
    fn merge(&mut self, patch: TrackerPatch) {
        if let Some(value) = patch.project_key {
            self.project_key = value;
        }
        if let Some(values) = patch.baseline_labels {
            self.baseline_labels = values;
        }
        if let Some(value) = patch.renderer {
            self.renderer = value;
        }
    }

    #[must_use]
    pub fn settings(&self) -> TrackerSettings {
        TrackerSettings {
            project_key: self.project_key.clone(),
            epic_labels: self.baseline_labels.clone(),
        }
    }

    #[must_use]
    pub fn annotator(&self) -> StoryAnnotator {
        StoryAnnotator::with_baseline_labels(self.baseline_labels.iter().cloned())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_summary_path")]
    pub summary_path: PathBuf,
    #[serde(default = "default_true")]
    pub write_summary: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            summary_path: default_summary_path(),
            write_summary: true,
        }
    }
}

impl OutputConfig {
    fn merge(&mut self, patch: OutputPatch) {
        if let Some(value) = patch.summary_path {
            self.summary_path = value;
        }
        if let Some(value) = patch.write_summary {
            self.write_summary = value;
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigPatch {
    pub input: Option<InputPatch>,
    pub tracker: Option<TrackerPatch>,
    pub output: Option<OutputPatch>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct InputPatch {
    pub dir: Option<PathBuf>,
    pub pattern: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct TrackerPatch {
    pub project_key: Option<String>,
    pub baseline_labels: Option<Vec<String>>,
    pub renderer: Option<RendererKind>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct OutputPatch {
    pub summary_path: Option<PathBuf>,
    pub write_summary: Option<bool>,
}

fn default_input_dir() -> PathBuf {
    PathBuf::from(DEFAULT_INPUT_DIR)
}

fn default_pattern() -> String {
    DEFAULT_PATTERN.to_string()
}

fn default_project_key() -> String {
    DEFAULT_PROJECT_KEY.to_string()
}

fn default_baseline_labels() -> Vec<String> {
    BASELINE_LABELS.iter().map(ToString::to_string).collect()
}

fn default_summary_path() -> PathBuf {
    PathBuf::from(DEFAULT_SUMMARY_PATH)
}

const fn default_true() -> bool {
    true
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(MigrateError::Config(format!(
            "invalid {key} value {value} (expected true|false)"
        ))),
    }
}

fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(ToString::to_string)
        .collect()
}
