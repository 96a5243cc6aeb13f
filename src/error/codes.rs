//! Standardized error codes for machine-parseable output.
//!
//! Error codes follow a numeric taxonomy:
//! - 1xx: Input discovery errors
//! - 2xx: Document errors
//! - 3xx: Config errors
//! - 6xx: Storage errors
//! - 9xx: Internal errors

use serde::{Deserialize, Serialize};

/// Standardized error codes for JSON output.
///
/// Each variant maps to a numeric code (e.g., `InputNotFound` -> E101).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // ========================================
    // Input errors (1xx)
    // ========================================
    /// E101: No epic documents matched the input directory and pattern
    InputNotFound,
    /// E102: The document glob pattern could not be parsed
    InputPatternInvalid,

    // ========================================
    // Document errors (2xx)
    // ========================================
    /// E201: An epic document could not be read
    DocumentReadError,

    // ========================================
    // Config errors (3xx)
    // ========================================
    /// E301: Explicit config file not found
    ConfigNotFound,
    /// E302: Config file has invalid syntax or values
    ConfigInvalid,
    /// E303: Required config value is missing
    ConfigMissingRequired,

    // ========================================
    // Storage errors (6xx)
    // ========================================
    /// E605: Failed to serialize output data
    SerializationError,

    // ========================================
    // Internal errors (9xx)
    // ========================================
    /// E906: IO operation failed
    IoError,
}

impl ErrorCode {
    /// Get the numeric error code (e.g., `InputNotFound` -> 101).
    #[must_use]
    pub const fn numeric(&self) -> u16 {
        match self {
            Self::InputNotFound => 101,
            Self::InputPatternInvalid => 102,
            Self::DocumentReadError => 201,
            Self::ConfigNotFound => 301,
            Self::ConfigInvalid => 302,
            Self::ConfigMissingRequired => 303,
            Self::SerializationError => 605,
            Self::IoError => 906,
        }
    }

    /// Get the error code as a formatted string (e.g., "E101").
    #[must_use]
    pub fn code_string(&self) -> String {
        format!("E{}", self.numeric())
    }

    /// Get the default suggestion for this error code.
    #[must_use]
    pub const fn suggestion(&self) -> &'static str {
        match self {
            Self::InputNotFound => "Check --dir and --pattern. Epic documents are expected as docs/prd/epic-*.md",
            Self::InputPatternInvalid => "Use a glob such as `epic-*.md`. Brackets and `**` must be balanced",
            Self::DocumentReadError => "Check the file exists, is readable, and is valid UTF-8",
            Self::ConfigNotFound => "Create the config file or drop --config to use the defaults",
            Self::ConfigInvalid => "Check TOML syntax in the config file and the EPICPORT_* environment variables",
            Self::ConfigMissingRequired => "Set the required value in epicport.toml or via its EPICPORT_* variable",
            Self::SerializationError => "The data could not be encoded as JSON. Please report this issue",
            Self::IoError => "File operation failed. Check path exists and permissions are correct",
        }
    }

    /// Check if this error is potentially recoverable by the user.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        !matches!(self, Self::SerializationError)
    }

    /// Get the error category name.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self.numeric() / 100 {
            1 => "input",
            2 => "document",
            3 => "config",
            6 => "storage",
            9 => "internal",
            _ => "unknown",
        }
    }

    /// Iterate over all error codes.
    pub fn all() -> impl Iterator<Item = Self> {
        [
            Self::InputNotFound,
            Self::InputPatternInvalid,
            Self::DocumentReadError,
            Self::ConfigNotFound,
            Self::ConfigInvalid,
            Self::ConfigMissingRequired,
            Self::SerializationError,
            Self::IoError,
        ]
        .into_iter()
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code_string())
    }
}
