pub mod app;
pub mod cli;
pub mod config;
pub mod discovery;
pub mod epic;
pub mod error;
pub mod migrate;

pub use error::{MigrateError, Result};

/// Package version from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
