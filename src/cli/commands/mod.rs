//! CLI command implementations
//!
//! Each subcommand has its own module with:
//! - Args struct for command-line arguments
//! - `run()` function to execute the command

use crate::app::AppContext;
use crate::cli::Commands;
use crate::error::Result;

pub mod estimate;
pub mod migrate;
pub mod parse;

/// Dispatch a command to its handler
pub fn run(ctx: &AppContext, command: &Commands) -> Result<()> {
    match command {
        Commands::Migrate(args) => migrate::run(ctx, args),
        Commands::Parse(args) => parse::run(ctx, args),
        Commands::Estimate(args) => estimate::run(ctx, args),
    }
}
