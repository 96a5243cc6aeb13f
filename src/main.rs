//! epicport - Epic markdown to Jira migration commands
//!
//! Dry-run converter: parses `docs/prd/epic-*.md` and prints the tracker
//! commands a human or agent runs to recreate the epics and stories.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use epicport::Result;
use epicport::app::AppContext;
use epicport::cli::output::{emit_json, robot_error_structured};
use epicport::cli::{Cli, OutputFormat};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let format = cli.output_format();
    if !format.use_colors() {
        console::set_colors_enabled(false);
    }
    init_tracing(&cli, format);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if format.is_machine_readable() {
                if emit_json(&robot_error_structured(&e)).is_err() {
                    eprintln!("Error: {e}");
                }
            } else {
                eprintln!("Error: {e}");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let ctx = AppContext::from_cli(cli)?;
    epicport::cli::commands::run(&ctx, &cli.command)
}

fn init_tracing(cli: &Cli, format: OutputFormat) {
    if cli.quiet {
        return;
    }

    let filter = match cli.verbose {
        0 => "warn,epicport=info",
        1 => "info,epicport=debug",
        2 => "debug,epicport=trace",
        _ => "trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if format.is_machine_readable() {
        // JSON logs keep stderr parseable alongside JSON stdout
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .with_ansi(format.use_colors())
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}
