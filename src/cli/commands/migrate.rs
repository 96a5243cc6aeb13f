//! epicport migrate - Convert every epic document into tracker commands

use std::path::PathBuf;

use clap::Args;
use console::style;
use serde::Serialize;
use tracing::info;

use crate::app::AppContext;
use crate::cli::output::{emit_json, robot_ok, robot_partial};
use crate::discovery::discover_documents;
use crate::epic::EpicParser;
use crate::error::{Result, StructuredError};
use crate::migrate::{
    BatchReport, MigrationPlan, MigrationSummary, Renderer, RendererKind, TrackerSettings,
    parse_batch,
};

#[derive(Args, Debug)]
pub struct MigrateArgs {
    /// Directory containing the epic documents (default: docs/prd)
    #[arg(long)]
    pub dir: Option<PathBuf>,

    /// File name pattern for epic documents (default: epic-*.md)
    #[arg(long)]
    pub pattern: Option<String>,

    /// How to render the generated issues
    #[arg(long, value_enum)]
    pub renderer: Option<RendererKind>,

    /// Tracker project key (default: BAT)
    #[arg(long)]
    pub project: Option<String>,

    /// Where to write the JSON summary (default: migration_summary.json)
    #[arg(long)]
    pub summary: Option<PathBuf>,

    /// Do not write the summary file
    #[arg(long)]
    pub no_summary: bool,
}

#[derive(Serialize)]
struct MigrateReport {
    plans: Vec<MigrationPlan>,
    failures: Vec<FailedDocument>,
    summary: MigrationSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary_path: Option<String>,
}

#[derive(Serialize)]
struct FailedDocument {
    source: String,
    error: StructuredError,
}

pub fn run(ctx: &AppContext, args: &MigrateArgs) -> Result<()> {
    let input_dir = ctx.resolve(args.dir.as_ref().unwrap_or(&ctx.config.input.dir));
    let pattern = args.pattern.as_deref().unwrap_or(&ctx.config.input.pattern);
    let renderer = args
        .renderer
        .unwrap_or(ctx.config.tracker.renderer)
        .renderer();
    let mut settings = ctx.config.tracker.settings();
    if let Some(project) = &args.project {
        settings.project_key.clone_from(project);
    }

    let documents = discover_documents(&input_dir, pattern)?;
    info!(count = documents.len(), dir = %input_dir.display(), "migrating epic documents");

    if !ctx.output_format.is_machine_readable() {
        println!("Found {} epic files to migrate:", documents.len());
        for path in &documents {
            let name = path
                .file_name()
                .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
            println!("  - {name}");
        }
        println!("\nParsing epics...");
    }

    let parser = EpicParser::with_annotator(ctx.config.tracker.annotator());
    let report = parse_batch(&parser, &documents);
    let summary = report.summary();

    let summary_path = (!args.no_summary && ctx.config.output.write_summary).then(|| {
        ctx.resolve(args.summary.as_ref().unwrap_or(&ctx.config.output.summary_path))
    });
    if let Some(path) = &summary_path {
        summary.write_json(path)?;
    }

    if ctx.output_format.is_machine_readable() {
        return emit_machine(&report, &settings, summary, summary_path);
    }

    print_batch(&report, &settings, renderer.as_ref())?;
    print_summary(&summary);
    if let Some(path) = &summary_path {
        println!("\nSummary written to {}", path.display());
    }
    println!("\nMigration commands generated. Execute them against the tracker to complete the migration.");
    Ok(())
}

fn emit_machine(
    report: &BatchReport,
    settings: &TrackerSettings,
    summary: MigrationSummary,
    summary_path: Option<PathBuf>,
) -> Result<()> {
    let failures: Vec<FailedDocument> = report
        .failures()
        .map(|(source, err)| FailedDocument {
            source: source.to_string(),
            error: StructuredError::from(err),
        })
        .collect();
    let failed = failures.len();
    let data = MigrateReport {
        plans: report.plans(settings),
        failures,
        summary,
        summary_path: summary_path.map(|p| p.display().to_string()),
    };
    let completed = data.plans.len();

    if failed == 0 {
        emit_json(&robot_ok(data))
    } else {
        emit_json(&robot_partial(data, completed, failed))
    }
}

fn print_batch(report: &BatchReport, settings: &TrackerSettings, renderer: &dyn Renderer) -> Result<()> {
    for entry in report.entries() {
        match &entry.outcome {
            Ok(epic) => {
                let plan = MigrationPlan::from_epic(epic, settings);
                let rendered = renderer.render_plan(&plan)?;

                println!("\n=== Migrating Epic: {} ===", epic.title);
                if let Some((epic_command, story_commands)) = rendered.split_first() {
                    println!("Execute this command:");
                    println!("{epic_command}");
                    println!("\nCreate {} stories for this epic:", story_commands.len());
                    for (index, command) in story_commands.iter().enumerate() {
                        println!("\nStory {}:", index + 1);
                        println!("{command}");
                    }
                }

                println!(
                    "{} Parsed {}: {} stories, {} estimated points",
                    style("✓").green(),
                    epic.title,
                    plan.record.story_count,
                    plan.record.estimated_total_points
                );
            }
            Err(err) => {
                println!(
                    "{} Error parsing {}: {err}",
                    style("✗").red(),
                    entry.display_name()
                );
            }
        }
    }
    Ok(())
}

fn print_summary(summary: &MigrationSummary) {
    let rule = "=".repeat(50);
    println!("\n{rule}");
    println!("{}", style("MIGRATION SUMMARY").bold());
    println!("{rule}");
    println!("Total Epics: {}", summary.total_epics);
    println!("Total Stories: {}", summary.total_stories);
    println!("Total Estimated Points: {}", summary.total_estimated_points);
}
