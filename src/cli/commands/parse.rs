//! epicport parse - Parse a single epic document

use std::path::PathBuf;

use clap::Args;

use crate::app::AppContext;
use crate::cli::output::{HumanLayout, emit_human, emit_json, robot_ok};
use crate::epic::{Epic, EpicParser};
use crate::error::Result;

#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Epic markdown file
    pub file: PathBuf,
}

pub fn run(ctx: &AppContext, args: &ParseArgs) -> Result<()> {
    let parser = EpicParser::with_annotator(ctx.config.tracker.annotator());
    let epic = parser.parse_file(&ctx.resolve(&args.file))?;

    if ctx.output_format.is_machine_readable() {
        return emit_json(&robot_ok(&epic));
    }

    emit_human(epic_layout(&epic));
    Ok(())
}

fn epic_layout(epic: &Epic) -> HumanLayout {
    let mut layout = HumanLayout::new();
    layout
        .title(&epic.title)
        .kv("Source", &epic.source_file)
        .kv("Stories", &epic.story_count().to_string())
        .kv("Estimated points", &epic.total_points().to_string())
        .blank()
        .section("Overview")
        .push_line(epic.description.as_str())
        .blank()
        .section("Architecture Context")
        .push_line(epic.architecture_context.as_str())
        .blank()
        .section("Business Value")
        .push_line(epic.business_value.as_str());

    if epic.stories.is_empty() {
        return layout;
    }

    layout.blank().section("Stories");
    for story in &epic.stories {
        layout.bullet(&format!(
            "{} ({} pts) [{}]",
            story.title,
            story.estimated_points,
            story.labels.join(", ")
        ));
        for criterion in &story.acceptance_criteria {
            layout.push_line(format!("    - {criterion}"));
        }
    }
    layout
}
