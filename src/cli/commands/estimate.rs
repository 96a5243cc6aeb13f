//! epicport estimate - Show how a story would be sized and labelled

use clap::Args;
use serde::Serialize;

use crate::app::AppContext;
use crate::cli::output::{HumanLayout, emit_human, emit_json, robot_ok};
use crate::epic::estimate::{points_for_weight, story_weight};
use crate::error::Result;

#[derive(Args, Debug)]
pub struct EstimateArgs {
    /// Story title (without its number)
    #[arg(long)]
    pub title: String,

    /// User story text
    #[arg(long, default_value = "")]
    pub description: String,
}

#[derive(Debug, Serialize)]
struct Estimate {
    weight: u32,
    points: u32,
    labels: Vec<String>,
}

pub fn run(ctx: &AppContext, args: &EstimateArgs) -> Result<()> {
    let annotator = ctx.config.tracker.annotator();
    let weight = story_weight(&args.title, &args.description);
    let estimate = Estimate {
        weight,
        points: points_for_weight(weight),
        labels: annotator.labels(&args.title, &args.description),
    };

    if ctx.output_format.is_machine_readable() {
        return emit_json(&robot_ok(estimate));
    }

    let mut layout = HumanLayout::new();
    layout
        .kv("Keyword weight", &estimate.weight.to_string())
        .kv("Story points", &estimate.points.to_string())
        .kv("Labels", &estimate.labels.join(", "));
    emit_human(layout);
    Ok(())
}
