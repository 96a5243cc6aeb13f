//! Rendering of migration drafts into text.
//!
//! Drafts are tracker-neutral; a [`Renderer`] decides what the output looks
//! like. Nothing here talks to a tracker.

use serde::{Deserialize, Serialize};

use super::plan::{EpicDraft, MigrationPlan, StoryDraft};
use crate::error::Result;

/// Turns drafts into text for a particular tracker or format.
pub trait Renderer {
    /// Render the epic creation step.
    ///
    /// # Errors
    ///
    /// Returns an error if the draft cannot be encoded.
    fn render_epic(&self, draft: &EpicDraft) -> Result<String>;

    /// Render one story creation step.
    ///
    /// # Errors
    ///
    /// Returns an error if the draft cannot be encoded.
    fn render_story(&self, draft: &StoryDraft) -> Result<String>;

    /// Render a whole plan: the epic first, then its stories in order.
    ///
    /// # Errors
    ///
    /// Returns the first rendering error.
    fn render_plan(&self, plan: &MigrationPlan) -> Result<Vec<String>> {
        std::iter::once(self.render_epic(&plan.epic))
            .chain(plan.stories.iter().map(|story| self.render_story(story)))
            .collect()
    }
}

/// Selectable renderer implementations.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum RendererKind {
    /// `*jira create-epic` / `*jira create-story` commands
    #[default]
    Jira,
    /// One JSON object per draft
    Json,
}

impl RendererKind {
    #[must_use]
    pub fn renderer(self) -> Box<dyn Renderer> {
        match self {
            Self::Jira => Box::new(JiraCommandRenderer),
            Self::Json => Box::new(JsonRenderer),
        }
    }
}

impl std::str::FromStr for RendererKind {
    type Err = String;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "jira" => Ok(Self::Jira),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown renderer {other} (expected jira|json)")),
        }
    }
}

// =============================================================================
// JIRA COMMANDS
// =============================================================================

/// Renders drafts as Jira agent commands, one flag per line.
#[derive(Debug, Clone, Copy, Default)]
pub struct JiraCommandRenderer;

impl Renderer for JiraCommandRenderer {
    fn render_epic(&self, draft: &EpicDraft) -> Result<String> {
        Ok(command(
            "create-epic",
            &[
                format!("--project={}", draft.project_key),
                format!("--title={}", quote(&draft.title)),
                format!("--description={}", quote(&draft.description)),
                format!("--labels={}", quote(&draft.labels.join(","))),
            ],
        ))
    }

    fn render_story(&self, draft: &StoryDraft) -> Result<String> {
        Ok(command(
            "create-story",
            &[
                format!("--epic={}", quote(&draft.epic_title)),
                format!("--title={}", quote(&draft.title)),
                format!("--description={}", quote(&draft.description)),
                format!("--acceptance-criteria={}", quote(&draft.criteria_text())),
                format!("--story-points={}", draft.story_points),
                format!("--labels={}", quote(&draft.labels_text())),
            ],
        ))
    }
}

fn command(name: &str, flags: &[String]) -> String {
    let mut lines = vec![format!("*jira {name}")];
    lines.extend(flags.iter().map(|flag| format!("  {flag}")));
    lines.join(" \\\n")
}

/// Double-quote a value, escaping embedded backslashes and quotes.
fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
}

// =============================================================================
// JSON
// =============================================================================

/// Renders each draft as a single-line JSON object tagged with its kind.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

#[derive(Serialize)]
struct Tagged<'a, T> {
    kind: &'static str,
    #[serde(flatten)]
    draft: &'a T,
}

impl Renderer for JsonRenderer {
    fn render_epic(&self, draft: &EpicDraft) -> Result<String> {
        Ok(serde_json::to_string(&Tagged { kind: "epic", draft })?)
    }

    fn render_story(&self, draft: &StoryDraft) -> Result<String> {
        Ok(serde_json::to_string(&Tagged { kind: "story", draft })?)
    }
}
