//! Regex-based extraction of epics and stories from markdown.
//!
//! Every section extractor falls back to a fixed placeholder when its section
//! is missing. Story blocks that do not match the expected shape are skipped.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, info};

use super::estimate::StoryAnnotator;
use super::types::{Epic, Story};
use crate::error::{MigrateError, Result};

pub const DEFAULT_TITLE: &str = "Untitled Epic";
pub const DEFAULT_OVERVIEW: &str = "No overview provided";
pub const DEFAULT_ARCHITECTURE_CONTEXT: &str = "No architecture context provided";
pub const DEFAULT_BUSINESS_VALUE: &str = "Business value to be defined";

/// `**Epic Goal**: <text>` on a single line.
static EPIC_GOAL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*Epic Goal\*\*:\s*(.+)").unwrap());

/// First level-one heading.
static H1_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^# (.+)").unwrap());

/// Overview heading; the body starts after the blank line.
static OVERVIEW_HEADING_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"## Epic Overview\s*\n\n").unwrap());

static ARCHITECTURE_LABEL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*Architecture Context\*\*:\s*\n").unwrap());

/// Numbered story heading, user story paragraph, then the criteria bullets.
static STORY_BLOCK_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?s)### Story (\d+\.\d+): (.+?)\n\n\*\*User Story:\*\*\s*\n(.+?)\n\n\*\*Acceptance Criteria:\*\*\s*\n((?:- .+?\n)*)",
    )
    .unwrap()
});

const OVERVIEW_TERMINATORS: &[&str] = &["\n##", "\n---"];
const ARCHITECTURE_TERMINATORS: &[&str] = &["\n**", "\n---", "\n##"];

/// Parses epic markdown documents into [`Epic`] records.
#[derive(Debug, Clone, Default)]
pub struct EpicParser {
    annotator: StoryAnnotator,
}

impl EpicParser {
    /// Create a parser with the default baseline labels.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser that labels stories with `annotator`.
    #[must_use]
    pub const fn with_annotator(annotator: StoryAnnotator) -> Self {
        Self { annotator }
    }

    /// Read and parse one epic document.
    ///
    /// # Errors
    ///
    /// Returns [`MigrateError::ReadDocument`] if the file cannot be read as UTF-8.
    pub fn parse_file(&self, path: &Path) -> Result<Epic> {
        let content = std::fs::read_to_string(path).map_err(|source| MigrateError::ReadDocument {
            path: path.display().to_string(),
            source,
        })?;
        Ok(self.parse(&content, path.display().to_string()))
    }

    /// Parse raw document text. Never fails; see the module docs.
    #[must_use]
    pub fn parse(&self, content: &str, source: impl Into<String>) -> Epic {
        let source = source.into();
        let epic = Epic {
            title: extract_title(content),
            description: extract_overview(content),
            architecture_context: extract_architecture_context(content),
            business_value: extract_business_value(content),
            stories: self.extract_stories(content),
            source_file: source,
        };
        info!(
            source = %epic.source_file,
            title = %epic.title,
            stories = epic.story_count(),
            "parsed epic"
        );
        epic
    }

    /// Extract all well-formed story blocks in document order.
    #[must_use]
    pub fn extract_stories(&self, content: &str) -> Vec<Story> {
        STORY_BLOCK_REGEX
            .captures_iter(content)
            .map(|caps| {
                let number = &caps[1];
                let title = caps[2].trim();
                let description = caps[3].trim();
                let story = Story {
                    title: format!("{number}: {title}"),
                    description: description.to_string(),
                    acceptance_criteria: parse_criteria(&caps[4]),
                    estimated_points: self.annotator.points(title, description),
                    labels: self.annotator.labels(title, description),
                };
                debug!(
                    story = %story.title,
                    points = story.estimated_points,
                    criteria = story.acceptance_criteria.len(),
                    "extracted story"
                );
                story
            })
            .collect()
    }
}

/// Epic title: labeled goal, then first H1, then [`DEFAULT_TITLE`].
#[must_use]
pub fn extract_title(content: &str) -> String {
    if let Some(goal) = epic_goal(content) {
        return goal;
    }
    if let Some(caps) = H1_REGEX.captures(content) {
        return caps[1].trim().to_string();
    }
    debug!("no epic goal or heading, using default title");
    DEFAULT_TITLE.to_string()
}

#[must_use]
pub fn extract_overview(content: &str) -> String {
    labeled_section(content, &OVERVIEW_HEADING_REGEX, OVERVIEW_TERMINATORS)
        .unwrap_or_else(|| {
            debug!("no overview section");
            DEFAULT_OVERVIEW.to_string()
        })
}

#[must_use]
pub fn extract_architecture_context(content: &str) -> String {
    labeled_section(content, &ARCHITECTURE_LABEL_REGEX, ARCHITECTURE_TERMINATORS)
        .unwrap_or_else(|| {
            debug!("no architecture context section");
            DEFAULT_ARCHITECTURE_CONTEXT.to_string()
        })
}

#[must_use]
pub fn extract_business_value(content: &str) -> String {
    epic_goal(content).unwrap_or_else(|| DEFAULT_BUSINESS_VALUE.to_string())
}

fn epic_goal(content: &str) -> Option<String> {
    EPIC_GOAL_REGEX
        .captures(content)
        .map(|caps| caps[1].trim().to_string())
}

/// Trimmed body following the first `label` match.
///
/// The body is at least one character long and runs to the earliest
/// terminator (searched from its second character on) or to the end of the
/// document. A present but blank section yields an empty string, not `None`.
fn labeled_section(content: &str, label: &Regex, terminators: &[&str]) -> Option<String> {
    let m = label.find(content)?;
    let rest = &content[m.end()..];
    let Some(first) = rest.chars().next() else {
        return trailing_blank_section(content, label, m.start());
    };
    let search_from = first.len_utf8();
    let end = terminators
        .iter()
        .filter_map(|term| rest[search_from..].find(term).map(|pos| pos + search_from))
        .min()
        .unwrap_or(rest.len());
    Some(rest[..end].trim().to_string())
}

/// A label that ends the document still has a (blank) body when the label
/// matches without its last character.
fn trailing_blank_section(content: &str, label: &Regex, start: usize) -> Option<String> {
    let last = content.chars().next_back()?;
    let shorter = &content[..content.len() - last.len_utf8()];
    label
        .find_at(shorter, start)
        .filter(|m| m.start() == start)
        .map(|_| String::new())
}

/// Bullet lines of a criteria block, markers and whitespace stripped.
fn parse_criteria(block: &str) -> Vec<String> {
    block
        .trim()
        .lines()
        .map(str::trim)
        .filter_map(|line| line.strip_prefix("- "))
        .map(|item| item.trim().to_string())
        .collect()
}
