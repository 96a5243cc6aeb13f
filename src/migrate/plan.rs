//! Tracker-neutral issue drafts built from parsed epics.

use serde::{Deserialize, Serialize};

use crate::epic::Epic;
use crate::epic::estimate::BASELINE_LABELS;

/// Default Jira project key for migrated epics.
pub const DEFAULT_PROJECT_KEY: &str = "BAT";

/// Tracker-side settings applied to every draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerSettings {
    pub project_key: String,
    /// Labels attached to epic drafts
    pub epic_labels: Vec<String>,
}

impl Default for TrackerSettings {
    fn default() -> Self {
        Self {
            project_key: DEFAULT_PROJECT_KEY.to_string(),
            epic_labels: BASELINE_LABELS.iter().map(ToString::to_string).collect(),
        }
    }
}

/// An epic issue to create.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpicDraft {
    pub project_key: String,
    pub title: String,
    pub description: String,
    pub labels: Vec<String>,
}

/// A story issue to create under an epic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryDraft {
    pub epic_title: String,
    pub title: String,
    pub description: String,
    pub acceptance_criteria: Vec<String>,
    pub story_points: u32,
    pub labels: Vec<String>,
}

impl StoryDraft {
    /// Acceptance criteria joined with `"; "`.
    #[must_use]
    pub fn criteria_text(&self) -> String {
        self.acceptance_criteria.join("; ")
    }

    /// Labels joined with `","`.
    #[must_use]
    pub fn labels_text(&self) -> String {
        self.labels.join(",")
    }
}

/// Read-only summary of one migrated epic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MigrationRecord {
    pub epic_title: String,
    pub source_file: String,
    pub story_count: usize,
    pub estimated_total_points: u32,
}

impl MigrationRecord {
    #[must_use]
    pub fn from_epic(epic: &Epic) -> Self {
        Self {
            epic_title: epic.title.clone(),
            source_file: epic.source_file.clone(),
            story_count: epic.story_count(),
            estimated_total_points: epic.total_points(),
        }
    }
}

/// Everything needed to migrate one epic: its drafts and its record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MigrationPlan {
    pub epic: EpicDraft,
    pub stories: Vec<StoryDraft>,
    pub record: MigrationRecord,
}

impl MigrationPlan {
    #[must_use]
    pub fn from_epic(epic: &Epic, settings: &TrackerSettings) -> Self {
        let epic_draft = EpicDraft {
            project_key: settings.project_key.clone(),
            title: epic.title.clone(),
            description: format_epic_description(epic),
            labels: settings.epic_labels.clone(),
        };
        let stories = epic
            .stories
            .iter()
            .map(|story| StoryDraft {
                epic_title: epic.title.clone(),
                title: story.title.clone(),
                description: story.description.clone(),
                acceptance_criteria: story.acceptance_criteria.clone(),
                story_points: story.estimated_points,
                labels: story.labels.clone(),
            })
            .collect();

        Self {
            epic: epic_draft,
            stories,
            record: MigrationRecord::from_epic(epic),
        }
    }
}

/// Epic description embedding overview, context, value, source and story count.
#[must_use]
pub fn format_epic_description(epic: &Epic) -> String {
    format!(
        "{}\n\n**Architecture Context:**\n{}\n\n**Business Value:**\n{}\n\n**Source:** {}\n**Stories:** {} user stories",
        epic.description,
        epic.architecture_context,
        epic.business_value,
        epic.source_file,
        epic.story_count()
    )
}
