//! Epic and story records extracted from markdown.

use serde::{Deserialize, Serialize};

/// A user story extracted from an epic document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    /// Story title, prefixed with its number (e.g. `1.1: Add retry logic`)
    pub title: String,
    /// The user story paragraph
    pub description: String,
    /// Acceptance criteria in document order, bullet markers stripped
    pub acceptance_criteria: Vec<String>,
    /// Heuristic point estimate, one of 2, 3, 5, 8, 13
    pub estimated_points: u32,
    /// Ordered, duplicate-free labels
    pub labels: Vec<String>,
}

/// An epic extracted from one markdown document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Epic {
    pub title: String,
    /// Overview section text
    pub description: String,
    pub architecture_context: String,
    pub business_value: String,
    pub stories: Vec<Story>,
    /// Path or other identifier of the source document
    pub source_file: String,
}

impl Epic {
    /// Number of stories in this epic.
    #[must_use]
    pub fn story_count(&self) -> usize {
        self.stories.len()
    }

    /// Sum of the story point estimates.
    #[must_use]
    pub fn total_points(&self) -> u32 {
        self.stories.iter().map(|story| story.estimated_points).sum()
    }
}
