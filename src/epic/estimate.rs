//! Heuristic story sizing and labelling.
//!
//! Both heuristics are pure functions of the lower-cased story text
//! (`title + " " + description`) and the constant tables below. Keywords are
//! matched as substrings, so `ui` also fires inside words such as `build`.

// =============================================================================
// TABLES
// =============================================================================

/// Complexity keyword weights. Each keyword contributes at most once.
pub const COMPLEXITY_WEIGHTS: &[(&str, u32)] = &[
    ("setup", 5),
    ("infrastructure", 8),
    ("integration", 5),
    ("api", 3),
    ("frontend", 3),
    ("database", 5),
    ("authentication", 8),
    ("microservice", 8),
    ("deployment", 5),
    ("testing", 3),
    ("migration", 8),
];

/// The ordered set of point values a story can be sized to.
pub const POINT_SCALE: [u32; 5] = [2, 3, 5, 8, 13];

/// Labels every story receives, ahead of any category label.
pub const BASELINE_LABELS: [&str; 2] = ["BATbern", "Platform-Rewrite"];

/// A category label and the vocabulary that triggers it.
#[derive(Debug, Clone, Copy)]
pub struct LabelRule {
    pub label: &'static str,
    pub terms: &'static [&'static str],
}

/// Category rules, checked in this order.
pub const LABEL_RULES: &[LabelRule] = &[
    LabelRule {
        label: "Frontend",
        terms: &["frontend", "react", "ui", "component"],
    },
    LabelRule {
        label: "Backend",
        terms: &["backend", "api", "service", "microservice"],
    },
    LabelRule {
        label: "Database",
        terms: &["database", "migration", "data"],
    },
    LabelRule {
        label: "Authentication",
        terms: &["auth", "login", "cognito"],
    },
    LabelRule {
        label: "Infrastructure",
        terms: &["deploy", "infrastructure", "aws"],
    },
];

// =============================================================================
// POINTS
// =============================================================================

fn story_text(title: &str, description: &str) -> String {
    format!("{title} {description}").to_lowercase()
}

/// Sum the weights of all complexity keywords present in `text`.
///
/// `text` is expected to be lower-cased already.
#[must_use]
pub fn complexity_weight(text: &str) -> u32 {
    COMPLEXITY_WEIGHTS
        .iter()
        .filter(|(keyword, _)| text.contains(keyword))
        .map(|(_, weight)| weight)
        .sum()
}

/// Map a keyword weight sum onto [`POINT_SCALE`].
///
/// Buckets: 0 -> 2, 1..=5 -> 3, 6..=10 -> 5, 11..=15 -> 8, above 15 -> 13.
#[must_use]
pub const fn points_for_weight(weight: u32) -> u32 {
    match weight {
        0 => POINT_SCALE[0],
        1..=5 => POINT_SCALE[1],
        6..=10 => POINT_SCALE[2],
        11..=15 => POINT_SCALE[3],
        _ => POINT_SCALE[4],
    }
}

/// Keyword weight of a story's title and description.
#[must_use]
pub fn story_weight(title: &str, description: &str) -> u32 {
    complexity_weight(&story_text(title, description))
}

/// Estimate story points from a story title and description.
#[must_use]
pub fn estimate_points(title: &str, description: &str) -> u32 {
    points_for_weight(story_weight(title, description))
}

// =============================================================================
// LABELS
// =============================================================================

/// Category labels whose vocabulary occurs in `text`, in rule order.
pub fn category_labels(text: &str) -> impl Iterator<Item = &'static str> + '_ {
    LABEL_RULES
        .iter()
        .filter(move |rule| rule.terms.iter().any(|term| text.contains(term)))
        .map(|rule| rule.label)
}

/// Assigns points and labels to stories.
///
/// Holds the baseline labels so deployments can rename them; the keyword
/// tables themselves are fixed.
#[derive(Debug, Clone)]
pub struct StoryAnnotator {
    baseline_labels: Vec<String>,
}

impl Default for StoryAnnotator {
    fn default() -> Self {
        Self::new()
    }
}

impl StoryAnnotator {
    /// Annotator using [`BASELINE_LABELS`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_baseline_labels(BASELINE_LABELS.iter().map(ToString::to_string))
    }

    /// Annotator with custom baseline labels. Duplicates are dropped.
    #[must_use]
    pub fn with_baseline_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut baseline_labels = Vec::new();
        for label in labels {
            push_unique(&mut baseline_labels, label.into());
        }
        Self { baseline_labels }
    }

    #[must_use]
    pub fn baseline_labels(&self) -> &[String] {
        &self.baseline_labels
    }

    /// Estimate points for a story.
    #[must_use]
    pub fn points(&self, title: &str, description: &str) -> u32 {
        estimate_points(title, description)
    }

    /// Baseline labels followed by matching category labels, without duplicates.
    #[must_use]
    pub fn labels(&self, title: &str, description: &str) -> Vec<String> {
        let text = story_text(title, description);
        let mut labels = self.baseline_labels.clone();
        for label in category_labels(&text) {
            push_unique(&mut labels, label.to_string());
        }
        labels
    }
}

fn push_unique(labels: &mut Vec<String>, label: String) {
    if !labels.contains(&label) {
        labels.push(label);
    }
}
