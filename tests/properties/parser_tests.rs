use proptest::prelude::*;

use epicport::epic::{
    DEFAULT_ARCHITECTURE_CONTEXT, DEFAULT_OVERVIEW, EpicParser, extract_business_value,
    extract_title,
};

proptest! {
    #[test]
    fn parse_never_panics(content in "\\PC{0,400}") {
        let epic = EpicParser::new().parse(&content, "epic-x.md");
        prop_assert_eq!(epic.stories.len(), epic.story_count());
        prop_assert_eq!(epic.source_file, "epic-x.md");
    }

    #[test]
    fn goal_wins_over_heading(
        heading in "[A-Za-z][A-Za-z0-9 ]{0,30}",
        goal in "[A-Za-z][A-Za-z0-9 ]{0,30}",
    ) {
        let content = format!("# {heading}\n\n**Epic Goal**: {goal}  \n");
        prop_assert_eq!(extract_title(&content), goal.trim());
        prop_assert_eq!(extract_business_value(&content), goal.trim());
    }

    #[test]
    fn heading_used_without_goal(heading in "[A-Za-z][A-Za-z0-9 ]{0,30}") {
        let content = format!("intro\n# {heading}\n\nbody\n");
        prop_assert_eq!(extract_title(&content), heading.trim());
    }

    #[test]
    fn story_count_matches_blocks(count in 0usize..6) {
        let mut content = String::from("# Generated\n\n");
        for n in 1..=count {
            content.push_str(&format!(
                "### Story 1.{n}: Item {n}\n\n**User Story:**\nAs a user I want item {n}.\n\n**Acceptance Criteria:**\n- works\n- tested\n\n"
            ));
        }

        let epic = EpicParser::new().parse(&content, "epic-gen.md");
        prop_assert_eq!(epic.story_count(), count);
        prop_assert_eq!(epic.description.as_str(), DEFAULT_OVERVIEW);
        prop_assert_eq!(epic.architecture_context.as_str(), DEFAULT_ARCHITECTURE_CONTEXT);
        for story in &epic.stories {
            prop_assert_eq!(story.acceptance_criteria.len(), 2);
        }
        prop_assert_eq!(epic.total_points(), epic.stories.iter().map(|s| s.estimated_points).sum::<u32>());
    }
}
