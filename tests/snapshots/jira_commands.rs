use insta::assert_snapshot;

use epicport::epic::EpicParser;
use epicport::migrate::{JiraCommandRenderer, MigrationPlan, Renderer, TrackerSettings};

const PLATFORM_EPIC: &str = "\
# Epic 2: Platform Foundation

**Epic Goal**: Stand up shared AWS infrastructure

### Story 2.1: Infrastructure setup

**User Story:**
As a platform engineer, I want infrastructure setup automated with deployment pipelines.

**Acceptance Criteria:**
- CDK stacks deploy to staging
";

fn plan() -> MigrationPlan {
    let epic = EpicParser::new().parse(PLATFORM_EPIC, "docs/prd/epic-2-platform.md");
    MigrationPlan::from_epic(&epic, &TrackerSettings::default())
}

#[test]
fn test_epic_command() {
    let rendered = JiraCommandRenderer.render_epic(&plan().epic).unwrap();
    assert_snapshot!(rendered, @r#"
*jira create-epic \
  --project=BAT \
  --title="Stand up shared AWS infrastructure" \
  --description="No overview provided

**Architecture Context:**
No architecture context provided

**Business Value:**
Stand up shared AWS infrastructure

**Source:** docs/prd/epic-2-platform.md
**Stories:** 1 user stories" \
  --labels="BATbern,Platform-Rewrite"
"#);
}

#[test]
fn test_story_command() {
    let rendered = JiraCommandRenderer.render_story(&plan().stories[0]).unwrap();
    assert_snapshot!(rendered, @r#"
*jira create-story \
  --epic="Stand up shared AWS infrastructure" \
  --title="2.1: Infrastructure setup" \
  --description="As a platform engineer, I want infrastructure setup automated with deployment pipelines." \
  --acceptance-criteria="CDK stacks deploy to staging" \
  --story-points=13 \
  --labels="BATbern,Platform-Rewrite,Infrastructure"
"#);
}
