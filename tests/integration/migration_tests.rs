use epicport::discovery::{DEFAULT_PATTERN, discover_documents};
use epicport::epic::{DEFAULT_ARCHITECTURE_CONTEXT, DEFAULT_OVERVIEW, EpicParser, StoryAnnotator};
use epicport::migrate::{
    MigrationSummary, Renderer, RendererKind, TrackerSettings, parse_batch,
};

use crate::fixture::TestFixture;

#[test]
fn discovers_epics_in_name_order() {
    let fixture = TestFixture::with_sample_epics();
    fixture.write_epic("notes.md", "# Not an epic");

    let documents = discover_documents(fixture.prd(), DEFAULT_PATTERN).unwrap();
    let names: Vec<_> = documents
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        names,
        ["epic-1-events.md", "epic-2-platform.md", "epic-3-speakers.md"]
    );
}

#[test]
fn full_batch_produces_plans_and_summary() {
    let fixture = TestFixture::with_sample_epics();
    let documents = discover_documents(fixture.prd(), DEFAULT_PATTERN).unwrap();

    let report = parse_batch(&EpicParser::new(), &documents);
    assert_eq!(report.failure_count(), 0);

    let summary = report.summary();
    assert_eq!(summary.total_epics, 3);
    assert_eq!(summary.total_stories, 3);
    assert_eq!(summary.total_estimated_points, 7 + 13);

    let epics: Vec<_> = report.epics().collect();
    assert_eq!(epics[1].title, "Stand up shared AWS infrastructure");
    assert_eq!(epics[1].description, DEFAULT_OVERVIEW);
    assert_eq!(epics[1].architecture_context, DEFAULT_ARCHITECTURE_CONTEXT);
    assert_eq!(
        epics[1].stories[0].labels,
        ["BATbern", "Platform-Rewrite", "Infrastructure"]
    );
    assert_eq!(epics[2].title, "Epic 3: Speaker Portal");
    assert!(epics[2].stories.is_empty());
}

#[test]
fn one_unreadable_epic_is_isolated() {
    let fixture = TestFixture::with_sample_epics();
    fixture.write_epic("epic-2-platform.md", [0xc3, 0x28, 0xa0, 0xa1]);

    let documents = discover_documents(fixture.prd(), DEFAULT_PATTERN).unwrap();
    let report = parse_batch(&EpicParser::new(), &documents);

    assert_eq!(report.entries().len(), 3);
    assert_eq!(report.failure_count(), 1);
    let (failed, _) = report.failures().next().unwrap();
    assert!(failed.ends_with("epic-2-platform.md"));

    let summary = report.summary();
    assert_eq!(summary.total_epics, 2);
    assert_eq!(summary.total_stories, 2);
    assert_eq!(summary.total_estimated_points, 7);
}

#[test]
fn summary_survives_write_and_read() {
    let fixture = TestFixture::with_sample_epics();
    let documents = discover_documents(fixture.prd(), DEFAULT_PATTERN).unwrap();
    let summary = parse_batch(&EpicParser::new(), &documents).summary();

    let path = fixture.path("migration_summary.json");
    summary.write_json(&path).unwrap();

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    let keys: Vec<_> = raw.as_object().unwrap().keys().cloned().collect();
    for key in ["total_epics", "total_stories", "total_estimated_points", "epics"] {
        assert!(keys.iter().any(|k| k == key), "missing {key}");
    }
    assert_eq!(raw["epics"][0]["estimated_total_points"], 7);
    assert!(
        raw["epics"][0]["source_file"]
            .as_str()
            .unwrap()
            .ends_with("epic-1-events.md")
    );

    let restored: MigrationSummary =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(restored, summary);
}

#[test]
fn jira_commands_for_each_plan() {
    let fixture = TestFixture::with_sample_epics();
    let documents = discover_documents(fixture.prd(), "epic-1-*.md").unwrap();
    let report = parse_batch(&EpicParser::new(), &documents);

    let plans = report.plans(&TrackerSettings::default());
    let rendered = RendererKind::Jira.renderer().render_plan(&plans[0]).unwrap();
    assert_eq!(rendered.len(), 3);

    assert!(rendered[0].starts_with("*jira create-epic"));
    assert!(rendered[0].contains("**Stories:** 2 user stories"));
    assert!(rendered[0].contains("**Business Value:**\nReplace the legacy event admin"));
    assert!(rendered[1].contains("--title=\"1.1: Event API\""));
    assert!(rendered[1].contains(
        "--acceptance-criteria=\"GET /events returns upcoming events; Responses are paginated\""
    ));
    assert!(rendered[2].contains("--story-points=2"));
}

#[test]
fn custom_baseline_labels_flow_into_stories() {
    let fixture = TestFixture::with_sample_epics();
    let documents = discover_documents(fixture.prd(), "epic-2-*.md").unwrap();
    let parser = EpicParser::with_annotator(StoryAnnotator::with_baseline_labels(["Ops"]));

    let report = parse_batch(&parser, &documents);
    let epic = report.epics().next().unwrap();
    assert_eq!(epic.stories[0].labels, ["Ops", "Infrastructure"]);
    assert_eq!(epic.stories[0].estimated_points, 13);
}
