use epicport::config::Config;
use epicport::discovery::discover_documents;
use epicport::epic::EpicParser;
use epicport::error::{ErrorCode, MigrateError};

use crate::fixture::TestFixture;

#[test]
fn missing_directory_is_no_inputs() {
    let fixture = TestFixture::new();
    let err = discover_documents(&fixture.path("docs/missing"), "epic-*.md").unwrap_err();

    let structured = err.to_structured();
    assert_eq!(structured.code, ErrorCode::InputNotFound);
    assert_eq!(structured.category, "input");
    assert!(structured.recoverable);
    assert!(structured.context.is_some());
}

#[test]
fn unmatched_pattern_is_no_inputs() {
    let fixture = TestFixture::with_sample_epics();
    let err = discover_documents(fixture.prd(), "story-*.md").unwrap_err();
    assert!(matches!(err, MigrateError::NoInputs(_)));
    assert!(err.to_string().contains("story-*.md"));
}

#[test]
fn unreadable_document_carries_path() {
    let fixture = TestFixture::new();
    let path = fixture.write_epic("epic-9.md", [0xff, 0xff]);

    let err = EpicParser::new().parse_file(&path).unwrap_err();
    assert_eq!(err.code(), ErrorCode::DocumentReadError);
    let context = err.context().unwrap();
    assert!(context["path"].as_str().unwrap().ends_with("epic-9.md"));
}

#[test]
fn explicit_config_must_exist() {
    let fixture = TestFixture::new();
    let missing = fixture.path("custom.toml");

    let err = Config::load_with_env(Some(&missing), &fixture.root, |_: &str| None).unwrap_err();
    assert_eq!(err.code(), ErrorCode::ConfigNotFound);
}

#[test]
fn malformed_project_config_is_invalid() {
    let fixture = TestFixture::new();
    std::fs::write(fixture.path("epicport.toml"), "[tracker\nproject_key = ").unwrap();

    let err = Config::load_with_env(None, &fixture.root, |_: &str| None).unwrap_err();
    assert_eq!(err.code(), ErrorCode::ConfigInvalid);
    assert_eq!(err.to_structured().category, "config");
}
