use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temporary project with a `docs/prd` directory of epic documents.
pub struct TestFixture {
    pub root: PathBuf,
    pub prd_dir: PathBuf,
    _temp_dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let root = temp_dir.path().to_path_buf();
        let prd_dir = root.join("docs/prd");
        std::fs::create_dir_all(&prd_dir).expect("Failed to create docs/prd");
        Self {
            root,
            prd_dir,
            _temp_dir: temp_dir,
        }
    }

    /// Fixture pre-populated with the sample epics below.
    pub fn with_sample_epics() -> Self {
        let fixture = Self::new();
        for (name, content) in sample_epics::ALL {
            fixture.write_epic(name, content);
        }
        fixture
    }

    pub fn write_epic(&self, name: &str, content: impl AsRef<[u8]>) -> PathBuf {
        let path = self.prd_dir.join(name);
        std::fs::write(&path, content).expect("Failed to write epic");
        path
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    pub fn prd(&self) -> &Path {
        &self.prd_dir
    }
}

pub mod sample_epics {
    pub const EVENTS: &str = "\
# Epic 1: Event Management Service

**Epic Goal**: Replace the legacy event admin with a Spring Boot microservice

## Epic Overview

Organizers manage events in a spreadsheet today.

---

**Architecture Context**:
- Event Management Service (Java 21)
- PostgreSQL on RDS

---

### Story 1.1: Event API

**User Story:**
As an organizer, I want a REST api for events so that the frontend can list them.

**Acceptance Criteria:**
- GET /events returns upcoming events
- Responses are paginated

### Story 1.2: Admin login

**User Story:**
As an organizer, I want to log in with Cognito.

**Acceptance Criteria:**
- Login redirects to Cognito
";

    pub const PLATFORM: &str = "\
# Epic 2: Platform Foundation

**Epic Goal**: Stand up shared AWS infrastructure

### Story 2.1: Infrastructure setup

**User Story:**
As a platform engineer, I want infrastructure setup automated with deployment pipelines.

**Acceptance Criteria:**
- CDK stacks deploy to staging
";

    pub const SPEAKERS: &str = "# Epic 3: Speaker Portal\n\nStories are still being written.\n";

    pub const ALL: [(&str, &str); 3] = [
        ("epic-1-events.md", EVENTS),
        ("epic-2-platform.md", PLATFORM),
        ("epic-3-speakers.md", SPEAKERS),
    ];
}
