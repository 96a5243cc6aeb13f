//! Migration planning, rendering and aggregation.
//!
//! Parsed epics become [`MigrationPlan`]s (structured epic and story drafts plus
//! a [`MigrationRecord`]); a [`Renderer`] turns drafts into text; the records of
//! a batch roll up into a [`MigrationSummary`]. This is a dry run: no tracker is
//! ever contacted.

mod batch;
mod plan;
mod render;
mod summary;

pub use batch::*;
pub use plan::*;
pub use render::*;
pub use summary::*;
