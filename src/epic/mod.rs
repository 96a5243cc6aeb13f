//! Epic document parsing.
//!
//! Turns BATbern epic markdown (`docs/prd/epic-*.md`) into [`Epic`] records:
//!
//! 1. **Section extraction** - title, overview, architecture context and
//!    business value, each with a fixed placeholder fallback
//! 2. **Story extraction** - numbered story blocks with their user story
//!    paragraph and acceptance criteria
//! 3. **Estimation** - keyword-weighted point sizing and category labels
//!
//! # Example
//!
//! ```ignore
//! use epicport::epic::EpicParser;
//!
//! let epic = EpicParser::new().parse(markdown, "docs/prd/epic-1.md");
//! println!("{}: {} stories", epic.title, epic.stories.len());
//! ```

pub mod estimate;
mod parser;
mod types;

pub use estimate::{StoryAnnotator, estimate_points};
pub use parser::*;
pub use types::*;
