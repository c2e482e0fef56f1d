//! Reporting: ranking, the advising checklist, the shareable summary, and
//! formatted terminal output.
//!
//! We keep all derived-output code in one place so:
//! - the scoring rules stay clean and testable
//! - output changes are localized (important for the summary's byte contract)

pub mod checklist;
pub mod format;
pub mod rank;
pub mod summary;

pub use checklist::build_checklist;
pub use rank::{rank, top_ids};
pub use summary::format_summary;
