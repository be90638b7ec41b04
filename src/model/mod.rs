//! Output model of an alignment run.
//!
//! These types are the only long-lived output: one [`PageRecord`] per page,
//! each holding [`LeafRecord`]s for resolved text, non-text and unresolved
//! objects. They serialize to the same JSON shape the records are read
//! back from.

mod document;
mod page;
mod record;

pub use document::AlignedDocument;
pub use page::{PageRecord, IDX_UNRESOLVED_LINE};
pub use record::LeafRecord;
