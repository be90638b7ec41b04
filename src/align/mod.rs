//! Alignment of a raw text stream with layout leaves.
//!
//! Per page the stages run in this order:
//!
//! 1. [`TextObjectMap::from_leaves`] splits text leaves into indexed lines.
//! 2. [`TextLocator::locate`] matches stream lines against those lines.
//! 3. [`group_text`] folds located lines back into their leaves.
//! 4. [`reorder_objects`] sorts resolved leaves into reading order.

mod grouper;
mod locator;
mod mapper;
mod normalize;
mod options;
mod reorder;
mod scorer;

pub use grouper::{group_text, Grouping, ResolvedGroup};
pub use locator::{Location, TextLocator};
pub use mapper::{collapse_hyphenation, split_lines, TextObjectMap};
pub use normalize::{Normalization, Normalizer};
pub use options::{
    AlignOptions, ContentSource, DEFAULT_BOXES_FLOW, DEFAULT_PATIENCE, DEFAULT_SCORE_CUTOFF,
};
pub use reorder::{reorder_objects, ReadingOrder};
pub use scorer::{ExactMatch, IndelRatio, LevenshteinRatio, Normalized, Scorer};
