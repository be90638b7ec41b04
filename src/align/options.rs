//! Alignment options and configuration.

use super::normalize::Normalization;
use super::reorder::ReadingOrder;
use crate::error::{Error, Result};

/// Default minimum similarity for a match.
pub const DEFAULT_SCORE_CUTOFF: f64 = 90.0;

/// Default number of consecutive failures tolerated before a page stops.
pub const DEFAULT_PATIENCE: usize = 10;

/// Default flow balance used to order boxes.
pub const DEFAULT_BOXES_FLOW: f64 = 0.5;

/// Options for aligning a raw text stream with layout pages.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignOptions {
    /// Minimum similarity (0-100) for a candidate to count as a match
    pub score_cutoff: f64,

    /// Consecutive unresolved stream lines tolerated before a page's scan
    /// stops; `None` scans to the end of the stream
    pub patience: Option<usize>,

    /// Which text is recorded for a located line
    pub content_source: ContentSource,

    /// Reading order of resolved text groups
    pub reading_order: ReadingOrder,

    /// Horizontal/vertical balance of the reading order key, in `[-1, 1]`
    pub boxes_flow: f64,

    /// Normalization applied to both sides before scoring
    pub normalization: Normalization,
}

impl AlignOptions {
    /// Create new options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the similarity cutoff.
    pub fn with_score_cutoff(mut self, cutoff: f64) -> Self {
        self.score_cutoff = cutoff;
        self
    }

    /// Set patience.
    pub fn with_patience(mut self, patience: usize) -> Self {
        self.patience = Some(patience);
        self
    }

    /// Scan every page to the end of the stream.
    pub fn without_patience(mut self) -> Self {
        self.patience = None;
        self
    }

    /// Set where located text comes from.
    pub fn with_content_source(mut self, source: ContentSource) -> Self {
        self.content_source = source;
        self
    }

    /// Record the layout's own lines instead of the stream lines.
    pub fn layout_text(mut self) -> Self {
        self.content_source = ContentSource::Layout;
        self
    }

    /// Set reading order.
    pub fn with_reading_order(mut self, order: ReadingOrder) -> Self {
        self.reading_order = order;
        self
    }

    /// Set the boxes flow weight.
    pub fn with_boxes_flow(mut self, boxes_flow: f64) -> Self {
        self.boxes_flow = boxes_flow;
        self
    }

    /// Set scoring normalization.
    pub fn with_normalization(mut self, normalization: Normalization) -> Self {
        self.normalization = normalization;
        self
    }

    /// Check that numeric options are in range.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=100.0).contains(&self.score_cutoff) {
            return Err(Error::InvalidOption(format!(
                "score_cutoff must be within [0, 100], got {}",
                self.score_cutoff
            )));
        }
        if !(-1.0..=1.0).contains(&self.boxes_flow) {
            return Err(Error::InvalidOption(format!(
                "boxes_flow must be within [-1, 1], got {}",
                self.boxes_flow
            )));
        }
        Ok(())
    }
}

impl Default for AlignOptions {
    fn default() -> Self {
        Self {
            score_cutoff: DEFAULT_SCORE_CUTOFF,
            patience: Some(DEFAULT_PATIENCE),
            content_source: ContentSource::RawStream,
            reading_order: ReadingOrder::LeftRightTopBottom,
            boxes_flow: DEFAULT_BOXES_FLOW,
            normalization: Normalization::default(),
        }
    }
}

/// Source of the text recorded for a located line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentSource {
    /// The raw stream line that matched
    #[default]
    RawStream,
    /// The layout engine's own line
    Layout,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_align_options_builder() {
        let options = AlignOptions::new()
            .with_score_cutoff(80.0)
            .with_patience(2)
            .layout_text()
            .with_reading_order(ReadingOrder::TopBottomRightLeft)
            .with_normalization(Normalization::none());

        assert_eq!(options.score_cutoff, 80.0);
        assert_eq!(options.patience, Some(2));
        assert_eq!(options.content_source, ContentSource::Layout);
        assert_eq!(options.reading_order, ReadingOrder::TopBottomRightLeft);
        assert!(options.normalization.is_noop());
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_default_options() {
        let options = AlignOptions::default();
        assert_eq!(options.score_cutoff, 90.0);
        assert_eq!(options.patience, Some(10));
        assert_eq!(options.content_source, ContentSource::RawStream);
        assert_eq!(options.reading_order, ReadingOrder::LeftRightTopBottom);
        assert_eq!(options.boxes_flow, 0.5);
        assert!(options.validate().is_ok());
        assert_eq!(options.without_patience().patience, None);
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let options = AlignOptions::new().with_score_cutoff(120.0);
        assert!(matches!(options.validate(), Err(Error::InvalidOption(_))));

        let options = AlignOptions::new().with_boxes_flow(1.5);
        assert!(matches!(options.validate(), Err(Error::InvalidOption(_))));

        let options = AlignOptions::new().with_score_cutoff(f64::NAN);
        assert!(options.validate().is_err());
    }
}
