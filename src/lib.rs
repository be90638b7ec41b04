//! # pagealign
//!
//! Reconcile a PDF layout tree with an independently extracted text stream.
//!
//! A layout engine knows *where* each paragraph sits on the page but its
//! text is often mangled; a separate extractor (OCR, another parser) gets
//! the text right but loses the geometry. This crate aligns the stream's
//! lines with the layout's leaves, regroups them into paragraph-level
//! objects and emits one serializable record per page in reading order.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pagealign::{align_files, JsonFormat};
//!
//! fn main() -> pagealign::Result<()> {
//!     // A JSON layout dump plus the plain-text stream of the same document
//!     let doc = align_files("layout.json", "document.txt")?;
//!     println!("{}", doc.to_json(JsonFormat::Pretty)?);
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Fuzzy matching**: edit-distance similarity with a configurable cutoff;
//!   ties are rejected instead of guessed
//! - **Page boundaries**: a patience threshold ends each page's scan, and
//!   unmatched trailing lines are retried on the next page
//! - **All-or-nothing grouping**: a paragraph is resolved only when every
//!   one of its lines was located
//! - **Reading order**: left-to-right/top-to-bottom or
//!   top-to-bottom/right-to-left flows
//! - **Pluggable scoring**: any [`Scorer`] can replace the default

pub mod align;
pub mod error;
pub mod layout;
pub mod model;
pub mod pipeline;
pub mod render;
pub mod stream;

// Re-export commonly used types
pub use align::{
    AlignOptions, ContentSource, IndelRatio, LevenshteinRatio, Normalization, ReadingOrder, Scorer,
};
pub use error::{Error, Result};
pub use layout::{BBox, LayoutDump, LayoutNode, LayoutPage, Leaf, LeafContent, LeafId, PageLeaves};
pub use model::{AlignedDocument, LeafRecord, PageRecord};
pub use pipeline::{Aligner, PageAlignment, PageAlignments};
pub use render::JsonFormat;
pub use stream::RawText;

use std::path::Path;

/// Align pages with a raw text stream using default options.
///
/// # Example
///
/// ```
/// use pagealign::{align_document, BBox, Leaf, PageLeaves, RawText};
///
/// let page = PageLeaves::new(
///     1,
///     BBox::new(0.0, 0.0, 612.0, 792.0),
///     vec![Leaf::text(BBox::new(72.0, 700.0, 540.0, 720.0), "LTTextBoxHorizontal", "exam-\nple\n")],
/// );
/// let doc = align_document([page], &RawText::from_lines(["example"])).unwrap();
/// assert_eq!(doc.plain_text(), "example");
/// ```
pub fn align_document<I>(pages: I, raw: &RawText) -> Result<AlignedDocument>
where
    I: IntoIterator,
    I::Item: LayoutPage,
{
    Aligner::new(AlignOptions::default())?.align_pages(pages, raw)
}

/// Align a JSON layout dump file with a plain-text file.
///
/// # Arguments
///
/// * `layout_path` - Layout dump, see [`layout::dump`]
/// * `text_path` - Raw text stream, one line per line of the file
pub fn align_files<P, Q>(layout_path: P, text_path: Q) -> Result<AlignedDocument>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    align_files_with_options(layout_path, text_path, AlignOptions::default())
}

/// Align a JSON layout dump file with a plain-text file using custom options.
pub fn align_files_with_options<P, Q>(
    layout_path: P,
    text_path: Q,
    options: AlignOptions,
) -> Result<AlignedDocument>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let aligner = Aligner::new(options)?;
    let dump = LayoutDump::from_path(layout_path)?;
    let raw = RawText::from_path(text_path)?;
    aligner.align_dump(&dump, &raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_align_document_empty() {
        let pages: Vec<PageLeaves> = Vec::new();
        let doc = align_document(pages, &RawText::default()).unwrap();
        assert!(doc.is_empty());
        assert_eq!(doc.offset, 0);
    }

    #[test]
    fn test_align_files_missing_input() {
        let result = align_files("does/not/exist.json", "does/not/exist.txt");
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_align_files_rejects_bad_options() {
        let options = AlignOptions::new().with_boxes_flow(2.0);
        let result = align_files_with_options("missing.json", "missing.txt", options);
        assert!(matches!(result, Err(Error::InvalidOption(_))));
    }
}
