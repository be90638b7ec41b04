//! Error types for pagealign.

use std::io;
use thiserror::Error;

/// Result type alias for pagealign operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while aligning a document.
///
/// Lines that cannot be matched are not errors. They end up in the
/// unresolved bucket of the page and in its diagnostics.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading layout dumps or raw text files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A layout dump or page record could not be (de)serialized.
    #[error("JSON error: {0}")]
    Json(String),

    /// `extra_info` of a page record is not a JSON object.
    #[error("Invalid extra_info: expected a JSON object, got {0}")]
    InvalidExtraInfo(String),

    /// Unknown reading order mode.
    #[error("Invalid reading order '{0}': expected one of LRTB, TBRL")]
    InvalidReadingOrder(String),

    /// An alignment option is out of range.
    #[error("Invalid option: {0}")]
    InvalidOption(String),

    /// Grouping lost or duplicated a leaf. This is a bug, not bad input.
    #[error("Page {pageid}: grouped {actual} leaves but the page maps {expected}")]
    PartitionIncomplete {
        /// Page identifier
        pageid: u32,
        /// Distinct leaves in the index map
        expected: usize,
        /// Leaves emitted across all groups
        actual: usize,
    },

    /// Error during rendering to JSON.
    #[error("Rendering error: {0}")]
    Render(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            Error::Io(err.into())
        } else {
            Error::Json(err.to_string())
        }
    }
}
