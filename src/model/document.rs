//! Document-level types.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::PageRecord;
use crate::error::Result;
use crate::render::{self, JsonFormat};

/// All aligned pages of a document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlignedDocument {
    /// Page records in input order
    pub pages: Vec<PageRecord>,

    /// Stream offset reached after the last page
    pub offset: usize,
}

impl AlignedDocument {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of pages in the document.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Get a page by its layout page id.
    pub fn get_page(&self, pageid: u32) -> Option<&PageRecord> {
        self.pages.iter().find(|page| page.pageid() == pageid)
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Number of unresolved text objects across all pages.
    pub fn unresolved_count(&self) -> usize {
        self.pages
            .iter()
            .map(|page| page.unresolved_groups().len())
            .sum()
    }

    /// Resolved text of the entire document, pages separated by a blank line.
    pub fn plain_text(&self) -> String {
        self.pages
            .iter()
            .map(|page| page.plain_text())
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Render as JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(self, format)
    }

    /// Write as JSON to a file, replacing it if it exists.
    pub fn write_json_file<P: AsRef<Path>>(&self, path: P, format: JsonFormat) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        render::write_json(&mut writer, self, format)?;
        writer.flush()?;
        Ok(())
    }

    /// Parse a document previously written with [`AlignedDocument::to_json`].
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
