//! JSON layout dumps.
//!
//! A dump is the page tree of an external layout engine flattened to leaves:
//!
//! ```json
//! {
//!   "pages": [
//!     {
//!       "pageid": 1,
//!       "bbox": [0.0, 0.0, 612.0, 792.0],
//!       "objects": [
//!         {"type": "LTTextBoxHorizontal", "bbox": [72.0, 700.0, 540.0, 720.0], "text": "Hello\n"},
//!         {"type": "LTFigure", "bbox": [72.0, 400.0, 300.0, 600.0]}
//!       ]
//!     }
//!   ]
//! }
//! ```
//!
//! A node without `text` (or with `"text": null`) is a non-text leaf.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{BBox, LayoutNode, LayoutPage};
use crate::error::Result;

/// A whole layout dump.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutDump {
    pub pages: Vec<DumpPage>,
}

/// One page of a layout dump.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DumpPage {
    pub pageid: u32,
    pub bbox: BBox,
    #[serde(default)]
    pub objects: Vec<DumpNode>,
}

/// One leaf of a layout dump.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DumpNode {
    #[serde(rename = "type")]
    pub kind: String,
    pub bbox: BBox,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl LayoutDump {
    /// Parse a dump from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a dump from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Read a dump from a JSON file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

impl DumpPage {
    pub fn new(pageid: u32, bbox: BBox) -> Self {
        Self {
            pageid,
            bbox,
            objects: Vec::new(),
        }
    }

    /// Append a text-bearing node.
    pub fn push_text(&mut self, kind: impl Into<String>, bbox: BBox, text: impl Into<String>) {
        self.objects.push(DumpNode {
            kind: kind.into(),
            bbox,
            text: Some(text.into()),
        });
    }

    /// Append a non-text node.
    pub fn push_non_text(&mut self, kind: impl Into<String>, bbox: BBox) {
        self.objects.push(DumpNode {
            kind: kind.into(),
            bbox,
            text: None,
        });
    }
}

impl LayoutNode for DumpNode {
    fn bbox(&self) -> BBox {
        self.bbox
    }

    fn kind(&self) -> &str {
        &self.kind
    }

    fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

impl LayoutPage for DumpPage {
    type Node = DumpNode;

    fn page_id(&self) -> u32 {
        self.pageid
    }

    fn bbox(&self) -> BBox {
        self.bbox
    }

    fn nodes(&self) -> &[DumpNode] {
        &self.objects
    }
}
