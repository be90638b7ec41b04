//! Per-object output records.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::layout::{BBox, Leaf};

/// One grouped object of a page.
///
/// `index` is the object's rank within its group on the page; it is
/// assigned when the record is emitted and is not stable across runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeafRecord {
    pub index: usize,
    pub bbox: BBox,
    /// Type tag of the source leaf
    #[serde(rename = "type")]
    pub kind: String,
    pub content: Option<String>,
}

impl LeafRecord {
    pub fn new(
        index: usize,
        bbox: BBox,
        kind: impl Into<String>,
        content: Option<String>,
    ) -> Self {
        Self {
            index,
            bbox,
            kind: kind.into(),
            content,
        }
    }

    /// Build a record from a leaf.
    ///
    /// Without explicit `content`, a text leaf contributes its raw layout
    /// text and a non-text leaf has no content.
    pub fn from_leaf(index: usize, leaf: &Leaf, content: Option<String>) -> Self {
        let content = content.or_else(|| leaf.raw_text().map(str::to_string));
        Self::new(index, leaf.bbox, leaf.kind.clone(), content)
    }

    /// JSON value of this record.
    pub fn to_record(&self) -> Value {
        json!({
            "index": self.index,
            "bbox": self.bbox.to_array(),
            "type": self.kind,
            "content": self.content,
        })
    }
}
