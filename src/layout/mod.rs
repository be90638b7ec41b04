//! Adapter between an external layout engine and the aligner.
//!
//! The layout engine is a black box that produces, per page, an ordered
//! sequence of leaf nodes. Anything implementing [`LayoutPage`] and
//! [`LayoutNode`] can be aligned. [`dump`] provides a JSON-backed
//! implementation for layouts exported by another tool.

pub mod dump;

use serde::{Deserialize, Serialize};

pub use dump::{DumpNode, DumpPage, LayoutDump};

/// Axis-aligned bounding box `(x0, y0, x1, y1)`, bottom-left and top-right
/// corners in page coordinates.
///
/// Serialized as a 4-element array.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 4]", into = "[f64; 4]")]
pub struct BBox {
    /// Left edge
    pub x0: f64,
    /// Bottom edge
    pub y0: f64,
    /// Right edge
    pub x1: f64,
    /// Top edge
    pub y1: f64,
}

impl BBox {
    /// Create a bounding box, ordering the corners so that `x0 <= x1` and
    /// `y0 <= y1`.
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self {
            x0: x0.min(x1),
            y0: y0.min(y1),
            x1: x0.max(x1),
            y1: y0.max(y1),
        }
    }

    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }

    pub fn center(&self) -> (f64, f64) {
        ((self.x0 + self.x1) * 0.5, (self.y0 + self.y1) * 0.5)
    }

    /// Corners as an array in `(x0, y0, x1, y1)` order.
    pub fn to_array(self) -> [f64; 4] {
        [self.x0, self.y0, self.x1, self.y1]
    }
}

impl From<[f64; 4]> for BBox {
    fn from([x0, y0, x1, y1]: [f64; 4]) -> Self {
        BBox::new(x0, y0, x1, y1)
    }
}

impl From<BBox> for [f64; 4] {
    fn from(bbox: BBox) -> Self {
        bbox.to_array()
    }
}

/// A leaf node as exposed by the layout engine.
pub trait LayoutNode {
    /// Bounding box of the node.
    fn bbox(&self) -> BBox;

    /// Type tag of the node (e.g. `"LTTextBoxHorizontal"`, `"LTFigure"`).
    fn kind(&self) -> &str;

    /// Raw text of the node. `Some` marks the node as text-bearing, even if
    /// the text itself is empty.
    fn text(&self) -> Option<&str>;
}

/// A page as exposed by the layout engine.
pub trait LayoutPage {
    type Node: LayoutNode;

    /// Page identifier assigned by the layout engine.
    fn page_id(&self) -> u32;

    /// Page bounds.
    fn bbox(&self) -> BBox;

    /// Leaf nodes in the engine's geometric insertion order.
    fn nodes(&self) -> &[Self::Node];
}

impl<P: LayoutPage> LayoutPage for &P {
    type Node = P::Node;

    fn page_id(&self) -> u32 {
        (*self).page_id()
    }

    fn bbox(&self) -> BBox {
        (*self).bbox()
    }

    fn nodes(&self) -> &[Self::Node] {
        (*self).nodes()
    }
}

/// Identity of a leaf within its page: its position in [`PageLeaves::leaves`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LeafId(pub usize);

/// What a leaf carries.
#[derive(Debug, Clone, PartialEq)]
pub enum LeafContent {
    /// Text-bearing leaf with its raw text.
    Text(String),
    /// Figure, curve, image or any other non-text region.
    NonText,
}

/// Internal descriptor of a layout leaf.
#[derive(Debug, Clone, PartialEq)]
pub struct Leaf {
    pub bbox: BBox,
    /// Type tag copied from the layout engine
    pub kind: String,
    pub content: LeafContent,
}

impl Leaf {
    /// Create a text-bearing leaf.
    pub fn text(bbox: BBox, kind: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            bbox,
            kind: kind.into(),
            content: LeafContent::Text(text.into()),
        }
    }

    /// Create a non-text leaf.
    pub fn non_text(bbox: BBox, kind: impl Into<String>) -> Self {
        Self {
            bbox,
            kind: kind.into(),
            content: LeafContent::NonText,
        }
    }

    /// Wrap a layout engine node.
    pub fn from_node<N: LayoutNode + ?Sized>(node: &N) -> Self {
        let content = match node.text() {
            Some(text) => LeafContent::Text(text.to_string()),
            None => LeafContent::NonText,
        };
        Self {
            bbox: node.bbox(),
            kind: node.kind().to_string(),
            content,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self.content, LeafContent::Text(_))
    }

    /// Raw text of a text-bearing leaf.
    pub fn raw_text(&self) -> Option<&str> {
        match &self.content {
            LeafContent::Text(text) => Some(text),
            LeafContent::NonText => None,
        }
    }
}

/// Snapshot of one page's leaves, detached from the layout engine.
#[derive(Debug, Clone, PartialEq)]
pub struct PageLeaves {
    pub pageid: u32,
    pub bbox: BBox,
    pub leaves: Vec<Leaf>,
}

impl PageLeaves {
    pub fn new(pageid: u32, bbox: BBox, leaves: Vec<Leaf>) -> Self {
        Self {
            pageid,
            bbox,
            leaves,
        }
    }

    /// Adapt every node of a layout page.
    pub fn from_page<P: LayoutPage + ?Sized>(page: &P) -> Self {
        Self {
            pageid: page.page_id(),
            bbox: page.bbox(),
            leaves: page.nodes().iter().map(Leaf::from_node).collect(),
        }
    }

    pub fn leaf(&self, id: LeafId) -> Option<&Leaf> {
        self.leaves.get(id.0)
    }

    /// Number of leaves on the page.
    pub fn len(&self) -> usize {
        self.leaves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leaves.is_empty()
    }
}

impl LayoutNode for Leaf {
    fn bbox(&self) -> BBox {
        self.bbox
    }

    fn kind(&self) -> &str {
        &self.kind
    }

    fn text(&self) -> Option<&str> {
        self.raw_text()
    }
}

impl LayoutPage for PageLeaves {
    type Node = Leaf;

    fn page_id(&self) -> u32 {
        self.pageid
    }

    fn bbox(&self) -> BBox {
        self.bbox
    }

    fn nodes(&self) -> &[Leaf] {
        &self.leaves
    }
}
