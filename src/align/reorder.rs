//! Reading order of grouped objects.
//!
//! Boxes are sorted by a single scalar key built from their coordinates, the
//! same weighting pdfminer uses to order text boxes. `boxes_flow` trades
//! horizontal position against vertical position: at `-1` only the
//! horizontal term counts, at `+1` only the vertical one.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::layout::BBox;

/// Geometric flow used to order boxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadingOrder {
    /// Left to right, top to bottom (`"LRTB"`)
    #[default]
    LeftRightTopBottom,
    /// Top to bottom, right to left (`"TBRL"`)
    TopBottomRightLeft,
}

impl ReadingOrder {
    /// Short mode name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReadingOrder::LeftRightTopBottom => "LRTB",
            ReadingOrder::TopBottomRightLeft => "TBRL",
        }
    }

    /// Scalar sort key of a box; smaller keys come first.
    pub fn key(&self, bbox: &BBox, boxes_flow: f64) -> f64 {
        match self {
            ReadingOrder::LeftRightTopBottom => {
                (1.0 - boxes_flow) * bbox.x0 - (1.0 + boxes_flow) * (bbox.y0 + bbox.y1)
            }
            ReadingOrder::TopBottomRightLeft => {
                -(1.0 + boxes_flow) * (bbox.x0 + bbox.x1) - (1.0 - boxes_flow) * bbox.y1
            }
        }
    }
}

impl FromStr for ReadingOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "LRTB" => Ok(ReadingOrder::LeftRightTopBottom),
            "TBRL" => Ok(ReadingOrder::TopBottomRightLeft),
            _ => Err(Error::InvalidReadingOrder(s.to_string())),
        }
    }
}

impl fmt::Display for ReadingOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort `items` into reading order.
///
/// The sort is stable: items with equal keys keep their input order.
pub fn reorder_objects<T, F>(items: &mut [T], order: ReadingOrder, boxes_flow: f64, bbox: F)
where
    F: Fn(&T) -> BBox,
{
    items.sort_by(|a, b| {
        let key_a = order.key(&bbox(a), boxes_flow);
        let key_b = order.key(&bbox(b), boxes_flow);
        key_a.total_cmp(&key_b)
    });
}
