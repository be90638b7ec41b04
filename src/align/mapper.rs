//! Line-index maps for one page.
//!
//! Keying lines by a dense integer index rather than by their text keeps
//! duplicate lines from different paragraphs apart, and lets one leaf own
//! the indices of all of its lines.

use std::collections::BTreeMap;

use crate::layout::{Leaf, LeafContent, LeafId};

/// The two index-keyed maps of a page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextObjectMap {
    /// Line index to line text. Non-text leaves have no entry here.
    pub index2text: BTreeMap<usize, String>,
    /// Line index to owning leaf. Every leaf owns at least one index.
    pub index2leaf: BTreeMap<usize, LeafId>,
}

impl TextObjectMap {
    /// Build the maps from leaves in the layout engine's order.
    pub fn from_leaves(leaves: &[Leaf]) -> Self {
        let mut map = Self::default();
        let mut offset = 0;

        for (i, leaf) in leaves.iter().enumerate() {
            let id = LeafId(i);
            match &leaf.content {
                LeafContent::NonText => {
                    map.index2leaf.insert(offset, id);
                    offset += 1;
                }
                LeafContent::Text(text) => {
                    let lines = split_lines(text);
                    if lines.is_empty() {
                        // Keep the leaf reachable; with no text entry it can
                        // never resolve and is grouped as unresolved.
                        map.index2leaf.insert(offset, id);
                        offset += 1;
                        continue;
                    }
                    for line in lines {
                        map.index2text.insert(offset, line);
                        map.index2leaf.insert(offset, id);
                        offset += 1;
                    }
                }
            }
        }
        map
    }

    /// Number of text lines on the page.
    pub fn line_count(&self) -> usize {
        self.index2text.len()
    }

    /// Number of distinct leaves referenced by the page.
    pub fn leaf_count(&self) -> usize {
        let mut ids: Vec<LeafId> = self.index2leaf.values().copied().collect();
        ids.sort_unstable();
        ids.dedup();
        ids.len()
    }
}

/// Join words broken by a hyphen at a line break.
pub fn collapse_hyphenation(text: &str) -> String {
    text.replace("-\r\n", "").replace("-\n", "")
}

/// Collapse hyphenation, then split into non-empty lines.
pub fn split_lines(text: &str) -> Vec<String> {
    collapse_hyphenation(text)
        .lines()
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
