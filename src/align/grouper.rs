//! Regroup located lines into their owning leaves.

use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::layout::{LeafId, PageLeaves};

/// A text leaf whose lines were all located.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedGroup {
    pub leaf: LeafId,
    /// Located lines joined with single spaces, in line order
    pub content: String,
}

/// Partition of a page's leaves.
///
/// Every leaf referenced by the index map lands in exactly one bucket.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Grouping {
    pub resolved: Vec<ResolvedGroup>,
    pub unresolved: Vec<LeafId>,
    pub non_text: Vec<LeafId>,
}

impl Grouping {
    /// Total number of grouped leaves.
    pub fn len(&self) -> usize {
        self.resolved.len() + self.unresolved.len() + self.non_text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Group located lines by leaf.
///
/// A text leaf is resolved only if every one of its lines was located;
/// otherwise the whole leaf is unresolved. Fails when `index2leaf` does not
/// cover every leaf of `page` exactly once or names a leaf the page lacks.
pub fn group_text(
    page: &PageLeaves,
    located: &BTreeMap<usize, String>,
    index2leaf: &BTreeMap<usize, LeafId>,
) -> Result<Grouping> {
    let mut leaf_indices: BTreeMap<LeafId, Vec<usize>> = BTreeMap::new();
    for (index, leaf) in index2leaf {
        leaf_indices.entry(*leaf).or_default().push(*index);
    }

    let expected = page.len();
    let partition_error = |actual| Error::PartitionIncomplete {
        pageid: page.pageid,
        expected,
        actual,
    };

    let mut grouping = Grouping::default();
    for (id, mut indices) in leaf_indices {
        let leaf = page.leaf(id).ok_or_else(|| partition_error(index2leaf.len()))?;
        if !leaf.is_text() {
            grouping.non_text.push(id);
            continue;
        }

        if !indices.iter().all(|index| located.contains_key(index)) {
            grouping.unresolved.push(id);
            continue;
        }

        indices.sort_unstable();
        let content = indices
            .iter()
            .filter_map(|index| located.get(index).map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ");
        grouping.resolved.push(ResolvedGroup { leaf: id, content });
    }

    // Ids are distinct and all on the page, so equal counts mean full coverage.
    if grouping.len() != expected {
        return Err(partition_error(grouping.len()));
    }

    Ok(grouping)
}
