//! Locate raw stream lines on a page.
//!
//! The stream is scanned from the carried-over offset. Each line is fuzzy
//! matched against the page's remaining pool of layout lines; a line is only
//! accepted when exactly one pool entry clears the cutoff. Consecutive
//! failures beyond the patience threshold mark the end of the page, and the
//! trailing run of failed lines is handed back to the next page.

use std::collections::BTreeMap;

use super::mapper::TextObjectMap;
use super::options::{AlignOptions, ContentSource};
use super::scorer::Scorer;
use crate::layout::LeafId;
use crate::stream::is_line_break;

/// Outcome of locating the stream on one page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Location {
    /// Line index to located text
    pub located: BTreeMap<usize, String>,
    /// Line index to owning leaf, unchanged from the mapper
    pub index2leaf: BTreeMap<usize, LeafId>,
    /// Where the next page should resume scanning
    pub offset: usize,
    /// Stream positions that matched nothing or more than one pool entry
    pub unresolved_lines: Vec<usize>,
    /// Whether the scan stopped because patience ran out
    pub exhausted: bool,
}

/// Result of matching one query against the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PoolMatch {
    None,
    Unique(usize),
    Ambiguous,
}

/// Aligns stream lines with one page's lines.
pub struct TextLocator<'a, S: Scorer + ?Sized> {
    scorer: &'a S,
    score_cutoff: f64,
    patience: Option<usize>,
    content_source: ContentSource,
}

impl<'a, S: Scorer + ?Sized> TextLocator<'a, S> {
    pub fn new(scorer: &'a S, options: &AlignOptions) -> Self {
        Self {
            scorer,
            score_cutoff: options.score_cutoff,
            patience: options.patience,
            content_source: options.content_source,
        }
    }

    /// Scan `raw` from `offset`, consuming pool entries of `map`.
    ///
    /// The returned offset never moves backwards and never exceeds
    /// `raw.len()`.
    pub fn locate<L: AsRef<str>>(&self, map: TextObjectMap, raw: &[L], offset: usize) -> Location {
        let TextObjectMap {
            index2text: mut pool,
            index2leaf,
        } = map;

        let start = offset.min(raw.len());
        let patience = self.patience.unwrap_or(raw.len());

        let mut located = BTreeMap::new();
        let mut unresolved_lines = Vec::new();
        let mut cnt_skipped = 0;
        let mut cnt_unresolved = 0;
        let mut exhausted = false;
        let mut cursor = start;

        while cursor < raw.len() {
            if cnt_unresolved > patience {
                exhausted = true;
                log::trace!(
                    "Patience exceeded at stream line {} ({} consecutive failures)",
                    cursor,
                    cnt_unresolved
                );
                break;
            }

            let query = raw[cursor].as_ref();
            if is_line_break(query) {
                cnt_skipped += 1;
                cursor += 1;
                continue;
            }

            match self.find(&pool, query) {
                PoolMatch::Unique(index) => {
                    // Remove before recording so the entry cannot match twice.
                    if let Some(parsed) = pool.remove(&index) {
                        let text = match self.content_source {
                            ContentSource::RawStream => query.to_string(),
                            ContentSource::Layout => parsed,
                        };
                        located.insert(index, text);
                    }
                    cnt_unresolved = 0;
                    cnt_skipped = 0;
                }
                PoolMatch::Ambiguous => {
                    log::trace!("Stream line {} is ambiguous: {:?}", cursor, query);
                    unresolved_lines.push(cursor);
                    cnt_unresolved += 1;
                }
                PoolMatch::None => {
                    log::trace!("Stream line {} has no match: {:?}", cursor, query);
                    unresolved_lines.push(cursor);
                    cnt_unresolved += 1;
                }
            }
            cursor += 1;
        }

        // Retry the trailing failures (and the blank lines between them) on
        // the next page.
        let offset = cursor - cnt_unresolved - cnt_skipped;

        Location {
            located,
            index2leaf,
            offset,
            unresolved_lines,
            exhausted,
        }
    }

    fn find(&self, pool: &BTreeMap<usize, String>, query: &str) -> PoolMatch {
        let mut found = PoolMatch::None;
        for (index, text) in pool {
            if self.scorer.score(query, text) >= self.score_cutoff {
                if found != PoolMatch::None {
                    return PoolMatch::Ambiguous;
                }
                found = PoolMatch::Unique(*index);
            }
        }
        found
    }
}
