//! Page-by-page alignment driver.
//!
//! Pages are processed strictly in order. The only state carried from one
//! page to the next is the stream offset, passed explicitly into each page
//! and returned from it.

use serde_json::json;

use crate::align::{
    group_text, reorder_objects, AlignOptions, IndelRatio, Normalized, Scorer, TextLocator,
    TextObjectMap,
};
use crate::error::Result;
use crate::layout::{LayoutDump, LayoutPage, PageLeaves};
use crate::model::{AlignedDocument, LeafRecord, PageRecord, IDX_UNRESOLVED_LINE};
use crate::stream::RawText;

/// Result of aligning one page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageAlignment {
    pub record: PageRecord,
    /// Stream offset the page started from
    pub offset_in: usize,
    /// Stream offset the next page starts from
    pub offset_out: usize,
    /// Stream positions that could not be located on this page
    pub unresolved_lines: Vec<usize>,
    /// Whether the scan stopped on patience rather than at the stream end
    pub exhausted: bool,
}

/// Aligns a raw text stream with a sequence of layout pages.
///
/// # Example
///
/// ```
/// use pagealign::{AlignOptions, Aligner, BBox, Leaf, PageLeaves, RawText};
///
/// let page = PageLeaves::new(
///     1,
///     BBox::new(0.0, 0.0, 100.0, 100.0),
///     vec![Leaf::text(BBox::new(0.0, 90.0, 100.0, 100.0), "LTTextBoxHorizontal", "Hello\nWorld\n")],
/// );
/// let raw = RawText::from_lines(["Hello", "World"]);
///
/// let aligner = Aligner::new(AlignOptions::default())?;
/// let doc = aligner.align_pages([&page], &raw)?;
/// assert_eq!(doc.pages[0].text_groups()[0].content.as_deref(), Some("Hello World"));
/// assert_eq!(doc.offset, 2);
/// # Ok::<(), pagealign::Error>(())
/// ```
pub struct Aligner {
    options: AlignOptions,
    scorer: Box<Normalized<dyn Scorer>>,
}

impl Aligner {
    /// Create an aligner using the default indel ratio scorer.
    pub fn new(options: AlignOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self {
            scorer: Box::new(Normalized::new(IndelRatio, options.normalization)),
            options,
        })
    }

    /// Replace the similarity scorer. Normalization still applies first.
    pub fn with_scorer<S: Scorer + 'static>(mut self, scorer: S) -> Self {
        self.scorer = Box::new(Normalized::new(scorer, self.options.normalization));
        self
    }

    pub fn options(&self) -> &AlignOptions {
        &self.options
    }

    /// Align one page of a layout engine, starting at `offset`.
    pub fn align_page<P: LayoutPage + ?Sized>(
        &self,
        page: &P,
        raw: &RawText,
        offset: usize,
    ) -> Result<PageAlignment> {
        let leaves = PageLeaves::from_page(page);
        self.align_leaves(&leaves, raw.lines(), offset)
    }

    /// Align one already adapted page against stream lines.
    pub fn align_leaves<L: AsRef<str>>(
        &self,
        page: &PageLeaves,
        raw: &[L],
        offset: usize,
    ) -> Result<PageAlignment> {
        let offset_in = offset.min(raw.len());
        let map = TextObjectMap::from_leaves(&page.leaves);
        let line_count = map.line_count();

        let location = TextLocator::new(&*self.scorer, &self.options).locate(map, raw, offset_in);

        let grouping = group_text(page, &location.located, &location.index2leaf)?;

        let mut resolved = grouping.resolved;
        reorder_objects(
            &mut resolved,
            self.options.reading_order,
            self.options.boxes_flow,
            |group| page.leaves[group.leaf.0].bbox,
        );

        let text_groups: Vec<LeafRecord> = resolved
            .into_iter()
            .enumerate()
            .map(|(i, group)| LeafRecord::from_leaf(i, &page.leaves[group.leaf.0], Some(group.content)))
            .collect();
        let non_text_groups: Vec<LeafRecord> = grouping
            .non_text
            .iter()
            .enumerate()
            .map(|(i, id)| LeafRecord::from_leaf(i, &page.leaves[id.0], None))
            .collect();
        let unresolved_groups: Vec<LeafRecord> = grouping
            .unresolved
            .iter()
            .enumerate()
            .map(|(i, id)| LeafRecord::from_leaf(i, &page.leaves[id.0], None))
            .collect();

        log::debug!(
            "Page {}: {} lines, {} located, {} resolved / {} unresolved / {} non-text, offset {} -> {}",
            page.pageid,
            line_count,
            location.located.len(),
            text_groups.len(),
            unresolved_groups.len(),
            non_text_groups.len(),
            offset_in,
            location.offset
        );
        if location.located.is_empty() && line_count > 0 && offset_in < raw.len() {
            log::warn!(
                "Page {}: no line could be located from stream offset {}",
                page.pageid,
                offset_in
            );
        }

        let record = PageRecord::new(page.pageid, text_groups, non_text_groups)
            .with_unresolved_groups(unresolved_groups)
            .with_extra_info(json!({ IDX_UNRESOLVED_LINE: location.unresolved_lines }))?;

        Ok(PageAlignment {
            record,
            offset_in,
            offset_out: location.offset,
            unresolved_lines: location.unresolved_lines,
            exhausted: location.exhausted,
        })
    }

    /// Lazily align pages in order, threading the offset from page to page.
    pub fn align_iter<'a, I>(&'a self, pages: I, raw: &'a RawText) -> PageAlignments<'a, I::IntoIter>
    where
        I: IntoIterator,
        I::Item: LayoutPage,
    {
        PageAlignments {
            aligner: self,
            pages: pages.into_iter(),
            raw,
            offset: 0,
        }
    }

    /// Align every page and collect the records.
    pub fn align_pages<I>(&self, pages: I, raw: &RawText) -> Result<AlignedDocument>
    where
        I: IntoIterator,
        I::Item: LayoutPage,
    {
        let mut doc = AlignedDocument::new();
        for alignment in self.align_iter(pages, raw) {
            let alignment = alignment?;
            doc.offset = alignment.offset_out;
            doc.pages.push(alignment.record);
        }
        log::debug!(
            "Aligned {} pages, stream offset {} of {}",
            doc.page_count(),
            doc.offset,
            raw.len()
        );
        Ok(doc)
    }

    /// Align all pages of a layout dump.
    pub fn align_dump(&self, dump: &LayoutDump, raw: &RawText) -> Result<AlignedDocument> {
        self.align_pages(&dump.pages, raw)
    }
}

/// Iterator over page alignments, see [`Aligner::align_iter`].
pub struct PageAlignments<'a, I> {
    aligner: &'a Aligner,
    pages: I,
    raw: &'a RawText,
    offset: usize,
}

impl<'a, I> PageAlignments<'a, I> {
    /// Offset the next page will start from.
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl<'a, I> Iterator for PageAlignments<'a, I>
where
    I: Iterator,
    I::Item: LayoutPage,
{
    type Item = Result<PageAlignment>;

    fn next(&mut self) -> Option<Self::Item> {
        let page = self.pages.next()?;
        let result = self.aligner.align_page(&page, self.raw, self.offset);
        if let Ok(alignment) = &result {
            self.offset = alignment.offset_out;
        }
        Some(result)
    }
}
