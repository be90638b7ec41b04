//! Integration tests for file-based alignment.

use std::fs;

use pagealign::layout::DumpPage;
use pagealign::{
    align_files, align_files_with_options, AlignOptions, AlignedDocument, BBox, Error, JsonFormat,
    LayoutDump, RawText,
};
use tempfile::TempDir;

fn write_inputs(dir: &TempDir, dump: &LayoutDump, text: &str) -> (std::path::PathBuf, std::path::PathBuf) {
    let layout_path = dir.path().join("layout.json");
    let text_path = dir.path().join("document.txt");
    fs::write(&layout_path, serde_json::to_string(dump).unwrap()).unwrap();
    fs::write(&text_path, text).unwrap();
    (layout_path, text_path)
}

fn two_page_dump() -> LayoutDump {
    let media = BBox::new(0.0, 0.0, 612.0, 792.0);

    let mut first = DumpPage::new(1, media);
    first.push_text("LTTextBoxHorizontal", BBox::new(72.0, 700.0, 540.0, 720.0), "Chapter One\n");
    first.push_text(
        "LTTextBoxHorizontal",
        BBox::new(72.0, 500.0, 540.0, 690.0),
        "It was a bright cold day in April,\nand the clocks were strik-\ning thirteen.\n",
    );
    first.push_non_text("LTFigure", BBox::new(100.0, 100.0, 500.0, 400.0));

    let mut second = DumpPage::new(2, media);
    second.push_text("LTTextBoxHorizontal", BBox::new(72.0, 700.0, 540.0, 720.0), "Chapter Two\n");

    LayoutDump {
        pages: vec![first, second],
    }
}

#[test]
fn test_align_files() {
    let dir = TempDir::new().unwrap();
    let text = "Chapter One\n\nIt was a bright cold day in April,\nand the clocks were striking thirteen.\n\nChapter Two\n";
    let (layout_path, text_path) = write_inputs(&dir, &two_page_dump(), text);

    let doc = align_files(&layout_path, &text_path).unwrap();
    assert_eq!(doc.page_count(), 2);
    assert_eq!(doc.offset, 6);

    let first = doc.get_page(1).unwrap();
    assert_eq!(
        first.plain_text(),
        "Chapter One\nIt was a bright cold day in April, and the clocks were striking thirteen."
    );
    assert_eq!(first.non_text_groups().len(), 1);
    assert_eq!(doc.get_page(2).unwrap().plain_text(), "Chapter Two");
    assert_eq!(doc.unresolved_count(), 0);

    let out = dir.path().join("aligned.json");
    doc.write_json_file(&out, JsonFormat::Pretty).unwrap();
    let back = AlignedDocument::from_json_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(back, doc);
}

#[test]
fn test_raw_text_from_file_keeps_blank_lines() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("stream.txt");
    fs::write(&path, "one\r\n\r\ntwo\n\nthree").unwrap();

    let raw = RawText::from_path(&path).unwrap();
    assert_eq!(raw.lines(), ["one", "\n", "two", "\n", "three"]);
}

#[test]
fn test_dump_from_path() {
    let dir = TempDir::new().unwrap();
    let (layout_path, _) = write_inputs(&dir, &two_page_dump(), "");

    let dump = LayoutDump::from_path(&layout_path).unwrap();
    assert_eq!(dump, two_page_dump());
    assert_eq!(dump.page_count(), 2);
}

#[test]
fn test_malformed_dump() {
    let dir = TempDir::new().unwrap();
    let layout_path = dir.path().join("layout.json");
    let text_path = dir.path().join("document.txt");
    fs::write(&layout_path, "{\"pages\": [{\"pageid\": 1}]}").unwrap();
    fs::write(&text_path, "text\n").unwrap();

    let result = align_files(&layout_path, &text_path);
    assert!(matches!(result, Err(Error::Json(_))));
}

#[test]
fn test_options_apply_to_files() {
    let dir = TempDir::new().unwrap();
    let text = "Chapter 0ne\nChapter Two\n";
    let (layout_path, text_path) = write_inputs(&dir, &two_page_dump(), text);

    let options = AlignOptions::default().layout_text();
    let doc = align_files_with_options(&layout_path, &text_path, options).unwrap();
    assert_eq!(doc.get_page(1).unwrap().text_groups()[0].content.as_deref(), Some("Chapter One"));

    let options = AlignOptions::default().with_score_cutoff(95.0);
    let doc = align_files_with_options(&layout_path, &text_path, options).unwrap();
    let first = doc.get_page(1).unwrap();
    assert!(first.text_groups().is_empty());
    assert_eq!(first.unresolved_groups().len(), 2);
    assert_eq!(first.unresolved_lines(), vec![0, 1]);
    assert_eq!(doc.get_page(2).unwrap().plain_text(), "Chapter Two");
    assert_eq!(doc.offset, 2);
}
