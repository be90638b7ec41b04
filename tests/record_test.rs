//! Integration tests for output records.

use pagealign::{
    Aligner, AlignOptions, AlignedDocument, BBox, Error, JsonFormat, LeafRecord, PageRecord,
};
use serde_json::{json, Value};

fn aligned_document() -> AlignedDocument {
    let json = r#"{
        "pages": [
            {
                "pageid": 1,
                "bbox": [0.0, 0.0, 612.0, 792.0],
                "objects": [
                    {"type": "LTTextBoxHorizontal", "bbox": [72.125, 700.5, 540.0, 720.0], "text": "Quarterly\nreport\n"},
                    {"type": "LTFigure", "bbox": [72.0, 400.0, 300.0, 600.0]},
                    {"type": "LTTextBoxHorizontal", "bbox": [72.0, 100.0, 540.0, 120.0], "text": "Missing\nline\n"}
                ]
            }
        ]
    }"#;
    let dump = pagealign::LayoutDump::from_json_str(json).unwrap();
    let raw = pagealign::RawText::from_lines(["Quarterly", "report", "Missing"]);
    Aligner::new(AlignOptions::default())
        .unwrap()
        .align_dump(&dump, &raw)
        .unwrap()
}

#[test]
fn test_output_shape() {
    let doc = aligned_document();
    let value = doc.pages[0].to_record();

    assert_eq!(value["pageid"], json!(1));
    assert_eq!(
        value["text_groups"],
        json!([{
            "index": 0,
            "bbox": [72.125, 700.5, 540.0, 720.0],
            "type": "LTTextBoxHorizontal",
            "content": "Quarterly report"
        }])
    );
    assert_eq!(
        value["non_text_groups"],
        json!([{
            "index": 0,
            "bbox": [72.0, 400.0, 300.0, 600.0],
            "type": "LTFigure",
            "content": null
        }])
    );
    assert_eq!(value["unresolved_groups"][0]["content"], json!("Missing\nline\n"));
    assert_eq!(value["extra_info"], json!({ "idx_unresolved_line": [] }));
}

#[test]
fn test_aligned_page_round_trip() {
    let doc = aligned_document();
    let page = &doc.pages[0];

    let back = PageRecord::from_record(page.to_record()).unwrap();
    assert_eq!(&back, page);

    let text = page.to_json(JsonFormat::Compact).unwrap();
    assert_eq!(&PageRecord::from_json_str(&text).unwrap(), page);
}

#[test]
fn test_document_round_trip() {
    let doc = aligned_document();
    let text = doc.to_json(JsonFormat::Pretty).unwrap();
    let back = AlignedDocument::from_json_str(&text).unwrap();
    assert_eq!(back, doc);
    assert_eq!(back.unresolved_count(), 1);
}

#[test]
fn test_float_fidelity() {
    let bbox = BBox::new(0.1, 1.0 / 3.0, 2.0f64.sqrt(), 1e-300);
    let record = PageRecord::new(
        9,
        vec![LeafRecord::new(0, bbox, "LTTextBoxHorizontal", Some("x".to_string()))],
        vec![],
    );
    let text = record.to_json(JsonFormat::Compact).unwrap();
    let back = PageRecord::from_json_str(&text).unwrap();
    assert_eq!(back.text_groups()[0].bbox.to_array(), bbox.to_array());
}

#[test]
fn test_extra_info_must_be_an_object() {
    for bad in [json!([]), json!(1), json!("info"), json!(true)] {
        let result = PageRecord::new(1, vec![], vec![]).with_extra_info(bad);
        assert!(matches!(result, Err(Error::InvalidExtraInfo(_))));
    }

    let mut value = PageRecord::new(1, vec![], vec![]).to_record();
    value["extra_info"] = json!(["not", "an", "object"]);
    assert!(matches!(
        PageRecord::from_record(value),
        Err(Error::InvalidExtraInfo(_))
    ));
}

#[test]
fn test_missing_field_is_json_error() {
    let value: Value = json!({ "pageid": 1, "text_groups": [] });
    assert!(matches!(PageRecord::from_record(value), Err(Error::Json(_))));
}
