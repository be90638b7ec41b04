//! JSON output for page records and documents.

use std::io::Write;

use serde::Serialize;

use crate::error::{Error, Result};

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Indented, one field per line
    #[default]
    Pretty,
    /// Single line
    Compact,
}

/// Render any alignment output as a JSON string.
pub fn to_json<T: Serialize + ?Sized>(value: &T, format: JsonFormat) -> Result<String> {
    match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(value),
        JsonFormat::Compact => serde_json::to_string(value),
    }
    .map_err(render_error)
}

/// Stream alignment output as JSON into a writer.
pub fn write_json<W, T>(writer: W, value: &T, format: JsonFormat) -> Result<()>
where
    W: Write,
    T: Serialize + ?Sized,
{
    let result = match format {
        JsonFormat::Pretty => serde_json::to_writer_pretty(writer, value),
        JsonFormat::Compact => serde_json::to_writer(writer, value),
    };
    result.map_err(|e| if e.is_io() { Error::Io(e.into()) } else { render_error(e) })
}

fn render_error(err: serde_json::Error) -> Error {
    Error::Render(format!("cannot render alignment output: {}", err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::BBox;
    use crate::model::{LeafRecord, PageRecord};

    #[test]
    fn test_pretty_record() {
        let page = PageRecord::new(
            3,
            vec![LeafRecord::new(0, BBox::new(0.0, 0.0, 1.0, 1.0), "LTTextBox", Some("hi".into()))],
            vec![],
        );
        let json = to_json(&page, JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"pageid\": 3"));
        assert!(json.contains('\n'));
    }

    #[test]
    fn test_compact_empty_page() {
        let page = PageRecord::new(1, vec![], vec![]);
        let json = to_json(&page, JsonFormat::Compact).unwrap();
        assert_eq!(
            json,
            r#"{"pageid":1,"text_groups":[],"non_text_groups":[],"extra_info":{}}"#
        );
    }

    #[test]
    fn test_write_json_matches_to_json() {
        let page = PageRecord::new(7, vec![], vec![]);
        let mut buf = Vec::new();
        write_json(&mut buf, &page, JsonFormat::Compact).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            to_json(&page, JsonFormat::Compact).unwrap()
        );
    }
}
