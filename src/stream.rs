//! Raw text stream produced by an independent extraction path.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::error::Result;

/// A flat, order-preserving sequence of text lines.
///
/// Blank lines are kept as the bare line break `"\n"` so that the locator
/// can skip them without counting them as failures.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawText {
    lines: Vec<String>,
}

impl RawText {
    /// Wrap lines exactly as given.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Split a text blob into lines.
    ///
    /// Line terminators are stripped, except that an empty line becomes
    /// `"\n"`.
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.split_inclusive('\n').map(normalize_line).collect(),
        }
    }

    /// Read lines from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut reader = BufReader::new(reader);
        let mut lines = Vec::new();
        let mut buf = String::new();
        loop {
            buf.clear();
            if reader.read_line(&mut buf)? == 0 {
                break;
            }
            lines.push(normalize_line(&buf));
        }
        Ok(Self { lines })
    }

    /// Read lines from a text file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_reader(File::open(path)?)
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl From<Vec<String>> for RawText {
    fn from(lines: Vec<String>) -> Self {
        Self { lines }
    }
}

/// Whether a stream line is a bare line break (a structural skip).
pub fn is_line_break(line: &str) -> bool {
    line == "\n" || line == "\r\n"
}

fn normalize_line(line: &str) -> String {
    if is_line_break(line) {
        return "\n".to_string();
    }
    line.strip_suffix('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .unwrap_or(line)
        .to_string()
}
