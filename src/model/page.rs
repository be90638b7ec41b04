//! Page-level output records.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::LeafRecord;
use crate::error::{Error, Result};
use crate::render::{self, JsonFormat};

/// Key of the unresolved stream positions in `extra_info`.
pub const IDX_UNRESOLVED_LINE: &str = "idx_unresolved_line";

/// Aligned content of a single page.
///
/// Immutable once built. `unresolved_groups` is only written out when it is
/// non-empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PageRecordData")]
pub struct PageRecord {
    pageid: u32,
    text_groups: Vec<LeafRecord>,
    non_text_groups: Vec<LeafRecord>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    unresolved_groups: Vec<LeafRecord>,
    extra_info: Map<String, Value>,
}

/// Wire form, validated into [`PageRecord`].
#[derive(Deserialize)]
struct PageRecordData {
    pageid: u32,
    text_groups: Vec<LeafRecord>,
    non_text_groups: Vec<LeafRecord>,
    #[serde(default)]
    unresolved_groups: Vec<LeafRecord>,
    #[serde(default)]
    extra_info: Option<Value>,
}

impl TryFrom<PageRecordData> for PageRecord {
    type Error = Error;

    fn try_from(data: PageRecordData) -> Result<Self> {
        PageRecord::from_parts(
            data.pageid,
            data.text_groups,
            data.non_text_groups,
            data.unresolved_groups,
            data.extra_info,
        )
    }
}

impl PageRecord {
    /// Create a record with no unresolved groups and empty `extra_info`.
    pub fn new(pageid: u32, text_groups: Vec<LeafRecord>, non_text_groups: Vec<LeafRecord>) -> Self {
        Self {
            pageid,
            text_groups,
            non_text_groups,
            unresolved_groups: Vec::new(),
            extra_info: Map::new(),
        }
    }

    /// Create a record from all of its parts.
    ///
    /// `extra_info` must be a JSON object (or absent / `null`, meaning empty).
    pub fn from_parts(
        pageid: u32,
        text_groups: Vec<LeafRecord>,
        non_text_groups: Vec<LeafRecord>,
        unresolved_groups: Vec<LeafRecord>,
        extra_info: Option<Value>,
    ) -> Result<Self> {
        let extra_info = match extra_info {
            None | Some(Value::Null) => Map::new(),
            Some(Value::Object(map)) => map,
            Some(other) => return Err(Error::InvalidExtraInfo(json_kind(&other).to_string())),
        };
        Ok(Self {
            pageid,
            text_groups,
            non_text_groups,
            unresolved_groups,
            extra_info,
        })
    }

    /// Attach unresolved groups.
    pub fn with_unresolved_groups(mut self, unresolved_groups: Vec<LeafRecord>) -> Self {
        self.unresolved_groups = unresolved_groups;
        self
    }

    /// Replace `extra_info`; fails unless `extra_info` is a JSON object.
    pub fn with_extra_info(mut self, extra_info: Value) -> Result<Self> {
        match extra_info {
            Value::Object(map) => {
                self.extra_info = map;
                Ok(self)
            }
            other => Err(Error::InvalidExtraInfo(json_kind(&other).to_string())),
        }
    }

    pub fn pageid(&self) -> u32 {
        self.pageid
    }

    /// Resolved text objects in reading order.
    pub fn text_groups(&self) -> &[LeafRecord] {
        &self.text_groups
    }

    pub fn non_text_groups(&self) -> &[LeafRecord] {
        &self.non_text_groups
    }

    /// Text objects whose lines could not all be located.
    pub fn unresolved_groups(&self) -> &[LeafRecord] {
        &self.unresolved_groups
    }

    pub fn extra_info(&self) -> &Map<String, Value> {
        &self.extra_info
    }

    /// Stream positions recorded under `idx_unresolved_line`.
    pub fn unresolved_lines(&self) -> Vec<usize> {
        self.extra_info
            .get(IDX_UNRESOLVED_LINE)
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_u64)
                    .map(|v| v as usize)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Number of leaves across all groups.
    pub fn group_count(&self) -> usize {
        self.text_groups.len() + self.non_text_groups.len() + self.unresolved_groups.len()
    }

    /// Resolved text joined in reading order.
    pub fn plain_text(&self) -> String {
        self.text_groups
            .iter()
            .filter_map(|group| group.content.as_deref())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// JSON value of this record.
    pub fn to_record(&self) -> Value {
        let mut record = Map::new();
        record.insert("pageid".to_string(), Value::from(self.pageid));
        record.insert("text_groups".to_string(), records(&self.text_groups));
        record.insert("non_text_groups".to_string(), records(&self.non_text_groups));
        if !self.unresolved_groups.is_empty() {
            record.insert("unresolved_groups".to_string(), records(&self.unresolved_groups));
        }
        record.insert("extra_info".to_string(), Value::Object(self.extra_info.clone()));
        Value::Object(record)
    }

    /// Rebuild a record from its JSON value.
    pub fn from_record(value: Value) -> Result<Self> {
        let data: PageRecordData = serde_json::from_value(value)?;
        PageRecord::try_from(data)
    }

    /// Render as a JSON string.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(self, format)
    }

    /// Parse a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_record(value)
    }
}

fn records(groups: &[LeafRecord]) -> Value {
    Value::Array(groups.iter().map(LeafRecord::to_record).collect())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
