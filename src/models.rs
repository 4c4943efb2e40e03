//! Frontend Models
//!
//! Data structures matching the remote collection resource.

use serde::{Deserialize, Serialize};

/// Display text for a record without a color
pub const COLOR_PLACEHOLDER: &str = "Not mentioned";

/// Record data structure (matches remote `/objects` entries)
///
/// Unknown fields such as `createdAt` are ignored on input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<RecordData>,
}

/// Nested `data` object. Other keys the server may carry are dropped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Record {
    #[cfg(test)]
    pub fn new(id: impl Into<String>, name: impl Into<String>, color: Option<&str>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            data: Some(RecordData { color: color.map(str::to_string) }),
        }
    }

    pub fn color(&self) -> Option<&str> {
        self.data.as_ref().and_then(|d| d.color.as_deref())
    }

    /// Color cell text: the color, or the placeholder when absent
    pub fn color_label(&self) -> &str {
        self.color().unwrap_or(COLOR_PLACEHOLDER)
    }

    /// Replace name and color, keeping any other state
    pub fn apply(&mut self, name: &str, color: Option<&str>) {
        self.name = name.to_string();
        self.data = Some(RecordData { color: color.map(str::to_string) });
    }
}

/// Request body for create and update: `{name, data: {color}}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordDraft {
    pub name: String,
    pub data: RecordData,
}

impl RecordDraft {
    pub fn new(name: impl Into<String>, color: Option<String>) -> Self {
        Self {
            name: name.into(),
            data: RecordData { color },
        }
    }

    #[cfg(test)]
    pub fn color(&self) -> Option<&str> {
        self.data.color.as_deref()
    }
}
