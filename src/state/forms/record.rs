//! Snapshot of an accepted submission

use super::field::{FieldKind, FieldValue};
use super::validator::ValidatedForm;
use chrono::{DateTime, Utc};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Shown in place of an empty optional value
pub const NOT_PROVIDED: &str = "(not provided)";

/// One submitted field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordEntry {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    pub value: FieldValue,
}

impl RecordEntry {
    /// Value as shown to the user
    pub fn display_value(&self) -> String {
        if self.value.is_empty() {
            return NOT_PROVIDED.to_string();
        }
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Choice(c) => c.clone().unwrap_or_default(),
            FieldValue::Checked(items) => items.join(", "),
            FieldValue::Flag(on) => (if *on { "Yes" } else { "No" }).to_string(),
            FieldValue::File(name) => name.clone().unwrap_or_default(),
        }
    }

    /// Whether the value is typed free text rather than a fixed option
    pub fn is_free_text(&self) -> bool {
        self.kind.accepts_text() || self.kind == FieldKind::File
    }
}

/// Every field name mapped to its value at submit time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionRecord {
    pub entries: Vec<RecordEntry>,
    pub submitted_at: DateTime<Utc>,
}

impl SubmissionRecord {
    /// Capture a record from a validated form
    pub fn capture(form: &ValidatedForm, submitted_at: DateTime<Utc>) -> Self {
        let entries = form
            .fields()
            .iter()
            .map(|f| RecordEntry {
                name: f.name.clone(),
                label: f.label.clone(),
                kind: f.kind,
                value: f.value.clone(),
            })
            .collect();
        Self {
            entries,
            submitted_at,
        }
    }

    pub fn get(&self, name: &str) -> Option<&RecordEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Pretty-printed JSON in field declaration order
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl Serialize for SubmissionRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len() + 1))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.name, &entry.value)?;
        }
        map.serialize_entry("submitted_at", &self.submitted_at.to_rfc3339())?;
        map.end()
    }
}
