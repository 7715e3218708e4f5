//! Row input: records with named text fields
//!
//! A row provider yields `(index, record)` pairs. The text scored for a row
//! is the caller's selected fields joined in the caller's order; missing or
//! null fields are skipped, so a row whose fields are all missing scores as
//! the empty string.

use std::borrow::Cow;
use std::collections::{BTreeSet, HashMap};
use std::io::BufRead;
use std::path::Path;

use serde_json::{Map, Value};
use walkdir::WalkDir;

use crate::error::{GradeError, Result};

/// A JSON object row
pub type JsonRecord = Map<String, Value>;

/// Field name holding the file contents of a directory row
pub const TEXT_FIELD: &str = "text";

/// Field name holding the relative path of a directory row
pub const PATH_FIELD: &str = "path";

/// File extensions picked up from prompt directories
const TEXT_EXTENSIONS: [&str; 2] = ["txt", "md"];

/// A record exposing named text fields
pub trait TextRecord {
    /// Text of the field, or `None` when missing or null
    fn text_field(&self, name: &str) -> Option<Cow<'_, str>>;
}

impl TextRecord for JsonRecord {
    fn text_field(&self, name: &str) -> Option<Cow<'_, str>> {
        match self.get(name)? {
            Value::Null => None,
            Value::String(s) => Some(Cow::Borrowed(s.as_str())),
            other => Some(Cow::Owned(other.to_string())),
        }
    }
}

impl TextRecord for HashMap<String, String> {
    fn text_field(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get(name).map(|s| Cow::Borrowed(s.as_str()))
    }
}

/// Which fields feed one evaluation, and how they are joined
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSelection {
    pub fields: Vec<String>,
    pub separator: String,
}

impl FieldSelection {
    pub fn new(fields: Vec<String>) -> Self {
        FieldSelection {
            fields,
            separator: " ".to_string(),
        }
    }

    /// Select a single field
    pub fn single(field: impl Into<String>) -> Self {
        Self::new(vec![field.into()])
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Join the selected fields of a record into the text to score
    pub fn combine<R: TextRecord + ?Sized>(&self, record: &R) -> String {
        let parts: Vec<Cow<'_, str>> = self
            .fields
            .iter()
            .filter_map(|field| record.text_field(field))
            .collect();
        parts.join(&self.separator)
    }
}

/// Parse JSON Lines into indexed records. Blank lines are skipped; every
/// other line must be a JSON object.
pub fn read_jsonl<R: BufRead>(reader: R) -> Result<Vec<(usize, JsonRecord)>> {
    let mut records = Vec::new();

    for (i, line) in reader.lines().enumerate() {
        let line_no = i + 1;
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let value: Value = serde_json::from_str(&line)
            .map_err(|e| GradeError::invalid_record(line_no, e))?;
        match value {
            Value::Object(map) => records.push((records.len(), map)),
            other => {
                return Err(GradeError::invalid_record(
                    line_no,
                    format!("expected a JSON object, found {}", json_kind(&other)),
                ))
            }
        }
    }

    tracing::debug!(records = records.len(), "read jsonl");
    Ok(records)
}

/// Collect `*.txt` and `*.md` files under a directory, one record per file
/// with `path` (relative to `root`) and `text` fields. Files are visited in
/// sorted order; unreadable files are skipped with a warning.
pub fn read_text_dir(root: &Path) -> Result<Vec<(usize, JsonRecord)>> {
    if !root.is_dir() {
        return Err(GradeError::not_found("prompt directory", root.display()));
    }

    let mut records = Vec::new();

    for entry in WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        let is_text = entry.file_type().is_file()
            && path
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| TEXT_EXTENSIONS.contains(&e));
        if !is_text {
            continue;
        }

        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to read prompt file");
                continue;
            }
        };

        let relative = path.strip_prefix(root).unwrap_or(path);
        let mut record = JsonRecord::new();
        record.insert(
            PATH_FIELD.to_string(),
            Value::String(relative.display().to_string()),
        );
        record.insert(TEXT_FIELD.to_string(), Value::String(text));
        records.push((records.len(), record));
    }

    tracing::debug!(root = %root.display(), records = records.len(), "read prompt directory");
    Ok(records)
}

/// Names of fields holding a string in at least one record, sorted
pub fn text_fields<'r>(records: impl IntoIterator<Item = &'r JsonRecord>) -> Vec<String> {
    let mut names = BTreeSet::new();
    for record in records {
        for (name, value) in record {
            if value.is_string() {
                names.insert(name.clone());
            }
        }
    }
    names.into_iter().collect()
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
