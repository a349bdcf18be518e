//! Checkpoint records recovered from the fetched document.

use serde_json::Value;

use crate::{Error, Result};

/// Key of the checkpoint list in the fetched document
pub const CHECKPOINTS_KEY: &str = "checkpoints";

/// One checkpoint: an identifier to encode and a title naming the output file
#[derive(Debug, Clone, PartialEq)]
pub struct Checkpoint {
    /// Raw identifier as it appeared in the document (string or number)
    pub id: Value,
    /// Human-readable title, used verbatim as the output file stem
    pub title: String,
}

impl Checkpoint {
    pub fn new(id: impl Into<Value>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }

    /// Canonical text form of the identifier.
    ///
    /// This is both the QR payload and the printed label. Strings are used as
    /// is, numbers and booleans through their JSON display form. `null`,
    /// arrays and objects have no text form.
    pub fn id_text(&self) -> Result<String> {
        match &self.id {
            Value::String(s) => Ok(s.clone()),
            Value::Number(n) => Ok(n.to_string()),
            Value::Bool(b) => Ok(b.to_string()),
            other => Err(Error::Render(format!(
                "checkpoint '{}' has an identifier that cannot be printed: {}",
                self.title, other
            ))),
        }
    }
}

/// Read the checkpoint list out of a fetched document, preserving order.
///
/// Fails on the first record that is missing `id` or `title`; nothing is
/// extracted partially.
pub fn extract_checkpoints(document: &Value) -> Result<Vec<Checkpoint>> {
    let list = document
        .get(CHECKPOINTS_KEY)
        .ok_or_else(|| Error::Schema(format!("missing '{}' field", CHECKPOINTS_KEY)))?
        .as_array()
        .ok_or_else(|| Error::Schema(format!("'{}' is not a list", CHECKPOINTS_KEY)))?;

    list.iter()
        .enumerate()
        .map(|(index, record)| {
            let record = record
                .as_object()
                .ok_or_else(|| Error::Schema(format!("checkpoint #{} is not an object", index)))?;
            let id = record
                .get("id")
                .ok_or_else(|| Error::Schema(format!("checkpoint #{} has no 'id'", index)))?;
            let title = record
                .get("title")
                .ok_or_else(|| Error::Schema(format!("checkpoint #{} has no 'title'", index)))?
                .as_str()
                .ok_or_else(|| {
                    Error::Schema(format!("checkpoint #{} has a non-string 'title'", index))
                })?;
            Ok(Checkpoint::new(id.clone(), title))
        })
        .collect()
}
