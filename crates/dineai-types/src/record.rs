//! Records appended to the document store.

use serde::ser::Error as _;
use serde::{Deserialize, Serialize};

use crate::form::FormInput;

/// Document key holding the completion text.
pub const COMPLETION_TEXT_KEY: &str = "completionText";

/// Where a form field named [`COMPLETION_TEXT_KEY`] is kept instead.
pub const SHADOWED_INPUT_KEY: &str = "input_completionText";

/// One persisted request/response pair.
///
/// Serialized as a single flat document: the form fields side by side with
/// a `completionText` entry. Written once and never read back by the
/// pipelines.
///
/// `completionText` is reserved. [`PersistedRecord::new`] moves a form field
/// with that name to [`SHADOWED_INPUT_KEY`] so both values are kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedRecord {
    #[serde(flatten)]
    pub fields: FormInput,
    #[serde(rename = "completionText")]
    pub completion_text: String,
}

impl PersistedRecord {
    pub fn new(mut fields: FormInput, completion_text: impl Into<String>) -> Self {
        if let Some(value) = fields.remove(COMPLETION_TEXT_KEY) {
            fields.insert(SHADOWED_INPUT_KEY, value);
        }
        Self {
            fields,
            completion_text: completion_text.into(),
        }
    }

    /// The JSON document body stored for this record.
    ///
    /// Fails if `fields` was filled in directly with the reserved key.
    pub fn to_document(&self) -> Result<serde_json::Value, serde_json::Error> {
        if self.fields.get(COMPLETION_TEXT_KEY).is_some() {
            return Err(serde_json::Error::custom(format!(
                "form field '{COMPLETION_TEXT_KEY}' is reserved"
            )));
        }
        serde_json::to_value(self)
    }
}
