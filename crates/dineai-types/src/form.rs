//! Form values collected from the user surface.
//!
//! A [`FormInput`] is the ephemeral, per-request set of named values a
//! feature pipeline is run with. Values are plain scalars; nothing is
//! validated beyond presence.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A single scalar form value.
///
/// Serializes untagged, so a record document holds `"Wedding"`, `50` or
/// `0.5` rather than a tagged wrapper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FormValue {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl FormValue {
    /// Whether the value counts as filled in.
    ///
    /// Text must contain something other than whitespace; numbers are
    /// present unless NaN.
    pub fn is_present(&self) -> bool {
        match self {
            FormValue::Text(s) => !s.trim().is_empty(),
            FormValue::Integer(_) => true,
            FormValue::Float(f) => !f.is_nan(),
        }
    }

    /// The text content, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FormValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for FormValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormValue::Text(s) => write!(f, "{s}"),
            FormValue::Integer(i) => write!(f, "{i}"),
            FormValue::Float(x) => write!(f, "{x}"),
        }
    }
}

impl From<&str> for FormValue {
    fn from(value: &str) -> Self {
        FormValue::Text(value.to_string())
    }
}

impl From<String> for FormValue {
    fn from(value: String) -> Self {
        FormValue::Text(value)
    }
}

impl From<i64> for FormValue {
    fn from(value: i64) -> Self {
        FormValue::Integer(value)
    }
}

impl From<i32> for FormValue {
    fn from(value: i32) -> Self {
        FormValue::Integer(i64::from(value))
    }
}

impl From<u32> for FormValue {
    fn from(value: u32) -> Self {
        FormValue::Integer(i64::from(value))
    }
}

impl From<f64> for FormValue {
    fn from(value: f64) -> Self {
        FormValue::Float(value)
    }
}

/// Named form values for one pipeline run, ordered by field name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormInput {
    fields: BTreeMap<String, FormValue>,
}

impl FormInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<FormValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Insert or replace a value, returning the previous one.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<FormValue>,
    ) -> Option<FormValue> {
        self.fields.insert(name.into(), value.into())
    }

    pub fn remove(&mut self, name: &str) -> Option<FormValue> {
        self.fields.remove(name)
    }

    pub fn get(&self, name: &str) -> Option<&FormValue> {
        self.fields.get(name)
    }

    /// The value for `name` only if it is present (see [`FormValue::is_present`]).
    pub fn present(&self, name: &str) -> Option<&FormValue> {
        self.fields.get(name).filter(|v| v.is_present())
    }

    /// Every name in `required` that is absent or not present, in the order given.
    pub fn missing_fields(&self, required: &[&str]) -> Vec<String> {
        required
            .iter()
            .filter(|name| self.present(name).is_none())
            .map(|name| name.to_string())
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FormValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<FormValue>> FromIterator<(K, V)> for FormInput {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
