//! Validation report types.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A single rule violation on a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// The field name that failed validation
    pub field: String,
    /// Human-readable error message
    pub message: String,
}

impl ValidationError {
    /// Create a new validation error.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Errors collected by one validation pass, keyed by field name.
///
/// Fields appear in the order their first error was recorded, which for the
/// engine is field declaration order. A field without violations has no
/// entry. Serializes as `{"field": ["message", ...], ...}`; deserializing
/// rejects a field whose message list is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(
    try_from = "IndexMap<String, Vec<String>>",
    into = "IndexMap<String, Vec<String>>"
)]
#[error("validation failed: {} error(s)", count_messages(.fields))]
pub struct ValidationReport {
    fields: IndexMap<String, Vec<String>>,
}

/// A deserialized report listed a field without any messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("field '{0}' has no messages")]
pub struct EmptyFieldError(pub String);

impl TryFrom<IndexMap<String, Vec<String>>> for ValidationReport {
    type Error = EmptyFieldError;

    fn try_from(fields: IndexMap<String, Vec<String>>) -> Result<Self, Self::Error> {
        if let Some((field, _)) = fields.iter().find(|(_, messages)| messages.is_empty()) {
            return Err(EmptyFieldError(field.clone()));
        }
        Ok(Self { fields })
    }
}

impl From<ValidationReport> for IndexMap<String, Vec<String>> {
    fn from(report: ValidationReport) -> Self {
        report.fields
    }
}

fn count_messages(fields: &IndexMap<String, Vec<String>>) -> usize {
    fields.values().map(Vec::len).sum()
}

impl ValidationReport {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error under its field.
    pub fn push(&mut self, error: ValidationError) {
        self.fields
            .entry(error.field)
            .or_default()
            .push(error.message);
    }

    /// Check if there are any errors.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Get the total number of errors.
    pub fn len(&self) -> usize {
        count_messages(&self.fields)
    }

    /// Number of fields with at least one error.
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Get the messages for a specific field.
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.fields.get(field).map(Vec::as_slice)
    }

    /// Whether `field` has any errors.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Field names with errors, in report order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Iterate over `(field, messages)` pairs in report order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.fields
            .iter()
            .map(|(field, messages)| (field.as_str(), messages.as_slice()))
    }

    /// Flatten into individual errors, field by field.
    pub fn to_errors(&self) -> Vec<ValidationError> {
        self.iter()
            .flat_map(|(field, messages)| {
                messages
                    .iter()
                    .map(move |message| ValidationError::new(field, message.as_str()))
            })
            .collect()
    }

    /// Convert to Result - Ok if no errors, Err otherwise.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl Extend<ValidationError> for ValidationReport {
    fn extend<I: IntoIterator<Item = ValidationError>>(&mut self, iter: I) {
        for error in iter {
            self.push(error);
        }
    }
}

impl FromIterator<ValidationError> for ValidationReport {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        let mut report = Self::new();
        report.extend(iter);
        report
    }
}
