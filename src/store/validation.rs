use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Field name -> human-readable rejection reason.
///
/// Returned instead of applying a mutation; the UI shows each message next
/// to the field it is keyed by.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    fields: BTreeMap<String, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `message` for `field`. The first message per field wins.
    pub fn insert(&mut self, field: &str, message: impl Into<String>) {
        self.fields
            .entry(field.to_string())
            .or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// `Ok(value)` when nothing was recorded.
    pub fn into_result<T>(self, value: T) -> Result<T, ValidationErrors> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

/// Trims `value`; records `message` under `field` when nothing is left.
pub fn required(errors: &mut ValidationErrors, field: &str, value: &str, message: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.insert(field, message);
    }
    trimmed.to_string()
}

/// Checks a field of a record that never went through a draft: it must be
/// non-empty and already trimmed.
pub fn stored(errors: &mut ValidationErrors, field: &str, value: &str, message: &str) {
    if value.trim().is_empty() {
        errors.insert(field, message);
    } else if value.trim() != value {
        errors.insert(field, "Surrounding whitespace is not allowed");
    }
}

/// Same as [`required`] for an optional patch field. `None` stays `None`.
pub fn required_if_present(
    errors: &mut ValidationErrors,
    field: &str,
    value: Option<String>,
    message: &str,
) -> Option<String> {
    value.map(|value| required(errors, field, &value, message))
}

/// Records an error when `value` is longer than `max` characters.
pub fn max_chars(errors: &mut ValidationErrors, field: &str, value: &str, max: usize) {
    if value.chars().count() > max {
        errors.insert(field, format!("Message is too long (max {max} characters)"));
    }
}
