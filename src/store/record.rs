use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::validation::ValidationErrors;

/// Where a freshly created record lands in the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayOrder {
    /// Prepend: the newest record is shown first.
    NewestFirst,
    /// Append: the newest record is shown last.
    OldestFirst,
}

/// Bounds applied while validating drafts and patches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationLimits {
    /// Longest accepted chat message, in characters, after trimming.
    pub max_message_chars: usize,
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self {
            max_message_chars: 500,
        }
    }
}

/// One item of a list-backed resource.
///
/// `Draft` is the user input for `create`, `Patch` the partial input for
/// `update`. Both are validated before anything touches the collection.
pub trait Record: Clone + std::fmt::Debug {
    type Draft;
    type Patch;

    /// Name used in logs and errors.
    const KIND: &'static str;
    const ORDER: DisplayOrder;

    fn id(&self) -> &str;
    fn timestamp(&self) -> DateTime<Utc>;

    /// Short label: a title or a sender name.
    fn label(&self) -> &str;
    /// Free text body.
    fn body(&self) -> &str;

    /// Checks a draft and returns it with its text fields trimmed.
    fn validate_draft(
        draft: Self::Draft,
        limits: &ValidationLimits,
    ) -> Result<Self::Draft, ValidationErrors>;

    /// Checks the supplied fields of a patch and trims them.
    fn validate_patch(
        patch: Self::Patch,
        limits: &ValidationLimits,
    ) -> Result<Self::Patch, ValidationErrors>;

    /// Checks a whole record, as injected through seed data: required text
    /// fields must be non-empty and trimmed. Length limits only bind input.
    fn validate_record(&self, limits: &ValidationLimits) -> Result<(), ValidationErrors>;

    /// Builds a record from an already validated draft.
    fn from_draft(id: String, timestamp: DateTime<Utc>, author: &str, draft: Self::Draft) -> Self;

    /// Merges an already validated patch. Must not touch id or timestamp.
    fn apply_patch(&mut self, patch: Self::Patch);
}
