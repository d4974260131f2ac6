use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::store::validation::{max_chars, required, required_if_present, stored};
use crate::store::{DisplayOrder, Record, ValidationErrors, ValidationLimits};

/// Thông báo chung trên bảng tin (newest-first).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Announcement {
    pub id: String,
    pub title: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    pub author: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnouncementDraft {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnouncementPatch {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl Record for Announcement {
    type Draft = AnnouncementDraft;
    type Patch = AnnouncementPatch;

    const KIND: &'static str = "announcement";
    const ORDER: DisplayOrder = DisplayOrder::NewestFirst;

    fn id(&self) -> &str {
        &self.id
    }

    fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    fn label(&self) -> &str {
        &self.title
    }

    fn body(&self) -> &str {
        &self.content
    }

    fn validate_draft(
        draft: AnnouncementDraft,
        _limits: &ValidationLimits,
    ) -> Result<AnnouncementDraft, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let title = required(&mut errors, "title", &draft.title, "Title is required");
        let content = required(&mut errors, "content", &draft.content, "Content is required");
        errors.into_result(AnnouncementDraft { title, content })
    }

    fn validate_patch(
        patch: AnnouncementPatch,
        _limits: &ValidationLimits,
    ) -> Result<AnnouncementPatch, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let title = required_if_present(&mut errors, "title", patch.title, "Title is required");
        let content =
            required_if_present(&mut errors, "content", patch.content, "Content is required");
        errors.into_result(AnnouncementPatch { title, content })
    }

    fn validate_record(&self, _limits: &ValidationLimits) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        stored(&mut errors, "title", &self.title, "Title is required");
        stored(&mut errors, "content", &self.content, "Content is required");
        errors.into_result(())
    }

    fn from_draft(
        id: String,
        timestamp: DateTime<Utc>,
        author: &str,
        draft: AnnouncementDraft,
    ) -> Self {
        Self {
            id,
            title: draft.title,
            content: draft.content,
            timestamp,
            author: author.to_string(),
        }
    }

    fn apply_patch(&mut self, patch: AnnouncementPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
    }
}

/// Domain model đại diện một tin nhắn chat (oldest-first).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub sender: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub is_current_user: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageDraft {
    pub content: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessagePatch {
    pub content: Option<String>,
}

fn check_message(
    errors: &mut ValidationErrors,
    content: &str,
    limits: &ValidationLimits,
) -> String {
    let content = required(errors, "content", content, "Message cannot be empty");
    max_chars(errors, "content", &content, limits.max_message_chars);
    content
}

impl Record for ChatMessage {
    type Draft = MessageDraft;
    type Patch = MessagePatch;

    const KIND: &'static str = "message";
    const ORDER: DisplayOrder = DisplayOrder::OldestFirst;

    fn id(&self) -> &str {
        &self.id
    }

    fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    fn label(&self) -> &str {
        &self.sender
    }

    fn body(&self) -> &str {
        &self.content
    }

    fn validate_draft(
        draft: MessageDraft,
        limits: &ValidationLimits,
    ) -> Result<MessageDraft, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let content = check_message(&mut errors, &draft.content, limits);
        errors.into_result(MessageDraft { content })
    }

    fn validate_patch(
        patch: MessagePatch,
        limits: &ValidationLimits,
    ) -> Result<MessagePatch, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let content = patch
            .content
            .map(|content| check_message(&mut errors, &content, limits));
        errors.into_result(MessagePatch { content })
    }

    fn validate_record(&self, _limits: &ValidationLimits) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        stored(&mut errors, "content", &self.content, "Message cannot be empty");
        errors.into_result(())
    }

    fn from_draft(
        id: String,
        timestamp: DateTime<Utc>,
        author: &str,
        draft: MessageDraft,
    ) -> Self {
        Self {
            id,
            sender: author.to_string(),
            content: draft.content,
            timestamp,
            is_current_user: true,
        }
    }

    fn apply_patch(&mut self, patch: MessagePatch) {
        if let Some(content) = patch.content {
            self.content = content;
        }
    }
}

/// Mức độ của một thông báo hệ thống.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    #[default]
    Info,
    Warning,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub message: String,
    #[serde(rename = "type", default)]
    pub kind: NotificationKind,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub read: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationDraft {
    pub title: String,
    pub message: String,
    #[serde(rename = "type", default)]
    pub kind: NotificationKind,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationPatch {
    pub read: Option<bool>,
}

impl Record for Notification {
    type Draft = NotificationDraft;
    type Patch = NotificationPatch;

    const KIND: &'static str = "notification";
    const ORDER: DisplayOrder = DisplayOrder::NewestFirst;

    fn id(&self) -> &str {
        &self.id
    }

    fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    fn label(&self) -> &str {
        &self.title
    }

    fn body(&self) -> &str {
        &self.message
    }

    fn validate_draft(
        draft: NotificationDraft,
        _limits: &ValidationLimits,
    ) -> Result<NotificationDraft, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let title = required(&mut errors, "title", &draft.title, "Title is required");
        let message = required(&mut errors, "message", &draft.message, "Message is required");
        errors.into_result(NotificationDraft {
            title,
            message,
            kind: draft.kind,
        })
    }

    fn validate_patch(
        patch: NotificationPatch,
        _limits: &ValidationLimits,
    ) -> Result<NotificationPatch, ValidationErrors> {
        Ok(patch)
    }

    fn validate_record(&self, _limits: &ValidationLimits) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        stored(&mut errors, "title", &self.title, "Title is required");
        stored(&mut errors, "message", &self.message, "Message is required");
        errors.into_result(())
    }

    fn from_draft(
        id: String,
        timestamp: DateTime<Utc>,
        _author: &str,
        draft: NotificationDraft,
    ) -> Self {
        Self {
            id,
            title: draft.title,
            message: draft.message,
            kind: draft.kind,
            timestamp,
            read: false,
        }
    }

    fn apply_patch(&mut self, patch: NotificationPatch) {
        if let Some(read) = patch.read {
            self.read = read;
        }
    }
}
