use super::types::{Announcement, ChatMessage, Notification};
use crate::store::ValidationErrors;

/// Kết quả của một lệnh, trả về cho UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardEvent {
    AnnouncementCreated(Announcement),
    AnnouncementUpdated(Announcement),
    AnnouncementRemoved(Announcement),
    MessageSent(ChatMessage),
    MessageUpdated(ChatMessage),
    MessageRemoved(ChatMessage),
    NotificationRead(Notification),
    /// How many notifications flipped from unread to read.
    NotificationsRead(usize),
    /// Input failed validation; nothing changed.
    Rejected(ValidationErrors),
    /// The target id is not (or no longer) held; nothing changed.
    Ignored { kind: &'static str, id: String },
}
