pub mod commands;
pub mod events;
pub mod types;

pub use commands::DashboardCommand;
pub use events::DashboardEvent;
pub use types::{
    Announcement, AnnouncementDraft, AnnouncementPatch, ChatMessage, MessageDraft, MessagePatch,
    Notification, NotificationDraft, NotificationKind, NotificationPatch,
};
