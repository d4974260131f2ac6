use super::types::{AnnouncementDraft, AnnouncementPatch, MessageDraft, MessagePatch};

/// Lệnh UI gửi xuống dashboard, mỗi lệnh ứng với một thao tác của người dùng.
#[derive(Debug, Clone)]
pub enum DashboardCommand {
    CreateAnnouncement(AnnouncementDraft),
    EditAnnouncement {
        id: String,
        patch: AnnouncementPatch,
    },
    DeleteAnnouncement {
        id: String,
    },
    SendMessage(MessageDraft),
    EditMessage {
        id: String,
        patch: MessagePatch,
    },
    DeleteMessage {
        id: String,
    },
    MarkNotificationRead {
        id: String,
    },
    MarkAllNotificationsRead,
}
