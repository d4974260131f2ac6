use std::fs;
use std::path::Path;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{Announcement, ChatMessage, Notification, NotificationKind};
use crate::error::SeedError;

/// Initial contents of the dashboard's stores.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub announcements: Vec<Announcement>,
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
    #[serde(default)]
    pub notifications: Vec<Notification>,
}

impl SeedData {
    /// Reads a JSON seed file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SeedError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| SeedError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let seed = serde_json::from_str(&content).map_err(|source| SeedError::Parse {
            path: path.display().to_string(),
            source,
        })?;
        log::info!("Loaded seed data from {}", path.display());
        Ok(seed)
    }

    /// The built-in demo data, with timestamps relative to `now`.
    pub fn mock(now: DateTime<Utc>) -> Self {
        let minutes = |m: i64| now - Duration::minutes(m);

        let announcement = |id: &str, title: &str, content: &str, ago: i64, author: &str| {
            Announcement {
                id: id.to_string(),
                title: title.to_string(),
                content: content.to_string(),
                timestamp: minutes(ago),
                author: author.to_string(),
            }
        };
        let message = |id: &str, sender: &str, content: &str, ago: i64, mine: bool| ChatMessage {
            id: id.to_string(),
            sender: sender.to_string(),
            content: content.to_string(),
            timestamp: minutes(ago),
            is_current_user: mine,
        };
        let notification =
            |id: &str, title: &str, body: &str, kind: NotificationKind, ago: i64, read: bool| {
                Notification {
                    id: id.to_string(),
                    title: title.to_string(),
                    message: body.to_string(),
                    kind,
                    timestamp: minutes(ago),
                    read,
                }
            };

        Self {
            announcements: vec![
                announcement(
                    "1",
                    "Welcome to Pupuk Kujang Industry Dashboard",
                    "This platform will help us stay connected and share important updates across our industry network.",
                    120,
                    "Admin",
                ),
                announcement(
                    "2",
                    "Monthly Industry Meeting",
                    "Our next monthly meeting is scheduled for next Friday at 2 PM. Please prepare your quarterly reports.",
                    30,
                    "Management",
                ),
            ],
            messages: vec![
                message(
                    "1",
                    "Ahmad Rahman",
                    "Good morning everyone! Hope everyone is having a productive day.",
                    180,
                    false,
                ),
                message(
                    "2",
                    "Siti Nurhaliza",
                    "Morning Ahmad! Yes, we just finished the quarterly review. Results look promising.",
                    150,
                    false,
                ),
                message(
                    "3",
                    "Budi Santoso",
                    "That's great news! Can we schedule a meeting to discuss the next quarter planning?",
                    120,
                    false,
                ),
                message(
                    "4",
                    "You",
                    "I agree, let's set up a meeting for next week. I'll send out calendar invites.",
                    90,
                    true,
                ),
                message(
                    "5",
                    "Dewi Kartika",
                    "Perfect! Looking forward to it. Also, has anyone reviewed the new safety protocols?",
                    45,
                    false,
                ),
            ],
            notifications: vec![
                notification(
                    "1",
                    "New Announcement",
                    "Safety Protocol Implementation has been posted",
                    NotificationKind::Info,
                    30,
                    false,
                ),
                notification(
                    "2",
                    "System Update",
                    "Platform maintenance completed successfully",
                    NotificationKind::Success,
                    120,
                    false,
                ),
                notification(
                    "3",
                    "New Message",
                    "Ahmad Rahman mentioned you in group chat",
                    NotificationKind::Info,
                    45,
                    true,
                ),
                notification(
                    "4",
                    "Meeting Reminder",
                    "Monthly Industry Meeting starts in 1 hour",
                    NotificationKind::Warning,
                    15,
                    false,
                ),
            ],
        }
    }
}
