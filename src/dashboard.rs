use serde::Serialize;

use crate::common::{
    Announcement, ChatMessage, DashboardCommand, DashboardEvent, Notification, NotificationDraft,
    NotificationPatch,
};
use crate::config::AppConfig;
use crate::error::StoreError;
use crate::search::{self, ResultKind, SearchResult};
use crate::store::{ListResourceStore, Record, SeedData, StoreOptions};

/// Headline numbers for the overview page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Overview {
    pub announcements: usize,
    pub messages: usize,
    pub unread_notifications: usize,
    pub latest_announcement: Option<Announcement>,
}

/// Owns one store per resource and applies user actions to them.
pub struct Dashboard {
    announcements: ListResourceStore<Announcement>,
    messages: ListResourceStore<ChatMessage>,
    notifications: ListResourceStore<Notification>,
}

impl Dashboard {
    pub fn new(config: &AppConfig, seed: SeedData) -> Result<Self, StoreError> {
        let announcements = ListResourceStore::with_records(
            seed.announcements,
            config.store_options(&config.announcement_author),
        )?;
        let messages = ListResourceStore::with_records(
            seed.messages,
            config.store_options(&config.chat_display_name),
        )?;
        let notifications = ListResourceStore::with_records(
            seed.notifications,
            config.store_options("system"),
        )?;

        log::info!(
            "Dashboard ready: {} announcements, {} messages, {} notifications",
            announcements.len(),
            messages.len(),
            notifications.len()
        );

        Ok(Self {
            announcements,
            messages,
            notifications,
        })
    }

    /// Empty stores with default settings.
    pub fn empty() -> Self {
        let config = AppConfig::default();
        Self {
            announcements: ListResourceStore::new(
                config.store_options(&config.announcement_author),
            ),
            messages: ListResourceStore::new(config.store_options(&config.chat_display_name)),
            notifications: ListResourceStore::new(StoreOptions::new("system")),
        }
    }

    /// Applies one user action. Validation failures come back as
    /// [`DashboardEvent::Rejected`], unknown ids as [`DashboardEvent::Ignored`].
    pub fn dispatch(&mut self, command: DashboardCommand) -> DashboardEvent {
        let outcome = match command {
            DashboardCommand::CreateAnnouncement(draft) => self
                .announcements
                .create(draft)
                .map(DashboardEvent::AnnouncementCreated),
            DashboardCommand::EditAnnouncement { id, patch } => self
                .announcements
                .update(&id, patch)
                .map(DashboardEvent::AnnouncementUpdated),
            DashboardCommand::DeleteAnnouncement { id } => self
                .announcements
                .remove(&id)
                .map(DashboardEvent::AnnouncementRemoved),
            DashboardCommand::SendMessage(draft) => {
                self.messages.create(draft).map(DashboardEvent::MessageSent)
            }
            DashboardCommand::EditMessage { id, patch } => self
                .messages
                .update(&id, patch)
                .map(DashboardEvent::MessageUpdated),
            DashboardCommand::DeleteMessage { id } => {
                self.messages.remove(&id).map(DashboardEvent::MessageRemoved)
            }
            DashboardCommand::MarkNotificationRead { id } => {
                self.mark_read(&id).map(DashboardEvent::NotificationRead)
            }
            DashboardCommand::MarkAllNotificationsRead => {
                Ok(DashboardEvent::NotificationsRead(self.mark_all_read()))
            }
        };

        match outcome {
            Ok(event) => event,
            Err(StoreError::Validation(errors)) => {
                log::debug!("Rejected input: {errors}");
                DashboardEvent::Rejected(errors)
            }
            Err(StoreError::NotFound { kind, id })
            | Err(StoreError::DuplicateId { kind, id })
            | Err(StoreError::InvalidSeed { kind, id, .. }) => {
                log::warn!("Ignoring action on stale {kind} {id}");
                DashboardEvent::Ignored { kind, id }
            }
        }
    }

    pub fn announcements(&self) -> &[Announcement] {
        self.announcements.list()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        self.messages.list()
    }

    pub fn notifications(&self) -> &[Notification] {
        self.notifications.list()
    }

    pub fn max_message_chars(&self) -> usize {
        self.messages.limits().max_message_chars
    }

    /// Posts a new unread notification.
    pub fn notify(&mut self, draft: NotificationDraft) -> Result<Notification, StoreError> {
        self.notifications.create(draft)
    }

    pub fn unread_count(&self) -> usize {
        self.notifications.list().iter().filter(|n| !n.read).count()
    }

    pub fn mark_read(&mut self, id: &str) -> Result<Notification, StoreError> {
        self.notifications
            .update(id, NotificationPatch { read: Some(true) })
    }

    /// Marks everything read and returns how many notifications changed.
    pub fn mark_all_read(&mut self) -> usize {
        let unread: Vec<String> = self
            .notifications
            .list()
            .iter()
            .filter(|n| !n.read)
            .map(|n| n.id().to_string())
            .collect();

        let mut changed = 0;
        for id in unread {
            if self.mark_read(&id).is_ok() {
                changed += 1;
            }
        }
        changed
    }

    /// Announcements first, then messages, each in display order, then pages.
    pub fn search(&self, query: &str) -> Vec<SearchResult> {
        let mut results = search::matching(
            self.announcements.list(),
            query,
            ResultKind::Announcement,
        );
        results.extend(search::matching(
            self.messages.list(),
            query,
            ResultKind::Message,
        ));
        results.extend(search::pages(query));
        results
    }

    pub fn overview(&self) -> Overview {
        Overview {
            announcements: self.announcements.len(),
            messages: self.messages.len(),
            unread_notifications: self.unread_count(),
            latest_announcement: self
                .announcements
                .list()
                .iter()
                .max_by_key(|a| a.timestamp)
                .cloned(),
        }
    }
}
