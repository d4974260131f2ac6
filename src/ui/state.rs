use crate::common::{
    Announcement, AnnouncementDraft, AnnouncementPatch, DashboardCommand, DashboardEvent,
    MessageDraft,
};
use crate::store::ValidationErrors;

/// Trang đang hiển thị ở khung giữa.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Overview,
    Announcements,
    Chat,
}

impl Page {
    /// Resolves the slug carried by a page search result.
    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "overview" => Some(Page::Overview),
            "announcements" => Some(Page::Announcements),
            "chat" => Some(Page::Chat),
            _ => None,
        }
    }
}

/// Which input a command came from, so a rejection lands next to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormTarget {
    NewAnnouncement,
    EditAnnouncement,
    ChatInput,
    None,
}

impl FormTarget {
    pub fn of(command: &DashboardCommand) -> Self {
        match command {
            DashboardCommand::CreateAnnouncement(_) => FormTarget::NewAnnouncement,
            DashboardCommand::EditAnnouncement { .. } => FormTarget::EditAnnouncement,
            DashboardCommand::SendMessage(_) => FormTarget::ChatInput,
            _ => FormTarget::None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AnnouncementForm {
    pub title: String,
    pub content: String,
    pub errors: ValidationErrors,
}

impl AnnouncementForm {
    pub fn draft(&self) -> AnnouncementDraft {
        AnnouncementDraft {
            title: self.title.clone(),
            content: self.content.clone(),
        }
    }
}

/// Card being edited in place.
#[derive(Debug, Clone)]
pub struct EditBuffer {
    pub id: String,
    pub title: String,
    pub content: String,
    pub errors: ValidationErrors,
}

/// Trạng thái cục bộ của UI.
#[derive(Debug, Default)]
pub struct AppState {
    pub page: Page,
    pub new_announcement: AnnouncementForm,
    pub editing: Option<EditBuffer>,
    /// Announcement awaiting delete confirmation.
    pub pending_delete: Option<String>,
    pub input_text: String,
    pub input_error: Option<String>,
    pub search_query: String,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_edit(&mut self, announcement: &Announcement) {
        self.editing = Some(EditBuffer {
            id: announcement.id.clone(),
            title: announcement.title.clone(),
            content: announcement.content.clone(),
            errors: ValidationErrors::new(),
        });
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    pub fn is_editing(&self, id: &str) -> bool {
        self.editing.as_ref().is_some_and(|edit| edit.id == id)
    }

    /// The save command for the card being edited, if any.
    pub fn edit_command(&self) -> Option<DashboardCommand> {
        self.editing
            .as_ref()
            .map(|edit| DashboardCommand::EditAnnouncement {
                id: edit.id.clone(),
                patch: AnnouncementPatch {
                    title: Some(edit.title.clone()),
                    content: Some(edit.content.clone()),
                },
            })
    }

    pub fn message_draft(&self) -> MessageDraft {
        MessageDraft {
            content: self.input_text.clone(),
        }
    }

    /// Folds the outcome of a dispatched command back into the forms.
    pub fn absorb(&mut self, target: FormTarget, event: &DashboardEvent) {
        match event {
            DashboardEvent::AnnouncementCreated(_) => {
                self.new_announcement = AnnouncementForm::default();
            }
            DashboardEvent::AnnouncementUpdated(_) => self.editing = None,
            DashboardEvent::AnnouncementRemoved(removed) => {
                self.pending_delete = None;
                if self.is_editing(&removed.id) {
                    self.editing = None;
                }
            }
            DashboardEvent::MessageSent(_) => {
                self.input_text.clear();
                self.input_error = None;
            }
            DashboardEvent::Rejected(errors) => match target {
                FormTarget::NewAnnouncement => self.new_announcement.errors = errors.clone(),
                FormTarget::EditAnnouncement => {
                    if let Some(edit) = self.editing.as_mut() {
                        edit.errors = errors.clone();
                    }
                }
                FormTarget::ChatInput => {
                    self.input_error = errors.get("content").map(str::to_string);
                }
                FormTarget::None => {}
            },
            DashboardEvent::Ignored { id, .. } => {
                if self.is_editing(id) {
                    self.editing = None;
                }
                if self.pending_delete.as_deref() == Some(id.as_str()) {
                    self.pending_delete = None;
                }
            }
            DashboardEvent::MessageUpdated(_)
            | DashboardEvent::MessageRemoved(_)
            | DashboardEvent::NotificationRead(_)
            | DashboardEvent::NotificationsRead(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::dashboard::Dashboard;
    use crate::store::SeedData;
    use chrono::Utc;

    fn dashboard() -> Dashboard {
        Dashboard::new(&AppConfig::default(), SeedData::mock(Utc::now())).unwrap()
    }

    #[test]
    fn every_searchable_page_has_a_slug() {
        for (slug, _, _) in crate::search::PAGES {
            assert!(Page::from_slug(slug).is_some(), "no page for {slug}");
        }
        assert_eq!(Page::from_slug("chat"), Some(Page::Chat));
        assert_eq!(Page::from_slug("settings"), None);
    }

    fn run(state: &mut AppState, dash: &mut Dashboard, command: DashboardCommand) {
        let target = FormTarget::of(&command);
        let event = dash.dispatch(command);
        state.absorb(target, &event);
    }

    #[test]
    fn successful_create_clears_the_form() {
        let mut dash = dashboard();
        let mut state = AppState::new();
        state.new_announcement.title = "Drill".to_string();
        state.new_announcement.content = "Gate 3".to_string();
        state.new_announcement.errors.insert("title", "stale");

        let command = DashboardCommand::CreateAnnouncement(state.new_announcement.draft());
        run(&mut state, &mut dash, command);

        assert!(state.new_announcement.title.is_empty());
        assert!(state.new_announcement.errors.is_empty());
    }

    #[test]
    fn rejected_create_keeps_input_and_shows_errors() {
        let mut dash = dashboard();
        let mut state = AppState::new();
        state.new_announcement.title = "Drill".to_string();

        let command = DashboardCommand::CreateAnnouncement(state.new_announcement.draft());
        run(&mut state, &mut dash, command);

        assert_eq!(state.new_announcement.title, "Drill");
        assert_eq!(
            state.new_announcement.errors.get("content"),
            Some("Content is required")
        );
    }

    #[test]
    fn edit_errors_stay_on_the_card() {
        let mut dash = dashboard();
        let mut state = AppState::new();
        let first = dash.announcements()[0].clone();
        state.begin_edit(&first);
        if let Some(edit) = state.editing.as_mut() {
            edit.title = "   ".to_string();
        }

        let command = state.edit_command().unwrap();
        run(&mut state, &mut dash, command);

        let edit = state.editing.as_ref().unwrap();
        assert_eq!(edit.errors.get("title"), Some("Title is required"));
        assert!(state.new_announcement.errors.is_empty());
        assert_eq!(dash.announcements()[0], first);
    }

    #[test]
    fn saved_edit_closes_the_editor() {
        let mut dash = dashboard();
        let mut state = AppState::new();
        let first = dash.announcements()[0].clone();
        state.begin_edit(&first);
        if let Some(edit) = state.editing.as_mut() {
            edit.content = "Updated body".to_string();
        }

        let command = state.edit_command().unwrap();
        run(&mut state, &mut dash, command);

        assert!(state.editing.is_none());
        assert_eq!(dash.announcements()[0].content, "Updated body");
    }

    #[test]
    fn chat_rejection_sets_input_error() {
        let mut dash = dashboard();
        let mut state = AppState::new();
        state.input_text = "  ".to_string();

        let command = DashboardCommand::SendMessage(state.message_draft());
        run(&mut state, &mut dash, command);
        assert_eq!(state.input_error.as_deref(), Some("Message cannot be empty"));

        state.input_text = "Hello".to_string();
        let command = DashboardCommand::SendMessage(state.message_draft());
        run(&mut state, &mut dash, command);
        assert!(state.input_error.is_none());
        assert!(state.input_text.is_empty());
    }

    #[test]
    fn deleting_clears_pending_confirmation() {
        let mut dash = dashboard();
        let mut state = AppState::new();
        state.pending_delete = Some("2".to_string());

        let command = DashboardCommand::DeleteAnnouncement { id: "2".to_string() };
        run(&mut state, &mut dash, command);
        assert!(state.pending_delete.is_none());

        state.pending_delete = Some("2".to_string());
        let command = DashboardCommand::DeleteAnnouncement { id: "2".to_string() };
        run(&mut state, &mut dash, command);
        assert!(state.pending_delete.is_none());
    }
}
