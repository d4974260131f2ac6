use chrono::{DateTime, Utc};
use eframe::egui;

use crate::common::{Announcement, DashboardCommand};
use crate::format::{AgeStyle, relative_time};
use crate::store::ValidationErrors;
use crate::ui::state::AppState;

/// Form tạo thông báo + danh sách thẻ. Trả về lệnh cần gửi, nếu có.
pub fn render(
    ui: &mut egui::Ui,
    state: &mut AppState,
    announcements: &[Announcement],
    now: DateTime<Utc>,
) -> Option<DashboardCommand> {
    let mut command = None;

    ui.group(|ui| {
        ui.strong("Create New Announcement");
        ui.label("Title");
        ui.add(
            egui::TextEdit::singleline(&mut state.new_announcement.title)
                .hint_text("Enter announcement title..."),
        );
        field_error(ui, &state.new_announcement.errors, "title");

        ui.label("Content");
        ui.add(
            egui::TextEdit::multiline(&mut state.new_announcement.content)
                .hint_text("Enter announcement content...")
                .desired_rows(4),
        );
        field_error(ui, &state.new_announcement.errors, "content");

        if ui.button("Create Announcement").clicked() {
            command = Some(DashboardCommand::CreateAnnouncement(
                state.new_announcement.draft(),
            ));
        }
    });

    ui.add_space(8.0);

    if announcements.is_empty() {
        ui.label(egui::RichText::new("No announcements yet.").weak());
        return command;
    }

    egui::ScrollArea::vertical().show(ui, |ui| {
        for announcement in announcements {
            if let Some(card_command) = card(ui, state, announcement, now) {
                command = Some(card_command);
            }
            ui.add_space(4.0);
        }
    });

    command
}

fn card(
    ui: &mut egui::Ui,
    state: &mut AppState,
    announcement: &Announcement,
    now: DateTime<Utc>,
) -> Option<DashboardCommand> {
    let mut command = None;

    ui.group(|ui| {
        if state.is_editing(&announcement.id) {
            let mut save = false;
            let mut cancel = false;
            if let Some(edit) = state.editing.as_mut() {
                ui.label("Title");
                ui.text_edit_singleline(&mut edit.title);
                field_error(ui, &edit.errors, "title");
                ui.label("Content");
                ui.add(egui::TextEdit::multiline(&mut edit.content).desired_rows(3));
                field_error(ui, &edit.errors, "content");

                ui.horizontal(|ui| {
                    save = ui.button("Save").clicked();
                    cancel = ui.button("Cancel").clicked();
                });
            }
            if save {
                command = state.edit_command();
            } else if cancel {
                state.cancel_edit();
            }
            return;
        }

        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(&announcement.title).strong().size(16.0));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.small_button("Delete").clicked() {
                    state.pending_delete = Some(announcement.id.clone());
                }
                if ui.small_button("Edit").clicked() {
                    state.begin_edit(announcement);
                }
            });
        });

        ui.label(&announcement.content);
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(format!("By {}", announcement.author)).weak());
            ui.label(
                egui::RichText::new(relative_time(announcement.timestamp, now, AgeStyle::Long))
                    .weak(),
            );
        });

        if state.pending_delete.as_deref() == Some(announcement.id.as_str()) {
            ui.horizontal(|ui| {
                ui.label("Are you sure you want to delete this announcement?");
                if ui.button("Delete").clicked() {
                    command = Some(DashboardCommand::DeleteAnnouncement {
                        id: announcement.id.clone(),
                    });
                }
                if ui.button("Cancel").clicked() {
                    state.pending_delete = None;
                }
            });
        }
    });

    command
}

fn field_error(ui: &mut egui::Ui, errors: &ValidationErrors, field: &str) {
    if let Some(message) = errors.get(field) {
        let color = ui.visuals().error_fg_color;
        ui.colored_label(color, message);
    }
}
