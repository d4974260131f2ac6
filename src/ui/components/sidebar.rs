use chrono::{DateTime, Utc};
use eframe::egui;

use crate::common::{DashboardCommand, Notification, NotificationKind};
use crate::format::{AgeStyle, relative_time};
use crate::ui::state::{AppState, Page};

pub fn render(
    ui: &mut egui::Ui,
    state: &mut AppState,
    notifications: &[Notification],
    now: DateTime<Utc>,
) -> Option<DashboardCommand> {
    let mut command = None;

    ui.heading("Pupuk Kujang");
    ui.separator();

    ui.selectable_value(&mut state.page, Page::Overview, "Dashboard");
    ui.selectable_value(&mut state.page, Page::Announcements, "Announcements");
    ui.selectable_value(&mut state.page, Page::Chat, "Group Chat");

    ui.separator();
    ui.label("Search");
    let response = ui.add(
        egui::TextEdit::singleline(&mut state.search_query)
            .hint_text("Search announcements, messages, pages..."),
    );
    if response.changed() && !state.search_query.trim().is_empty() {
        state.page = Page::Overview;
    }

    ui.separator();
    let unread = notifications.iter().filter(|n| !n.read).count();
    ui.horizontal(|ui| {
        ui.strong("Notifications");
        if unread > 0 {
            ui.label(egui::RichText::new(unread.to_string()).color(egui::Color32::RED));
            if ui.small_button("Mark all read").clicked() {
                command = Some(DashboardCommand::MarkAllNotificationsRead);
            }
        }
    });

    if notifications.is_empty() {
        ui.label("No notifications");
        return command;
    }

    egui::ScrollArea::vertical()
        .id_salt("notifications")
        .show(ui, |ui| {
            for notification in notifications {
                ui.horizontal(|ui| {
                    ui.colored_label(kind_color(notification.kind), "●");
                    let title = egui::RichText::new(&notification.title);
                    let title = if notification.read { title.weak() } else { title.strong() };
                    ui.label(title);
                });
                ui.label(&notification.message);
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(notification_age(notification, now))
                            .small()
                            .weak(),
                    );
                    if !notification.read && ui.small_button("Mark read").clicked() {
                        command = Some(DashboardCommand::MarkNotificationRead {
                            id: notification.id.clone(),
                        });
                    }
                });
                ui.add_space(4.0);
            }
        });

    command
}

/// Compact "5m ago" form, like the chat bubbles.
fn notification_age(notification: &Notification, now: DateTime<Utc>) -> String {
    relative_time(notification.timestamp, now, AgeStyle::Short)
}

fn kind_color(kind: NotificationKind) -> egui::Color32 {
    match kind {
        NotificationKind::Info => egui::Color32::LIGHT_BLUE,
        NotificationKind::Warning => egui::Color32::YELLOW,
        NotificationKind::Success => egui::Color32::GREEN,
        NotificationKind::Error => egui::Color32::RED,
    }
}
