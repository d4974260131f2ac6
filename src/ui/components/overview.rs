use chrono::{DateTime, Utc};
use eframe::egui;

use crate::dashboard::Overview;
use crate::format::{AgeStyle, relative_time};
use crate::search::{ResultKind, SearchResult};
use crate::ui::state::Page;

/// Trang tổng quan. Returns the page to jump to when a result is clicked.
pub fn render(
    ui: &mut egui::Ui,
    overview: &Overview,
    query: &str,
    results: &[SearchResult],
    now: DateTime<Utc>,
) -> Option<Page> {
    let mut jump = None;

    ui.horizontal(|ui| {
        stat(ui, "Announcements", overview.announcements);
        stat(ui, "Messages", overview.messages);
        stat(ui, "Unread notifications", overview.unread_notifications);
    });

    if let Some(latest) = &overview.latest_announcement {
        ui.add_space(8.0);
        ui.group(|ui| {
            ui.label(egui::RichText::new("Latest announcement").weak());
            ui.strong(&latest.title);
            ui.label(&latest.content);
            ui.label(
                egui::RichText::new(relative_time(latest.timestamp, now, AgeStyle::Long)).weak(),
            );
        });
    }

    if query.trim().is_empty() {
        return jump;
    }

    ui.add_space(8.0);
    ui.strong(format!("Results for \"{}\"", query.trim()));
    if results.is_empty() {
        ui.label(egui::RichText::new("No results found.").weak());
        return jump;
    }

    egui::ScrollArea::vertical().show(ui, |ui| {
        for result in results {
            let (tag, page) = match result.kind {
                ResultKind::Announcement => ("announcement", Some(Page::Announcements)),
                ResultKind::Message => ("message", Some(Page::Chat)),
                ResultKind::Page => ("page", Page::from_slug(&result.id)),
            };
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(tag).small().weak());
                if ui.link(&result.title).clicked() {
                    jump = page;
                }
            });
            ui.label(&result.content);
            ui.add_space(4.0);
        }
    });

    jump
}

fn stat(ui: &mut egui::Ui, label: &str, value: usize) {
    ui.group(|ui| {
        ui.vertical(|ui| {
            ui.label(egui::RichText::new(label).weak());
            ui.heading(value.to_string());
        });
    });
}
