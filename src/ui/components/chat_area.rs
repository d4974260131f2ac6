use chrono::{DateTime, Utc};
use eframe::egui;

use crate::common::ChatMessage;
use crate::format::{AgeStyle, relative_time};

pub fn render(ui: &mut egui::Ui, messages: &[ChatMessage], now: DateTime<Utc>) {
    ui.horizontal(|ui| {
        ui.strong("Industry Discussion");
        ui.label(egui::RichText::new(format!("{} messages", messages.len())).weak());
    });
    ui.separator();

    egui::ScrollArea::vertical()
        .max_height(420.0)
        .stick_to_bottom(true)
        .show(ui, |ui| {
            if messages.is_empty() {
                ui.label(egui::RichText::new("No messages yet. Start the conversation!").weak());
                return;
            }

            for message in messages {
                // Tin của mình căn phải, của người khác căn trái
                let align = if message.is_current_user {
                    egui::Align::Max
                } else {
                    egui::Align::Min
                };
                ui.with_layout(egui::Layout::top_down(align), |ui| {
                    ui.label(
                        egui::RichText::new(format!(
                            "{} • {}",
                            message.sender,
                            relative_time(message.timestamp, now, AgeStyle::Short)
                        ))
                        .small()
                        .weak(),
                    );
                    ui.label(&message.content);
                });
                ui.add_space(6.0);
            }
        });
}
