use eframe::egui;

/// Ô nhập tin nhắn. Returns `true` when the user asked to send.
///
/// The text is only cleared once the dashboard accepts the message.
pub fn render(
    ui: &mut egui::Ui,
    input_text: &mut String,
    error: Option<&str>,
    max_chars: usize,
) -> bool {
    if let Some(error) = error {
        let color = ui.visuals().error_fg_color;
        ui.colored_label(color, error);
    }

    let mut send = false;
    ui.horizontal(|ui| {
        let response = ui.add(
            egui::TextEdit::singleline(input_text)
                .hint_text("Type your message...")
                .char_limit(max_chars),
        );
        let has_text = !input_text.trim().is_empty();
        if ui.add_enabled(has_text, egui::Button::new("Send")).clicked() {
            send = true;
        }

        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            send = true;
            response.request_focus();
        }
    });

    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("Press Enter to send").small().weak());
        ui.label(
            egui::RichText::new(format!("{}/{}", input_text.chars().count(), max_chars))
                .small()
                .weak(),
        );
    });

    send
}
