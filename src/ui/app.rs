use chrono::Utc;
use eframe::egui;

use crate::common::DashboardCommand;
use crate::dashboard::Dashboard;

use super::components::{announcements, chat_area, input_bar, overview, sidebar};
use super::state::{AppState, FormTarget, Page};

pub struct DashboardApp {
    state: AppState,
    dashboard: Dashboard,
}

impl DashboardApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, dashboard: Dashboard) -> Self {
        Self {
            state: AppState::new(),
            dashboard,
        }
    }

    fn apply(&mut self, command: DashboardCommand) {
        let target = FormTarget::of(&command);
        let event = self.dashboard.dispatch(command);
        log::debug!("Dashboard event: {event:?}");
        self.state.absorb(target, &event);
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Utc::now();
        let mut pending = None;

        egui::SidePanel::left("dashboard_sidebar")
            .resizable(true)
            .default_width(260.0)
            .show(ctx, |ui| {
                pending = sidebar::render(
                    ui,
                    &mut self.state,
                    self.dashboard.notifications(),
                    now,
                );
            });

        egui::CentralPanel::default().show(ctx, |ui| match self.state.page {
            Page::Overview => {
                ui.heading("Dashboard");
                ui.separator();
                let results = self.dashboard.search(&self.state.search_query);
                if let Some(page) = overview::render(
                    ui,
                    &self.dashboard.overview(),
                    &self.state.search_query,
                    &results,
                    now,
                ) {
                    self.state.page = page;
                }
            }
            Page::Announcements => {
                ui.heading("Announcements");
                ui.label(
                    egui::RichText::new(
                        "Stay updated with the latest company announcements and important notices",
                    )
                    .weak(),
                );
                ui.separator();
                if let Some(command) = announcements::render(
                    ui,
                    &mut self.state,
                    self.dashboard.announcements(),
                    now,
                ) {
                    pending = Some(command);
                }
            }
            Page::Chat => {
                ui.heading("Industry Group Chat");
                ui.separator();
                chat_area::render(ui, self.dashboard.messages(), now);

                ui.separator();
                let send = input_bar::render(
                    ui,
                    &mut self.state.input_text,
                    self.state.input_error.as_deref(),
                    self.dashboard.max_message_chars(),
                );
                if send {
                    pending = Some(DashboardCommand::SendMessage(self.state.message_draft()));
                }
            }
        });

        if let Some(command) = pending {
            self.apply(command);
        }
    }
}
