use chrono::Utc;
use console_business::users::RefreshUsersCommand;
use console_states::Time;

use crate::state::State;
use crate::widgets;

/// Root eframe application for the identity console.
pub struct ConsoleApp {
    state: State,
    fetched_once: bool,
}

impl ConsoleApp {
    pub fn new(state: State) -> Self {
        Self {
            state,
            fetched_once: false,
        }
    }
}

impl eframe::App for ConsoleApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.ctx.sync_computes();
        self.state.ctx.update::<Time>(|time| time.set(Utc::now()));

        if !self.fetched_once {
            self.fetched_once = true;
            self.state.ctx.dispatch::<RefreshUsersCommand>();
        }

        egui::TopBottomPanel::top("console_top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Identity Console");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    widgets::fetch_status(&self.state.ctx, ui);
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            widgets::users::users_panel(&mut self.state.ctx, ui);
        });
    }
}
