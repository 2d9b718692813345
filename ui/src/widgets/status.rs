//! Top-bar indicator for the last users fetch.

use console_business::users::UsersListCompute;
use console_states::StateCtx;
use egui::{Color32, RichText, Ui};

pub fn fetch_status(ctx: &StateCtx, ui: &mut Ui) {
    let Some(list) = ctx.cached::<UsersListCompute>() else {
        return;
    };

    if list.is_loading() {
        ui.spinner();
    } else if let Some(message) = list.error_message() {
        ui.label(RichText::new("●").color(Color32::RED))
            .on_hover_text(message);
    } else {
        ui.label(RichText::new("●").color(Color32::from_rgb(0x2e, 0x7d, 0x32)))
            .on_hover_text(format!("{} users", list.total_results()));
    }
}
