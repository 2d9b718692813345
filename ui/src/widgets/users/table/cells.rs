use console_business::users::UserRecord;
use console_business::users::policy::{ActionIcon, ActionIntent, ActionSpec};
use egui::{RichText, Ui};

use super::row::RowEvent;

pub fn render_text_cell(ui: &mut Ui, text: &str) {
    ui.label(text);
}

/// Identity cell: avatar initial, display name, subtitle.
///
/// Remote avatar images are not fetched; the initial stands in even when a
/// profile URL is present.
pub fn render_identity_cell(
    ui: &mut Ui,
    header: &str,
    subtitle: &str,
    avatar_key: &str,
    _avatar_url: Option<&str>,
) {
    ui.horizontal(|ui| {
        let initial = avatar_key
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('?');
        ui.label(RichText::new(initial.to_string()).strong().monospace());
        ui.vertical(|ui| {
            ui.label(RichText::new(header).strong());
            ui.label(RichText::new(subtitle).small().weak());
        });
    });
}

fn icon_glyph(icon: ActionIcon) -> &'static str {
    match icon {
        ActionIcon::Pencil => "✏",
        ActionIcon::Eye => "👁",
        ActionIcon::Trash => "🗑",
    }
}

/// Renders the visible actions for one row. At most one click per frame is
/// returned.
pub fn render_action_buttons(
    ui: &mut Ui,
    actions: &[ActionSpec],
    user: &UserRecord,
) -> Option<RowEvent> {
    let mut event = None;
    ui.horizontal(|ui| {
        for action in actions {
            if action.is_hidden(user) {
                continue;
            }

            let clicked = ui
                .button(icon_glyph(action.icon(user)))
                .on_hover_text(action.label(user))
                .clicked();
            if clicked {
                event = Some(match action.intent {
                    ActionIntent::NavigateToEdit => RowEvent::Edit(user.id.clone()),
                    ActionIntent::RequestDelete => RowEvent::RequestDelete(user.clone()),
                });
            }
        }
    });
    event
}
