use chrono::{DateTime, Utc};
use console_business::users::UserRecord;
use console_business::users::policy::{ActionSpec, CellContent, ColumnSpec};
use egui_extras::TableRow;

use super::cells;

/// Click outcome, applied by the caller once the table's borrows end.
#[derive(Debug, Clone)]
pub enum RowEvent {
    Edit(String),
    RequestDelete(UserRecord),
}

pub fn render_user_row(
    row: &mut TableRow<'_, '_>,
    columns: &[ColumnSpec],
    actions: Option<&[ActionSpec]>,
    user: &UserRecord,
    now: DateTime<Utc>,
    events: &mut Vec<RowEvent>,
) {
    for spec in columns {
        row.col(|ui| match spec.rule.cell(user, now) {
            CellContent::Identity {
                header,
                subtitle,
                avatar_key,
                avatar_url,
            } => {
                cells::render_identity_cell(ui, &header, &subtitle, &avatar_key, avatar_url.as_deref());
            }
            CellContent::Text(text) => cells::render_text_cell(ui, &text),
            CellContent::Actions => {
                if let Some(actions) = actions
                    && let Some(event) = cells::render_action_buttons(ui, actions, user)
                {
                    events.push(event);
                }
            }
        });
    }
}
