//! Table rendering for the users list, driven entirely by the derived
//! column and action specs.

mod cells;
mod columns;
mod header;
mod row;

use std::sync::Arc;

use console_business::SessionState;
use console_business::users::policy::derive_actions;
use console_business::users::policy::derive_columns;
use console_business::users::{UserRecord, UsersPageState};
use console_states::{StateCtx, Time};
use egui::Ui;
use egui_extras::TableBuilder;

use row::RowEvent;

pub fn users_table(state_ctx: &mut StateCtx, ui: &mut Ui, users: &[UserRecord]) {
    let (selection, show_actions) = {
        let page = state_ctx.state::<UsersPageState>();
        (page.meta_selection.clone(), page.show_actions)
    };
    let column_specs = derive_columns(selection.as_ref());
    let policy_ctx = Arc::new(state_ctx.state::<SessionState>().policy_context());
    let actions = derive_actions(show_actions, &policy_ctx);
    let now = state_ctx.state::<Time>().now();

    let mut events: Vec<RowEvent> = Vec::new();

    let mut builder = TableBuilder::new(ui)
        .striped(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center));
    for column in columns::layout(&column_specs) {
        builder = builder.column(column);
    }

    builder
        .header(columns::HEADER_HEIGHT, |mut header_row| {
            header::render_table_header(&mut header_row, &column_specs);
        })
        .body(|body| {
            body.rows(columns::ROW_HEIGHT, users.len(), |mut table_row| {
                let user = &users[table_row.index()];
                row::render_user_row(
                    &mut table_row,
                    &column_specs,
                    actions.as_deref(),
                    user,
                    now,
                    &mut events,
                );
            });
        });

    // Clicks mutate page state only after the table's borrows end.
    for event in events {
        match event {
            RowEvent::Edit(user_id) => {
                state_ctx.update::<UsersPageState>(|page| page.request_edit(user_id));
            }
            RowEvent::RequestDelete(user) => {
                state_ctx.update::<UsersPageState>(|page| page.request_delete(user));
            }
        }
    }
}
