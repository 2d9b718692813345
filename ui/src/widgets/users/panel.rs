//! Users panel: search bar, fetch status, placeholders, and the table.

use console_business::users::policy::{self, PlaceholderKind};
use console_business::users::{RefreshUsersCommand, UsersListCompute, UsersListResult, UsersPageState};
use console_states::StateCtx;
use egui::{Color32, Ui};

use super::{modals, table};

pub fn users_panel(state_ctx: &mut StateCtx, ui: &mut Ui) {
    let mut refresh = false;
    {
        let page = state_ctx.state_mut::<UsersPageState>();
        ui.horizontal(|ui| {
            ui.label("Search");
            let edit = ui.text_edit_singleline(&mut page.search_query);
            if edit.lost_focus() && ui.input(|input| input.key_pressed(egui::Key::Enter)) {
                refresh = true;
            }
            if ui.button("Refresh").clicked() {
                refresh = true;
            }
        });
    }
    if refresh {
        state_ctx.dispatch::<RefreshUsersCommand>();
    }

    modals::action_notice(state_ctx, ui);
    ui.add_space(4.0);

    let list = state_ctx
        .cached::<UsersListCompute>()
        .cloned()
        .unwrap_or_default();

    match &list.result {
        UsersListResult::Idle => {}
        UsersListResult::Loading => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Loading users...");
            });
        }
        UsersListResult::FetchFailed(message) => {
            ui.colored_label(Color32::RED, format!("Could not load users: {message}"));
        }
        UsersListResult::Loaded {
            users,
            total_results,
        } => {
            let query = state_ctx
                .state::<UsersPageState>()
                .active_query()
                .map(str::to_owned);

            match policy::select_placeholder(query.as_deref(), *total_results) {
                Some(PlaceholderKind::EmptySearchResult) => {
                    ui.label(format!(
                        "No users found for \"{}\".",
                        query.unwrap_or_default()
                    ));
                    if ui.button("Clear search").clicked() {
                        state_ctx.update::<UsersPageState>(|page| page.search_query.clear());
                        state_ctx.dispatch::<RefreshUsersCommand>();
                    }
                }
                Some(PlaceholderKind::EmptyList) => {
                    ui.label("There are no users to show.");
                }
                None => table::users_table(state_ctx, ui, users),
            }
        }
    }

    modals::delete_confirmation(state_ctx, ui);
}

#[cfg(test)]
mod tests {
    use super::*;
    use console_business::users::{
        DeleteUserInput, PendingDelete, UserRecord, UsersActionCompute,
    };
    use console_business::{ConsoleConfig, SessionState};
    use console_states::Time;
    use egui_kittest::Harness;
    use kittest::Queryable;
    use ustr::Ustr;

    fn jdoe() -> UserRecord {
        UserRecord {
            id: "u-1".to_owned(),
            username: Ustr::from("PRIMARY/jdoe"),
            given_name: Some("Jane".to_owned()),
            family_name: Some("Doe".to_owned()),
            ..Default::default()
        }
    }

    fn alice() -> UserRecord {
        UserRecord {
            id: "u-2".to_owned(),
            username: Ustr::from("alice"),
            emails: vec!["alice@example.org".to_owned()],
            idp_type: Some("Google".to_owned()),
            origin: console_business::users::UserOrigin::Provisioned {
                source_id: "idp-9".to_owned(),
            },
            ..Default::default()
        }
    }

    fn permissive_session() -> SessionState {
        let mut session = SessionState::default();
        session.auth.allowed_scopes = vec![
            Ustr::from("internal_user_mgt_update"),
            Ustr::from("internal_user_mgt_delete"),
        ];
        session.auth.authenticated_user = Ustr::from("admin");
        session
    }

    fn ctx_with(result: UsersListResult) -> StateCtx {
        let mut ctx = StateCtx::new();
        ctx.add_state(Time::default());
        ctx.add_state(ConsoleConfig::new("http://localhost:0".to_owned()));
        ctx.add_state(permissive_session());
        ctx.add_state(UsersPageState::default());
        ctx.add_state(DeleteUserInput::default());
        ctx.record_compute(UsersListCompute { result });
        ctx.record_compute(UsersActionCompute::default());
        ctx
    }

    fn harness(ctx: StateCtx) -> Harness<'static, StateCtx> {
        Harness::new_ui_state(
            |ui, state_ctx: &mut StateCtx| {
                users_panel(state_ctx, ui);
            },
            ctx,
        )
    }

    #[test]
    fn loaded_users_render_identity_and_provider_columns() {
        let ctx = ctx_with(UsersListResult::Loaded {
            users: vec![jdoe(), alice()],
            total_results: 2,
        });
        let mut harness = harness(ctx);
        harness.run();

        harness.get_by_label("User");
        harness.get_by_label("Identity provider type");
        harness.get_by_label("User store");
        harness.get_by_label("Jane Doe");
        harness.get_by_label("jdoe");
        harness.get_by_label("Google");
    }

    #[test]
    fn fetch_failure_stays_visible() {
        let ctx = ctx_with(UsersListResult::FetchFailed("connection refused".to_owned()));
        let mut harness = harness(ctx);
        harness.run();

        harness.get_by_label("Could not load users: connection refused");
    }

    #[test]
    fn empty_directory_shows_the_list_placeholder() {
        let ctx = ctx_with(UsersListResult::Loaded {
            users: Vec::new(),
            total_results: 0,
        });
        let mut harness = harness(ctx);
        harness.run();

        harness.get_by_label("There are no users to show.");
    }

    #[test]
    fn empty_search_offers_to_clear_the_query() {
        let mut ctx = ctx_with(UsersListResult::Loaded {
            users: Vec::new(),
            total_results: 0,
        });
        ctx.state_mut::<UsersPageState>().search_query = "zz".to_owned();
        let mut harness = harness(ctx);
        harness.run();

        harness.get_by_label("No users found for \"zz\".");
        harness.get_by_label("Clear search").click();
        harness.run();

        assert_eq!(harness.state().state::<UsersPageState>().search_query, "");
    }

    #[test]
    fn delete_click_opens_the_confirmation_and_cancel_closes_it() {
        let ctx = ctx_with(UsersListResult::Loaded {
            users: vec![jdoe()],
            total_results: 1,
        });
        let mut harness = harness(ctx);
        harness.run();

        harness.get_by_label("🗑").click();
        harness.run();

        assert_eq!(
            harness.state().state::<UsersPageState>().pending_delete(),
            &PendingDelete::Confirming(jdoe())
        );
        harness.get_by_label("Permanently delete \"jdoe\"? This cannot be undone.");

        harness.get_by_label("Cancel").click();
        harness.run();

        assert_eq!(
            harness.state().state::<UsersPageState>().pending_delete(),
            &PendingDelete::Idle
        );
    }

    #[test]
    fn confirming_the_delete_fills_the_command_input() {
        let ctx = ctx_with(UsersListResult::Loaded {
            users: vec![jdoe()],
            total_results: 1,
        });
        let mut harness = harness(ctx);
        harness.run();

        harness.get_by_label("🗑").click();
        harness.run();
        harness.get_by_label("Delete").click();
        harness.run();

        assert_eq!(
            harness.state().state::<UsersPageState>().pending_delete(),
            &PendingDelete::Idle
        );
        let input = harness.state().state::<DeleteUserInput>();
        assert_eq!(input.user_id.as_deref(), Some("u-1"));
        assert_eq!(input.username, Some(Ustr::from("PRIMARY/jdoe")));
    }

    #[test]
    fn edit_click_records_the_navigation_intent() {
        let ctx = ctx_with(UsersListResult::Loaded {
            users: vec![jdoe()],
            total_results: 1,
        });
        let mut harness = harness(ctx);
        harness.run();

        harness.get_by_label("✏").click();
        harness.run();

        let navigation = harness
            .state_mut()
            .state_mut::<UsersPageState>()
            .take_edit_navigation();
        assert_eq!(navigation.map(|n| n.user_id), Some("u-1".to_owned()));
    }
}
