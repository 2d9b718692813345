//! Delete confirmation modal and the action progress notice.

use console_business::users::{
    DeleteUserCommand, DeleteUserInput, PendingDelete, RefreshUsersCommand,
    ResetUsersActionCommand, UserActionState, UsersActionCompute, UsersPageState,
};
use console_states::StateCtx;
use egui::{Color32, Ui};

/// Inline notice for the delete command's progress. A finished success
/// refreshes the list and resets the compute; errors stay until dismissed.
pub fn action_notice(state_ctx: &mut StateCtx, ui: &mut Ui) {
    let Some(state) = state_ctx
        .cached::<UsersActionCompute>()
        .map(|compute| compute.state().clone())
    else {
        return;
    };

    match state {
        UserActionState::Idle => {}
        UserActionState::InFlight { user, .. } => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(format!("Deleting {user}..."));
            });
        }
        UserActionState::Success { .. } => {
            state_ctx.dispatch::<ResetUsersActionCommand>();
            state_ctx.dispatch::<RefreshUsersCommand>();
        }
        UserActionState::Error { user, message, .. } => {
            ui.horizontal(|ui| {
                ui.colored_label(Color32::RED, format!("Could not delete {user}: {message}"));
                if ui.button("Dismiss").clicked() {
                    state_ctx.dispatch::<ResetUsersActionCommand>();
                }
            });
        }
    }
}

/// Confirmation window for a pending delete. Confirming fills the command
/// input and dispatches; either outcome returns the page to idle.
pub fn delete_confirmation(state_ctx: &mut StateCtx, ui: &mut Ui) {
    let PendingDelete::Confirming(user) = state_ctx
        .state::<UsersPageState>()
        .pending_delete()
        .clone()
    else {
        return;
    };

    let mut confirmed = false;
    let mut cancelled = false;

    egui::Window::new("Delete user")
        .collapsible(false)
        .resizable(false)
        .show(ui.ctx(), |ui| {
            ui.label(format!(
                "Permanently delete \"{}\"? This cannot be undone.",
                user.short_username()
            ));
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("Cancel").clicked() {
                    cancelled = true;
                }
                if ui.button("Delete").clicked() {
                    confirmed = true;
                }
            });
        });

    if cancelled {
        state_ctx.update::<UsersPageState>(UsersPageState::cancel_delete);
    } else if confirmed
        && let Some(user) = state_ctx.state_mut::<UsersPageState>().confirm_delete()
    {
        state_ctx.update::<DeleteUserInput>(|input| {
            input.user_id = Some(user.id.clone());
            input.username = Some(user.username);
        });
        state_ctx.dispatch::<DeleteUserCommand>();
    }
}
