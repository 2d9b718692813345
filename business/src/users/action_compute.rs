//! User action compute + commands (currently: delete).
//!
//! Same shape as the list flow: the UI fills in `DeleteUserInput`,
//! dispatches `DeleteUserCommand`, and reads progress from
//! `UsersActionCompute`.

use std::any::Any;
use std::future::Future;
use std::pin::Pin;

use console_states::{Command, CommandSnapshot, Compute, State, Updater, compute_assign_impl};
use tokio_util::sync::CancellationToken;
use ustr::Ustr;

use crate::ConsoleConfig;
use crate::users::api;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserActionKind {
    DeleteUser,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UserActionState {
    #[default]
    Idle,

    InFlight {
        kind: UserActionKind,
        user: Ustr,
    },

    Success {
        kind: UserActionKind,
        user: Ustr,
    },

    Error {
        kind: UserActionKind,
        user: Ustr,
        message: String,
    },
}

/// Compute-shaped cache for user actions.
#[derive(Debug, Clone, Default)]
pub struct UsersActionCompute {
    pub state: UserActionState,
}

impl UsersActionCompute {
    pub fn is_in_flight(&self) -> bool {
        matches!(self.state, UserActionState::InFlight { .. })
    }

    pub fn state(&self) -> &UserActionState {
        &self.state
    }
}

impl Compute for UsersActionCompute {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn clone_boxed(&self) -> Box<dyn Any + Send> {
        Box::new(self.clone())
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        compute_assign_impl(self, new_self);
    }
}

/// Input the UI fills in before dispatching [`DeleteUserCommand`].
#[derive(Debug, Clone, Default)]
pub struct DeleteUserInput {
    pub user_id: Option<String>,
    pub username: Option<Ustr>,
}

impl State for DeleteUserInput {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(self.clone()))
    }
}

/// Deletes the user named in `DeleteUserInput`.
#[derive(Debug, Default)]
pub struct DeleteUserCommand;

impl Command for DeleteUserCommand {
    fn run(
        &self,
        snap: CommandSnapshot,
        updater: Updater,
        _cancel: CancellationToken,
    ) -> Pin<Box<dyn Future<Output = ()> + Send>> {
        let config: ConsoleConfig = snap.state::<ConsoleConfig>();
        let input: DeleteUserInput = snap.state::<DeleteUserInput>();

        Box::pin(async move {
            let user = input.username.unwrap_or_default();
            let Some(user_id) = input.user_id else {
                updater.set(UsersActionCompute {
                    state: UserActionState::Error {
                        kind: UserActionKind::DeleteUser,
                        user,
                        message: "DeleteUserCommand: missing user_id in DeleteUserInput"
                            .to_owned(),
                    },
                });
                return;
            };

            updater.set(UsersActionCompute {
                state: UserActionState::InFlight {
                    kind: UserActionKind::DeleteUser,
                    user,
                },
            });

            let scim_url = config.scim_url();
            match api::delete_user(scim_url.as_str(), config.access_token(), &user_id).await {
                Ok(()) => {
                    updater.set(UsersActionCompute {
                        state: UserActionState::Success {
                            kind: UserActionKind::DeleteUser,
                            user,
                        },
                    });
                }
                Err(err) => {
                    log::warn!("delete of {user} failed: {err}");
                    updater.set(UsersActionCompute {
                        state: UserActionState::Error {
                            kind: UserActionKind::DeleteUser,
                            user,
                            message: err.to_string(),
                        },
                    });
                }
            }
        })
    }
}

/// Clears the action compute back to idle, e.g. after the UI has shown a
/// success or error notice.
#[derive(Debug, Default)]
pub struct ResetUsersActionCommand;

impl Command for ResetUsersActionCommand {
    fn run(
        &self,
        _snap: CommandSnapshot,
        updater: Updater,
        _cancel: CancellationToken,
    ) -> Pin<Box<dyn Future<Output = ()> + Send>> {
        Box::pin(async move {
            updater.set(UsersActionCompute::default());
        })
    }
}
