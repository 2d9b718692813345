//! Users list compute + refresh command.
//!
//! A compute-shaped cache (`UsersListCompute`) stores the latest fetch
//! status; a manual-only command (`RefreshUsersCommand`) performs the
//! network IO and publishes updates through `Updater::set()`. The UI reads
//! the cache with `ctx.cached::<UsersListCompute>()` and never fetches.

use std::any::Any;
use std::future::Future;
use std::pin::Pin;

use console_states::{Command, CommandSnapshot, Compute, Updater, compute_assign_impl};
use tokio_util::sync::CancellationToken;

use crate::ConsoleConfig;
use crate::users::api;
use crate::users::model::UserRecord;
use crate::users::page_state::UsersPageState;

/// Status of the last users fetch.
///
/// Failures are kept, not swallowed: the page renders the message until the
/// next refresh succeeds.
#[derive(Debug, Clone, Default)]
pub enum UsersListResult {
    /// No fetch has run yet.
    #[default]
    Idle,

    /// A refresh is in flight.
    Loading,

    /// The last refresh succeeded.
    Loaded {
        users: Vec<UserRecord>,
        total_results: u64,
    },

    /// The last refresh failed with this message.
    FetchFailed(String),
}

/// Compute-shaped cache for the users list.
#[derive(Debug, Clone, Default)]
pub struct UsersListCompute {
    pub result: UsersListResult,
}

impl UsersListCompute {
    pub fn is_loading(&self) -> bool {
        matches!(self.result, UsersListResult::Loading)
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.result {
            UsersListResult::FetchFailed(message) => Some(message.as_str()),
            _ => None,
        }
    }

    pub fn users(&self) -> &[UserRecord] {
        match &self.result {
            UsersListResult::Loaded { users, .. } => users.as_slice(),
            _ => &[],
        }
    }

    pub fn total_results(&self) -> u64 {
        match &self.result {
            UsersListResult::Loaded { total_results, .. } => *total_results,
            _ => 0,
        }
    }
}

impl Compute for UsersListCompute {
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

/// Manual-only refresh of the users list. Dispatch explicitly via
/// `ctx.dispatch::<RefreshUsersCommand>()`; the active search query is read
/// from `UsersPageState` at dispatch time.
#[derive(Debug, Default)]
pub struct RefreshUsersCommand;

impl Command for RefreshUsersCommand {
    fn run(
        &self,
        snap: CommandSnapshot,
        updater: Updater,
        _cancel: CancellationToken,
    ) -> Pin<Box<dyn Future<Output = ()> + Send>> {
        let config: ConsoleConfig = snap.state::<ConsoleConfig>();
        let page: UsersPageState = snap.state::<UsersPageState>();

        Box::pin(async move {
            updater.set(UsersListCompute {
                result: UsersListResult::Loading,
            });

            let scim_url = config.scim_url();
            match api::list_users(scim_url.as_str(), config.access_token(), page.active_query())
                .await
            {
                Ok(fetched) => {
                    updater.set(UsersListCompute {
                        result: UsersListResult::Loaded {
                            users: fetched.users,
                            total_results: fetched.total_results,
                        },
                    });
                }
                Err(err) => {
                    log::warn!("users refresh failed: {err}");
                    updater.set(UsersListCompute {
                        result: UsersListResult::FetchFailed(err.to_string()),
                    });
                }
            }
        })
    }
}
