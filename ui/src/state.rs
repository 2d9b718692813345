use console_business::users::{
    DeleteUserInput, UsersActionCompute, UsersListCompute, UsersPageState,
};
use console_business::{ConsoleConfig, SessionState};
use console_states::{StateCtx, Time};

/// The main application state: a `StateCtx` with everything the users
/// screen needs registered up front.
pub struct State {
    pub ctx: StateCtx,
}

impl Default for State {
    fn default() -> Self {
        Self::with_config(ConsoleConfig::default())
    }
}

impl State {
    fn with_config(config: ConsoleConfig) -> Self {
        let mut ctx = StateCtx::new();

        ctx.add_state(Time::default());
        ctx.add_state(config);
        ctx.add_state(SessionState::default());
        ctx.add_state(UsersPageState::default());
        ctx.add_state(DeleteUserInput::default());
        ctx.record_compute(UsersListCompute::default());
        ctx.record_compute(UsersActionCompute::default());

        Self { ctx }
    }

    pub fn test(base_url: String) -> Self {
        Self::with_config(ConsoleConfig::new(base_url))
    }
}
