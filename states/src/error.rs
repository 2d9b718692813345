use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("state not registered: {type_name}")]
    StateNotFound { type_name: &'static str },

    #[error("compute not recorded: {type_name}")]
    ComputeNotFound { type_name: &'static str },
}

impl Error {
    pub fn state_not_found(type_name: &'static str) -> Self {
        Self::StateNotFound { type_name }
    }

    pub fn compute_not_found(type_name: &'static str) -> Self {
        Self::ComputeNotFound { type_name }
    }
}
