//! SCIM2 user API helpers used by commands.
//!
//! These functions perform network IO and are only called from Commands;
//! callers map results into compute updates.

use thiserror::Error;

use crate::http::{Client, RequestBuilder};
use crate::users::model::{ListUsersResponse, UserRecord};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UsersApiError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("server returned status {0}")]
    Status(u16),

    #[error("could not decode response: {0}")]
    Decode(String),
}

pub type ApiResult<T> = Result<T, UsersApiError>;

/// A page of users with the server-reported total.
#[derive(Debug, Clone, Default)]
pub struct UsersPage {
    pub users: Vec<UserRecord>,
    pub total_results: u64,
}

fn authorized(request: RequestBuilder, token: Option<&str>) -> RequestBuilder {
    match token {
        Some(token) => request.header("authorization", format!("Bearer {token}")),
        None => request,
    }
}

/// GET `{scim}/Users`, optionally filtered by a username substring.
pub async fn list_users(
    scim_base_url: &str,
    token: Option<&str>,
    query: Option<&str>,
) -> ApiResult<UsersPage> {
    let url = match query {
        Some(q) => format!(
            "{scim_base_url}/Users?filter={}",
            urlencoding::encode(&format!("userName co \"{q}\""))
        ),
        None => format!("{scim_base_url}/Users"),
    };

    let response = authorized(Client::get(&url), token)
        .send()
        .await
        .map_err(|e| UsersApiError::Transport(e.to_string()))?;

    if !response.is_success() {
        return Err(UsersApiError::Status(response.status));
    }

    let list: ListUsersResponse = response
        .json()
        .map_err(|e| UsersApiError::Decode(e.to_string()))?;

    Ok(UsersPage {
        users: list.resources.into_iter().map(UserRecord::from).collect(),
        total_results: list.total_results,
    })
}

/// DELETE `{scim}/Users/{id}`.
pub async fn delete_user(scim_base_url: &str, token: Option<&str>, user_id: &str) -> ApiResult<()> {
    let url = format!("{scim_base_url}/Users/{user_id}");

    let response = authorized(Client::delete(&url), token)
        .send()
        .await
        .map_err(|e| UsersApiError::Transport(e.to_string()))?;

    if !response.is_success() {
        return Err(UsersApiError::Status(response.status));
    }

    Ok(())
}
