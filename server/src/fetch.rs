//! Remote user source.
//!
//! One GET, no retry, no timeout beyond the client's defaults.

use reqwest::{Client, StatusCode};
use roster_engine::User;

/// Reasons the remote fetch can fail.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Failed to fetch users: server responded {0}")]
    Status(StatusCode),

    #[error("Failed to fetch users: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Failed to decode users: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Fetch the remote user list.
pub async fn fetch_users(client: &Client, url: &str) -> Result<Vec<User>, FetchError> {
    let response = client.get(url).send().await.map_err(FetchError::Transport)?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status));
    }

    response.json().await.map_err(FetchError::Decode)
}
