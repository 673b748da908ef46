//! Startup load - the single fetch that fills the dashboard.

use reqwest::Client;
use roster_engine::User;

use crate::fetch::fetch_users;
use crate::SharedDashboard;

/// Fetch remote users once and merge them with the seed records.
///
/// On failure the dashboard keeps its (empty) collection and shows the error.
pub async fn load_users(client: Client, url: String, seed: Vec<User>, dashboard: SharedDashboard) {
    dashboard.write().await.begin_load();
    tracing::info!("Fetching users from {}", url);

    match fetch_users(&client, &url).await {
        Ok(remote) => {
            let remote_count = remote.len();
            let mut dashboard = dashboard.write().await;
            dashboard.finish_load(remote, seed);
            tracing::info!(
                remote = remote_count,
                total = dashboard.users().len(),
                "Users loaded"
            );
        }
        Err(e) => {
            tracing::error!("User fetch failed: {}", e);
            dashboard.write().await.fail_load(e.to_string());
        }
    }
}
