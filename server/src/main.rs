//! Roster Server - HTTP host for the user-management dashboard.
//!
//! On startup the server fetches the remote user list once, merges it with the
//! local seed records, and keeps the resulting collection in memory for the
//! life of the process. The presentation surface drives search, filters,
//! sorting, pagination, and mutations through the JSON routes.

mod config;
mod error;
mod fetch;
mod loader;
mod routes;
mod seed;

use crate::config::Config;
use axum::Router;
use roster_engine::Dashboard;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// The session's single dashboard, shared across handlers.
pub type SharedDashboard = Arc<RwLock<Dashboard>>;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub dashboard: SharedDashboard,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "roster_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    tracing::info!("Starting Roster Server on {}:{}", config.host, config.port);

    let seed = seed::load(config.seed_path.as_deref())?;
    tracing::info!("Loaded {} seed users", seed.len());

    let dashboard: SharedDashboard = Arc::new(RwLock::new(Dashboard::new()));

    // Kick off the one startup fetch; routes serve a loading view until it lands
    tokio::spawn(loader::load_users(
        reqwest::Client::new(),
        config.users_api_url.clone(),
        seed,
        dashboard.clone(),
    ));

    let state = AppState {
        dashboard,
        config: Arc::new(config.clone()),
    };

    // Build router
    let app = Router::new()
        .merge(routes::create_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state);

    // Start server
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
