//! Generic event endpoint for surfaces that forward raw interaction events.

use axum::{extract::State, routing::post, Json, Router};
use roster_engine::{Event, Outcome, ViewModel};
use serde::Serialize;

use crate::error::Result;
use crate::routes::dispatch;
use crate::AppState;

/// Response for an applied event.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventResponse {
    pub outcome: Outcome,
    pub view: ViewModel,
}

/// Create event routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/events", post(event_handler))
}

/// POST /events - Apply any interaction event.
async fn event_handler(
    State(state): State<AppState>,
    Json(event): Json<Event>,
) -> Result<Json<EventResponse>> {
    let (outcome, view) = dispatch(&state, event).await?;
    Ok(Json(EventResponse { outcome, view }))
}
