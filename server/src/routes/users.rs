//! User record routes.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use roster_engine::{User, UserDraft, UserId, UserPatch, ViewModel};
use serde::Serialize;

use crate::error::{AppError, Result};
use crate::AppState;

/// Response for an edit.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditResponse {
    /// False when no record has the id; the edit was a no-op
    pub updated: bool,
}

/// Response for a delete.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResponse {
    /// False when no record has the id; the delete was a no-op
    pub deleted: bool,
}

/// Create user routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_handler).post(add_handler))
        .route(
            "/users/{id}",
            get(edit_seed_handler)
                .patch(edit_handler)
                .delete(delete_handler),
        )
}

/// GET /users - Current page of the view.
async fn list_handler(State(state): State<AppState>) -> Json<ViewModel> {
    let model = state.dashboard.read().await.render();
    Json(model)
}

/// POST /users - Add a user.
async fn add_handler(
    State(state): State<AppState>,
    Json(draft): Json<UserDraft>,
) -> Result<(StatusCode, Json<User>)> {
    let user = state.dashboard.write().await.add(draft)?.clone();
    tracing::info!(id = user.id, "User added");
    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /users/{id} - Values to pre-fill an inline edit.
async fn edit_seed_handler(
    State(state): State<AppState>,
    Path(id): Path<UserId>,
) -> Result<Json<UserPatch>> {
    let seed = state.dashboard.read().await.edit_seed(id);
    seed.map(Json)
        .ok_or_else(|| AppError::NotFound(format!("user {}", id)))
}

/// PATCH /users/{id} - Edit a user.
async fn edit_handler(
    State(state): State<AppState>,
    Path(id): Path<UserId>,
    Json(patch): Json<UserPatch>,
) -> Result<Json<EditResponse>> {
    let updated = state.dashboard.write().await.edit(id, &patch)?;
    if !updated {
        tracing::debug!(id, "Edit of unknown user ignored");
    }
    Ok(Json(EditResponse { updated }))
}

/// DELETE /users/{id} - Delete a user.
async fn delete_handler(
    State(state): State<AppState>,
    Path(id): Path<UserId>,
) -> Json<DeleteResponse> {
    let deleted = state.dashboard.write().await.delete(id);
    if deleted {
        tracing::info!(id, "User deleted");
    }
    Json(DeleteResponse { deleted })
}
