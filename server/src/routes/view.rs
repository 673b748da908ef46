//! View state routes - search, filters, sort, and pagination.
//!
//! Every route applies one event and answers with the re-rendered view.

use axum::{extract::State, routing::post, routing::put, Json, Router};
use roster_engine::{Event, FilterCriteria, PageSize, SortKey, ViewModel};
use serde::Deserialize;

use crate::error::Result;
use crate::routes::dispatch;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub term: String,
}

#[derive(Debug, Deserialize)]
pub struct SortRequest {
    pub key: String,
}

#[derive(Debug, Deserialize)]
pub struct PageRequest {
    pub page: usize,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowsPerPageRequest {
    pub rows_per_page: usize,
}

/// Create view routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/view/search", put(search_handler))
        .route("/view/filters", put(filters_handler))
        .route("/view/sort", post(sort_handler))
        .route("/view/page", put(page_handler))
        .route("/view/page/next", post(next_page_handler))
        .route("/view/page/prev", post(prev_page_handler))
        .route("/view/rows-per-page", put(rows_per_page_handler))
}

/// PUT /view/search - Set the free-text search term.
async fn search_handler(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<ViewModel>> {
    let (_, model) = dispatch(&state, Event::SetSearchTerm { term: request.term }).await?;
    Ok(Json(model))
}

/// PUT /view/filters - Replace the per-field filters.
async fn filters_handler(
    State(state): State<AppState>,
    Json(filters): Json<FilterCriteria>,
) -> Result<Json<ViewModel>> {
    let (_, model) = dispatch(&state, Event::SetFilter(filters)).await?;
    Ok(Json(model))
}

/// POST /view/sort - Click a column header.
async fn sort_handler(
    State(state): State<AppState>,
    Json(request): Json<SortRequest>,
) -> Result<Json<ViewModel>> {
    let key: SortKey = request.key.parse()?;
    let (_, model) = dispatch(&state, Event::SetSort { key }).await?;
    Ok(Json(model))
}

/// PUT /view/page - Jump to a page.
async fn page_handler(
    State(state): State<AppState>,
    Json(request): Json<PageRequest>,
) -> Result<Json<ViewModel>> {
    let (_, model) = dispatch(&state, Event::SetPage { page: request.page }).await?;
    Ok(Json(model))
}

/// POST /view/page/next
async fn next_page_handler(State(state): State<AppState>) -> Result<Json<ViewModel>> {
    let (_, model) = dispatch(&state, Event::NextPage).await?;
    Ok(Json(model))
}

/// POST /view/page/prev
async fn prev_page_handler(State(state): State<AppState>) -> Result<Json<ViewModel>> {
    let (_, model) = dispatch(&state, Event::PrevPage).await?;
    Ok(Json(model))
}

/// PUT /view/rows-per-page - Change the page size.
async fn rows_per_page_handler(
    State(state): State<AppState>,
    Json(request): Json<RowsPerPageRequest>,
) -> Result<Json<ViewModel>> {
    let rows_per_page = PageSize::try_from(request.rows_per_page)?;
    let (_, model) = dispatch(&state, Event::SetRowsPerPage { rows_per_page }).await?;
    Ok(Json(model))
}
