//! HTTP route definitions.

mod events;
mod health;
mod users;
mod view;

use crate::error::Result;
use crate::AppState;
use axum::Router;
use roster_engine::{Event, Outcome, ViewModel};

/// Create all application routes.
pub fn create_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(users::routes())
        .merge(view::routes())
        .merge(events::routes())
}

/// Apply an event under the write lock and render the result.
async fn dispatch(state: &AppState, event: Event) -> Result<(Outcome, ViewModel)> {
    tracing::debug!(?event, "Applying event");
    let mut dashboard = state.dashboard.write().await;
    let outcome = dashboard.apply(event)?;
    Ok((outcome, dashboard.render()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use axum::{
        body::Body,
        http::{Method, Request, StatusCode},
    };
    use roster_engine::{Company, Dashboard, User};
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tokio::sync::RwLock;
    use tower::ServiceExt;

    fn state_with(dashboard: Dashboard) -> AppState {
        AppState {
            dashboard: Arc::new(RwLock::new(dashboard)),
            config: Arc::new(Config::default()),
        }
    }

    fn ready_state() -> AppState {
        let remote = vec![
            User::new(1, "Leanne Graham", "Sincere@april.biz", "")
                .without_department()
                .with_company(Company::named("Romaguera-Crona")),
            User::new(2, "Ervin Howell", "Shanna@melissa.tv", "")
                .without_department()
                .with_company(Company::named("Deckow-Crist")),
        ];
        let seed = (0..25)
            .map(|i| User::new(0, format!("Seed Person{i}"), format!("s{i}@seed.test"), "Ops"))
            .collect();
        let mut dashboard = Dashboard::new();
        dashboard.finish_load(remote, seed);
        state_with(dashboard)
    }

    async fn send(state: &AppState, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let app = create_routes().with_state(state.clone());
        let request = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => request
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => request.body(Body::empty()).unwrap(),
        };

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    #[tokio::test]
    async fn health() {
        let state = ready_state();
        let (status, body) = send(&state, Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["load"], json!({"status": "ready"}));
        assert_eq!(
            body["usersApiUrl"],
            "https://jsonplaceholder.typicode.com/users"
        );
    }

    #[tokio::test]
    async fn list_renders_first_page() {
        let state = ready_state();
        let (status, body) = send(&state, Method::GET, "/users", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["totalItems"], 27);
        assert_eq!(body["totalPages"], 3);
        assert_eq!(body["currentPage"], 1);
        assert_eq!(body["rowsPerPage"], 10);
        assert_eq!(body["loading"], false);
        assert_eq!(body["rows"].as_array().unwrap().len(), 10);
        assert_eq!(body["rows"][0]["department"], "Romaguera-Crona");
        assert_eq!(body["sort"], json!({"key": "id", "direction": "asc"}));
    }

    #[tokio::test]
    async fn pending_dashboard_shows_loading() {
        let state = state_with(Dashboard::new());
        let (_, body) = send(&state, Method::GET, "/users", None).await;
        assert_eq!(body["loading"], true);
        assert!(body["rows"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn add_user() {
        let state = ready_state();
        let (status, body) = send(
            &state,
            Method::POST,
            "/users",
            Some(json!({"name": " A B ", "email": "a@b.com", "department": "X"})),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["id"], 36);
        assert_eq!(body["name"], "A B");
        assert_eq!(state.dashboard.read().await.users().len(), 28);
    }

    #[tokio::test]
    async fn add_rejects_blank_name() {
        let state = ready_state();
        let (status, body) = send(
            &state,
            Method::POST,
            "/users",
            Some(json!({"name": "  ", "email": "a@b.com", "department": "X"})),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "missing required field: name");
        assert_eq!(state.dashboard.read().await.users().len(), 27);
    }

    #[tokio::test]
    async fn add_after_max_id_is_unprocessable() {
        let state = state_with(Dashboard::with_users(vec![User::new(
            i64::MAX,
            "Last One",
            "last@example.com",
            "Ops",
        )]));
        let (status, body) = send(
            &state,
            Method::POST,
            "/users",
            Some(json!({"name": "A B", "email": "a@b.com", "department": "X"})),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["error"].as_str().unwrap().starts_with("no id left"));
        assert_eq!(state.dashboard.read().await.users().len(), 1);
    }

    #[tokio::test]
    async fn edit_seed_and_edit() {
        let state = ready_state();
        let (status, body) = send(&state, Method::GET, "/users/1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["department"], "Romaguera-Crona");

        let (status, body) = send(
            &state,
            Method::PATCH,
            "/users/1",
            Some(json!({"department": "Research"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["updated"], true);

        let dashboard = state.dashboard.read().await;
        let user = dashboard.get(1).unwrap();
        assert_eq!(user.department.as_deref(), Some("Research"));
        assert_eq!(user.name, "Leanne Graham");
    }

    #[tokio::test]
    async fn edit_unknown_user_is_a_noop() {
        let state = ready_state();
        let (status, body) = send(
            &state,
            Method::PATCH,
            "/users/999",
            Some(json!({"name": "Ghost"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["updated"], false);

        let (status, _) = send(&state, Method::GET, "/users/999", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn edit_rejects_blank_field() {
        let state = ready_state();
        let (status, _) = send(
            &state,
            Method::PATCH,
            "/users/1",
            Some(json!({"email": " "})),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            state.dashboard.read().await.get(1).unwrap().email,
            "Sincere@april.biz"
        );
    }

    #[tokio::test]
    async fn delete_twice() {
        let state = ready_state();
        let (_, body) = send(&state, Method::DELETE, "/users/2", None).await;
        assert_eq!(body["deleted"], true);
        let (status, body) = send(&state, Method::DELETE, "/users/2", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["deleted"], false);
        assert_eq!(state.dashboard.read().await.users().len(), 26);
    }

    #[tokio::test]
    async fn search_and_filters_reset_page() {
        let state = ready_state();
        let (_, body) = send(&state, Method::PUT, "/view/page", Some(json!({"page": 3}))).await;
        assert_eq!(body["currentPage"], 3);
        assert_eq!(body["rows"].as_array().unwrap().len(), 7);

        let (_, body) = send(&state, Method::POST, "/view/sort", Some(json!({"key": "name"}))).await;
        assert_eq!(body["currentPage"], 3);

        let (_, body) = send(
            &state,
            Method::PUT,
            "/view/search",
            Some(json!({"term": "leanne"})),
        )
        .await;
        assert_eq!(body["currentPage"], 1);
        assert_eq!(body["totalItems"], 1);

        let (_, body) = send(
            &state,
            Method::PUT,
            "/view/filters",
            Some(json!({"department": "ROMA"})),
        )
        .await;
        assert_eq!(body["totalItems"], 1);
        assert_eq!(body["filters"]["department"], "ROMA");
    }

    #[tokio::test]
    async fn page_navigation() {
        let state = ready_state();
        let (_, body) = send(&state, Method::POST, "/view/page/prev", None).await;
        assert_eq!(body["currentPage"], 1);

        for _ in 0..5 {
            send(&state, Method::POST, "/view/page/next", None).await;
        }
        let (_, body) = send(&state, Method::GET, "/users", None).await;
        assert_eq!(body["currentPage"], 3);

        let (_, body) = send(
            &state,
            Method::PUT,
            "/view/rows-per-page",
            Some(json!({"rowsPerPage": 25})),
        )
        .await;
        assert_eq!(body["currentPage"], 1);
        assert_eq!(body["totalPages"], 2);
    }

    #[tokio::test]
    async fn invalid_view_changes_are_rejected() {
        let state = ready_state();
        let (status, body) = send(
            &state,
            Method::PUT,
            "/view/rows-per-page",
            Some(json!({"rowsPerPage": 30})),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["error"].as_str().unwrap().contains("30"));

        let (status, _) = send(&state, Method::POST, "/view/sort", Some(json!({"key": "phone"}))).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        let (status, _) = send(&state, Method::PUT, "/view/page", Some(json!({"page": 0}))).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn raw_events() {
        let state = ready_state();
        let (status, body) = send(
            &state,
            Method::POST,
            "/events",
            Some(json!({"type": "setSort", "key": "id"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["outcome"]["kind"], "viewChanged");
        assert_eq!(body["view"]["sort"]["direction"], "desc");

        let (_, body) = send(
            &state,
            Method::POST,
            "/events",
            Some(json!({"type": "delete", "id": 1})),
        )
        .await;
        assert_eq!(body["outcome"], json!({"kind": "deleted", "deleted": true}));
    }
}
