/// Application routes configuration
use crate::handlers::{get_view, health, refresh, select_category, toggle_mode, AppState};
use axum::{
    routing::{get, post},
    Router,
};

/// Build the application router with all routes
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/view", get(get_view))
        .route("/refresh", post(refresh))
        .route("/category", post(select_category))
        .route("/mode/toggle", post(toggle_mode))
        .with_state(state)
}
