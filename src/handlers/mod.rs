/// HTTP request handlers for the renderer
use crate::domain::{Health, ViewResponse, ViewSnapshot};
use crate::errors::{ApiError, ApiResult};
use crate::presentation::render_view;
use crate::services::Controller;
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub controller: Arc<Controller>,
}

/// Successful response wrapper
#[derive(Serialize)]
pub struct SuccessResponse<T: Serialize> {
    pub ok: bool,
    #[serde(flatten)]
    pub data: T,
}

impl<T: Serialize> SuccessResponse<T> {
    pub fn new(data: T) -> Self {
        Self { ok: true, data }
    }
}

#[derive(Debug, Deserialize)]
pub struct CategoryRequest {
    #[serde(default)]
    pub category: Option<String>,
}

type ViewJson = Json<SuccessResponse<ViewResponse>>;

fn view_json(snapshot: ViewSnapshot) -> ViewJson {
    Json(SuccessResponse::new(render_view(snapshot, Utc::now())))
}

/// Health check handler
pub async fn health() -> Json<Health> {
    Json(Health {
        status: "ok",
        now: Utc::now(),
    })
}

/// Current snapshot
pub async fn get_view(State(state): State<AppState>) -> ViewJson {
    view_json(state.controller.snapshot().await)
}

/// Re-acquire data in the preferred mode
pub async fn refresh(State(state): State<AppState>) -> ViewJson {
    view_json(state.controller.refresh().await)
}

/// Switch between Live and Offline
pub async fn toggle_mode(State(state): State<AppState>) -> ViewJson {
    view_json(state.controller.toggle_mode().await)
}

/// Select a category, or "all"/null to clear
pub async fn select_category(
    State(state): State<AppState>,
    body: Result<Json<CategoryRequest>, JsonRejection>,
) -> ApiResult<ViewJson> {
    let Json(req) = body.map_err(|rejection| ApiError::InvalidInput(rejection.body_text()))?;
    if let Some(category) = req.category.as_deref() {
        if category.trim().is_empty() {
            return Err(ApiError::InvalidInput(
                "category must not be empty".to_string(),
            ));
        }
    }
    let snapshot = state
        .controller
        .set_selected_category(req.category.as_deref())
        .await;
    Ok(view_json(snapshot))
}
