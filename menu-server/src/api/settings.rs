//! Settings API Handlers

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use shared::models::{RestaurantSettings, RestaurantSettingsUpdate};

use crate::core::{AppResult, ServerState};

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/settings", get(get_settings).put(update_settings))
}

/// GET /api/settings - current display settings
pub async fn get_settings(State(state): State<ServerState>) -> AppResult<Json<RestaurantSettings>> {
    Ok(Json(state.settings.read().clone()))
}

/// PUT /api/settings - update display settings
pub async fn update_settings(
    State(state): State<ServerState>,
    Json(payload): Json<RestaurantSettingsUpdate>,
) -> AppResult<Json<RestaurantSettings>> {
    let mut settings = state.settings.write();
    *settings = settings.clone().apply(payload);
    tracing::info!(menu_title = %settings.menu_title, "Settings updated");
    Ok(Json(settings.clone()))
}
