//! Menu API Handlers

use axum::extract::{Path, State};
use axum::routing::{get, put};
use axum::{Json, Router};

use shared::models::{MenuItem, MenuItemCreate, MenuItemUpdate};
use shared::order::money;

use crate::core::{AppError, AppResult, ServerState};
use crate::repository::Repository;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/menu", get(list).post(create))
        .route("/api/menu/{id}", put(update).delete(delete))
}

fn validate_price(price: f64) -> AppResult<()> {
    money::validate_price(price).map_err(|e| AppError::validation(e.to_string()))
}

/// GET /api/menu - full catalog snapshot
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<MenuItem>>> {
    Ok(Json(state.menu.list().await))
}

/// POST /api/menu - create a menu item
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<MenuItemCreate>,
) -> AppResult<Json<MenuItem>> {
    validate_price(payload.price)?;

    let item = MenuItem {
        id: format!("item-{}", uuid::Uuid::new_v4()),
        name: payload.name,
        description: payload.description,
        price: payload.price,
        category: payload.category,
        image: payload.image,
    };
    state.menu.upsert(item.clone()).await;
    tracing::info!(item_id = %item.id, name = %item.name, "Menu item created");
    Ok(Json(item))
}

/// PUT /api/menu/{id} - update a menu item
///
/// Edits never touch historical orders; those hold their own
/// name/price snapshots.
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<MenuItemUpdate>,
) -> AppResult<Json<MenuItem>> {
    if let Some(price) = payload.price {
        validate_price(price)?;
    }

    let item = state
        .menu
        .get(&id)
        .await
        .ok_or_else(|| AppError::not_found(format!("Menu item {}", id)))?
        .apply(payload);
    state.menu.upsert(item.clone()).await;
    Ok(Json(item))
}

/// DELETE /api/menu/{id} - remove a menu item
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    if !state.menu.delete(&id).await {
        return Err(AppError::not_found(format!("Menu item {}", id)));
    }
    tracing::info!(item_id = %id, "Menu item deleted");
    Ok(Json(true))
}
