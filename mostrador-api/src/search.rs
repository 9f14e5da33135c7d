use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use mostrador_catalog::Catalog;
use mostrador_core::SearchQuery;
use serde_json::Value;

use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/productos.json", get(get_catalog))
        .route("/api/catalog", get(get_catalog))
        .route("/api/search", get(get_session).post(search))
        .route("/api/reset", post(reset))
}

/// GET /api/catalog
/// Full catalog as loaded at start-up
pub async fn get_catalog(State(state): State<AppState>) -> Json<Catalog> {
    let session = state.session.read().await;
    Json(session.catalog().clone())
}

/// GET /api/search
/// Current query, results and message
pub async fn get_session(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let session = state.session.read().await;
    Ok(Json(serde_json::to_value(session.view())?))
}

/// POST /api/search
pub async fn search(
    State(state): State<AppState>,
    Json(query): Json<SearchQuery>,
) -> Result<Json<Value>, AppError> {
    let mut session = state.session.write().await;
    session.search(query).map_err(AppError::core)?;
    Ok(Json(serde_json::to_value(session.view())?))
}

/// POST /api/reset
pub async fn reset(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let mut session = state.session.write().await;
    session.reset();
    Ok(Json(serde_json::to_value(session.view())?))
}
