use axum::{
    response::Html,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};

use crate::state::AppState;

const INDEX_HTML: &str = include_str!("../static/index.html");

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
}

/// GET /
/// Lookup form. Printing happens in the browser; the print stylesheet hides
/// the form and keeps the result list.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
