use axum::{http::Method, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod error;
pub mod export;
pub mod form;
pub mod search;
pub mod state;

pub use state::AppState;

/// Used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "mostrador_api=debug,mostrador_core=debug,mostrador_store=debug,mostrador_export=debug,tower_http=debug,axum::rejection=trace";

pub fn app(state: AppState) -> Router {
    // The form may be opened from a desktop shell's file:// page
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    Router::new()
        .merge(form::routes())
        .merge(search::routes())
        .merge(export::routes())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
