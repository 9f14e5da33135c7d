use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use mostrador_core::CoreError;
use mostrador_export::ExportError;
use serde_json::json;

#[derive(Debug)]
pub enum AppError {
    ValidationError(String),
    ConflictError(String),
    ServiceUnavailable(String),
    /// Failure the clerk has to see verbatim (disk full, spooler down, ...)
    ExportFailed(String),
    InternalServerError(String),
    Anyhow(anyhow::Error),
}

impl AppError {
    pub fn core(err: CoreError) -> Self {
        match err {
            CoreError::InvalidDate(e) => AppError::ValidationError(e.to_string()),
            e @ CoreError::InvalidTransition { .. } => AppError::ConflictError(e.to_string()),
        }
    }

    pub fn export(err: ExportError) -> Self {
        match err {
            ExportError::Query(e) => AppError::core(e),
            e @ ExportError::PrintUnavailable => AppError::ServiceUnavailable(e.to_string()),
            e @ (ExportError::Write { .. } | ExportError::PrintFailed(_)) => {
                AppError::ExportFailed(e.to_string())
            }
            e @ ExportError::Render(_) => AppError::InternalServerError(e.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::ConflictError(msg) => (StatusCode::CONFLICT, msg),
            AppError::ServiceUnavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg),
            AppError::ExportFailed(msg) => {
                tracing::error!("Export failed: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            },
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal Server Error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error".to_string())
            },
            AppError::Anyhow(err) => {
                tracing::error!("Internal Server Error: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error".to_string())
            },
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self::Anyhow(err.into())
    }
}
