use std::path::PathBuf;

use axum::{
    extract::{Query, State},
    http::{header, HeaderValue},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use mostrador_core::SearchQuery;
use mostrador_export::{save_pdf, ExportError, ExportSheet};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/export/pdf", get(download_pdf))
        .route("/api/export/pdf/save", post(save_to_disk))
        .route("/api/print", post(print))
}

/// Form fields as they are on screen when the clerk asks for the export.
/// They may differ from the last submitted search; the products do not.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExportFields {
    pub code_filter: String,
    pub entry_date: String,
    pub expiry_date: String,
    pub base: String,
}

impl From<ExportFields> for SearchQuery {
    fn from(fields: ExportFields) -> Self {
        SearchQuery {
            code_filter: fields.code_filter,
            entry_date: fields.entry_date,
            expiry_date: fields.expiry_date,
            base: fields.base,
            ..SearchQuery::default()
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedExportResponse {
    pub file_name: String,
    pub path: PathBuf,
}

#[derive(Debug, Serialize)]
pub struct PrintResponse {
    pub status: String,
}

struct RenderedExport {
    file_name: String,
    disk_file_name: String,
    bytes: Vec<u8>,
}

/// Render the products on display with the given form fields. The session
/// lock is released before any file or process I/O happens.
async fn render_current(state: &AppState, fields: ExportFields) -> Result<RenderedExport, AppError> {
    let query = SearchQuery::from(fields);
    let session = state.session.read().await;
    let sheet = ExportSheet::new(session.results(), &query).map_err(AppError::export)?;
    let bytes = state.renderer.render(&sheet).map_err(AppError::export)?;

    Ok(RenderedExport {
        file_name: sheet.file_name(),
        disk_file_name: sheet.disk_file_name(),
        bytes,
    })
}

/// GET /api/export/pdf?codeFilter=&entryDate=&expiryDate=&base=
/// PDF attachment; the browser stores it in the download folder
pub async fn download_pdf(
    State(state): State<AppState>,
    Query(fields): Query<ExportFields>,
) -> Result<impl IntoResponse, AppError> {
    let export = render_current(&state, fields).await?;
    let disposition = HeaderValue::from_str(&format!(
        "attachment; filename=\"{}\"",
        header_safe(&export.file_name)
    ))?;

    Ok((
        [
            (header::CONTENT_TYPE, HeaderValue::from_static("application/pdf")),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        export.bytes,
    ))
}

/// POST /api/export/pdf/save?codeFilter=&entryDate=&expiryDate=&base=
/// Write the PDF into the configured export directory
pub async fn save_to_disk(
    State(state): State<AppState>,
    Query(fields): Query<ExportFields>,
) -> Result<Json<SavedExportResponse>, AppError> {
    let export = render_current(&state, fields).await?;
    let path = save_pdf(&state.export_dir, &export.disk_file_name, &export.bytes)
        .await
        .map_err(AppError::export)?;

    Ok(Json(SavedExportResponse {
        file_name: export.file_name,
        path,
    }))
}

/// POST /api/print?codeFilter=&entryDate=&expiryDate=&base=
/// Send the PDF to the host spooler
pub async fn print(
    State(state): State<AppState>,
    Query(fields): Query<ExportFields>,
) -> Result<Json<PrintResponse>, AppError> {
    let printer = state
        .printer
        .clone()
        .ok_or_else(|| AppError::export(ExportError::PrintUnavailable))?;

    let export = render_current(&state, fields).await?;
    printer.print(&export.bytes).await.map_err(AppError::export)?;

    Ok(Json(PrintResponse {
        status: "SENT".to_string(),
    }))
}

/// Quoted-string header parameters only take visible ASCII; accented codes
/// and quotes degrade to `_`.
fn header_safe(file_name: &str) -> String {
    file_name
        .chars()
        .map(|c| match c {
            '"' | '\\' => '_',
            c if c.is_ascii_graphic() || c == ' ' => c,
            _ => '_',
        })
        .collect()
}
