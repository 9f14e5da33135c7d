pub mod sheet;
pub mod pdf;
pub mod print;
pub mod output;

pub use sheet::ExportSheet;
pub use pdf::{PdfLayout, PdfRenderer, PlacedLine};
pub use print::HostPrinter;
pub use output::save_pdf;

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error(transparent)]
    Query(#[from] mostrador_core::CoreError),

    #[error("PDF rendering failed: {0}")]
    Render(#[from] lopdf::Error),

    #[error("Could not write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Host printing is not configured")]
    PrintUnavailable,

    #[error("Print command failed: {0}")]
    PrintFailed(String),
}

pub type ExportResult<T> = Result<T, ExportError>;
