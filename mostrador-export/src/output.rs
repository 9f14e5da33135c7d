use std::path::{Path, PathBuf};

use tracing::{error, info};

use crate::{ExportError, ExportResult};

/// Write `document` as `dir/file_name`, creating `dir` when needed.
pub async fn save_pdf(dir: &Path, file_name: &str, document: &[u8]) -> ExportResult<PathBuf> {
    let path = dir.join(file_name);

    let written = async {
        tokio::fs::create_dir_all(dir).await?;
        tokio::fs::write(&path, document).await
    }
    .await;

    match written {
        Ok(()) => {
            info!("Saved {}", path.display());
            Ok(path)
        }
        Err(source) => {
            error!("Failed to save {}: {}", path.display(), source);
            Err(ExportError::Write { path, source })
        }
    }
}
