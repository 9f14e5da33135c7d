use std::path::PathBuf;
use std::sync::Arc;

use mostrador_core::{CatalogSource, CoreResult, SearchSession};
use mostrador_export::{HostPrinter, PdfRenderer};
use mostrador_store::app_config::Config;
use tokio::sync::RwLock;

#[derive(Clone)]
pub struct AppState {
    pub session: Arc<RwLock<SearchSession>>,
    pub renderer: PdfRenderer,
    pub export_dir: PathBuf,
    pub printer: Option<HostPrinter>,
}

impl AppState {
    pub fn new(session: SearchSession, export_dir: impl Into<PathBuf>, printer: Option<HostPrinter>) -> Self {
        Self {
            session: Arc::new(RwLock::new(session)),
            renderer: PdfRenderer::default(),
            export_dir: export_dir.into(),
            printer,
        }
    }

    /// Load the catalog once, before anything is served.
    pub async fn initialize(config: &Config, source: &dyn CatalogSource) -> CoreResult<Self> {
        let mut session = SearchSession::new();
        session.load(source).await?;

        let printer = HostPrinter::from_config(config.print.command.as_deref(), &config.print.args);
        Ok(Self::new(session, config.export.output_dir.clone(), printer))
    }
}
