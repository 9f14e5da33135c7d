use async_trait::async_trait;
use mostrador_catalog::{Catalog, CatalogError};

/// Source of the static product catalog.
///
/// Implementations perform a single retrieval per call and never retry; the
/// session decides what a failure means.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_catalog(&self) -> Result<Catalog, CatalogError>;

    /// Human-readable location used in diagnostics
    fn location(&self) -> String;
}
