pub mod product;
pub mod catalog;

pub use product::Product;
pub use catalog::Catalog;

/// Catalog-related errors
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Catalog resource unavailable at {location}: {reason}")]
    Unavailable {
        location: String,
        reason: String,
    },

    #[error("Malformed catalog payload: {0}")]
    Malformed(#[from] serde_json::Error),
}
