pub mod dates;
pub mod repository;
pub mod search;
pub mod session;

pub use dates::{format_date, parse_display_date, DateError};
pub use repository::CatalogSource;
pub use search::{filter_products, ResultSet, SearchQuery};
pub use session::{SearchSession, SessionState, SessionView};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Invalid state transition from {from} to {to}")]
    InvalidTransition {
        from: String,
        to: String,
    },
    #[error(transparent)]
    InvalidDate(#[from] DateError),
}

pub type CoreResult<T> = Result<T, CoreError>;
