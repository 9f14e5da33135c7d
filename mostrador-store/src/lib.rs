pub mod app_config;
pub mod catalog_repo;

pub use catalog_repo::{FileCatalogSource, InMemoryCatalogSource};
