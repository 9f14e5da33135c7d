use async_trait::async_trait;
use std::path::{Path, PathBuf};
use mostrador_catalog::{Catalog, CatalogError};
use mostrador_core::repository::CatalogSource;
use tracing::debug;

/// Reads the static catalog from disk
pub struct FileCatalogSource {
    path: PathBuf,
}

impl FileCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CatalogSource for FileCatalogSource {
    async fn fetch_catalog(&self) -> Result<Catalog, CatalogError> {
        debug!("Reading catalog from {}", self.path.display());

        let payload = tokio::fs::read(&self.path).await.map_err(|e| CatalogError::Unavailable {
            location: self.location(),
            reason: e.to_string(),
        })?;

        Catalog::from_json_slice(&payload)
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

/// Fixed catalog held in memory
pub struct InMemoryCatalogSource {
    catalog: Catalog,
}

impl InMemoryCatalogSource {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl CatalogSource for InMemoryCatalogSource {
    async fn fetch_catalog(&self) -> Result<Catalog, CatalogError> {
        Ok(self.catalog.clone())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mostrador_core::{SearchSession, SessionState};
    use std::io::Write;

    #[tokio::test]
    async fn test_file_source_reads_catalog() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"Codigo": 100, "EAN Unidad": "7791234", "Articulo_descripcion": "Yerba", "Proveedor": "Molinos", "Rubro": "Almacen"}}]"#
        )
        .unwrap();

        let source = FileCatalogSource::new(file.path());
        let catalog = source.fetch_catalog().await.unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.products()[0].code, "100");
    }

    #[tokio::test]
    async fn test_missing_file_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileCatalogSource::new(dir.path().join("productos.json"));
        let result = source.fetch_catalog().await;
        assert!(matches!(result, Err(CatalogError::Unavailable { .. })));
    }

    #[tokio::test]
    async fn test_malformed_file_fails_session_load() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let source = FileCatalogSource::new(file.path());
        assert!(matches!(source.fetch_catalog().await, Err(CatalogError::Malformed(_))));

        let mut session = SearchSession::new();
        session.load(&source).await.unwrap();
        assert_eq!(session.state(), SessionState::LoadFailed);
        assert!(session.catalog().is_empty());
    }
}
