use mostrador_catalog::{Catalog, Product};
use serde::Serialize;
use tracing::{debug, error, info, warn};

use crate::repository::CatalogSource;
use crate::search::{filter_products, ResultSet, SearchQuery};
use crate::{CoreError, CoreResult};

/// Shown when a search selects nothing
pub const NO_MATCHES_MESSAGE: &str = "No se encontraron productos";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionState {
    Idle,
    Loaded,
    LoadFailed,
    Searched,
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SessionState::Idle => "IDLE",
            SessionState::Loaded => "LOADED",
            SessionState::LoadFailed => "LOAD_FAILED",
            SessionState::Searched => "SEARCHED",
        };
        f.write_str(name)
    }
}

/// Search state behind the lookup form: the catalog loaded at start-up, the
/// query as last submitted and the products currently on display.
#[derive(Debug, Clone)]
pub struct SearchSession {
    catalog: Catalog,
    results: ResultSet,
    query: SearchQuery,
    message: Option<String>,
    state: SessionState,
    /// State reset returns to once the load has happened
    settled: SessionState,
}

/// Read-only snapshot handed to the UI
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView<'a> {
    pub state: SessionState,
    pub query: &'a SearchQuery,
    pub results: &'a [Product],
    pub message: Option<&'a str>,
    pub catalog_size: usize,
}

impl SearchSession {
    pub fn new() -> Self {
        Self {
            catalog: Catalog::empty(),
            results: ResultSet::default(),
            query: SearchQuery::default(),
            message: None,
            state: SessionState::Idle,
            settled: SessionState::Idle,
        }
    }

    /// Session over an already loaded catalog, everything on display.
    pub fn with_catalog(catalog: Catalog) -> Self {
        let mut session = Self::new();
        session.install(catalog);
        session
    }

    /// Transition: Idle → Loaded | LoadFailed
    ///
    /// Performs the single catalog retrieval of this session. A failed
    /// retrieval is logged and leaves the catalog empty; it is not an error
    /// for the caller.
    pub async fn load(&mut self, source: &dyn CatalogSource) -> CoreResult<()> {
        if self.state != SessionState::Idle {
            return Err(CoreError::InvalidTransition {
                from: self.state.to_string(),
                to: SessionState::Loaded.to_string(),
            });
        }

        match source.fetch_catalog().await {
            Ok(catalog) => {
                info!("Loaded {} products from {}", catalog.len(), source.location());
                self.install(catalog);
            }
            Err(e) => {
                error!("Error fetching catalog from {}: {}", source.location(), e);
                self.state = SessionState::LoadFailed;
                self.settled = SessionState::LoadFailed;
            }
        }

        Ok(())
    }

    /// Transition: Loaded | LoadFailed | Searched → Searched
    pub fn search(&mut self, query: SearchQuery) -> CoreResult<&ResultSet> {
        if self.state == SessionState::Idle {
            return Err(CoreError::InvalidTransition {
                from: self.state.to_string(),
                to: SessionState::Searched.to_string(),
            });
        }

        query.validate()?;
        if !query.base_in_range() {
            warn!("Base {:?} is outside the expected range", query.base);
        }

        self.results = filter_products(&self.catalog, &query.code_filter, &query.ean_filter);
        self.message = if self.results.is_empty() {
            Some(NO_MATCHES_MESSAGE.to_string())
        } else {
            None
        };
        debug!(
            code = %query.code_filter,
            ean = %query.ean_filter,
            matches = self.results.len(),
            "Search completed"
        );

        self.query = query;
        self.state = SessionState::Searched;
        Ok(&self.results)
    }

    /// Clear the query and put the whole catalog back on display.
    pub fn reset(&mut self) {
        self.query = SearchQuery::default();
        self.message = None;
        self.results = ResultSet::from_catalog(&self.catalog);
        self.state = self.settled;
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn results(&self) -> &ResultSet {
        &self.results
    }

    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn view(&self) -> SessionView<'_> {
        SessionView {
            state: self.state,
            query: &self.query,
            results: self.results.products(),
            message: self.message(),
            catalog_size: self.catalog.len(),
        }
    }

    fn install(&mut self, catalog: Catalog) {
        self.results = ResultSet::from_catalog(&catalog);
        self.catalog = catalog;
        self.state = SessionState::Loaded;
        self.settled = SessionState::Loaded;
    }
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new()
    }
}
