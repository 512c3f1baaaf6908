use std::sync::Arc;

use crate::analysis::catalog::CatalogContext;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Catalog rows and the model fitted over them. Read-only after start-up.
    pub catalog: Arc<CatalogContext>,
}
