use crate::config::Config;
use crate::store::RecipeStore;
use std::sync::Arc;

/// Application state shared across all handlers
pub type AppState = Arc<AppContext>;

#[derive(Debug)]
pub struct AppContext {
    pub store: Arc<dyn RecipeStore>,
    /// Include store error details in 500 responses (non-production only)
    pub expose_internal_errors: bool,
}

impl AppContext {
    pub fn new(store: Arc<dyn RecipeStore>, config: &Config) -> AppState {
        Arc::new(Self {
            store,
            expose_internal_errors: !config.environment.is_production(),
        })
    }
}
