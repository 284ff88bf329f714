use std::sync::Arc;

use crate::{
    catalog::{InMemoryQuizCatalog, QuizCatalog},
    config::Config,
    errors::AppResult,
    services::{AttemptSink, LoggingAttemptSink},
};

/// Shared collaborators the front-end wires a session flow from.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn QuizCatalog>,
    pub sink: Arc<dyn AttemptSink>,
    pub config: Arc<Config>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl AppState {
    pub fn new(config: Config) -> AppResult<Self> {
        let catalog = match &config.catalog_path {
            Some(path) => {
                log::info!("loading quiz catalog from {}", path);
                InMemoryQuizCatalog::from_path(path)?
            }
            None => InMemoryQuizCatalog::with_seed_data()?,
        };

        Ok(Self {
            catalog: Arc::new(catalog),
            sink: Arc::new(LoggingAttemptSink),
            config: Arc::new(config),
        })
    }
}
