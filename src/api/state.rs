use std::sync::Arc;

use crate::{
    config::Config,
    models::ImageBase,
    services::{
        providers::{CatalogProvider, TmdbProvider},
        Frontend,
    },
};

/// Shared application state
///
/// Pages are built per request, so the only shared piece is the frontend
/// and its provider.
#[derive(Clone)]
pub struct AppState {
    pub frontend: Arc<Frontend>,
}

impl AppState {
    pub fn new(provider: Arc<dyn CatalogProvider>, images: ImageBase) -> Self {
        Self {
            frontend: Arc::new(Frontend::new(provider, images)),
        }
    }

    /// State backed by the HTTP catalogue provider described by `config`
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Arc::new(TmdbProvider::from_config(config)),
            ImageBase::new(config.image_base_url.clone()),
        )
    }
}
