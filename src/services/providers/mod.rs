//! Catalogue data provider abstraction
//!
//! The page only needs three reads from the catalogue: the popular list, one
//! item's detail, and a text search, each scoped to a content type.
use serde::Deserialize;

use crate::{
    error::AppResult,
    models::{ContentType, Item, ItemId},
};

pub mod tmdb;

pub use tmdb::TmdbProvider;

/// Route shape and query parameter used for search requests
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SearchStyle {
    /// `{base}/search/{movie|tv}?query=...`
    #[default]
    Tmdb,
    /// `{base}/search?q=...`
    Compact,
}

/// Trait for catalogue providers
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Currently popular items of one content type
    async fn popular(&self, content_type: ContentType) -> AppResult<Vec<Item>>;

    /// Full metadata for a single item
    async fn details(&self, content_type: ContentType, id: ItemId) -> AppResult<Item>;

    /// Free-text search within one content type
    async fn search(&self, content_type: ContentType, query: &str) -> AppResult<Vec<Item>>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
