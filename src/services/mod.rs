use std::sync::Arc;

use crate::{
    error::AppResult,
    models::{ContentType, ImageBase},
    page::{ids, ClickAction, Document, Modal},
    services::providers::CatalogProvider,
};

pub mod details;
pub mod providers;
pub mod search;
pub mod trending;

const ANIME_PLACEHOLDER: &str = "Anime API not integrated.";

/// Drives a `Document` in response to user actions
///
/// Holds no per-user state: every action takes the document it should mutate.
#[derive(Clone)]
pub struct Frontend {
    provider: Arc<dyn CatalogProvider>,
    images: ImageBase,
}

impl Frontend {
    pub fn new(provider: Arc<dyn CatalogProvider>, images: ImageBase) -> Self {
        Self { provider, images }
    }

    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    /// Page load: both trending rows plus the anime placeholder
    pub async fn load_home(&self, doc: &mut Document) -> AppResult<()> {
        let (movies, shows) = tokio::join!(
            self.provider.popular(ContentType::Movie),
            self.provider.popular(ContentType::Tv)
        );

        self.render_trending(
            doc,
            ContentType::Movie,
            ContentType::Movie.trending_container(),
            movies,
        )?;
        self.render_trending(
            doc,
            ContentType::Tv,
            ContentType::Tv.trending_container(),
            shows,
        )?;
        doc.show_message(ids::TRENDING_ANIME, ANIME_PLACEHOLDER)
    }

    /// Close buttons hide both modals
    pub fn close_modals(&self, doc: &mut Document) {
        doc.set_visible(Modal::Movie, false);
        doc.set_visible(Modal::Search, false);
    }

    /// Search-bar submit. Blank input is ignored; returns whether a search ran.
    pub async fn submit_search(&self, doc: &mut Document, raw: &str) -> AppResult<bool> {
        let query = raw.trim();
        if query.is_empty() {
            return Ok(false);
        }
        self.search_content(doc, query).await?;
        Ok(true)
    }

    /// Runs a poster's click action
    pub async fn click(&self, doc: &mut Document, action: ClickAction) {
        if let ClickAction::CloseSearchAndOpenDetails { .. } = action {
            doc.set_visible(Modal::Search, false);
        }
        let (id, content_type) = action.target();
        self.open_modal(doc, id, content_type).await;
    }
}
