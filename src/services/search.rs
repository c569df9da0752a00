use futures::stream::{FuturesUnordered, StreamExt};

use crate::{
    error::{AppError, AppResult},
    models::{ContentType, ItemId, TaggedItem},
    page::{ids, ClickAction, Document, Modal, Node, Poster},
    services::Frontend,
};

fn close_search_and_open(id: ItemId, content_type: ContentType) -> ClickAction {
    ClickAction::CloseSearchAndOpenDetails { id, content_type }
}

impl Frontend {
    /// Searches movies and TV at once and renders the merged hits
    ///
    /// Hits are appended in the order the endpoints answer. An endpoint that
    /// fails is skipped. The search only fails visibly when every endpoint
    /// is unreachable, or when a successful response cannot be decoded.
    pub async fn search_content(&self, doc: &mut Document, query: &str) -> AppResult<()> {
        let mut pending: FuturesUnordered<_> = ContentType::ALL
            .into_iter()
            .map(|content_type| {
                let provider = &self.provider;
                async move { (content_type, provider.search(content_type, query).await) }
            })
            .collect();

        let mut hits: Vec<TaggedItem> = Vec::new();
        let mut unreachable: Vec<AppError> = Vec::new();
        let mut fatal: Option<AppError> = None;

        while let Some((content_type, outcome)) = pending.next().await {
            match outcome {
                Ok(items) => {
                    tracing::debug!(
                        content_type = %content_type,
                        results = items.len(),
                        "Search endpoint answered"
                    );
                    hits.extend(
                        items
                            .into_iter()
                            .map(|item| TaggedItem::new(item, content_type)),
                    );
                }
                Err(e @ AppError::Decode(_)) => {
                    fatal.get_or_insert(e);
                }
                Err(e) => {
                    tracing::warn!(
                        error = %e,
                        content_type = %content_type,
                        "Skipping failed search endpoint"
                    );
                    if e.is_transport() {
                        unreachable.push(e);
                    }
                }
            }
        }

        let escalated = fatal.or_else(|| {
            if unreachable.len() == ContentType::ALL.len() {
                unreachable.into_iter().next()
            } else {
                None
            }
        });

        if let Some(e) = escalated {
            tracing::error!(error = %e, query = %query, "Error searching content");
            doc.show_message(
                ids::SEARCH_RESULTS,
                format!("Error loading search results: {}", e),
            )?;
        } else {
            let posters = hits
                .iter()
                .map(|hit| {
                    Node::Poster(Poster::for_item(
                        &hit.item,
                        hit.content_type,
                        &self.images,
                        close_search_and_open,
                    ))
                })
                .collect();
            doc.replace_children(ids::SEARCH_RESULTS, posters)?;
        }

        doc.set_visible(Modal::Search, true);
        Ok(())
    }
}
