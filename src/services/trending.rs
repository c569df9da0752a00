use crate::{
    error::AppResult,
    models::{ContentType, Item, ItemId},
    page::{ClickAction, Document, Node, Poster},
    services::Frontend,
};

fn open_details(id: ItemId, content_type: ContentType) -> ClickAction {
    ClickAction::OpenDetails { id, content_type }
}

impl Frontend {
    /// Fetches the popular list for `content_type` and renders it into `container_id`
    ///
    /// A failed fetch replaces the container's content with an inline error
    /// message; only a missing container is returned as an error.
    pub async fn fetch_trending(
        &self,
        doc: &mut Document,
        content_type: ContentType,
        container_id: &str,
    ) -> AppResult<()> {
        let outcome = self.provider.popular(content_type).await;
        self.render_trending(doc, content_type, container_id, outcome)
    }

    pub(crate) fn render_trending(
        &self,
        doc: &mut Document,
        content_type: ContentType,
        container_id: &str,
        outcome: AppResult<Vec<Item>>,
    ) -> AppResult<()> {
        match outcome {
            Ok(items) => {
                let posters = items
                    .iter()
                    .map(|item| {
                        Node::Poster(Poster::for_item(
                            item,
                            content_type,
                            &self.images,
                            open_details,
                        ))
                    })
                    .collect();
                doc.replace_children(container_id, posters)
            }
            Err(e) => {
                tracing::error!(
                    error = %e,
                    content_type = %content_type,
                    container = container_id,
                    "Error fetching trending items"
                );
                doc.show_message(
                    container_id,
                    format!("Error loading {}s: {}", content_type, e),
                )
            }
        }
    }
}
