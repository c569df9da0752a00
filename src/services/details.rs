use crate::{
    models::{ContentType, ItemId},
    page::{DetailFields, Document, Modal},
    services::Frontend,
};

impl Frontend {
    /// Fetches one item and shows it in the movie modal
    ///
    /// Any failure is surfaced as an alert and the modal is left hidden.
    pub async fn open_modal(&self, doc: &mut Document, id: ItemId, content_type: ContentType) {
        let populated = self
            .provider
            .details(content_type, id)
            .await
            .and_then(|item| DetailFields::from_item(&item, &self.images));

        match populated {
            Ok(fields) => {
                tracing::debug!(id, content_type = %content_type, "Showing details");
                doc.set_details(fields);
                doc.set_visible(Modal::Movie, true);
            }
            Err(e) => {
                tracing::error!(
                    error = %e,
                    id,
                    content_type = %content_type,
                    "Error fetching details"
                );
                doc.alert(format!("Error loading details: {}", e));
            }
        }
    }
}
