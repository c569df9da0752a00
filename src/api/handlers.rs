use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Html,
    Extension, Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::{
    error::AppResult,
    middleware::request_id::RequestId,
    models::{ContentType, ItemId},
    page::{ClickAction, Document},
    render::render_page,
};

use super::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Loads the home page: trending rows, modals closed
async fn home_document(state: &AppState) -> AppResult<Document> {
    let mut doc = Document::new();
    state.frontend.load_home(&mut doc).await?;
    Ok(doc)
}

/// Home page
pub async fn home(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
) -> AppResult<Html<String>> {
    tracing::info!(request_id = %request_id, "Rendering home page");

    let doc = home_document(&state).await?;
    Ok(Html(render_page(&doc, "")?))
}

/// Home page with the search modal showing merged results
pub async fn search(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Query(params): Query<SearchQuery>,
) -> AppResult<Html<String>> {
    tracing::info!(request_id = %request_id, query = %params.q, "Processing search");

    let mut doc = home_document(&state).await?;
    state.frontend.submit_search(&mut doc, &params.q).await?;
    Ok(Html(render_page(&doc, params.q.trim())?))
}

/// Home page with the detail modal open for one item
pub async fn details(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Path((content_type, id)): Path<(ContentType, ItemId)>,
) -> AppResult<Html<String>> {
    tracing::info!(
        request_id = %request_id,
        content_type = %content_type,
        id,
        "Opening details"
    );

    let mut doc = home_document(&state).await?;
    state
        .frontend
        .click(&mut doc, ClickAction::OpenDetails { id, content_type })
        .await;
    Ok(Html(render_page(&doc, "")?))
}
