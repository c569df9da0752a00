use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("HTTP client error: {0}")]
    HttpClient(reqwest::Error),

    #[error("Access denied (HTTP 403): check the API key")]
    Forbidden,

    #[error("Not found (HTTP 404): {0}")]
    NotFound(String),

    #[error("HTTP error! Status: {0}")]
    UpstreamStatus(u16),

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Missing field: {0}")]
    MissingField(&'static str),

    #[error("No element with id '{0}'")]
    MissingElement(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Template error: {0}")]
    Render(#[from] askama::Error),
}

/// Request URLs carry the `api_key` query parameter, so they never make it
/// into the error text.
impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::HttpClient(e.without_url())
    }
}

impl AppError {
    /// True when the failure happened before any HTTP status was received.
    pub fn is_transport(&self) -> bool {
        matches!(self, AppError::HttpClient(_))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::HttpClient(_)
            | AppError::Forbidden
            | AppError::UpstreamStatus(_)
            | AppError::Decode(_) => (StatusCode::BAD_GATEWAY, self.to_string()),
            AppError::MissingField(_)
            | AppError::MissingElement(_)
            | AppError::Render(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
