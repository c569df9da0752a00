//! TMDB-style catalogue provider
//!
//! Endpoint families are addressed by base URL, one per content type:
//! - Popular: `{base}/popular`
//! - Detail: `{base}/{id}`
//! - Search: `{base}/search/{type}?query=` or `{base}/search?q=`, per `SearchStyle`
//!
//! The API key, when configured, rides along as the `api_key` query parameter.
use reqwest::{Client as HttpClient, StatusCode};
use serde::de::DeserializeOwned;
use tracing::instrument;

use crate::{
    config::Config,
    error::{AppError, AppResult},
    models::{ContentType, Item, ItemId, ItemList},
    services::providers::{CatalogProvider, SearchStyle},
};

#[derive(Clone)]
pub struct TmdbProvider {
    http_client: HttpClient,
    movie_api_base: String,
    tv_api_base: String,
    api_key: Option<String>,
    search_style: SearchStyle,
}

impl TmdbProvider {
    pub fn new(
        movie_api_base: impl Into<String>,
        tv_api_base: impl Into<String>,
        api_key: Option<String>,
        search_style: SearchStyle,
    ) -> Self {
        Self {
            http_client: HttpClient::new(),
            movie_api_base: movie_api_base.into().trim_end_matches('/').to_string(),
            tv_api_base: tv_api_base.into().trim_end_matches('/').to_string(),
            api_key: api_key.filter(|key| !key.is_empty()),
            search_style,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.movie_api_base.clone(),
            config.tv_api_base.clone(),
            config.api_key.clone(),
            config.search_style,
        )
    }

    fn base(&self, content_type: ContentType) -> &str {
        match content_type {
            ContentType::Movie => &self.movie_api_base,
            ContentType::Tv => &self.tv_api_base,
        }
    }

    /// Search URL and the name of its query parameter
    fn search_endpoint(&self, content_type: ContentType) -> (String, &'static str) {
        let base = self.base(content_type);
        match self.search_style {
            SearchStyle::Tmdb => (format!("{}/search/{}", base, content_type), "query"),
            SearchStyle::Compact => (format!("{}/search", base), "q"),
        }
    }

    /// Issues a GET and decodes the JSON body, mapping non-2xx statuses to errors
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, &str)],
    ) -> AppResult<T> {
        let mut query: Vec<(&str, &str)> = Vec::with_capacity(params.len() + 1);
        if let Some(key) = &self.api_key {
            query.push(("api_key", key.as_str()));
        }
        query.extend_from_slice(params);

        let mut request = self.http_client.get(url);
        if !query.is_empty() {
            request = request.query(&query);
        }

        let response = request.send().await?;

        match response.status() {
            StatusCode::FORBIDDEN => return Err(AppError::Forbidden),
            StatusCode::NOT_FOUND => return Err(AppError::NotFound(url.to_string())),
            status if !status.is_success() => {
                tracing::debug!(
                    url = %url,
                    status = status.as_u16(),
                    "Catalogue API returned an error status"
                );
                return Err(AppError::UpstreamStatus(status.as_u16()));
            }
            _ => {}
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            tracing::error!(
                error = %e,
                url = %url,
                "Failed to deserialize catalogue response"
            );
            AppError::Decode(e)
        })
    }
}

#[async_trait::async_trait]
impl CatalogProvider for TmdbProvider {
    #[instrument(skip(self))]
    async fn popular(&self, content_type: ContentType) -> AppResult<Vec<Item>> {
        let url = format!("{}/popular", self.base(content_type));
        let items = self.get_json::<ItemList>(&url, &[]).await?.into_items();

        tracing::info!(
            content_type = %content_type,
            results = items.len(),
            provider = self.name(),
            "Popular items fetched"
        );

        Ok(items)
    }

    #[instrument(skip(self))]
    async fn details(&self, content_type: ContentType, id: ItemId) -> AppResult<Item> {
        let url = format!("{}/{}", self.base(content_type), id);
        self.get_json::<Item>(&url, &[]).await
    }

    #[instrument(skip(self))]
    async fn search(&self, content_type: ContentType, query: &str) -> AppResult<Vec<Item>> {
        if query.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "Search query cannot be empty".to_string(),
            ));
        }

        let (url, param) = self.search_endpoint(content_type);
        let items = self
            .get_json::<ItemList>(&url, &[(param, query)])
            .await?
            .into_items();

        tracing::info!(
            query = %query,
            content_type = %content_type,
            results = items.len(),
            provider = self.name(),
            "Search completed"
        );

        Ok(items)
    }

    fn name(&self) -> &'static str {
        "tmdb"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::{
        matchers::{method, path, query_param},
        Mock, MockServer, ResponseTemplate,
    };

    fn provider_for(server: &MockServer, api_key: Option<&str>, style: SearchStyle) -> TmdbProvider {
        TmdbProvider::new(
            format!("{}/movie", server.uri()),
            format!("{}/tv/", server.uri()),
            api_key.map(str::to_string),
            style,
        )
    }

    #[test]
    fn test_search_endpoint_shapes() {
        let tmdb = TmdbProvider::new("http://api/movie", "http://api/tv", None, SearchStyle::Tmdb);
        assert_eq!(
            tmdb.search_endpoint(ContentType::Movie),
            ("http://api/movie/search/movie".to_string(), "query")
        );

        let compact =
            TmdbProvider::new("http://api/movie", "http://api/tv", None, SearchStyle::Compact);
        assert_eq!(
            compact.search_endpoint(ContentType::Tv),
            ("http://api/tv/search".to_string(), "q")
        );
    }

    #[test]
    fn test_empty_api_key_is_ignored() {
        let provider = TmdbProvider::new("a", "b", Some(String::new()), SearchStyle::Tmdb);
        assert_eq!(provider.api_key, None);
    }

    #[tokio::test]
    async fn test_popular_sends_api_key_and_unwraps_results() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/movie/popular"))
            .and(query_param("api_key", "k123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "page": 1,
                "results": [
                    {"id": 1, "title": "One", "poster_path": "/1.jpg"},
                    {"id": 2, "title": "Two", "poster_path": "/2.jpg"}
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let provider = provider_for(&server, Some("k123"), SearchStyle::Tmdb);
        let items = provider.popular(ContentType::Movie).await.unwrap();

        assert_eq!(items.iter().map(|i| i.id).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[tokio::test]
    async fn test_popular_accepts_bare_array() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/tv/popular"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!([{"id": 1399, "name": "GoT"}])),
            )
            .mount(&server)
            .await;

        let provider = provider_for(&server, None, SearchStyle::Compact);
        let items = provider.popular(ContentType::Tv).await.unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].display_title(), Some("GoT"));
    }

    #[tokio::test]
    async fn test_status_codes_map_to_errors() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/movie/popular"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/movie/404"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/tv/popular"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let provider = provider_for(&server, None, SearchStyle::Tmdb);

        assert!(matches!(
            provider.popular(ContentType::Movie).await,
            Err(AppError::Forbidden)
        ));
        assert!(matches!(
            provider.details(ContentType::Movie, 404).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            provider.popular(ContentType::Tv).await,
            Err(AppError::UpstreamStatus(500))
        ));
    }

    #[tokio::test]
    async fn test_malformed_body_is_a_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/movie/7"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let provider = provider_for(&server, None, SearchStyle::Tmdb);
        let result = provider.details(ContentType::Movie, 7).await;

        assert!(matches!(result, Err(AppError::Decode(_))));
    }

    #[tokio::test]
    async fn test_details_fetches_single_item() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/tv/1399"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 1399,
                "name": "Game of Thrones",
                "vote_average": 8.4,
                "streaming_url": "https://stream.example/got"
            })))
            .mount(&server)
            .await;

        let provider = provider_for(&server, None, SearchStyle::Tmdb);
        let item = provider.details(ContentType::Tv, 1399).await.unwrap();

        assert_eq!(item.id, 1399);
        assert_eq!(item.rating_text(), "8.4/10");
        assert_eq!(item.streaming_url.as_deref(), Some("https://stream.example/got"));
    }

    #[tokio::test]
    async fn test_search_uses_configured_style() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/movie/search/movie"))
            .and(query_param("query", "star wars"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": [{"id": 11}]})))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/tv/search"))
            .and(query_param("q", "star wars"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 4194}])))
            .expect(1)
            .mount(&server)
            .await;

        let tmdb = provider_for(&server, None, SearchStyle::Tmdb);
        let compact = provider_for(&server, None, SearchStyle::Compact);

        let movies = tmdb.search(ContentType::Movie, "star wars").await.unwrap();
        let shows = compact.search(ContentType::Tv, "star wars").await.unwrap();

        assert_eq!(movies[0].id, 11);
        assert_eq!(shows[0].id, 4194);
    }

    #[tokio::test]
    async fn test_blank_search_is_rejected_without_request() {
        let server = MockServer::start().await;
        let provider = provider_for(&server, None, SearchStyle::Tmdb);

        let result = provider.search(ContentType::Movie, "   ").await;

        assert!(matches!(result, Err(AppError::InvalidInput(_))));
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_transport_error_text_omits_api_key() {
        let provider = TmdbProvider::new(
            "http://127.0.0.1:1/movie",
            "http://127.0.0.1:1/tv",
            Some("SUPERSECRETKEY".to_string()),
            SearchStyle::Tmdb,
        );

        let error = provider.details(ContentType::Movie, 5).await.unwrap_err();

        assert!(error.is_transport());
        assert!(!error.to_string().contains("SUPERSECRETKEY"), "{}", error);
        assert!(!format!("{:?}", error).contains("SUPERSECRETKEY"));
    }
}
