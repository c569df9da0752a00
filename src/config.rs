use serde::Deserialize;

use crate::services::providers::SearchStyle;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Base URL of the movie endpoint family
    #[serde(default = "default_movie_api_base")]
    pub movie_api_base: String,

    /// Base URL of the TV endpoint family
    #[serde(default = "default_tv_api_base")]
    pub tv_api_base: String,

    /// Catalogue API key, sent as `api_key` when set
    #[serde(default)]
    pub api_key: Option<String>,

    /// Prefix for relative poster paths
    #[serde(default = "default_image_base_url")]
    pub image_base_url: String,

    /// Search route shape and query parameter name
    #[serde(default)]
    pub search_style: SearchStyle,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_movie_api_base() -> String {
    "https://api.themoviedb.org/3/movie".to_string()
}

fn default_tv_api_base() -> String {
    "https://api.themoviedb.org/3/tv".to_string()
}

fn default_image_base_url() -> String {
    "https://image.tmdb.org/t/p/w500".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// Socket address the HTTP front end binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
