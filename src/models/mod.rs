use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

use crate::error::AppError;

pub mod item;

pub use item::{Item, ItemId, ItemList, TaggedItem};

/// Which endpoint family an item belongs to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Movie,
    Tv,
}

impl ContentType {
    pub const ALL: [ContentType; 2] = [ContentType::Movie, ContentType::Tv];

    /// Path segment and `data-type` value
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Movie => "movie",
            ContentType::Tv => "tv",
        }
    }

    /// Home-page container listing popular items of this type
    pub fn trending_container(&self) -> &'static str {
        match self {
            ContentType::Movie => crate::page::ids::TRENDING_MOVIES,
            ContentType::Tv => crate::page::ids::TRENDING_TV,
        }
    }
}

impl Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "movie" => Ok(ContentType::Movie),
            "tv" => Ok(ContentType::Tv),
            other => Err(AppError::InvalidInput(format!(
                "Unknown content type '{}'",
                other
            ))),
        }
    }
}

/// Prefix applied to relative poster paths
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBase(String);

impl ImageBase {
    pub fn new(base: impl Into<String>) -> Self {
        Self(base.into())
    }

    /// Absolute URLs pass through; relative paths get the base prepended.
    pub fn poster_url(&self, poster_path: Option<&str>) -> Option<String> {
        let path = poster_path.filter(|p| !p.is_empty())?;
        if path.starts_with("http") {
            Some(path.to_string())
        } else {
            Some(format!("{}{}", self.0, path))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_serialization() {
        assert_eq!(serde_json::to_string(&ContentType::Movie).unwrap(), "\"movie\"");
        assert_eq!(serde_json::to_string(&ContentType::Tv).unwrap(), "\"tv\"");
    }

    #[test]
    fn test_content_type_from_str() {
        assert_eq!("movie".parse::<ContentType>().unwrap(), ContentType::Movie);
        assert_eq!("tv".parse::<ContentType>().unwrap(), ContentType::Tv);
        assert!("anime".parse::<ContentType>().is_err());
    }

    #[test]
    fn test_trending_containers() {
        assert_eq!(ContentType::Movie.trending_container(), "trending-movies");
        assert_eq!(ContentType::Tv.trending_container(), "trending-tv");
    }

    #[test]
    fn test_relative_poster_path_is_prefixed() {
        let images = ImageBase::new("https://image.tmdb.org/t/p/w500");
        assert_eq!(
            images.poster_url(Some("/abc.jpg")).as_deref(),
            Some("https://image.tmdb.org/t/p/w500/abc.jpg")
        );
    }

    #[test]
    fn test_absolute_poster_path_is_unchanged() {
        let images = ImageBase::new("https://image.tmdb.org/t/p/w500");
        assert_eq!(
            images.poster_url(Some("https://cdn.example.com/p.png")).as_deref(),
            Some("https://cdn.example.com/p.png")
        );
        assert_eq!(
            images.poster_url(Some("http://cdn.example.com/p.png")).as_deref(),
            Some("http://cdn.example.com/p.png")
        );
    }

    #[test]
    fn test_missing_poster_path_has_no_url() {
        let images = ImageBase::new("https://image.tmdb.org/t/p/w500");
        assert_eq!(images.poster_url(None), None);
        assert_eq!(images.poster_url(Some("")), None);
    }
}
