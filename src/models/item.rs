use serde::{Deserialize, Serialize};

use super::ContentType;

/// Catalogue identifier of a movie or TV show
pub type ItemId = u64;

const NO_OVERVIEW: &str = "No description available.";
const NOT_AVAILABLE: &str = "N/A";
const NO_LINK: &str = "#";

/// A movie or TV show as returned by the catalogue API
///
/// Movies carry `title`/`release_date`, shows carry `name`/`first_air_date`.
/// Everything but `id` may be absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Item {
    pub id: ItemId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub first_air_date: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f64>,
    #[serde(default)]
    pub streaming_url: Option<String>,
    #[serde(default)]
    pub streaming_url_2: Option<String>,
    #[serde(default)]
    pub streaming_url_3: Option<String>,
}

/// Treats empty strings the same as missing values.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

impl Item {
    /// `title` for movies, `name` for shows
    pub fn display_title(&self) -> Option<&str> {
        present(&self.title).or_else(|| present(&self.name))
    }

    pub fn overview_text(&self) -> &str {
        present(&self.overview).unwrap_or(NO_OVERVIEW)
    }

    pub fn release_text(&self) -> &str {
        present(&self.release_date)
            .or_else(|| present(&self.first_air_date))
            .unwrap_or(NOT_AVAILABLE)
    }

    /// `"7.5/10"`, or `"N/A"` when the rating is missing or zero
    pub fn rating_text(&self) -> String {
        match self.vote_average {
            Some(vote) if vote != 0.0 && !vote.is_nan() => format!("{}/10", vote),
            _ => NOT_AVAILABLE.to_string(),
        }
    }

    /// The three streaming server links, `"#"` where absent
    pub fn server_links(&self) -> [String; 3] {
        [
            &self.streaming_url,
            &self.streaming_url_2,
            &self.streaming_url_3,
        ]
        .map(|url| present(url).unwrap_or(NO_LINK).to_string())
    }
}

/// List endpoint body: either wrapped in `results` or a bare array
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ItemList {
    Wrapped { results: Vec<Item> },
    Bare(Vec<Item>),
}

impl ItemList {
    pub fn into_items(self) -> Vec<Item> {
        match self {
            ItemList::Wrapped { results } => results,
            ItemList::Bare(items) => items,
        }
    }
}

/// A search hit tagged with the endpoint family that produced it
#[derive(Debug, Clone, PartialEq)]
pub struct TaggedItem {
    pub item: Item,
    pub content_type: ContentType,
}

impl TaggedItem {
    pub fn new(item: Item, content_type: ContentType) -> Self {
        Self { item, content_type }
    }
}
