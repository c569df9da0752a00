//! In-memory page model
//!
//! Mirrors the element-ID contract of the host page: a fixed set of
//! containers whose children get replaced, two modals that are shown or
//! hidden, the detail fields of the movie modal, and any alerts raised while
//! handling a user action. Operations mutate a `Document`; `render` turns it
//! into HTML.
use std::collections::BTreeMap;

use crate::{
    error::{AppError, AppResult},
    models::{ContentType, ImageBase, Item, ItemId},
};

pub mod ids;

/// What happens when a poster is clicked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickAction {
    /// Open the detail modal
    OpenDetails { id: ItemId, content_type: ContentType },
    /// Hide the search modal, then open the detail modal
    CloseSearchAndOpenDetails { id: ItemId, content_type: ContentType },
}

impl ClickAction {
    pub fn target(&self) -> (ItemId, ContentType) {
        match *self {
            ClickAction::OpenDetails { id, content_type }
            | ClickAction::CloseSearchAndOpenDetails { id, content_type } => (id, content_type),
        }
    }
}

/// A clickable poster image
#[derive(Debug, Clone, PartialEq)]
pub struct Poster {
    pub src: Option<String>,
    pub alt: String,
    pub id: ItemId,
    pub content_type: ContentType,
    pub on_click: ClickAction,
}

impl Poster {
    /// Builds a poster for `item`; `on_click` decides what a click does.
    pub fn for_item(
        item: &Item,
        content_type: ContentType,
        images: &ImageBase,
        on_click: fn(ItemId, ContentType) -> ClickAction,
    ) -> Self {
        Self {
            src: images.poster_url(item.poster_path.as_deref()),
            alt: item.display_title().unwrap_or_default().to_string(),
            id: item.id,
            content_type,
            on_click: on_click(item.id, content_type),
        }
    }
}

/// Child of a container
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Poster(Poster),
    Message(String),
}

/// The fields of the movie modal
#[derive(Debug, Clone, PartialEq)]
pub struct DetailFields {
    pub poster_src: String,
    pub title: String,
    pub overview: String,
    pub release: String,
    pub rating: String,
    pub server_links: [String; 3],
}

impl DetailFields {
    pub fn from_item(item: &Item, images: &ImageBase) -> AppResult<Self> {
        let title = item
            .display_title()
            .ok_or(AppError::MissingField("title"))?
            .to_string();

        Ok(Self {
            poster_src: images
                .poster_url(item.poster_path.as_deref())
                .unwrap_or_default(),
            title,
            overview: item.overview_text().to_string(),
            release: item.release_text().to_string(),
            rating: item.rating_text(),
            server_links: item.server_links(),
        })
    }
}

impl Default for DetailFields {
    fn default() -> Self {
        Self {
            poster_src: String::new(),
            title: String::new(),
            overview: String::new(),
            release: String::new(),
            rating: String::new(),
            server_links: ["#".to_string(), "#".to_string(), "#".to_string()],
        }
    }
}

/// The two modals on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    Movie,
    Search,
}

impl Modal {
    pub fn element_id(&self) -> &'static str {
        match self {
            Modal::Movie => ids::MOVIE_MODAL,
            Modal::Search => ids::SEARCH_MODAL,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    containers: BTreeMap<&'static str, Vec<Node>>,
    details: DetailFields,
    movie_modal_visible: bool,
    search_modal_visible: bool,
    alerts: Vec<String>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// A page with every container empty and both modals hidden
    pub fn new() -> Self {
        Self {
            containers: ids::CONTAINERS.iter().map(|id| (*id, Vec::new())).collect(),
            details: DetailFields::default(),
            movie_modal_visible: false,
            search_modal_visible: false,
            alerts: Vec::new(),
        }
    }

    pub fn children(&self, container_id: &str) -> AppResult<&[Node]> {
        self.containers
            .get(container_id)
            .map(Vec::as_slice)
            .ok_or_else(|| AppError::MissingElement(container_id.to_string()))
    }

    /// Posters currently in a container, skipping message nodes
    pub fn posters(&self, container_id: &str) -> AppResult<Vec<&Poster>> {
        Ok(self
            .children(container_id)?
            .iter()
            .filter_map(|node| match node {
                Node::Poster(poster) => Some(poster),
                Node::Message(_) => None,
            })
            .collect())
    }

    /// Replaces a container's children
    pub fn replace_children(&mut self, container_id: &str, nodes: Vec<Node>) -> AppResult<()> {
        let children = self
            .containers
            .get_mut(container_id)
            .ok_or_else(|| AppError::MissingElement(container_id.to_string()))?;
        *children = nodes;
        Ok(())
    }

    /// Replaces a container's children with a single message paragraph
    pub fn show_message(&mut self, container_id: &str, message: impl Into<String>) -> AppResult<()> {
        self.replace_children(container_id, vec![Node::Message(message.into())])
    }

    pub fn details(&self) -> &DetailFields {
        &self.details
    }

    pub fn set_details(&mut self, details: DetailFields) {
        self.details = details;
    }

    pub fn set_visible(&mut self, modal: Modal, visible: bool) {
        match modal {
            Modal::Movie => self.movie_modal_visible = visible,
            Modal::Search => self.search_modal_visible = visible,
        }
    }

    pub fn is_visible(&self, modal: Modal) -> bool {
        match modal {
            Modal::Movie => self.movie_modal_visible,
            Modal::Search => self.search_modal_visible,
        }
    }

    /// Records a blocking alert for the user
    pub fn alert(&mut self, message: impl Into<String>) {
        self.alerts.push(message.into());
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }
}
