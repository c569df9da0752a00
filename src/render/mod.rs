//! HTML rendering of a `Document`
//!
//! Templates live in `templates/` and are auto-escaped by askama. Posters
//! become links to `/{type}/{id}`, which re-renders the page with the detail
//! modal open; that navigation also leaves the search modal closed.
use askama::Template;

use crate::{
    error::AppResult,
    page::{ids, DetailFields, Document, Modal, Node},
};

struct NodeView {
    is_message: bool,
    message: String,
    href: String,
    has_src: bool,
    src: String,
    alt: String,
    id: u64,
    kind: &'static str,
}

impl From<&Node> for NodeView {
    fn from(node: &Node) -> Self {
        match node {
            Node::Message(message) => Self {
                is_message: true,
                message: message.clone(),
                href: String::new(),
                has_src: false,
                src: String::new(),
                alt: String::new(),
                id: 0,
                kind: "",
            },
            Node::Poster(poster) => {
                let (id, content_type) = poster.on_click.target();
                Self {
                    is_message: false,
                    message: String::new(),
                    href: format!("/{}/{}", content_type, id),
                    has_src: poster.src.is_some(),
                    src: poster.src.clone().unwrap_or_default(),
                    alt: poster.alt.clone(),
                    id: poster.id,
                    kind: poster.content_type.as_str(),
                }
            }
        }
    }
}

struct SectionView {
    heading: &'static str,
    id: &'static str,
    nodes: Vec<NodeView>,
}

impl SectionView {
    fn build(doc: &Document, heading: &'static str, id: &'static str) -> AppResult<Self> {
        Ok(Self {
            heading,
            id,
            nodes: doc.children(id)?.iter().map(NodeView::from).collect(),
        })
    }
}

struct ModalView {
    id: &'static str,
    open: bool,
}

impl ModalView {
    fn of(doc: &Document, modal: Modal) -> Self {
        Self {
            id: modal.element_id(),
            open: doc.is_visible(modal),
        }
    }
}

struct ServerView {
    id: &'static str,
    href: String,
}

#[derive(Template)]
#[template(path = "page.html")]
struct PageTemplate<'a> {
    query: &'a str,
    alerts: &'a [String],
    sections: Vec<SectionView>,
    movie_modal: ModalView,
    details: &'a DetailFields,
    servers: Vec<ServerView>,
    search_modal: ModalView,
    search_results: SectionView,
}

/// Renders the whole page; `query` pre-fills the search bar.
pub fn render_page(doc: &Document, query: &str) -> AppResult<String> {
    let details = doc.details();
    let servers = ids::SERVER_LINKS
        .into_iter()
        .zip(details.server_links.iter())
        .map(|(id, href)| ServerView {
            id,
            href: href.clone(),
        })
        .collect();

    let template = PageTemplate {
        query,
        alerts: doc.alerts(),
        sections: vec![
            SectionView::build(doc, "Trending Movies", ids::TRENDING_MOVIES)?,
            SectionView::build(doc, "Trending TV Shows", ids::TRENDING_TV)?,
            SectionView::build(doc, "Trending Anime", ids::TRENDING_ANIME)?,
        ],
        movie_modal: ModalView::of(doc, Modal::Movie),
        details,
        servers,
        search_modal: ModalView::of(doc, Modal::Search),
        search_results: SectionView::build(doc, "Search Results", ids::SEARCH_RESULTS)?,
    };

    Ok(template.render()?)
}
