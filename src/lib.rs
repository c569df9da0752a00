//! Movie and TV poster browser over a TMDB-style catalogue API.
//!
//! `services` runs the user actions (page load, poster click, search) against
//! a `page::Document`; `render` and `api` expose the result as HTML.

pub mod api;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod page;
pub mod render;
pub mod services;
