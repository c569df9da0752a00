//! Element IDs the rendered page always provides.

pub const TRENDING_MOVIES: &str = "trending-movies";
pub const TRENDING_TV: &str = "trending-tv";
pub const TRENDING_ANIME: &str = "trending-anime";
pub const SEARCH_RESULTS: &str = "search-results";

pub const MOVIE_MODAL: &str = "movie-modal";
pub const SEARCH_MODAL: &str = "search-modal";

pub const MODAL_POSTER: &str = "modal-poster";
pub const MODAL_TITLE: &str = "modal-title";
pub const MODAL_OVERVIEW: &str = "modal-overview";
pub const MODAL_RELEASE: &str = "modal-release";
pub const MODAL_RATING: &str = "modal-rating";
pub const SERVER_LINKS: [&str; 3] = ["server-1", "server-2", "server-3"];

/// Containers whose children are replaced wholesale
pub const CONTAINERS: [&str; 4] = [TRENDING_MOVIES, TRENDING_TV, TRENDING_ANIME, SEARCH_RESULTS];
