//! Typed HTTP accessors — one thin client per entity.
//!
//! Every operation is a single request with a normalized outcome; there
//! is no caching, no deduplication and no cancellation here. The base URL
//! is fixed at build time (`LIBRIS_API_BASE`), and the bearer token from
//! the session store is attached to every authenticated call.

mod auth;
pub mod error;
mod notification;
mod resource;
mod source;

pub use auth::AuthApi;
pub use error::ApiError;
pub use notification::NotificationApi;
pub use resource::ResourceClient;
pub use source::SourceApi;

use gloo_net::http::RequestBuilder;
use libris_shared::{
    Author, AuthorCreateRequest, AuthorSummary, BEARER_PREFIX, Genre, GenreCreateRequest,
    HEADER_AUTHORIZATION,
};

const DEFAULT_API_BASE: &str = "/api";

/// Backend base URL, fixed at build time.
pub(crate) fn api_base() -> &'static str {
    option_env!("LIBRIS_API_BASE").unwrap_or(DEFAULT_API_BASE)
}

pub(crate) fn api_url(path: &str) -> String {
    let base = api_base().trim_end_matches('/');
    if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}

/// Attach the stored bearer token, when one exists.
pub(crate) fn authorized(builder: RequestBuilder) -> RequestBuilder {
    match crate::session::stored_token() {
        Some(token) => builder.header(HEADER_AUTHORIZATION, &format!("{BEARER_PREFIX}{token}")),
        None => builder,
    }
}

pub fn author_api() -> ResourceClient<AuthorSummary, Author, AuthorCreateRequest> {
    ResourceClient::new("/author")
}

pub fn genre_api() -> ResourceClient<Genre, Genre, GenreCreateRequest> {
    ResourceClient::new("/genre")
}
