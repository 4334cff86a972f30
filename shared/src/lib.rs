//! Wire-format models shared between the Libris admin frontend and the
//! catalog REST backend.
//!
//! Everything in this crate is a plain record transported verbatim over
//! HTTP; the backend speaks camelCase JSON, so every struct carries a
//! `rename_all` attribute. No behavior lives here beyond small read-only
//! helpers that both sides agree on.

mod author;
mod genre;
mod notification;
mod page;
mod source;
mod user;

pub use author::{Author, AuthorCreateRequest, AuthorSummary, BookSummary};
pub use genre::{Genre, GenreCreateRequest};
pub use notification::{Notification, NotificationAuthor, NotificationData, NOTIFICATION_TYPE_SYSTEM};
pub use page::Page;
pub use source::{Source, SourceCreateRequest};
pub use user::{LoginRequest, RegisterRequest, Role, SessionUser};

// =========================================================
// Constants
// =========================================================

/// Request header carrying the bearer token on authenticated calls.
pub const HEADER_AUTHORIZATION: &str = "Authorization";

/// Scheme prefix of the token handed out by `POST /auth/login-alt`.
pub const BEARER_PREFIX: &str = "Bearer ";

/// Field name of the file part in catalog upload requests.
pub const UPLOAD_FIELD_FILE: &str = "file";
