//! Genre module: paginated listing, detail view and edit dialog.

pub mod detail;
pub mod dialog;
pub mod list;

use crate::routes::{Page, RouteEntry};

pub const PATH_GENRES: &str = "/genres";
pub const PATH_GENRE: &str = "/genres/:id_genre";

pub fn genre_path(id: &str) -> String {
    format!("{PATH_GENRES}/{id}")
}

pub(crate) const ROUTES: &[RouteEntry] = &[
    RouteEntry {
        path: PATH_GENRES,
        page: Page::Genres,
        requires_auth: true,
        children: &[],
    },
    RouteEntry {
        path: PATH_GENRE,
        page: Page::GenreDetail,
        requires_auth: true,
        children: &[],
    },
];
