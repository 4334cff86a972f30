//! Author module: paginated listing, detail view and edit dialog.

pub mod detail;
pub mod dialog;
pub mod list;

use crate::routes::{Page, RouteEntry};

pub const PATH_AUTHORS: &str = "/authors";
pub const PATH_AUTHOR: &str = "/authors/:id_author";

pub fn author_path(id: &str) -> String {
    format!("{PATH_AUTHORS}/{id}")
}

pub(crate) const ROUTES: &[RouteEntry] = &[
    RouteEntry {
        path: PATH_AUTHORS,
        page: Page::Authors,
        requires_auth: true,
        children: &[],
    },
    RouteEntry {
        path: PATH_AUTHOR,
        page: Page::AuthorDetail,
        requires_auth: true,
        children: &[],
    },
];
