//! Ingestion-source module. The backend serves sources as a small
//! unpaginated set, so this listing has no pager, no name filter and no
//! bulk delete.

pub mod detail;
pub mod dialog;
pub mod list;

use crate::routes::{Page, RouteEntry};

pub const PATH_SOURCES: &str = "/sources";
pub const PATH_SOURCE: &str = "/sources/:id_source";

pub fn source_path(id: &str) -> String {
    format!("{PATH_SOURCES}/{id}")
}

pub(crate) const ROUTES: &[RouteEntry] = &[
    RouteEntry {
        path: PATH_SOURCES,
        page: Page::Sources,
        requires_auth: true,
        children: &[],
    },
    RouteEntry {
        path: PATH_SOURCE,
        page: Page::SourceDetail,
        requires_auth: true,
        children: &[],
    },
];
