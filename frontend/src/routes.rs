//! Route table — the declarative path→page mapping.
//!
//! This is pure business logic with no DOM or web_sys dependency: every
//! module under `pages` contributes a static fragment of `RouteEntry`
//! values, and this module merges them into the application table. The
//! history plumbing lives in `web::router`; the chrome decision built on
//! top of this table lives in `components::layout`.

use std::sync::OnceLock;

use crate::pages::{authentication, authors, genres, home, notifications, settings, sources};

/// Page discriminant a route resolves to. The view dispatch for these
/// lives in `lib.rs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    SignIn,
    SignUp,
    Home,
    Authors,
    AuthorDetail,
    Genres,
    GenreDetail,
    Sources,
    SourceDetail,
    Notifications,
    Settings,
    NotFound,
}

/// A single path-to-page binding.
///
/// `path` may contain `:name` segments capturing one path segment each.
/// `children` paths are written relative to the parent and extend it.
/// Entries are defined once in per-module constants and never mutated.
#[derive(Debug, Clone)]
pub struct RouteEntry {
    pub path: &'static str,
    pub page: Page,
    pub requires_auth: bool,
    pub children: &'static [RouteEntry],
}

/// Result of resolving a concrete path against the table.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteMatch {
    pub page: Page,
    params: Vec<(&'static str, String)>,
}

impl RouteMatch {
    pub fn not_found() -> Self {
        Self {
            page: Page::NotFound,
            params: Vec::new(),
        }
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }
}

/// The merged application route table, composed from the per-module
/// fragments in a fixed order. First match in array order wins, so the
/// composition asserts that no two entries at the same level share a path.
pub fn app_routes() -> &'static [RouteEntry] {
    static TABLE: OnceLock<Vec<RouteEntry>> = OnceLock::new();
    TABLE.get_or_init(|| {
        let table = [
            authentication::ROUTES,
            authors::ROUTES,
            genres::ROUTES,
            home::ROUTES,
            notifications::ROUTES,
            settings::ROUTES,
            sources::ROUTES,
        ]
        .concat();
        debug_assert!(
            paths_unique(&table),
            "route paths must be unique within a tree level"
        );
        table
    })
}

/// Routes rendered without the authenticated chrome.
pub fn unauth_routes() -> impl Iterator<Item = &'static RouteEntry> {
    app_routes().iter().filter(|route| !route.requires_auth)
}

/// Chrome decision: a path is rendered bare iff, with one trailing slash
/// stripped, it exactly matches an entry flagged `requires_auth: false`.
/// This selects a rendering path only; it is not access control.
pub fn is_bare_path(path: &str) -> bool {
    let stripped = path.strip_suffix('/').unwrap_or(path);
    unauth_routes().any(|route| route.path == stripped)
}

/// Where the bare root path lands.
pub fn root_redirect() -> &'static str {
    authentication::PATH_SIGN_IN
}

/// Resolve a concrete path against the table; unknown paths fall back to
/// the NotFound page.
pub fn match_path(path: &str) -> RouteMatch {
    let normalized = match path.strip_suffix('/') {
        Some(rest) if !rest.is_empty() => rest,
        _ => path,
    };
    let segments: Vec<&str> = normalized.split('/').filter(|s| !s.is_empty()).collect();
    match_in(app_routes(), &segments).unwrap_or_else(RouteMatch::not_found)
}

fn match_in(entries: &'static [RouteEntry], segments: &[&str]) -> Option<RouteMatch> {
    for entry in entries {
        let pattern: Vec<&'static str> = entry
            .path
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();

        if let Some(params) = match_segments(&pattern, segments) {
            return Some(RouteMatch {
                page: entry.page,
                params,
            });
        }

        if !entry.children.is_empty() && segments.len() > pattern.len() {
            if let Some(mut params) = match_segments(&pattern, &segments[..pattern.len()]) {
                if let Some(child) = match_in(entry.children, &segments[pattern.len()..]) {
                    params.extend(child.params);
                    return Some(RouteMatch {
                        page: child.page,
                        params,
                    });
                }
            }
        }
    }
    None
}

fn match_segments(
    pattern: &[&'static str],
    segments: &[&str],
) -> Option<Vec<(&'static str, String)>> {
    if pattern.len() != segments.len() {
        return None;
    }
    let mut params = Vec::new();
    for (p, s) in pattern.iter().zip(segments) {
        if let Some(name) = p.strip_prefix(':') {
            params.push((name, (*s).to_string()));
        } else if p != s {
            return None;
        }
    }
    Some(params)
}

fn paths_unique(entries: &[RouteEntry]) -> bool {
    let mut seen = Vec::new();
    for entry in entries {
        if seen.contains(&entry.path) {
            return false;
        }
        seen.push(entry.path);
        if !paths_unique(entry.children) {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composition_is_duplicate_free() {
        assert!(paths_unique(app_routes()));
    }

    #[test]
    fn matches_static_paths() {
        assert_eq!(match_path("/authors").page, Page::Authors);
        assert_eq!(match_path("/genres").page, Page::Genres);
        assert_eq!(match_path("/sign-in").page, Page::SignIn);
        assert_eq!(match_path("/login").page, Page::SignIn);
    }

    #[test]
    fn matches_param_paths() {
        let matched = match_path("/authors/a1");
        assert_eq!(matched.page, Page::AuthorDetail);
        assert_eq!(matched.param("id_author"), Some("a1"));

        let matched = match_path("/genres/g7/");
        assert_eq!(matched.page, Page::GenreDetail);
        assert_eq!(matched.param("id_genre"), Some("g7"));
    }

    #[test]
    fn unknown_paths_fall_back_to_not_found() {
        assert_eq!(match_path("/nope").page, Page::NotFound);
        assert_eq!(match_path("/authors/a1/books").page, Page::NotFound);
    }

    #[test]
    fn first_match_wins_on_overlap() {
        const OVERLAP: &[RouteEntry] = &[
            RouteEntry {
                path: "/dup",
                page: Page::Home,
                requires_auth: true,
                children: &[],
            },
            RouteEntry {
                path: "/dup",
                page: Page::Settings,
                requires_auth: true,
                children: &[],
            },
        ];
        let matched = match_in(OVERLAP, &["dup"]).unwrap();
        assert_eq!(matched.page, Page::Home);
        assert!(!paths_unique(OVERLAP));
    }

    #[test]
    fn children_extend_the_parent_path() {
        const NESTED: &[RouteEntry] = &[RouteEntry {
            path: "/admin",
            page: Page::Settings,
            requires_auth: true,
            children: &[RouteEntry {
                path: "users/:id_user",
                page: Page::Home,
                requires_auth: true,
                children: &[],
            }],
        }];
        let matched = match_in(NESTED, &["admin", "users", "u1"]).unwrap();
        assert_eq!(matched.page, Page::Home);
        assert_eq!(matched.param("id_user"), Some("u1"));
    }

    #[test]
    fn bare_layout_only_for_unauth_routes() {
        assert!(is_bare_path("/sign-in"));
        assert!(is_bare_path("/sign-in/"));
        assert!(is_bare_path("/sign-up"));
        assert!(is_bare_path("/login"));

        assert!(!is_bare_path("/"));
        assert!(!is_bare_path("/home"));
        assert!(!is_bare_path("/authors"));
        assert!(!is_bare_path("/sign-in/extra"));
    }

    #[test]
    fn path_helpers_agree_with_the_table() {
        assert_eq!(authors::author_path("a1"), "/authors/a1");
        assert_eq!(genres::genre_path("g1"), "/genres/g1");
        assert_eq!(sources::source_path("s1"), "/sources/s1");
        assert_eq!(match_path(&authors::author_path("a1")).page, Page::AuthorDetail);
    }
}
