//! Authentication pages: the only routes rendered without chrome.

pub mod sign_in;
pub mod sign_up;

use crate::routes::{Page, RouteEntry};

pub const PATH_LOGIN: &str = "/login";
pub const PATH_SIGN_IN: &str = "/sign-in";
pub const PATH_SIGN_UP: &str = "/sign-up";

pub(crate) const ROUTES: &[RouteEntry] = &[
    RouteEntry {
        path: PATH_LOGIN,
        page: Page::SignIn,
        requires_auth: false,
        children: &[],
    },
    RouteEntry {
        path: PATH_SIGN_IN,
        page: Page::SignIn,
        requires_auth: false,
        children: &[],
    },
    RouteEntry {
        path: PATH_SIGN_UP,
        page: Page::SignUp,
        requires_auth: false,
        children: &[],
    },
];
