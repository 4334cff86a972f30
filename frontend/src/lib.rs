//! Libris admin frontend.
//!
//! Context-driven layering, coupled only through signals:
//! - `routes`: declarative route table (domain model)
//! - `web::router`: routing service (core engine)
//! - `session` / `notifications`: process-wide state stores
//! - `api`: one thin HTTP client per entity
//! - `components` / `pages`: UI layer

mod api;
mod notifications;
mod routes;
mod session;

mod components {
    pub mod form;
    pub mod layout;
    pub mod list_state;
    pub mod upload_dialog;
}

mod pages {
    pub mod authentication;
    pub mod authors;
    pub mod genres;
    pub mod home;
    pub mod not_found;
    pub mod notifications;
    pub mod settings;
    pub mod sources;
}

// Thin wrappers over the browser-native APIs; everything that touches
// window/history/confirm is concentrated here.
pub(crate) mod web {
    pub mod confirm;
    pub mod router;
}

use leptos::prelude::*;

use crate::components::layout::LayoutWrapper;
use crate::notifications::NotificationContext;
use crate::pages::authentication::sign_in::SignInPage;
use crate::pages::authentication::sign_up::SignUpPage;
use crate::pages::authors::detail::AuthorDetailPage;
use crate::pages::authors::list::AuthorsPage;
use crate::pages::genres::detail::GenreDetailPage;
use crate::pages::genres::list::GenresPage;
use crate::pages::home::HomePage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::notifications::NotificationsPage;
use crate::pages::settings::SettingsPage;
use crate::pages::sources::detail::SourceDetailPage;
use crate::pages::sources::list::SourcesPage;
use crate::routes::{Page, RouteMatch};
use crate::session::SessionContext;
use crate::web::router::Router;

/// Map a resolved route to its page view.
fn route_matcher(matched: RouteMatch) -> AnyView {
    match matched.page {
        Page::SignIn => view! { <SignInPage /> }.into_any(),
        Page::SignUp => view! { <SignUpPage /> }.into_any(),
        Page::Home => view! { <HomePage /> }.into_any(),
        Page::Authors => view! { <AuthorsPage /> }.into_any(),
        Page::AuthorDetail => {
            let id = matched.param("id_author").unwrap_or_default().to_string();
            view! { <AuthorDetailPage id=id /> }.into_any()
        }
        Page::Genres => view! { <GenresPage /> }.into_any(),
        Page::GenreDetail => {
            let id = matched.param("id_genre").unwrap_or_default().to_string();
            view! { <GenreDetailPage id=id /> }.into_any()
        }
        Page::Sources => view! { <SourcesPage /> }.into_any(),
        Page::SourceDetail => {
            let id = matched.param("id_source").unwrap_or_default().to_string();
            view! { <SourceDetailPage id=id /> }.into_any()
        }
        Page::Notifications => view! { <NotificationsPage /> }.into_any(),
        Page::Settings => view! { <SettingsPage /> }.into_any(),
        Page::NotFound => view! { <NotFoundPage /> }.into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Process-wide stores, created once and shared via context.
    let session = SessionContext::new();
    provide_context(session);
    session::init_session(&session);

    let notifications = NotificationContext::new();
    provide_context(notifications);

    view! {
        <Router>
            <LayoutWrapper matcher=route_matcher />
        </Router>
    }
}
