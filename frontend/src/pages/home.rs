//! Landing page after sign-in: shortcuts into the catalog modules.

use leptos::prelude::*;

use crate::pages::authors::PATH_AUTHORS;
use crate::pages::genres::PATH_GENRES;
use crate::pages::notifications::PATH_NOTIFICATION;
use crate::pages::sources::PATH_SOURCES;
use crate::routes::{Page, RouteEntry};
use crate::session::use_session;
use crate::web::router::use_router;

pub const PATH_HOME: &str = "/home";

pub(crate) const ROUTES: &[RouteEntry] = &[RouteEntry {
    path: PATH_HOME,
    page: Page::Home,
    requires_auth: true,
    children: &[],
}];

const CARDS: &[(&str, &str, &str)] = &[
    ("Authors", "Browse and edit the author catalog", PATH_AUTHORS),
    ("Genres", "Keep the genre taxonomy tidy", PATH_GENRES),
    ("Sources", "Manage ingestion sources for uploads", PATH_SOURCES),
    ("Notifications", "See what changed recently", PATH_NOTIFICATION),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();
    let router = use_router();
    let user = session.user_signal();

    let cards = CARDS
        .iter()
        .map(|&(title, blurb, target)| {
            view! {
                <div class="card bg-base-100 shadow hover:shadow-lg transition-shadow">
                    <div class="card-body">
                        <h2 class="card-title">{title}</h2>
                        <p class="text-base-content/70">{blurb}</p>
                        <div class="card-actions justify-end">
                            <button class="btn btn-primary btn-sm" on:click=move |_| router.navigate(target)>
                                "Open"
                            </button>
                        </div>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="max-w-5xl mx-auto space-y-8">
            <div class="hero bg-base-100 rounded-box shadow">
                <div class="hero-content text-center py-10">
                    <div>
                        <h1 class="text-3xl font-bold">
                            {move || match user.get() {
                                Some(u) => format!("Welcome back, {}", u.name),
                                None => "Welcome".to_string(),
                            }}
                        </h1>
                        <p class="py-2 text-base-content/70">
                            "Manage authors, genres and ingestion sources of the book catalog."
                        </p>
                    </div>
                </div>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">{cards}</div>
        </div>
    }
}
