//! Session settings: who am I, and a manual identity refresh.

use leptos::prelude::*;

use crate::routes::{Page, RouteEntry};
use crate::session::{refresh_session, use_session};

pub const PATH_SETTINGS: &str = "/settings";

pub(crate) const ROUTES: &[RouteEntry] = &[RouteEntry {
    path: PATH_SETTINGS,
    page: Page::Settings,
    requires_auth: true,
    children: &[],
}];

#[component]
pub fn SettingsPage() -> impl IntoView {
    let session = use_session();
    let state = session.state;

    view! {
        <div class="max-w-3xl mx-auto space-y-4">
            <div class="breadcrumbs text-sm">
                <ul>
                    <li>"Settings"</li>
                </ul>
            </div>

            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <div class="flex items-center justify-between">
                        <h3 class="card-title">"Session"</h3>
                        <button
                            class="btn btn-ghost btn-sm"
                            disabled=move || state.get().loading
                            on:click=move |_| refresh_session(session)
                        >
                            "Refresh session"
                        </button>
                    </div>

                    {move || {
                        let current = state.get();
                        if current.loading {
                            view! {
                                <div class="py-6 text-center">
                                    <span class="loading loading-spinner text-primary"></span>
                                </div>
                            }
                                .into_any()
                        } else {
                            match current.user {
                                Some(user) => view! {
                                    <div class="space-y-1">
                                        <div class="flex gap-4 py-1">
                                            <div class="w-36 text-base-content/60">"Name"</div>
                                            <div class="flex-1">{user.name.clone()}</div>
                                        </div>
                                        <div class="flex gap-4 py-1">
                                            <div class="w-36 text-base-content/60">"Username"</div>
                                            <div class="flex-1">{user.username.clone()}</div>
                                        </div>
                                        <div class="flex gap-4 py-1">
                                            <div class="w-36 text-base-content/60">"Role"</div>
                                            <div class="flex-1">
                                                <span class="badge badge-neutral">{user.role.label()}</span>
                                            </div>
                                        </div>
                                    </div>
                                }
                                    .into_any(),
                                None => view! {
                                    <p class="text-base-content/60">
                                        "No verified session. Sign in again if this persists."
                                    </p>
                                }
                                    .into_any(),
                            }
                        }
                    }}
                </div>
            </div>
        </div>
    }
}
