//! Full notification history page. The navbar bell shows the latest
//! slice; this page lists everything the backend kept.

use leptos::prelude::*;
use leptos::task::spawn_local;
use libris_shared::Notification;

use crate::api::NotificationApi;
use crate::routes::{Page, RouteEntry};
use crate::web::router::use_router;

pub const PATH_NOTIFICATION: &str = "/notification";

pub(crate) const ROUTES: &[RouteEntry] = &[RouteEntry {
    path: PATH_NOTIFICATION,
    page: Page::Notifications,
    requires_auth: true,
    children: &[],
}];

#[component]
pub fn NotificationsPage() -> impl IntoView {
    let router = use_router();

    let items = RwSignal::new(Vec::<Notification>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(Option::<String>::None);

    let load = move || {
        loading.set(true);
        error.set(None);
        spawn_local(async move {
            match NotificationApi::list().await {
                Ok(list) => items.set(list),
                Err(err) => error.set(Some(err.to_string())),
            }
            loading.set(false);
        });
    };
    Effect::new(move |_| load());

    let is_empty = move || items.with(|i| i.is_empty()) && !loading.get();

    view! {
        <div class="max-w-4xl mx-auto space-y-4">
            <div class="breadcrumbs text-sm">
                <ul>
                    <li>"Notifications"</li>
                </ul>
            </div>

            <Show when=move || error.get().is_some()>
                <div role="alert" class="alert alert-error">
                    <span>{move || error.get().unwrap_or_default()}</span>
                    <button class="btn btn-sm" on:click=move |_| load()>"Retry"</button>
                </div>
            </Show>

            <div class="card bg-base-100 shadow">
                <div class="card-body p-0">
                    <div class="flex items-center justify-between p-6 pb-2">
                        <h3 class="card-title">"Notifications"</h3>
                        <button
                            class="btn btn-ghost btn-sm"
                            disabled=move || loading.get()
                            on:click=move |_| load()
                        >
                            "Refresh"
                        </button>
                    </div>

                    <Show when=move || loading.get() && items.with(|i| i.is_empty())>
                        <div class="text-center py-12 text-base-content/50">
                            <span class="loading loading-spinner loading-md"></span>
                            " Loading..."
                        </div>
                    </Show>
                    <Show when=is_empty>
                        <div class="text-center py-12 text-base-content/50">"No notifications"</div>
                    </Show>

                    <ul class="divide-y divide-base-200">
                        <For
                            each=move || items.get()
                            key=|n| n.id_notification.clone()
                            children=move |notification: Notification| {
                                let target = notification.navigation_path().map(str::to_string);
                                let navigable = target.is_some();
                                let go = {
                                    let target = target.clone();
                                    move |_| {
                                        if let Some(path) = target.as_deref() {
                                            router.navigate(path);
                                        }
                                    }
                                };
                                let when = notification.created_at.format("%Y-%m-%d %H:%M").to_string();
                                view! {
                                    <li>
                                        <button
                                            class="w-full text-left px-6 py-3 hover:bg-base-200 disabled:opacity-60"
                                            disabled=!navigable
                                            on:click=go
                                        >
                                            <div class="flex items-center justify-between gap-2">
                                                <span class="font-medium">
                                                    {notification.title.clone()}
                                                    <Show when={
                                                        let read = notification.read;
                                                        move || !read
                                                    }>
                                                        <span class="badge badge-error badge-xs ml-2"></span>
                                                    </Show>
                                                </span>
                                                <span class="text-xs opacity-60">{when.clone()}</span>
                                            </div>
                                            <div class="text-sm opacity-70 truncate">
                                                {notification.message.clone()}
                                            </div>
                                            <div class="text-xs opacity-50">
                                                {notification.author.email.clone()}
                                            </div>
                                        </button>
                                    </li>
                                }
                            }
                        />
                    </ul>
                </div>
            </div>
        </div>
    }
}
