//! Route gate and authenticated chrome.
//!
//! `LayoutWrapper` decides, per navigation, whether the matched page is
//! rendered bare (sign-in/sign-up) or inside the sidebar/header shell.
//! The decision is purely presentational — membership of the current
//! path in the unauthenticated route set — and is not access control.

use leptos::prelude::*;

use crate::notifications::{ensure_notifications, refresh_notifications, use_notifications};
use crate::pages::authentication::PATH_SIGN_IN;
use crate::pages::authors::PATH_AUTHORS;
use crate::pages::genres::PATH_GENRES;
use crate::pages::home::PATH_HOME;
use crate::pages::notifications::PATH_NOTIFICATION;
use crate::pages::settings::PATH_SETTINGS;
use crate::pages::sources::PATH_SOURCES;
use crate::routes::{self, RouteMatch};
use crate::session::{self, use_session};
use crate::web::router::use_router;

const NAV_ITEMS: &[(&str, &str)] = &[
    ("Home", PATH_HOME),
    ("Authors", PATH_AUTHORS),
    ("Genres", PATH_GENRES),
    ("Sources", PATH_SOURCES),
    ("Notifications", PATH_NOTIFICATION),
    ("Settings", PATH_SETTINGS),
];

/// Bare vs Chromed, re-evaluated on every navigation.
#[component]
pub fn LayoutWrapper(matcher: fn(RouteMatch) -> AnyView) -> impl IntoView {
    let router = use_router();

    move || {
        let path = router.path().get();
        let content = matcher(routes::match_path(&path));
        if routes::is_bare_path(&path) {
            content
        } else {
            view! { <Layout content=content /> }.into_any()
        }
    }
}

/// The persistent navigation shell around authenticated pages.
#[component]
fn Layout(content: AnyView) -> impl IntoView {
    let session = use_session();
    let notifications = use_notifications();
    let router = use_router();

    // Pull-on-mount; later chrome mounts are no-ops.
    Effect::new(move |_| ensure_notifications(notifications));

    let user = session.user_signal();
    let on_logout = move |_| {
        session::logout(session);
        router.navigate(PATH_SIGN_IN);
    };

    let path_signal = router.path();
    let nav_links = NAV_ITEMS
        .iter()
        .map(|&(label, target)| {
            let is_active = move || {
                let path = path_signal.get();
                path == target || path.starts_with(&format!("{target}/"))
            };
            view! {
                <li>
                    <a class:active=is_active on:click=move |_| router.navigate(target)>
                        {label}
                    </a>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="drawer lg:drawer-open min-h-screen bg-base-200">
            <input id="app-drawer" type="checkbox" class="drawer-toggle" />

            <div class="drawer-content flex flex-col">
                <div class="navbar bg-base-100 shadow-sm gap-2">
                    <div class="flex-none lg:hidden">
                        <label for="app-drawer" class="btn btn-ghost btn-square drawer-button">
                            "☰"
                        </label>
                    </div>
                    <div class="flex-1">
                        <span class="text-lg font-bold">"Libris Admin"</span>
                    </div>
                    <div class="flex-none gap-2">
                        <NotificationBell />
                        <Show when=move || user.get().is_some()>
                            <span class="badge badge-neutral hidden md:inline-flex">
                                {move || user.get().map(|u| u.role.label()).unwrap_or_default()}
                            </span>
                            <span class="hidden md:inline text-sm">
                                {move || user.get().map(|u| u.name).unwrap_or_default()}
                            </span>
                        </Show>
                        <button on:click=on_logout class="btn btn-outline btn-error btn-sm">
                            "Log out"
                        </button>
                    </div>
                </div>

                <main class="p-4 md:p-8 flex-1">{content}</main>
            </div>

            <div class="drawer-side">
                <label for="app-drawer" aria-label="close sidebar" class="drawer-overlay"></label>
                <aside class="bg-base-100 min-h-full w-64 flex flex-col">
                    <div class="p-4 text-xl font-bold tracking-wide">"LIBRIS"</div>
                    <ul class="menu w-full flex-1">{nav_links}</ul>
                    <Show when=move || user.get().is_some()>
                        <div class="p-4 border-t border-base-300 text-sm">
                            <div class="font-semibold">
                                {move || user.get().map(|u| u.name).unwrap_or_default()}
                            </div>
                            <div class="opacity-60">
                                {move || user.get().map(|u| u.username).unwrap_or_default()}
                            </div>
                        </div>
                    </Show>
                </aside>
            </div>
        </div>
    }
}

/// Unread badge plus the latest-notifications dropdown.
#[component]
fn NotificationBell() -> impl IntoView {
    let notifications = use_notifications();
    let router = use_router();
    let unread = notifications.unread_count();
    let state = notifications.state;

    view! {
        <div class="dropdown dropdown-end">
            <div tabindex="0" role="button" class="btn btn-ghost btn-circle">
                <div class="indicator">
                    <svg xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" class="h-5 w-5 stroke-current">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M15 17h5l-1.4-1.4A2 2 0 0118 14.2V11a6 6 0 00-4-5.7V5a2 2 0 10-4 0v.3A6 6 0 006 11v3.2a2 2 0 01-.6 1.4L4 17h5m6 0v1a3 3 0 11-6 0v-1m6 0H9" />
                    </svg>
                    <Show when=move || { unread.get() > 0 }>
                        <span class="badge badge-error badge-xs indicator-item">
                            {move || unread.get()}
                        </span>
                    </Show>
                </div>
            </div>
            <div tabindex="0" class="dropdown-content z-[1] card card-compact bg-base-100 shadow w-80">
                <div class="card-body p-2">
                    <div class="flex items-center justify-between px-2 pt-1">
                        <span class="font-semibold text-sm">"Notifications"</span>
                        <button
                            class="btn btn-ghost btn-xs"
                            on:click=move |_| refresh_notifications(notifications)
                        >
                            "Refresh"
                        </button>
                    </div>
                    <Show
                        when=move || !state.get().items.is_empty()
                        fallback=move || {
                            view! {
                                <div class="px-2 py-4 text-sm opacity-60">
                                    {move || {
                                        if state.get().loading { "Loading..." } else { "No notifications" }
                                    }}
                                </div>
                            }
                        }
                    >
                        <ul class="menu menu-sm w-full">
                            <For
                                each=move || state.get().items
                                key=|n| n.id_notification.clone()
                                children=move |notification| {
                                    let target = notification.navigation_path().map(str::to_string);
                                    let disabled = notification.is_system();
                                    let go = {
                                        let target = target.clone();
                                        move |_| {
                                            if let Some(path) = target.as_deref() {
                                                router.navigate(path);
                                            }
                                        }
                                    };
                                    view! {
                                        <li class:disabled=move || disabled>
                                            <button on:click=go disabled=disabled>
                                                <div class="flex flex-col items-start gap-0.5">
                                                    <span class="font-medium">{notification.title.clone()}</span>
                                                    <span class="text-xs opacity-60 truncate w-64 text-left">
                                                        {notification.message.clone()}
                                                    </span>
                                                </div>
                                            </button>
                                        </li>
                                    }
                                }
                            />
                        </ul>
                    </Show>
                    <button
                        class="btn btn-ghost btn-sm"
                        on:click=move |_| router.navigate(PATH_NOTIFICATION)
                    >
                        "View all"
                    </button>
                </div>
            </div>
        </div>
    }
}
