//! Routing service — core engine.
//!
//! Wraps the History API so that every `window.history` access is
//! concentrated in this module. Navigation flows "request -> resolve ->
//! load": the service holds the current path as a signal, the route table
//! (`crate::routes`) resolves it, and the layer above decides what to
//! render. The service performs no authorization; access control is the
//! backend's job.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use crate::routes;

/// Current browser path.
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// Used for redirects so the replaced path never lands in history.
fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// One step back in session history.
pub fn history_back() {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.back();
        }
    }
}

/// Router service.
///
/// All route operations go through here; the interface to the rest of the
/// application is a read-only path signal plus `navigate`.
#[derive(Clone, Copy)]
pub struct RouterService {
    path: ReadSignal<String>,
    set_path: WriteSignal<String>,
}

impl RouterService {
    fn new() -> Self {
        let mut initial = current_path();
        if initial == "/" {
            initial = routes::root_redirect().to_string();
            replace_history_state(&initial);
        }
        let (path, set_path) = signal(initial);
        Self { path, set_path }
    }

    /// Current path (read-only signal).
    pub fn path(&self) -> ReadSignal<String> {
        self.path
    }

    pub fn navigate(&self, path: &str) {
        let target = if path == "/" {
            routes::root_redirect()
        } else {
            path
        };
        web_sys::console::log_1(&format!("[Router] navigate -> {target}").into());
        push_history_state(target);
        self.set_path.set(target.to_string());
    }

    /// Keep the path signal in sync with browser back/forward.
    fn init_popstate_listener(&self) {
        let set_path = self.set_path;

        let closure = Closure::<dyn Fn()>::new(move || {
            set_path.set(current_path());
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // Leak the closure so the listener stays alive.
        closure.forget();
    }
}

fn provide_router() -> RouterService {
    let router = RouterService::new();
    router.init_popstate_listener();
    provide_context(router);
    router
}

/// Router service from context.
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

/// Router root component. Provides the routing context; use once at the
/// root of the application.
#[component]
pub fn Router(children: Children) -> impl IntoView {
    provide_router();

    children()
}
