//! Notification state — latest notifications plus the unread count.
//!
//! Pull-only: fetched when the authenticated chrome first mounts and on
//! explicit refresh. There is no push channel and no polling interval.

use leptos::prelude::*;
use leptos::task::spawn_local;
use libris_shared::Notification;

use crate::api::NotificationApi;

#[derive(Clone, Default)]
pub struct NotificationState {
    pub items: Vec<Notification>,
    pub loading: bool,
    /// Set after the first fetch completes so chrome remounts do not
    /// re-poll on every navigation.
    pub loaded: bool,
    pub error: Option<String>,
}

#[derive(Clone, Copy)]
pub struct NotificationContext {
    pub state: ReadSignal<NotificationState>,
    set_state: WriteSignal<NotificationState>,
}

impl NotificationContext {
    pub fn new() -> Self {
        let (state, set_state) = signal(NotificationState::default());
        Self { state, set_state }
    }

    pub fn unread_count(&self) -> Signal<usize> {
        let state = self.state;
        Signal::derive(move || state.get().items.iter().filter(|n| !n.read).count())
    }
}

pub fn use_notifications() -> NotificationContext {
    use_context::<NotificationContext>().expect("NotificationContext should be provided")
}

/// Replace the list with the latest server state.
pub fn refresh_notifications(ctx: NotificationContext) {
    ctx.set_state.update(|s| {
        s.loading = true;
        s.error = None;
    });
    spawn_local(async move {
        match NotificationApi::latest().await {
            Ok(items) => ctx.set_state.update(|s| {
                s.items = items;
                s.loading = false;
                s.loaded = true;
            }),
            Err(err) => ctx.set_state.update(|s| {
                s.error = Some(err.to_string());
                s.loading = false;
                s.loaded = true;
            }),
        }
    });
}

/// Fetch once; later calls are no-ops until an explicit refresh.
pub fn ensure_notifications(ctx: NotificationContext) {
    let state = ctx.state.get_untracked();
    if state.loaded || state.loading {
        return;
    }
    refresh_notifications(ctx);
}
