//! Session state — the process-wide authenticated identity.
//!
//! The store owns an explicit init/refresh lifecycle; consumers read
//! projections and never mutate the state directly. The bearer token
//! lives in LocalStorage so a reload keeps the session; the identity
//! itself is re-fetched from the server on every start.

use gloo_storage::{LocalStorage, Storage};
use leptos::prelude::*;
use leptos::task::spawn_local;
use libris_shared::SessionUser;

use crate::api::{ApiError, AuthApi};

const STORAGE_TOKEN_KEY: &str = "libris_token";
const STORAGE_USERNAME_KEY: &str = "libris_username";

#[derive(Clone, Default)]
pub struct SessionState {
    pub user: Option<SessionUser>,
    pub loading: bool,
}

/// Shared via context; components read `state` and call the free
/// functions below for lifecycle transitions.
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub state: ReadSignal<SessionState>,
    set_state: WriteSignal<SessionState>,
}

impl SessionContext {
    pub fn new() -> Self {
        let (state, set_state) = signal(SessionState::default());
        Self { state, set_state }
    }

    pub fn user_signal(&self) -> Signal<Option<SessionUser>> {
        let state = self.state;
        Signal::derive(move || state.get().user)
    }
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext should be provided")
}

/// Token as persisted by the last successful login, if any.
pub(crate) fn stored_token() -> Option<String> {
    LocalStorage::get(STORAGE_TOKEN_KEY).ok()
}

/// Last username that logged in from this browser; sign-in prefill only.
pub fn stored_username() -> Option<String> {
    LocalStorage::get(STORAGE_USERNAME_KEY).ok()
}

/// Re-fetch the identity once at application start, but only when a
/// token survives from an earlier session.
pub fn init_session(ctx: &SessionContext) {
    if stored_token().is_none() {
        return;
    }
    refresh_session(*ctx);
}

/// Replace the identity with whatever `/auth/me` says now. A failure
/// clears the user; the token stays so a retry can succeed.
pub fn refresh_session(ctx: SessionContext) {
    ctx.set_state.update(|s| s.loading = true);
    spawn_local(async move {
        match AuthApi::me().await {
            Ok(user) => ctx.set_state.update(|s| {
                s.user = Some(user);
                s.loading = false;
            }),
            Err(err) => {
                web_sys::console::warn_1(
                    &format!("[Session] identity refresh failed: {err}").into(),
                );
                ctx.set_state.update(|s| {
                    s.user = None;
                    s.loading = false;
                });
            }
        }
    });
}

/// Credential login. On success the token is persisted, the username is
/// remembered for the next prefill and an identity refresh is kicked off.
pub async fn login(ctx: SessionContext, username: String, password: String) -> Result<(), ApiError> {
    let token = AuthApi::login(&username, &password).await?;

    let _ = LocalStorage::set(STORAGE_TOKEN_KEY, &token);
    let _ = LocalStorage::set(STORAGE_USERNAME_KEY, &username);

    refresh_session(ctx);
    Ok(())
}

/// Drop the token and the in-memory identity. The remembered username is
/// kept for the next sign-in.
pub fn logout(ctx: SessionContext) {
    LocalStorage::delete(STORAGE_TOKEN_KEY);
    ctx.set_state.update(|s| s.user = None);
}
