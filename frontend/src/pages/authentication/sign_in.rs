use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::pages::authentication::PATH_SIGN_UP;
use crate::pages::home::PATH_HOME;
use crate::session::{self, use_session};
use crate::web::router::use_router;

#[component]
pub fn SignInPage() -> impl IntoView {
    let session = use_session();
    let router = use_router();

    let username = RwSignal::new(session::stored_username().unwrap_or_default());
    let password = RwSignal::new(String::new());
    let is_submitting = RwSignal::new(false);

    let username_error = RwSignal::new(Option::<&'static str>::None);
    let password_error = RwSignal::new(Option::<&'static str>::None);
    let error_msg = RwSignal::new(Option::<String>::None);

    // Field checks run before anything touches the network.
    let validate = move || {
        let mut valid = true;
        if username.get_untracked().trim().is_empty() {
            username_error.set(Some("Please enter a valid username."));
            valid = false;
        } else {
            username_error.set(None);
        }
        if password.get_untracked().len() < 5 {
            password_error.set(Some("Password must be at least 5 characters long."));
            valid = false;
        } else {
            password_error.set(None);
        }
        valid
    };

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if !validate() {
            return;
        }

        is_submitting.set(true);
        error_msg.set(None);

        spawn_local(async move {
            match session::login(session, username.get_untracked(), password.get_untracked()).await
            {
                Ok(()) => router.navigate(PATH_HOME),
                Err(err) => error_msg.set(Some(err.to_string())),
            }
            is_submitting.set(false);
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <h1 class="text-3xl font-bold">"Libris Admin"</h1>
                    <p class="text-base-content/70">"Sign in to manage the catalog"</p>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <Show when=move || error_msg.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || error_msg.get().unwrap_or_default()}</span>
                            </div>
                        </Show>

                        <div class="form-control">
                            <label class="label" for="username">
                                <span class="label-text">"Username"</span>
                            </label>
                            <input
                                id="username"
                                type="text"
                                placeholder="your username"
                                on:input=move |ev| username.set(event_target_value(&ev))
                                prop:value=username
                                class="input input-bordered"
                                class:input-error=move || username_error.get().is_some()
                            />
                            <Show when=move || username_error.get().is_some()>
                                <label class="label">
                                    <span class="label-text-alt text-error">
                                        {move || username_error.get().unwrap_or_default()}
                                    </span>
                                </label>
                            </Show>
                        </div>

                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"Password"</span>
                            </label>
                            <input
                                id="password"
                                type="password"
                                placeholder="••••••••"
                                on:input=move |ev| password.set(event_target_value(&ev))
                                prop:value=password
                                class="input input-bordered"
                                class:input-error=move || password_error.get().is_some()
                            />
                            <Show when=move || password_error.get().is_some()>
                                <label class="label">
                                    <span class="label-text-alt text-error">
                                        {move || password_error.get().unwrap_or_default()}
                                    </span>
                                </label>
                            </Show>
                        </div>

                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || {
                                    if is_submitting.get() {
                                        view! { <span class="loading loading-spinner"></span> "Signing in..." }
                                            .into_any()
                                    } else {
                                        "Sign in".into_any()
                                    }
                                }}
                            </button>
                        </div>

                        <div class="text-center text-sm mt-2">
                            <a class="link link-hover" on:click=move |_| router.navigate(PATH_SIGN_UP)>
                                "No account yet? Sign up"
                            </a>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
