use leptos::prelude::*;
use leptos::task::spawn_local;
use libris_shared::Source;

use super::PATH_SOURCES;
use super::dialog::SourceDialog;
use crate::api::SourceApi;
use crate::web::confirm::confirm;
use crate::web::router::{history_back, use_router};

#[derive(Clone)]
enum DetailState {
    Loading,
    Error(String),
    NotFound,
    Ready(Source),
}

#[component]
pub fn SourceDetailPage(id: String) -> impl IntoView {
    let router = use_router();
    let state = RwSignal::new(DetailState::Loading);

    let dialog_open = RwSignal::new(false);
    let edit_row = RwSignal::new(Option::<Source>::None);
    let mutating = RwSignal::new(false);

    let load = {
        let id = id.clone();
        move || {
            let id = id.clone();
            state.set(DetailState::Loading);
            spawn_local(async move {
                match SourceApi::get(&id).await {
                    Ok(source) => state.set(DetailState::Ready(source)),
                    Err(err) if err.is_not_found() => state.set(DetailState::NotFound),
                    Err(err) => state.set(DetailState::Error(err.to_string())),
                }
            });
        }
    };
    {
        let load = load.clone();
        Effect::new(move |_| load());
    }

    let reload = load.clone();
    let on_saved = Callback::new(move |_| reload());

    let open_edit = move |_| {
        if let DetailState::Ready(source) = state.get_untracked() {
            edit_row.set(Some(source));
            dialog_open.set(true);
        }
    };

    let do_delete = move |_| {
        let DetailState::Ready(source) = state.get_untracked() else {
            return;
        };
        if !confirm(&format!("Delete source \"{}\"?", source.name)) {
            return;
        }
        mutating.set(true);
        spawn_local(async move {
            match SourceApi::delete(&source.id_source).await {
                Ok(()) => history_back(),
                Err(err) => state.set(DetailState::Error(err.to_string())),
            }
            mutating.set(false);
        });
    };

    let is_ready = move || matches!(state.get(), DetailState::Ready(_));

    view! {
        <div class="max-w-3xl mx-auto space-y-4">
            <div class="breadcrumbs text-sm">
                <ul>
                    <li>
                        <a on:click=move |_| router.navigate(PATH_SOURCES)>"Sources"</a>
                    </li>
                    <li>"Source"</li>
                </ul>
            </div>

            <div class="flex items-center gap-2">
                <button class="btn btn-ghost btn-sm" on:click=move |_| history_back()>
                    "Back"
                </button>
                <h2 class="text-xl font-semibold flex-1">"Source"</h2>
                <Show when=is_ready>
                    <button class="btn btn-sm" on:click=open_edit>"Edit"</button>
                    <button
                        class="btn btn-sm btn-error btn-outline"
                        disabled=move || mutating.get()
                        on:click=do_delete
                    >
                        "Delete"
                    </button>
                </Show>
            </div>

            {move || match state.get() {
                DetailState::Loading => view! {
                    <div class="py-12 text-center">
                        <span class="loading loading-spinner loading-lg text-primary"></span>
                    </div>
                }
                .into_any(),
                DetailState::Error(message) => view! {
                    <div role="alert" class="alert alert-error">
                        <span>{message}</span>
                    </div>
                }
                .into_any(),
                DetailState::NotFound => view! {
                    <div class="py-12 text-center text-base-content/60">"Not found"</div>
                }
                .into_any(),
                DetailState::Ready(source) => view! {
                    <div class="card bg-base-100 shadow">
                        <div class="card-body">
                            <h3 class="card-title">"Details"</h3>
                            <div class="flex gap-4 py-1">
                                <div class="w-36 text-base-content/60">"ID"</div>
                                <div class="flex-1 font-mono text-sm">{source.id_source.clone()}</div>
                            </div>
                            <div class="flex gap-4 py-1">
                                <div class="w-36 text-base-content/60">"Name"</div>
                                <div class="flex-1">{source.name.clone()}</div>
                            </div>
                            <div class="flex gap-4 py-1">
                                <div class="w-36 text-base-content/60">"Description"</div>
                                <div class="flex-1">
                                    {source.description.clone().unwrap_or_default()}
                                </div>
                            </div>
                        </div>
                    </div>
                }
                .into_any(),
            }}

            <SourceDialog open=dialog_open initial=edit_row on_saved=on_saved />
        </div>
    }
}
