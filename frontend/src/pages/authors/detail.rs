use leptos::prelude::*;
use leptos::task::spawn_local;
use libris_shared::Author;

use super::PATH_AUTHORS;
use super::dialog::AuthorDialog;
use crate::api::author_api;
use crate::web::confirm::confirm;
use crate::web::router::{history_back, use_router};

#[derive(Clone)]
enum DetailState {
    Loading,
    Error(String),
    NotFound,
    Ready(Author),
}

fn detail_row(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="flex gap-4 py-1">
            <div class="w-36 text-base-content/60">{label}</div>
            <div class="flex-1 break-all">{value}</div>
        </div>
    }
}

#[component]
pub fn AuthorDetailPage(id: String) -> impl IntoView {
    let router = use_router();
    let state = RwSignal::new(DetailState::Loading);

    let dialog_open = RwSignal::new(false);
    let edit_row = RwSignal::new(Option::<Author>::None);
    let mutating = RwSignal::new(false);

    let load = {
        let id = id.clone();
        move || {
            let id = id.clone();
            state.set(DetailState::Loading);
            spawn_local(async move {
                match author_api().get(&id).await {
                    Ok(author) => state.set(DetailState::Ready(author)),
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
        if let DetailState::Ready(author) = state.get_untracked() {
            edit_row.set(Some(author));
            dialog_open.set(true);
        }
    };

    let do_delete = move |_| {
        let DetailState::Ready(author) = state.get_untracked() else {
            return;
        };
        if !confirm(&format!("Delete author \"{}\"?", author.name)) {
            return;
        }
        mutating.set(true);
        spawn_local(async move {
            match author_api().delete(&author.id_author).await {
                Ok(()) => history_back(),
                Err(err) => state.set(DetailState::Error(err.to_string())),
            }
            mutating.set(false);
        });
    };

    let is_ready = move || matches!(state.get(), DetailState::Ready(_));

    view! {
        <div class="max-w-4xl mx-auto space-y-4">
            <div class="breadcrumbs text-sm">
                <ul>
                    <li>
                        <a on:click=move |_| router.navigate(PATH_AUTHORS)>"Authors"</a>
                    </li>
                    <li>"Author"</li>
                </ul>
            </div>

            <div class="flex items-center gap-2">
                <button class="btn btn-ghost btn-sm" on:click=move |_| history_back()>
                    "Back"
                </button>
                <h2 class="text-xl font-semibold flex-1">"Author"</h2>
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
                DetailState::Ready(author) => {
                    let books_view = if author.books.is_empty() {
                        view! { <p class="text-base-content/50">"No books linked yet."</p> }
                            .into_any()
                    } else {
                        let items = author
                            .books
                            .iter()
                            .map(|book| {
                                view! {
                                    <li class="flex gap-2 py-1">
                                        <span class="font-mono text-xs opacity-60">{book.id_book.clone()}</span>
                                        <span>{book.title.clone()}</span>
                                    </li>
                                }
                            })
                            .collect_view();
                        view! { <ul>{items}</ul> }.into_any()
                    };
                    view! {
                        <div class="card bg-base-100 shadow">
                            <div class="card-body">
                                <h3 class="card-title">"Details"</h3>
                                {detail_row("ID", author.id_author.clone())}
                                {detail_row("Name", author.name.clone())}
                                {detail_row("Description", author.description.clone().unwrap_or_default())}
                                {detail_row("Image Url", author.image_url.clone().unwrap_or_default())}

                                <h3 class="card-title mt-4">
                                    {format!("Books ({})", author.books.len())}
                                </h3>
                                {books_view}
                            </div>
                        </div>
                    }
                    .into_any()
                }
            }}

            <AuthorDialog open=dialog_open initial=edit_row on_saved=on_saved />
        </div>
    }
}
