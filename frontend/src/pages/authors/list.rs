use std::collections::HashSet;

use leptos::prelude::*;
use leptos::task::spawn_local;
use libris_shared::{Author, AuthorSummary};

use super::author_path;
use super::dialog::AuthorDialog;
use crate::api::author_api;
use crate::components::list_state::{PageQuery, Rows, use_list_state};
use crate::components::upload_dialog::{UploadDialog, upload_fn};
use crate::web::confirm::confirm;
use crate::web::router::use_router;

const PAGE_SIZES: &[u32] = &[10, 25, 50, 100];

#[component]
pub fn AuthorsPage() -> impl IntoView {
    let router = use_router();

    let state = use_list_state(PageQuery::default(), |query: PageQuery| async move {
        author_api()
            .page(query.page, query.page_size, &query.name)
            .await
            .map(Rows::from)
    });

    let selection = RwSignal::new(HashSet::<String>::new());
    // One flag for every mutation path, so a slow network cannot be
    // double-clicked into duplicate requests.
    let mutating = RwSignal::new(false);

    let dialog_open = RwSignal::new(false);
    let upload_open = RwSignal::new(false);
    let edit_row = RwSignal::new(Option::<Author>::None);

    let open_create = move |_| {
        edit_row.set(None);
        dialog_open.set(true);
    };

    let open_edit = move |row: AuthorSummary| {
        edit_row.set(Some(Author {
            id_author: row.id_author,
            name: row.name,
            description: row.description,
            image_url: row.image_url,
            books: Vec::new(),
        }));
        dialog_open.set(true);
    };

    let delete_one = move |row: AuthorSummary| {
        if !confirm(&format!("Delete Author \"{}\"?", row.name)) {
            return;
        }
        mutating.set(true);
        spawn_local(async move {
            match author_api().delete(&row.id_author).await {
                Ok(()) => state.reload(),
                Err(err) => state.error.set(Some(err.to_string())),
            }
            mutating.set(false);
        });
    };

    let delete_selected = move |_| {
        let ids: Vec<String> = selection.get_untracked().into_iter().collect();
        if ids.is_empty() {
            return;
        }
        if !confirm(&format!("Delete {} selected authors?", ids.len())) {
            return;
        }
        mutating.set(true);
        spawn_local(async move {
            match author_api().delete_many(&ids).await {
                Ok(()) => {
                    selection.set(HashSet::new());
                    state.reload();
                }
                Err(err) => state.error.set(Some(err.to_string())),
            }
            mutating.set(false);
        });
    };

    let on_search = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        state.query.update(|q| {
            q.name = value;
            q.page = 0;
        });
    };

    let prev_page = move |_| {
        state.query.update(|q| q.page = q.page.saturating_sub(1));
    };
    let next_page = move |_| {
        state.query.update(|q| q.page += 1);
    };
    let set_page_size = move |ev: leptos::ev::Event| {
        if let Ok(size) = event_target_value(&ev).parse::<u32>() {
            state.query.update(|q| {
                q.page_size = size;
                q.page = 0;
            });
        }
    };

    // Last page heuristic: a short page means there is nothing after it.
    let at_last_page = move || {
        (state.rows.with(|r| r.len()) as u32) < state.query.with(|q| q.page_size)
    };
    let row_count = move || state.rows.with(|r| r.len());
    let is_empty = move || row_count() == 0 && !state.loading.get();

    view! {
        <div class="max-w-7xl mx-auto space-y-4">
            <div class="breadcrumbs text-sm">
                <ul>
                    <li>"Authors"</li>
                </ul>
            </div>

            <Show when=move || state.error.get().is_some()>
                <div role="alert" class="alert alert-error">
                    <span>{move || state.error.get().unwrap_or_default()}</span>
                    <button class="btn btn-sm" on:click=move |_| state.reload()>"Retry"</button>
                </div>
            </Show>

            <div class="card bg-base-100 shadow">
                <div class="card-body p-0">
                    <div class="flex flex-wrap items-center justify-between gap-2 p-6 pb-2">
                        <div>
                            <h3 class="card-title">"Authors"</h3>
                            <p class="text-base-content/70 text-sm">
                                {move || format!("{} total", state.total.get())}
                            </p>
                        </div>
                        <div class="flex flex-wrap items-center gap-2">
                            <input
                                type="text"
                                placeholder="Search by name"
                                class="input input-bordered input-sm w-48"
                                on:input=on_search
                                prop:value=move || state.query.with(|q| q.name.clone())
                            />
                            <Show when=move || !selection.with(|s| s.is_empty())>
                                <button
                                    class="btn btn-error btn-sm"
                                    disabled=move || mutating.get()
                                    on:click=delete_selected
                                >
                                    {move || format!("Delete selected ({})", selection.with(|s| s.len()))}
                                </button>
                            </Show>
                            <button
                                class="btn btn-ghost btn-sm"
                                disabled=move || state.loading.get()
                                on:click=move |_| state.reload()
                            >
                                "Refresh"
                            </button>
                            <button class="btn btn-sm" on:click=move |_| upload_open.set(true)>
                                "Upload File"
                            </button>
                            <button class="btn btn-primary btn-sm" on:click=open_create>
                                "Add Author"
                            </button>
                        </div>
                    </div>

                    <div class="overflow-x-auto w-full">
                        <table class="table table-zebra w-full">
                            <thead>
                                <tr>
                                    <th></th>
                                    <th>"ID"</th>
                                    <th>"Name"</th>
                                    <th class="hidden md:table-cell">"Description"</th>
                                    <th class="hidden md:table-cell">"Image Url"</th>
                                    <th>"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <Show when=is_empty>
                                    <tr>
                                        <td colspan="6" class="text-center py-8 text-base-content/50">
                                            "No authors found."
                                        </td>
                                    </tr>
                                </Show>
                                <Show when=move || state.loading.get() && row_count() == 0>
                                    <tr>
                                        <td colspan="6" class="text-center py-8 text-base-content/50">
                                            <span class="loading loading-spinner loading-md"></span>
                                            " Loading..."
                                        </td>
                                    </tr>
                                </Show>
                                <For
                                    each=move || state.rows.get()
                                    key=|row| row.id_author.clone()
                                    children=move |row: AuthorSummary| {
                                        let id = row.id_author.clone();
                                        let checked = {
                                            let id = id.clone();
                                            move || selection.with(|s| s.contains(&id))
                                        };
                                        let toggle = {
                                            let id = id.clone();
                                            move |_| {
                                                selection.update(|s| {
                                                    if !s.remove(&id) {
                                                        s.insert(id.clone());
                                                    }
                                                });
                                            }
                                        };
                                        let open_row = {
                                            let id = id.clone();
                                            move |_| router.navigate(&author_path(&id))
                                        };
                                        let edit_target = row.clone();
                                        let delete_target = row.clone();
                                        view! {
                                            <tr>
                                                <td>
                                                    <input
                                                        type="checkbox"
                                                        class="checkbox checkbox-sm"
                                                        prop:checked=checked
                                                        on:change=toggle
                                                    />
                                                </td>
                                                <td class="font-mono text-xs opacity-60">{row.id_author.clone()}</td>
                                                <td class="font-medium">{row.name.clone()}</td>
                                                <td class="hidden md:table-cell max-w-xs truncate">
                                                    {row.description.clone().unwrap_or_default()}
                                                </td>
                                                <td class="hidden md:table-cell max-w-xs truncate font-mono text-xs">
                                                    {row.image_url.clone().unwrap_or_default()}
                                                </td>
                                                <td>
                                                    <div class="flex gap-1">
                                                        <button class="btn btn-ghost btn-xs" on:click=open_row>
                                                            "Open"
                                                        </button>
                                                        <button
                                                            class="btn btn-ghost btn-xs"
                                                            on:click=move |_| open_edit(edit_target.clone())
                                                        >
                                                            "Edit"
                                                        </button>
                                                        <button
                                                            class="btn btn-ghost btn-xs text-error"
                                                            disabled=move || mutating.get()
                                                            on:click=move |_| delete_one(delete_target.clone())
                                                        >
                                                            "Delete"
                                                        </button>
                                                    </div>
                                                </td>
                                            </tr>
                                        }
                                    }
                                />
                            </tbody>
                        </table>
                    </div>

                    <div class="flex items-center justify-end gap-2 p-4 border-t border-base-300">
                        <select class="select select-bordered select-sm" on:change=set_page_size>
                            {PAGE_SIZES
                                .iter()
                                .map(|&size| {
                                    view! {
                                        <option
                                            value=size.to_string()
                                            selected=move || state.query.with(|q| q.page_size == size)
                                        >
                                            {format!("{size} / page")}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                        <span class="text-sm opacity-70">
                            {move || format!("Page {}", state.query.with(|q| q.page + 1))}
                        </span>
                        <div class="join">
                            <button
                                class="join-item btn btn-sm"
                                disabled=move || state.query.with(|q| q.page == 0) || state.loading.get()
                                on:click=prev_page
                            >
                                "«"
                            </button>
                            <button
                                class="join-item btn btn-sm"
                                disabled=move || at_last_page() || state.loading.get()
                                on:click=next_page
                            >
                                "»"
                            </button>
                        </div>
                    </div>
                </div>
            </div>

            <AuthorDialog
                open=dialog_open
                initial=edit_row
                on_saved=Callback::new(move |_| state.reload())
            />
            <UploadDialog
                open=upload_open
                title="Upload Authors"
                source_label="Source"
                accept=".csv,text/csv,.json,.jsonl"
                upload=upload_fn(|source_id: String, form| async move {
                    author_api().upload(&source_id, form).await
                })
                on_uploaded=Callback::new(move |_| state.reload())
            />
        </div>
    }
}
