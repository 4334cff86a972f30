use leptos::prelude::*;
use leptos::task::spawn_local;
use libris_shared::Source;

use super::dialog::SourceDialog;
use super::source_path;
use crate::api::SourceApi;
use crate::components::list_state::{Rows, use_list_state};
use crate::web::confirm::confirm;
use crate::web::router::use_router;

#[component]
pub fn SourcesPage() -> impl IntoView {
    let router = use_router();

    let state = use_list_state((), |_query: ()| async move {
        SourceApi::list().await.map(Rows::from)
    });

    let mutating = RwSignal::new(false);
    let dialog_open = RwSignal::new(false);
    let edit_row = RwSignal::new(Option::<Source>::None);

    let open_create = move |_| {
        edit_row.set(None);
        dialog_open.set(true);
    };

    let open_edit = move |row: Source| {
        edit_row.set(Some(row));
        dialog_open.set(true);
    };

    let delete_one = move |row: Source| {
        if !confirm(&format!("Delete Source \"{}\"?", row.name)) {
            return;
        }
        mutating.set(true);
        spawn_local(async move {
            match SourceApi::delete(&row.id_source).await {
                Ok(()) => state.reload(),
                Err(err) => state.error.set(Some(err.to_string())),
            }
            mutating.set(false);
        });
    };

    let row_count = move || state.rows.with(|r| r.len());
    let is_empty = move || row_count() == 0 && !state.loading.get();

    view! {
        <div class="max-w-5xl mx-auto space-y-4">
            <div class="breadcrumbs text-sm">
                <ul>
                    <li>"Sources"</li>
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
                            <h3 class="card-title">"Sources"</h3>
                            <p class="text-base-content/70 text-sm">
                                {move || format!("{} total", state.total.get())}
                            </p>
                        </div>
                        <div class="flex items-center gap-2">
                            <button
                                class="btn btn-ghost btn-sm"
                                disabled=move || state.loading.get()
                                on:click=move |_| state.reload()
                            >
                                "Refresh"
                            </button>
                            <button class="btn btn-primary btn-sm" on:click=open_create>
                                "Add Source"
                            </button>
                        </div>
                    </div>

                    <div class="overflow-x-auto w-full">
                        <table class="table table-zebra w-full">
                            <thead>
                                <tr>
                                    <th>"ID"</th>
                                    <th>"Name"</th>
                                    <th class="hidden md:table-cell">"Description"</th>
                                    <th>"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <Show when=is_empty>
                                    <tr>
                                        <td colspan="4" class="text-center py-8 text-base-content/50">
                                            "No sources configured. Add one to enable uploads."
                                        </td>
                                    </tr>
                                </Show>
                                <Show when=move || state.loading.get() && row_count() == 0>
                                    <tr>
                                        <td colspan="4" class="text-center py-8 text-base-content/50">
                                            <span class="loading loading-spinner loading-md"></span>
                                            " Loading..."
                                        </td>
                                    </tr>
                                </Show>
                                <For
                                    each=move || state.rows.get()
                                    key=|row| row.id_source.clone()
                                    children=move |row: Source| {
                                        let open_row = {
                                            let id = row.id_source.clone();
                                            move |_| router.navigate(&source_path(&id))
                                        };
                                        let edit_target = row.clone();
                                        let delete_target = row.clone();
                                        view! {
                                            <tr>
                                                <td class="font-mono text-xs opacity-60">{row.id_source.clone()}</td>
                                                <td class="font-medium">{row.name.clone()}</td>
                                                <td class="hidden md:table-cell max-w-xs truncate">
                                                    {row.description.clone().unwrap_or_default()}
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
                </div>
            </div>

            <SourceDialog
                open=dialog_open
                initial=edit_row
                on_saved=Callback::new(move |_| state.reload())
            />
        </div>
    }
}
