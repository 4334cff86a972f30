//! Generic catalog-upload dialog.
//!
//! Parameterized over the dialog texts, the accepted extensions and the
//! actual upload call, so the author and genre pages share one widget.
//! The action stays disabled until both an ingestion source and a file
//! are chosen; a failed upload keeps the dialog open with the error
//! inline.

use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use libris_shared::{Source, UPLOAD_FIELD_FILE};

use crate::api::{ApiError, SourceApi};

/// Injected upload operation: `(source id, form body) -> server result`.
pub type UploadFn =
    Rc<dyn Fn(String, web_sys::FormData) -> Pin<Box<dyn Future<Output = Result<String, ApiError>>>>>;

/// Adapt a plain async closure into the injectable [`UploadFn`].
pub fn upload_fn<F, Fut>(f: F) -> UploadFn
where
    F: Fn(String, web_sys::FormData) -> Fut + 'static,
    Fut: Future<Output = Result<String, ApiError>> + 'static,
{
    Rc::new(move |source_id, form| Box::pin(f(source_id, form)))
}

#[component]
pub fn UploadDialog(
    open: RwSignal<bool>,
    #[prop(into)] title: String,
    #[prop(into)] source_label: String,
    /// Accepted file extensions, e.g. ".csv,.json,.jsonl"
    #[prop(into)]
    accept: String,
    upload: UploadFn,
    #[prop(into)] on_uploaded: Callback<()>,
) -> impl IntoView {
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();

    let sources = RwSignal::new(Vec::<Source>::new());
    let loading_sources = RwSignal::new(false);
    let selected = RwSignal::new(Option::<Source>::None);
    let file = RwSignal::new_local(Option::<web_sys::File>::None);
    let busy = RwSignal::new(false);
    let error = RwSignal::new(Option::<String>::None);

    // Reset and fetch the source list every time the dialog opens.
    Effect::new(move |_| {
        let is_open = open.get();
        if let Some(dialog) = dialog_ref.get() {
            if is_open {
                if !dialog.open() {
                    let _ = dialog.show_modal();
                }
            } else if dialog.open() {
                dialog.close();
            }
        }

        if !is_open {
            return;
        }

        selected.set(None);
        file.set(None);
        error.set(None);
        busy.set(false);

        loading_sources.set(true);
        spawn_local(async move {
            match SourceApi::list().await {
                Ok(list) => sources.set(list),
                Err(err) => error.set(Some(err.to_string())),
            }
            loading_sources.set(false);
        });
    });

    let on_pick_file = move |ev: leptos::ev::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        file.set(input.files().and_then(|list| list.get(0)));
    };

    let on_select_source = move |ev: leptos::ev::Event| {
        let id = event_target_value(&ev);
        let source = sources
            .get_untracked()
            .iter()
            .find(|s| s.id_source == id)
            .cloned();
        selected.set(source);
    };

    let submit = {
        let upload = upload.clone();
        move |ev: leptos::web_sys::SubmitEvent| {
            ev.prevent_default();
            let (Some(source), Some(picked)) = (selected.get_untracked(), file.get_untracked())
            else {
                error.set(Some("Select a source and choose a file first.".to_string()));
                return;
            };

            let Ok(form) = web_sys::FormData::new() else {
                error.set(Some("Could not build the upload request.".to_string()));
                return;
            };
            if form.append_with_blob(UPLOAD_FIELD_FILE, &picked).is_err() {
                error.set(Some("Could not attach the chosen file.".to_string()));
                return;
            }

            busy.set(true);
            error.set(None);

            let upload = upload.clone();
            spawn_local(async move {
                match upload(source.id_source.clone(), form).await {
                    Ok(_) => {
                        open.set(false);
                        on_uploaded.run(());
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
                busy.set(false);
            });
        }
    };

    let action_disabled = move || {
        busy.get() || selected.with(|s| s.is_none()) || file.with(|f| f.is_none())
    };

    view! {
        <dialog class="modal" node_ref=dialog_ref on:close=move |_| open.set(false)>
            <div class="modal-box">
                <h3 class="font-bold text-lg">{title}</h3>

                <form on:submit=submit class="space-y-4 mt-4">
                    <Show when=move || error.get().is_some()>
                        <div role="alert" class="alert alert-error text-sm py-2">
                            <span>{move || error.get().unwrap_or_default()}</span>
                        </div>
                    </Show>

                    <div class="form-control">
                        <label class="label" for="upload-source">
                            <span class="label-text">{source_label.clone()}</span>
                        </label>
                        <select
                            id="upload-source"
                            class="select select-bordered w-full"
                            disabled=move || loading_sources.get()
                            on:change=on_select_source
                        >
                            <option value="" selected=move || selected.with(|s| s.is_none())>
                                {move || {
                                    if loading_sources.get() { "Loading sources..." } else { "Select a source" }
                                }}
                            </option>
                            <For
                                each=move || sources.get()
                                key=|s| s.id_source.clone()
                                children=move |source| {
                                    let id = source.id_source.clone();
                                    let is_selected = {
                                        let id = id.clone();
                                        move || selected.with(|s| {
                                            s.as_ref().is_some_and(|sel| sel.id_source == id)
                                        })
                                    };
                                    view! {
                                        <option value=id selected=is_selected>{source.name}</option>
                                    }
                                }
                            />
                        </select>
                    </div>

                    <div class="form-control">
                        <label class="label" for="upload-file">
                            <span class="label-text">"File"</span>
                        </label>
                        <input
                            id="upload-file"
                            type="file"
                            accept=accept
                            class="file-input file-input-bordered w-full"
                            on:change=on_pick_file
                        />
                        <label class="label">
                            <span class="label-text-alt text-base-content/50">
                                {move || {
                                    file.with(|f| {
                                        f.as_ref().map(|f| f.name()).unwrap_or_else(|| "No file chosen".to_string())
                                    })
                                }}
                            </span>
                        </label>
                    </div>

                    <div class="modal-action">
                        <button type="button" class="btn btn-ghost" on:click=move |_| open.set(false)>
                            "Cancel"
                        </button>
                        <button type="submit" disabled=action_disabled class="btn btn-primary">
                            {move || {
                                if busy.get() {
                                    view! { <span class="loading loading-spinner"></span> "Uploading..." }.into_any()
                                } else {
                                    "Upload".into_any()
                                }
                            }}
                        </button>
                    </div>
                </form>
            </div>
            <form method="dialog" class="modal-backdrop">
                <button>"close"</button>
            </form>
        </dialog>
    }
}
