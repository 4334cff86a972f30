//! Source create/edit dialog.

use leptos::prelude::*;
use leptos::task::spawn_local;
use libris_shared::{Source, SourceCreateRequest};

use crate::api::SourceApi;
use crate::components::form::{trimmed, trimmed_opt, validate_required};

#[derive(Clone, Copy)]
struct SourceForm {
    name: RwSignal<String>,
    description: RwSignal<String>,
    name_error: RwSignal<Option<&'static str>>,
}

impl SourceForm {
    fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            name_error: RwSignal::new(None),
        }
    }

    fn reset(&self, initial: Option<&Source>) {
        self.name
            .set(initial.map(|s| s.name.clone()).unwrap_or_default());
        self.description.set(
            initial
                .and_then(|s| s.description.clone())
                .unwrap_or_default(),
        );
        self.name_error.set(None);
    }

    fn validate(&self) -> bool {
        let error = self.name.with_untracked(|n| validate_required(n));
        self.name_error.set(error);
        error.is_none()
    }

    fn to_request(&self) -> SourceCreateRequest {
        SourceCreateRequest {
            name: self.name.with_untracked(|n| trimmed(n)),
            description: self.description.with_untracked(|d| trimmed_opt(d)),
        }
    }
}

#[component]
pub fn SourceDialog(
    open: RwSignal<bool>,
    initial: RwSignal<Option<Source>>,
    #[prop(into)] on_saved: Callback<()>,
) -> impl IntoView {
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();
    let form = SourceForm::new();
    let busy = RwSignal::new(false);
    let error = RwSignal::new(Option::<String>::None);

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

        if is_open {
            form.reset(initial.get_untracked().as_ref());
            busy.set(false);
            error.set(None);
        }
    });

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if !form.validate() {
            return;
        }

        busy.set(true);
        error.set(None);

        let payload = form.to_request();
        let editing = initial.get_untracked().map(|s| s.id_source);
        spawn_local(async move {
            let result = match editing.as_deref() {
                Some(id) => SourceApi::update(id, &payload).await,
                None => SourceApi::create(&payload).await,
            };
            match result {
                Ok(_) => {
                    open.set(false);
                    on_saved.run(());
                }
                Err(err) => error.set(Some(err.to_string())),
            }
            busy.set(false);
        });
    };

    view! {
        <dialog class="modal" node_ref=dialog_ref on:close=move |_| open.set(false)>
            <div class="modal-box">
                <h3 class="font-bold text-lg">
                    {move || if initial.get().is_some() { "Edit Source" } else { "Add Source" }}
                </h3>

                <form on:submit=on_submit class="space-y-4 mt-4">
                    <Show when=move || error.get().is_some()>
                        <div role="alert" class="alert alert-error text-sm py-2">
                            <span>{move || error.get().unwrap_or_default()}</span>
                        </div>
                    </Show>

                    <div class="form-control">
                        <label for="source-name" class="label">
                            <span class="label-text">"Name"</span>
                        </label>
                        <input
                            id="source-name"
                            type="text"
                            placeholder="openlibrary"
                            on:input=move |ev| form.name.set(event_target_value(&ev))
                            prop:value=form.name
                            class="input input-bordered w-full"
                            class:input-error=move || form.name_error.get().is_some()
                        />
                        <Show when=move || form.name_error.get().is_some()>
                            <label class="label">
                                <span class="label-text-alt text-error">
                                    {move || form.name_error.get().unwrap_or_default()}
                                </span>
                            </label>
                        </Show>
                    </div>

                    <div class="form-control">
                        <label for="source-description" class="label">
                            <span class="label-text">"Description"</span>
                        </label>
                        <textarea
                            id="source-description"
                            placeholder="What this source feeds into the catalog"
                            on:input=move |ev| form.description.set(event_target_value(&ev))
                            prop:value=form.description
                            class="textarea textarea-bordered w-full"
                        ></textarea>
                    </div>

                    <div class="modal-action">
                        <button type="button" class="btn btn-ghost" on:click=move |_| open.set(false)>
                            "Cancel"
                        </button>
                        <button type="submit" disabled=move || busy.get() class="btn btn-primary">
                            {move || {
                                if busy.get() {
                                    view! { <span class="loading loading-spinner"></span> "Saving..." }
                                        .into_any()
                                } else {
                                    "Save".into_any()
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
