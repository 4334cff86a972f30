//! Genre create/edit dialog. A genre is just a named record, so the form
//! is a single required field.

use leptos::prelude::*;
use leptos::task::spawn_local;
use libris_shared::{Genre, GenreCreateRequest};

use crate::api::genre_api;
use crate::components::form::{trimmed, validate_required};

#[derive(Clone, Copy)]
struct GenreForm {
    name: RwSignal<String>,
    name_error: RwSignal<Option<&'static str>>,
}

impl GenreForm {
    fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            name_error: RwSignal::new(None),
        }
    }

    fn reset(&self, initial: Option<&Genre>) {
        self.name
            .set(initial.map(|g| g.name.clone()).unwrap_or_default());
        self.name_error.set(None);
    }

    fn validate(&self) -> bool {
        let error = self.name.with_untracked(|n| validate_required(n));
        self.name_error.set(error);
        error.is_none()
    }

    fn to_request(&self) -> GenreCreateRequest {
        GenreCreateRequest {
            name: self.name.with_untracked(|n| trimmed(n)),
        }
    }
}

#[component]
pub fn GenreDialog(
    open: RwSignal<bool>,
    initial: RwSignal<Option<Genre>>,
    #[prop(into)] on_saved: Callback<()>,
) -> impl IntoView {
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();
    let form = GenreForm::new();
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
        let editing = initial.get_untracked().map(|g| g.id_genre);
        spawn_local(async move {
            let result = match editing.as_deref() {
                Some(id) => genre_api().update(id, &payload).await,
                None => genre_api().create(&payload).await,
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
                    {move || if initial.get().is_some() { "Edit Genre" } else { "Add Genre" }}
                </h3>

                <form on:submit=on_submit class="space-y-4 mt-4">
                    <Show when=move || error.get().is_some()>
                        <div role="alert" class="alert alert-error text-sm py-2">
                            <span>{move || error.get().unwrap_or_default()}</span>
                        </div>
                    </Show>

                    <div class="form-control">
                        <label for="genre-name" class="label">
                            <span class="label-text">"Name"</span>
                        </label>
                        <input
                            id="genre-name"
                            type="text"
                            placeholder="Fantasy"
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::form::NAME_REQUIRED;

    #[test]
    fn whitespace_name_blocks_and_sets_field_error() {
        let form = GenreForm::new();
        form.name.set("  ".into());
        assert!(!form.validate());
        assert_eq!(form.name_error.get_untracked(), Some(NAME_REQUIRED));
    }

    #[test]
    fn valid_name_is_trimmed_into_the_payload() {
        let form = GenreForm::new();
        form.name.set(" Fantasy ".into());
        assert!(form.validate());
        assert_eq!(form.to_request().name, "Fantasy");
    }
}
