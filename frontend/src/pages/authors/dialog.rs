//! Author create/edit dialog.

use leptos::prelude::*;
use leptos::task::spawn_local;
use libris_shared::{Author, AuthorCreateRequest};

use crate::api::author_api;
use crate::components::form::{trimmed, trimmed_opt, validate_required};

/// Form state as `RwSignal` fields, so it is `Copy` and moves freely
/// into the view closures.
#[derive(Clone, Copy)]
struct AuthorForm {
    name: RwSignal<String>,
    description: RwSignal<String>,
    image_url: RwSignal<String>,
    /// Book ids carried through untouched; book management has its own
    /// surface on the backend.
    books: RwSignal<Vec<String>>,
    name_error: RwSignal<Option<&'static str>>,
}

impl AuthorForm {
    fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            image_url: RwSignal::new(String::new()),
            books: RwSignal::new(Vec::new()),
            name_error: RwSignal::new(None),
        }
    }

    /// Reset from an existing record (edit) or to defaults (create).
    fn reset(&self, initial: Option<&Author>) {
        self.name
            .set(initial.map(|a| a.name.clone()).unwrap_or_default());
        self.description.set(
            initial
                .and_then(|a| a.description.clone())
                .unwrap_or_default(),
        );
        self.image_url.set(
            initial
                .and_then(|a| a.image_url.clone())
                .unwrap_or_default(),
        );
        self.books.set(
            initial
                .map(|a| a.books.iter().map(|b| b.id_book.clone()).collect())
                .unwrap_or_default(),
        );
        self.name_error.set(None);
    }

    fn validate(&self) -> bool {
        let error = self.name.with_untracked(|n| validate_required(n));
        self.name_error.set(error);
        error.is_none()
    }

    fn to_request(&self) -> AuthorCreateRequest {
        AuthorCreateRequest {
            name: self.name.with_untracked(|n| trimmed(n)),
            description: self.description.with_untracked(|d| trimmed_opt(d)),
            image_url: self.image_url.with_untracked(|u| trimmed_opt(u)),
            books: self.books.get_untracked(),
        }
    }
}

#[component]
pub fn AuthorDialog(
    open: RwSignal<bool>,
    /// Existing record to edit; `None` creates.
    initial: RwSignal<Option<Author>>,
    #[prop(into)] on_saved: Callback<()>,
) -> impl IntoView {
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();
    let form = AuthorForm::new();
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
        let editing = initial.get_untracked().map(|a| a.id_author);
        spawn_local(async move {
            let result = match editing.as_deref() {
                Some(id) => author_api().update(id, &payload).await,
                None => author_api().create(&payload).await,
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
                    {move || if initial.get().is_some() { "Edit Author" } else { "Add Author" }}
                </h3>

                <form on:submit=on_submit class="space-y-4 mt-4">
                    <Show when=move || error.get().is_some()>
                        <div role="alert" class="alert alert-error text-sm py-2">
                            <span>{move || error.get().unwrap_or_default()}</span>
                        </div>
                    </Show>

                    <div class="form-control">
                        <label for="author-name" class="label">
                            <span class="label-text">"Name"</span>
                        </label>
                        <input
                            id="author-name"
                            type="text"
                            placeholder="J. R. R. Tolkien"
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
                        <label for="author-description" class="label">
                            <span class="label-text">"Description"</span>
                        </label>
                        <textarea
                            id="author-description"
                            placeholder="Short biography"
                            on:input=move |ev| form.description.set(event_target_value(&ev))
                            prop:value=form.description
                            class="textarea textarea-bordered w-full"
                        ></textarea>
                    </div>

                    <div class="form-control">
                        <label for="author-image-url" class="label">
                            <span class="label-text">"Image URL"</span>
                        </label>
                        <input
                            id="author-image-url"
                            type="text"
                            placeholder="https://…"
                            on:input=move |ev| form.image_url.set(event_target_value(&ev))
                            prop:value=form.image_url
                            class="input input-bordered w-full"
                        />
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
    fn trims_fields_and_keeps_book_ids() {
        let form = AuthorForm::new();
        form.name.set("  Tolkien ".into());
        form.description.set("   ".into());
        form.image_url.set(" https://covers/tolkien.png ".into());
        form.books.set(vec!["b1".into()]);

        assert!(form.validate());
        let request = form.to_request();
        assert_eq!(request.name, "Tolkien");
        assert_eq!(request.description, None);
        assert_eq!(request.image_url, Some("https://covers/tolkien.png".into()));
        assert_eq!(request.books, vec!["b1".to_string()]);
    }

    #[test]
    fn blank_name_blocks_submission() {
        let form = AuthorForm::new();
        form.name.set("   ".into());
        assert!(!form.validate());
        assert_eq!(form.name_error.get_untracked(), Some(NAME_REQUIRED));
    }
}
