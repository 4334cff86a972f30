use leptos::prelude::*;

use crate::routes;
use crate::web::router::use_router;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let router = use_router();

    view! {
        <div class="flex items-center justify-center min-h-[60vh]">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-error">"404"</h1>
                <p class="text-xl mt-4">"Page not found"</p>
                <button
                    class="btn btn-primary mt-6"
                    on:click=move |_| router.navigate(routes::root_redirect())
                >
                    "Take me back"
                </button>
            </div>
        </div>
    }
}
