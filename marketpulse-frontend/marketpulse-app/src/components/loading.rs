use leptos::prelude::*;

#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <span class="spinner animate-spin text-gray-500" role="status">
            <span class="sr-only">"Loading"</span>
        </span>
    }
}
