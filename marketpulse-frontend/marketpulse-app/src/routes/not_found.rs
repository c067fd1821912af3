use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

#[component]
pub fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }
    view! {
        <Title text="Page Not Found - MarketPulse" />
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center space-y-8 p-4">
            <div class="text-6xl font-bold text-gray-300">"404"</div>
            <p class="text-lg text-gray-400">
                "The page you are looking for has been delisted, or perhaps never traded at all."
            </p>
            <div class="flex flex-wrap justify-center gap-4">
                <A href="/" attr:class="search-btn px-8 py-3">
                    "Back to the dashboard"
                </A>
                <a href="javascript:history.back()" class="px-8 py-3 text-gray-300">
                    "Go Back"
                </a>
            </div>
        </div>
    }
}
