use leptos::prelude::*;
use leptos_meta::Title;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Dashboard - MarketPulse" />
        <section class="flex flex-col gap-4 py-10">
            <h1 class="text-3xl font-bold text-gray-100">"Dashboard"</h1>
            <p class="text-gray-400">
                "Search any listed stock with " <kbd class="kbd">"⌘K"</kbd> " or "
                <kbd class="kbd">"Ctrl K"</kbd> "."
            </p>
        </section>
    }
}
