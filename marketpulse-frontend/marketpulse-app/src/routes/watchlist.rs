use leptos::prelude::*;
use leptos_meta::Title;

#[component]
pub fn WatchlistPage() -> impl IntoView {
    view! {
        <Title text="Watchlist - MarketPulse" />
        <section class="flex flex-col gap-4 py-10">
            <h1 class="text-3xl font-bold text-gray-100">"Watchlist"</h1>
            <p class="text-gray-400">"Stocks you follow show up here."</p>
        </section>
    }
}
