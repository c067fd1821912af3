use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_params_map;

#[component]
pub fn StockDetails() -> impl IntoView {
    let params = use_params_map();
    let symbol = Memo::new(move |_| {
        params
            .with(|params| params.get("symbol"))
            .map(|symbol| symbol.to_uppercase())
            .unwrap_or_default()
    });

    view! {
        <Title text=move || format!("{} - MarketPulse", symbol.get()) />
        <section class="flex flex-col gap-2 py-10">
            <h1 class="text-3xl font-bold text-gray-100">{move || symbol.get()}</h1>
            <a href="/watchlist" class="text-yellow-500 hover:underline">
                "Back to watchlist"
            </a>
        </section>
    }
}
