use crate::{
    api::search_stocks,
    components::search_command::{SearchCommand, TriggerStyle},
};
use leptos::prelude::*;
use leptos_meta::Title;
use std::sync::Arc;

#[component]
pub fn SearchPage() -> impl IntoView {
    let initial_stocks = Resource::new(|| (), |_| search_stocks(None));

    view! {
        <Title text="Search - MarketPulse" />
        <section class="flex flex-col items-start gap-4 py-10">
            <h1 class="text-3xl font-bold text-gray-100">"Search"</h1>
            <Suspense fallback=|| ()>
                {move || Suspend::new(async move {
                    let stocks = initial_stocks.await.unwrap_or_default();
                    // the header trigger already owns the keyboard shortcut
                    view! {
                        <SearchCommand
                            initial_stocks=Arc::new(stocks)
                            render_as=TriggerStyle::Button
                            label="Search stocks"
                            global_shortcut=false
                        />
                    }
                })}
            </Suspense>
        </section>
    }
}
