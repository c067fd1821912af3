use crate::{
    api::{get_current_user, search_stocks},
    components::{nav_items::NavItems, user_dropdown::UserDropdown},
};
use leptos::prelude::*;
use std::sync::Arc;

#[component]
pub fn Header() -> impl IntoView {
    // one popular list per render, shared by every search trigger below
    let initial_stocks = Resource::new(|| (), |_| search_stocks(None));
    let user = Resource::new(|| (), |_| get_current_user());

    view! {
        <header class="sticky top-0 header">
            <div class="container header-wrapper">
                <a href="/" class="flex items-center gap-2 cursor-pointer">
                    <img
                        src="/assets/icons/logo.svg"
                        alt="MarketPulse logo"
                        width="40"
                        height="40"
                        class="h-10 w-auto"
                    />
                    <span class="text-2xl font-bold text-white">"MarketPulse"</span>
                </a>
                <Suspense fallback=|| {
                    view! { <span class="text-gray-500">"Loading"</span> }
                }>
                    {move || Suspend::new(async move {
                        let stocks = initial_stocks
                            .await
                            .inspect_err(|e| log::error!("unable to load popular stocks: {e}"))
                            .unwrap_or_default();
                        let stocks = Arc::new(stocks);
                        let user = user
                            .await
                            .inspect_err(|e| log::error!("unable to load the current user: {e}"))
                            .ok()
                            .flatten();
                        view! {
                            <nav class="hidden sm:block">
                                <NavItems initial_stocks=stocks.clone() />
                            </nav>
                            <UserDropdown user initial_stocks=stocks />
                        }
                    })}
                </Suspense>
            </div>
        </header>
    }
}
