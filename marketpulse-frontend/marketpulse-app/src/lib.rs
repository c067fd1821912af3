pub mod api;
pub mod components;
pub mod error;
pub mod nav;
pub mod routes;
pub mod search;

use crate::{
    components::header::Header,
    routes::{
        home_page::HomePage, not_found::NotFound, search_page::SearchPage,
        stock_details::StockDetails, watchlist::WatchlistPage,
    },
};
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

/// Document the server renders around the app.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body class="bg-gray-900 text-gray-300 min-h-screen">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/marketpulse.css" />
        <Title text="MarketPulse" />
        <Router>
            <Header />
            <main class="container">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/search") view=SearchPage />
                    <Route path=path!("/watchlist") view=WatchlistPage />
                    <Route path=path!("/stocks/:symbol") view=StockDetails />
                </Routes>
            </main>
        </Router>
    }
}
