use crate::{
    components::search_command::{SearchCommand, TriggerStyle},
    nav::{is_active_route, NAV_ITEMS, SEARCH_HREF},
};
use leptos::prelude::*;
use leptos_router::hooks::use_location;
use marketpulse_api_types::StockWithWatchlistStatus;
use std::sync::Arc;

#[component]
pub fn NavItems(
    #[prop(into)] initial_stocks: Arc<Vec<StockWithWatchlistStatus>>,
    /// Forwarded to the search trigger so only one copy owns Cmd/Ctrl+K.
    #[prop(default = true)]
    global_shortcut: bool,
) -> impl IntoView {
    let pathname = use_location().pathname;

    view! {
        <ul class="flex flex-col sm:flex-row p-2 gap-3 sm:gap-10 font-medium">
            {NAV_ITEMS
                .iter()
                .map(|item| {
                    if item.href == SEARCH_HREF {
                        view! {
                            <li>
                                <button
                                    type="button"
                                    class="cursor-pointer hover:text-yellow-500 transition-colors text-gray-300"
                                >
                                    <SearchCommand
                                        render_as=TriggerStyle::Text
                                        label=item.label
                                        initial_stocks=initial_stocks.clone()
                                        global_shortcut=global_shortcut
                                    />
                                </button>
                            </li>
                        }
                            .into_any()
                    } else {
                        let href = item.href;
                        let class = move || {
                            if pathname.with(|path| is_active_route(path, href)) {
                                "hover:text-yellow-500 transition-colors text-gray-100"
                            } else {
                                "hover:text-yellow-500 transition-colors text-gray-300"
                            }
                        };
                        view! {
                            <li>
                                <a href=href class=class>
                                    {item.label}
                                </a>
                            </li>
                        }
                            .into_any()
                    }
                })
                .collect_view()}
        </ul>
    }
}
