use crate::components::nav_items::NavItems;
use icondata as i;
use leptos::prelude::*;
use leptos_icons::*;
use marketpulse_api_types::{StockWithWatchlistStatus, User};
use std::sync::Arc;

#[component]
pub fn UserDropdown(
    user: Option<User>,
    #[prop(into)] initial_stocks: Arc<Vec<StockWithWatchlistStatus>>,
) -> impl IntoView {
    let (expanded, set_expanded) = signal(false);
    let name = user
        .as_ref()
        .map(|user| user.name.clone())
        .unwrap_or_else(|| "Guest".to_string());
    let menu_name = name.clone();
    let email = user.as_ref().map(|user| user.email.clone());
    let avatar = user.as_ref().map(|user| user.initial().to_string());

    view! {
        <div class="relative">
            <button
                class="flex items-center gap-3 text-gray-400 hover:text-yellow-500"
                aria-label="Open user menu"
                on:click=move |_| set_expanded.update(|open| *open = !*open)
            >
                {match avatar {
                    Some(initial) => {
                        view! {
                            <span class="avatar h-8 w-8 rounded-full bg-yellow-500 text-yellow-900 text-sm font-bold flex items-center justify-center">
                                {initial}
                            </span>
                        }
                            .into_any()
                    }
                    None => view! { <Icon icon=i::BsPersonCircle width="2em" height="2em" /> }.into_any(),
                }}
                <span class="hidden md:block text-base font-medium text-gray-400">
                    {name}
                </span>
            </button>
            <Show when=move || expanded.get()>
                <div class="absolute right-0 mt-2 w-64 rounded-md panel shadow-lg text-gray-400 z-30">
                    <div class="px-4 py-3 border-b border-gray-600">
                        <div class="text-base font-medium">{menu_name.clone()}</div>
                        <div class="text-sm text-gray-500">{email.clone()}</div>
                    </div>
                    <nav class="sm:hidden border-b border-gray-600">
                        <NavItems initial_stocks=initial_stocks.clone() global_shortcut=false />
                    </nav>
                </div>
            </Show>
        </div>
    }
}
