use crate::{
    api::search_stocks,
    components::{loading::Spinner, modal::Modal},
    search::{
        lookup::run_lookup, Debouncer, KeyChord, PlatformTimer, SearchSession, SEARCH_DEBOUNCE,
    },
};
use icondata as i;
use leptos::{
    ev::{keydown, Event, KeyboardEvent, MouseEvent},
    prelude::*,
    task::spawn_local,
};
use leptos_icons::*;
use leptos_use::{use_event_listener, use_window};
use marketpulse_api_types::StockWithWatchlistStatus;
use std::sync::Arc;

/// How the dialog trigger is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TriggerStyle {
    #[default]
    Button,
    /// Plain text, used inside the navigation list.
    Text,
}

#[component]
pub fn SearchCommand(
    #[prop(into)] initial_stocks: Arc<Vec<StockWithWatchlistStatus>>,
    #[prop(optional)] render_as: TriggerStyle,
    #[prop(into, default = "Add stock".to_string())] label: String,
    /// Only one dialog on the page should answer Cmd/Ctrl+K.
    #[prop(default = true)]
    global_shortcut: bool,
) -> impl IntoView {
    let session = RwSignal::new(SearchSession::new(initial_stocks));
    let debouncer = StoredValue::new_local(Debouncer::new(
        PlatformTimer::default(),
        SEARCH_DEBOUNCE,
    ));

    if global_shortcut {
        let _ = use_event_listener(use_window(), keydown, move |event: KeyboardEvent| {
            if KeyChord::from(&event).is_search_toggle() {
                event.prevent_default();
                if session.try_update(SearchSession::toggle) == Some(false) {
                    debouncer.update_value(|d| d.cancel());
                }
            }
        });
    }

    let open = Memo::new(move |_| session.with(SearchSession::is_open));
    let loading = Memo::new(move |_| session.with(SearchSession::is_loading));
    let query = Memo::new(move |_| session.with(|s| s.query().to_string()));
    let displayed = Memo::new(move |_| session.with(|s| s.displayed().to_vec()));
    let heading = Memo::new(move |_| session.with(SearchSession::heading));
    let empty_message = Memo::new(move |_| session.with(SearchSession::empty_message));

    let show = move |_: MouseEvent| session.update(SearchSession::open);
    let close = move || {
        debouncer.update_value(|d| d.cancel());
        session.update(SearchSession::close);
    };
    let select = move || {
        debouncer.update_value(|d| d.cancel());
        session.update(SearchSession::select);
    };
    let on_input = move |ev: Event| {
        let value = event_target_value(&ev);
        session.update(|s| s.set_query(value));
        debouncer.update_value(|d| {
            d.call(move || spawn_local(run_lookup(session, |query| search_stocks(Some(query)))))
        });
    };

    let trigger = match render_as {
        TriggerStyle::Text => view! {
            <span
                class="cursor-pointer text-gray-300 hover:text-yellow-500 transition-colors"
                on:click=show
            >
                {label}
            </span>
        }
        .into_any(),
        TriggerStyle::Button => view! {
            <button class="search-btn" on:click=show>
                {label}
            </button>
        }
        .into_any(),
    };

    view! {
        {trigger}
        <Show when=move || open.get()>
            <Modal on_close=move |_| close() class="search-dialog">
                <div class="flex items-center gap-2 px-4 pt-4">
                    <input
                        type="text"
                        class="flex-1 border border-gray-300 rounded-md px-3 py-2"
                        placeholder="Search stocks..."
                        autofocus=true
                        prop:value=move || query.get()
                        on:input=on_input
                    />
                    <Show when=move || loading.get()>
                        <Spinner />
                    </Show>
                </div>
                <div class="px-4 py-2 max-h-[400px] overflow-y-auto">
                    {move || {
                        let stocks = displayed.get();
                        if stocks.is_empty() {
                            view! {
                                <div class="py-6 text-center text-gray-500">
                                    {empty_message.get()}
                                </div>
                            }
                                .into_any()
                        } else {
                            view! {
                                <div class="mt-3 space-y-2">
                                    <div class="text-sm text-gray-400 font-semibold mb-2">
                                        {heading.get()}
                                    </div>
                                    <ul class="space-y-2">
                                        {stocks
                                            .into_iter()
                                            .map(|stock| {
                                                view! {
                                                    <li class="rounded-md hover:bg-gray-100 transition-colors">
                                                        <a
                                                            href=stock.href()
                                                            class="flex items-center gap-3 px-3 py-2"
                                                            on:click=move |_| select()
                                                        >
                                                            <Icon icon=i::FaArrowTrendUpSolid />
                                                            <div class="flex-1">
                                                                <div class="font-medium text-gray-800">
                                                                    {stock.name.clone()}
                                                                </div>
                                                                <div class="text-sm text-gray-500">
                                                                    {stock.subtitle()}
                                                                </div>
                                                            </div>
                                                        </a>
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                </div>
                            }
                                .into_any()
                        }
                    }}
                </div>
            </Modal>
        </Show>
    }
}
