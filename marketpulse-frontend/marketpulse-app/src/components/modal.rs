use crate::search::KeyChord;
use icondata as i;
use leptos::{ev::keydown, ev::KeyboardEvent, portal::Portal, prelude::*};
use leptos_icons::*;
use leptos_use::{use_event_listener, use_window};

#[component]
pub fn Modal(
    children: ChildrenFn,
    /// Runs on Escape, on a backdrop click and on the close button.
    #[prop(into)]
    on_close: Callback<()>,
    #[prop(into, optional)] class: String,
) -> impl IntoView {
    let _ = use_event_listener(use_window(), keydown, move |event: KeyboardEvent| {
        if KeyChord::from(&event).is_escape() {
            on_close.run(());
        }
    });
    let panel_class = format!(
        "flex flex-col mx-auto max-w-2xl w-[95%] sm:w-[560px] panel rounded-2xl shadow-xl p-2 z-50 {class}"
    );
    view! {
        <Portal>
            <div
                class="fixed inset-0 z-40 bg-black/60 flex items-start sm:items-center justify-center p-6"
                on:click=move |_| on_close.run(())
            >
                <div
                    class=panel_class.clone()
                    role="dialog"
                    aria-modal="true"
                    on:click=move |e| {
                        e.stop_propagation();
                    }
                >
                    <div class="flex justify-end">
                        <button
                            class="p-2 rounded-lg text-gray-500 hover:text-gray-800 transition-colors"
                            on:click=move |_| on_close.run(())
                            aria-label="Close dialog"
                        >
                            <Icon icon=i::CgClose width="1.25em" height="1.25em" />
                        </button>
                    </div>

                    <div class="relative">{children()}</div>
                </div>
            </div>
        </Portal>
    }
    .into_any()
}
