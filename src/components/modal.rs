//! Modal Component
//!
//! Backdrop plus dialog box, rendered only while `open` is true.

use leptos::prelude::*;

#[component]
pub fn Modal(
    open: ReadSignal<bool>,
    #[prop(into)] on_close: Callback<()>,
    title: &'static str,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop" on:click=move |_| on_close.run(())>
                <div
                    class="modal"
                    role="dialog"
                    aria-label=title
                    on:click=|ev| ev.stop_propagation()
                >
                    <span class="modal-title">{title}</span>
                    {children()}
                    <button type="button" class="close-btn" on:click=move |_| on_close.run(())>
                        "Close"
                    </button>
                </div>
            </div>
        </Show>
    }
}
