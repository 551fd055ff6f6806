//! Frame Component
//!
//! Bordered, shadowed box around the main content.

use leptos::prelude::*;

#[component]
pub fn Frame(children: Children) -> impl IntoView {
    view! {
        <div class="frame-wrapper">
            <span class="frame">{children()}</span>
        </div>
    }
}
