//! Spinner shown while the ticket list loads.

use leptos::prelude::*;

#[component]
pub fn Loader(#[prop(default = "Loading tickets...")] label: &'static str) -> impl IntoView {
    view! {
        <div class="loader" role="status">
            <div class="loader__spinner" aria-hidden="true"></div>
            <span class="loader__label">{label}</span>
        </div>
    }
}
