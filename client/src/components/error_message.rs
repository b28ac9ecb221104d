use leptos::prelude::*;

/// Inline error banner.
#[component]
pub fn ErrorMessage(#[prop(into)] message: Signal<String>) -> impl IntoView {
    view! {
        <div class="error-message" role="alert">
            {move || message.get()}
        </div>
    }
}
