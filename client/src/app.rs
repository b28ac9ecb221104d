//! Root component and context wiring.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::pages::tickets::TicketsPage;
use crate::state::ticket_form::TicketFormState;
use crate::state::tickets::TicketsState;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(RwSignal::new(TicketsState::default()));
    provide_context(RwSignal::new(TicketFormState::default()));

    view! {
        <Title text="AI Multi-Agent Ticket Resolver" />
        <div class="app">
            <header class="app__header">
                <h1>"AI Multi-Agent Ticket Resolver"</h1>
                <p class="app__tagline">"Submit a ticket and let our AI agents handle it."</p>
            </header>
            <TicketsPage />
        </div>
    }
}
