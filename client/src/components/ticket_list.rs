//! Submitted-ticket list.

use leptos::prelude::*;
use tickets::Ticket;

use crate::components::ticket_card::TicketCard;

/// Heading plus one card per ticket, in the order given.
#[component]
pub fn TicketList(#[prop(into)] tickets: Signal<Vec<Ticket>>, on_open: Callback<i64>) -> impl IntoView {
    view! {
        <section class="ticket-list">
            <h2 class="ticket-list__heading">"Submitted Tickets"</h2>
            <Show
                when=move || tickets.with(|items| !items.is_empty())
                fallback=|| view! { <p class="ticket-list__empty">"No tickets submitted yet."</p> }
            >
                <For
                    each=move || tickets.get()
                    key=|ticket| ticket.id
                    children=move |ticket| view! { <TicketCard ticket=ticket on_open=on_open /> }
                />
            </Show>
        </section>
    }
}
