//! Ticket page: form, list and detail modal.
//!
//! SYSTEM CONTEXT
//! ==============
//! Root view of the app. It starts the list fetch on mount, owns the list
//! through `RwSignal<TicketsState>` and prepends tickets the form creates.

use leptos::prelude::*;
use tickets::Ticket;

use crate::components::error_message::ErrorMessage;
use crate::components::loader::Loader;
use crate::components::ticket_details::TicketDetails;
use crate::components::ticket_form::TicketForm;
use crate::components::ticket_list::TicketList;
use crate::net::api;
use crate::state::tickets::TicketsState;

#[component]
pub fn TicketsPage() -> impl IntoView {
    let tickets = expect_context::<RwSignal<TicketsState>>();

    tickets.update(TicketsState::begin_fetch);
    leptos::task::spawn_local(async move {
        let result = api::fetch_tickets().await;
        tickets.update(|s| s.finish_fetch(result));
    });

    let on_created = Callback::new(move |ticket: Ticket| tickets.update(|s| s.prepend(ticket)));
    let on_open = Callback::new(move |id: i64| tickets.update(|s| s.select(id)));
    let on_close = Callback::new(move |()| tickets.update(TicketsState::clear_selection));

    let items = Signal::derive(move || tickets.with(|s| s.items.clone()));
    let error = Signal::derive(move || tickets.with(|s| s.error.clone().unwrap_or_default()));
    let selected = move || tickets.with(|s| s.selected_ticket().cloned());

    view! {
        <main class="tickets-page">
            <TicketForm on_created=on_created />

            <div class="tickets-page__list">
                <Show when=move || tickets.with(|s| s.loading)>
                    <Loader />
                </Show>
                <Show when=move || tickets.with(|s| s.error.is_some())>
                    <ErrorMessage message=error />
                </Show>
                <Show when=move || tickets.with(TicketsState::show_list)>
                    <TicketList tickets=items on_open=on_open />
                </Show>
            </div>

            {move || selected().map(|ticket| view! { <TicketDetails ticket=ticket on_close=on_close /> })}
        </main>
    }
}
