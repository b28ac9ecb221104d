//! Summary card for one ticket in the list.

use leptos::prelude::*;
use tickets::Ticket;

use crate::util::badge::{category_badge, priority_badge};

/// Card with title, priority and category badges, description and resolution.
/// Clicking anywhere on the card opens the detail modal.
#[component]
pub fn TicketCard(ticket: Ticket, on_open: Callback<i64>) -> impl IntoView {
    let id = ticket.id;
    let priority_class = priority_badge(&ticket.priority);
    let category_class = category_badge(&ticket.category);

    view! {
        <article
            class="ticket-card"
            tabindex="0"
            on:click=move |_| on_open.run(id)
            on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                if ev.key() == "Enter" {
                    on_open.run(id);
                }
            }
        >
            <div class="ticket-card__header">
                <h3 class="ticket-card__title">{ticket.title}</h3>
                <div class="ticket-card__badges">
                    <span class=priority_class>{ticket.priority.to_string()}</span>
                    <span class=category_class>{ticket.category.to_string()}</span>
                </div>
            </div>
            <p class="ticket-card__description">{ticket.description}</p>
            {ticket
                .resolution
                .map(|resolution| {
                    view! {
                        <div class="ticket-card__resolution">
                            <p class="ticket-card__resolution-label">"AI Response:"</p>
                            <p class="ticket-card__resolution-body">{resolution}</p>
                        </div>
                    }
                })}
        </article>
    }
}
