//! Modal with the full details of one ticket.

use leptos::prelude::*;
use tickets::Ticket;

use crate::util::badge::{category_badge, priority_badge, status_badge};
use crate::util::markdown::render_markdown_html;

/// Detail modal. Closes on the close buttons, a backdrop click, or Escape.
#[component]
pub fn TicketDetails(ticket: Ticket, on_close: Callback<()>) -> impl IntoView {
    let modal_ref = NodeRef::<leptos::html::Div>::new();
    #[cfg(feature = "csr")]
    Effect::new(move || {
        if let Some(modal) = modal_ref.get() {
            let _ = modal.focus();
        }
    });

    let on_backdrop = move |_| on_close.run(());
    let on_close_click = move |_| on_close.run(());
    let on_keydown = Callback::new(move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    });

    let category_class = category_badge(&ticket.category);
    let priority_class = priority_badge(&ticket.priority);
    let status_class = status_badge(&ticket.status);
    let status_label = ticket.status.label();
    let resolution_html = ticket.resolution.as_deref().map(render_markdown_html);

    view! {
        <div class="ticket-details__backdrop" on:click=on_backdrop>
            <div
                class="ticket-details"
                role="dialog"
                aria-modal="true"
                tabindex="0"
                node_ref=modal_ref
                on:click=move |ev| ev.stop_propagation()
                on:keydown=move |ev| on_keydown.run(ev)
            >
                <div class="ticket-details__header">
                    <h2>{ticket.title}</h2>
                    <button class="ticket-details__close" on:click=on_close_click title="Close">
                        "✕"
                    </button>
                </div>

                <div class="ticket-details__body">
                    <div>
                        <h4>"Description"</h4>
                        <p class="ticket-details__description">{ticket.description}</p>
                    </div>

                    <div class="ticket-details__badges">
                        <span class=category_class>{ticket.category.to_string()}</span>
                        <span class=priority_class>{ticket.priority.to_string()}</span>
                        <span class=status_class>{status_label}</span>
                    </div>

                    <div class="ticket-details__resolution">
                        <h4>"AI Agent Resolution"</h4>
                        {match resolution_html {
                            Some(html) => {
                                view! { <div class="ticket-details__markdown" inner_html=html></div> }.into_any()
                            }
                            None => {
                                view! { <p class="ticket-details__pending">"No resolution yet."</p> }.into_any()
                            }
                        }}
                    </div>
                </div>

                <div class="ticket-details__footer">
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "Close"
                    </button>
                </div>
            </div>
        </div>
    }
}
