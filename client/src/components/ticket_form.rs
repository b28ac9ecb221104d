//! Ticket submission form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads and writes `RwSignal<TicketFormState>` from context. A successful
//! creation is reported through `on_created` before the busy flag clears, so
//! the new ticket is already listed when the button re-enables.

use leptos::prelude::*;
use tickets::Ticket;

use crate::components::error_message::ErrorMessage;
use crate::net::api;
use crate::state::ticket_form::TicketFormState;

#[component]
pub fn TicketForm(on_created: Callback<Ticket>) -> impl IntoView {
    let form = expect_context::<RwSignal<TicketFormState>>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(new) = form.try_update(TicketFormState::begin_submit).flatten() else {
            return;
        };
        leptos::task::spawn_local(async move {
            match api::create_ticket(&new).await {
                Ok(ticket) => {
                    on_created.run(ticket);
                    form.update(TicketFormState::submit_succeeded);
                }
                Err(message) => form.update(|f| f.submit_failed(message)),
            }
        });
    };

    let error = Signal::derive(move || form.with(|f| f.error.clone().unwrap_or_default()));

    view! {
        <div class="ticket-form">
            <h2 class="ticket-form__heading">"Submit a New Ticket"</h2>
            <Show when=move || form.with(|f| f.error.is_some())>
                <ErrorMessage message=error />
            </Show>
            <form on:submit=on_submit>
                <label class="ticket-form__label" for="ticket-title">
                    "Title"
                </label>
                <input
                    id="ticket-title"
                    class="ticket-form__input"
                    type="text"
                    placeholder="e.g., Cannot login to my account"
                    prop:value=move || form.with(|f| f.title.clone())
                    on:input=move |ev| form.update(|f| f.title = event_target_value(&ev))
                />

                <label class="ticket-form__label" for="ticket-description">
                    "Description"
                </label>
                <textarea
                    id="ticket-description"
                    class="ticket-form__input"
                    rows="5"
                    placeholder="Provide a detailed description. Include any error messages you've seen."
                    prop:value=move || form.with(|f| f.description.clone())
                    on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                ></textarea>

                <button class="btn ticket-form__submit" type="submit" disabled=move || form.with(|f| f.busy)>
                    {move || form.with(TicketFormState::submit_label)}
                </button>
            </form>
        </div>
    }
}
