//! Status line under the forms.

#[cfg(test)]
#[path = "message_bar_test.rs"]
mod message_bar_test;

use controller::Event;
use controller::message::Message;
use leptos::prelude::*;

use crate::state::gate::Gate;

/// CSS classes for the message container: `message <severity>` or hidden.
pub fn message_class(message: Option<&Message>) -> String {
    match message {
        Some(message) => format!("message {}", message.severity.as_str()),
        None => "message hidden".to_owned(),
    }
}

#[component]
pub fn MessageBar() -> impl IntoView {
    let gate = expect_context::<Gate>();
    let message = move || gate.with(|c| c.message().cloned());

    view! {
        <div id="message" class=move || message_class(message().as_ref()) role="status">
            <span class="message__text">{move || message().map(|m| m.text).unwrap_or_default()}</span>
            <button
                type="button"
                class="message__dismiss"
                aria-label="Dismiss"
                on:click=move |_| gate.dispatch(Event::DismissMessage)
            >
                "×"
            </button>
        </div>
    }
}
