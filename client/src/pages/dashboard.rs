//! Dashboard shown while a session exists.

use controller::Event;
use leptos::prelude::*;

use crate::state::gate::Gate;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let gate = expect_context::<Gate>();
    let email = move || gate.with(|c| c.dashboard_email().map(str::to_owned).unwrap_or_default());

    view! {
        <section id="dashboard" class="dashboard">
            <h2>"Welcome!"</h2>
            <p class="dashboard__user">
                "Logged in as "
                <span id="userEmail">{email}</span>
            </p>
            <button
                type="button"
                id="logoutBtn"
                class="btn btn--secondary"
                on:click=move |_| gate.dispatch(Event::Logout)
            >
                "Logout"
            </button>
        </section>
    }
}
