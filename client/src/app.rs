//! Application shell: session restore, context, and view switch.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::message_bar::MessageBar;
use crate::pages::{auth::AuthPage, dashboard::DashboardPage};
use crate::state::gate::Gate;

/// Root application component.
///
/// Restores the persisted session before the first render, provides the
/// [`Gate`] context, and shows either the auth view or the dashboard.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let gate = Gate::new();
    gate.start();
    provide_context(gate);

    let logged_in = move || gate.with(|c| c.dashboard_email().is_some());

    view! {
        <Title text="Bonsai Auth"/>

        <main class="container">
            <h1 class="container__title">"Bonsai Auth"</h1>
            <Show when=logged_in fallback=|| view! { <AuthPage/> }>
                <DashboardPage/>
            </Show>
            <MessageBar/>
        </main>
    }
}
