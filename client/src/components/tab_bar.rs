//! Login / Register tab buttons.

use controller::Event;
use controller::tab::Tab;
use leptos::prelude::*;

use crate::state::gate::Gate;

#[component]
pub fn TabBar() -> impl IntoView {
    let gate = expect_context::<Gate>();

    view! {
        <div class="tabs" role="tablist">
            {Tab::ALL
                .into_iter()
                .map(|tab| {
                    let active = move || gate.with(|c| c.active_tab() == Some(tab));
                    view! {
                        <button
                            type="button"
                            class="tab-btn"
                            class:active=active
                            role="tab"
                            aria-selected=move || active().to_string()
                            data-tab=tab.id()
                            on:click=move |_| gate.dispatch(Event::SelectTab(tab))
                        >
                            {tab.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
