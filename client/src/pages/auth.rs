//! Auth view: tab bar plus the login and registration forms.
//!
//! Both forms stay mounted; the inactive one is hidden with CSS so field
//! values and focus targets survive tab switches.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use controller::form::Field;
use controller::tab::Tab;
use controller::{Action, Controller, Event};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::components::tab_bar::TabBar;
use crate::state::gate::Gate;

/// Current value of `field` in the controller's forms.
pub fn field_value(ctl: &Controller, field: Field) -> String {
    let login = ctl.login_form();
    let register = ctl.register_form();
    match field {
        Field::LoginEmail => login.email.clone(),
        Field::LoginPassword => login.password.clone(),
        Field::LoginOtp => login.otp.clone(),
        Field::RegisterEmail => register.email.clone(),
        Field::RegisterPassword => register.password.clone(),
        Field::RegisterConfirm => register.confirm_password.clone(),
    }
}

/// Button caption, swapped while its action is in flight.
pub fn button_label(busy: bool, idle: &'static str, loading: &'static str) -> &'static str {
    if busy { loading } else { idle }
}

#[component]
fn FormInput(field: Field, kind: &'static str, placeholder: &'static str) -> impl IntoView {
    let gate = expect_context::<Gate>();
    view! {
        <input
            id={field.dom_id()}
            class="form-input"
            type=kind
            placeholder=placeholder
            prop:value=move || gate.with(|c| field_value(c, field))
            on:input=move |ev| gate.dispatch(Event::Edit { field, value: event_target_value(&ev) })
        />
    }
}

#[component]
fn SubmitButton(action: Action, idle: &'static str, loading: &'static str) -> impl IntoView {
    let gate = expect_context::<Gate>();
    let busy = move || gate.with(|c| c.is_busy(action));
    view! {
        <button type="submit" class="btn btn--primary" class:loading=busy disabled=busy>
            {move || button_label(busy(), idle, loading)}
        </button>
    }
}

#[component]
pub fn AuthPage() -> impl IntoView {
    let gate = expect_context::<Gate>();
    let is_active = move |tab: Tab| move || gate.with(|c| c.active_tab() == Some(tab));
    let otp_busy = move || gate.with(|c| c.is_busy(Action::RequestOtp));

    let on_login = move |ev: SubmitEvent| {
        ev.prevent_default();
        gate.dispatch(Event::SubmitLogin);
    };
    let on_register = move |ev: SubmitEvent| {
        ev.prevent_default();
        gate.dispatch(Event::SubmitRegister);
    };

    view! {
        <section class="auth">
            <TabBar/>

            <div id={Tab::Login.id()} class="tab-content" class:active={is_active(Tab::Login)}>
                <form id="loginForm" on:submit=on_login>
                    <FormInput field=Field::LoginEmail kind="email" placeholder="Email"/>
                    <FormInput field=Field::LoginPassword kind="password" placeholder="Password"/>
                    <div class="otp-row">
                        <FormInput field=Field::LoginOtp kind="text" placeholder="OTP code"/>
                        <button
                            type="button"
                            id="requestOtpBtn"
                            class="btn btn--secondary"
                            class:loading=otp_busy
                            disabled=otp_busy
                            on:click=move |_| gate.dispatch(Event::RequestOtp)
                        >
                            {move || button_label(otp_busy(), "Request OTP", "Sending...")}
                        </button>
                    </div>
                    <SubmitButton action=Action::Login idle="Login" loading="Logging in..."/>
                </form>
            </div>

            <div id={Tab::Register.id()} class="tab-content" class:active={is_active(Tab::Register)}>
                <form id="registerForm" on:submit=on_register>
                    <FormInput field=Field::RegisterEmail kind="email" placeholder="Email"/>
                    <FormInput field=Field::RegisterPassword kind="password" placeholder="Password"/>
                    <FormInput field=Field::RegisterConfirm kind="password" placeholder="Confirm password"/>
                    <SubmitButton action=Action::Register idle="Register" loading="Registering..."/>
                </form>
            </div>
        </section>
    }
}
