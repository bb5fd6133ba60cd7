use super::*;
use crate::testing::StubApi;
use controller::error::CONNECTION_ERROR_TEXT;
use controller::message::Severity;
use controller::session::{MemorySessionStore, Session};
use controller::tab::Tab;
use controller::{CallError, View};

fn driver(store: MemorySessionStore, api: &StubApi) -> Driver<MemorySessionStore, StubApi> {
    let mut driver = Driver::new(store, api.clone()).quiet();
    driver.start();
    driver
}

fn login_fields() -> [(Field, &'static str); 3] {
    [
        (Field::LoginEmail, "user@example.com"),
        (Field::LoginPassword, "secret1"),
        (Field::LoginOtp, "123456"),
    ]
}

#[tokio::test(start_paused = true)]
async fn login_success_persists_session_and_opens_dashboard() {
    let api = StubApi::replying(Ok(()));
    let mut driver = driver(MemorySessionStore::new(), &api);

    driver.fill(&login_fields());
    driver.dispatch(Event::SubmitLogin);
    driver.run_until_settled().await;

    assert_eq!(driver.transcript(), [Message::success("Login successful!")]);
    assert_eq!(driver.store().get(), Some(Session::new("user@example.com")));
    assert_eq!(driver.controller().dashboard_email(), Some("user@example.com"));
    assert_eq!(api.sent().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn login_rejection_shows_server_text_and_stays_logged_out() {
    let api = StubApi::replying(Err(CallError::Service {
        status: 401,
        message: Some("Invalid OTP".into()),
    }));
    let mut driver = driver(MemorySessionStore::new(), &api);

    driver.fill(&login_fields());
    driver.dispatch(Event::SubmitLogin);
    driver.run_until_settled().await;

    assert_eq!(driver.transcript(), [Message::error("Invalid OTP")]);
    assert_eq!(driver.store().get(), None);
    assert_eq!(driver.controller().view(), &View::Auth { tab: Tab::Login });
}

#[tokio::test(start_paused = true)]
async fn register_success_returns_to_prefilled_login() {
    let api = StubApi::replying(Ok(()));
    let mut driver = driver(MemorySessionStore::new(), &api);

    driver.dispatch(Event::SelectTab(Tab::Register));
    driver.fill(&[
        (Field::RegisterEmail, " new@example.com "),
        (Field::RegisterPassword, "abcdef"),
        (Field::RegisterConfirm, "abcdef"),
    ]);
    driver.dispatch(Event::SubmitRegister);
    driver.run_until_settled().await;

    assert_eq!(
        driver.transcript(),
        [Message::success("Registration successful! You can now login.")]
    );
    assert_eq!(driver.controller().active_tab(), Some(Tab::Login));
    assert_eq!(driver.controller().login_form().email, "new@example.com");
    assert!(driver.controller().register_form().email.is_empty());
}

#[tokio::test(start_paused = true)]
async fn validation_failure_sends_nothing() {
    let api = StubApi::replying(Ok(()));
    let mut driver = driver(MemorySessionStore::new(), &api);

    driver.dispatch(Event::RequestOtp);
    driver.run_until_settled().await;

    assert_eq!(driver.transcript(), [Message::error("Please enter your email first!")]);
    assert!(api.sent().is_empty());
}

#[tokio::test(start_paused = true)]
async fn stored_session_then_logout() {
    let api = StubApi::replying(Ok(()));
    let store = MemorySessionStore::with_raw(r#"{"email":"user@example.com"}"#);
    let mut driver = driver(store, &api);
    assert_eq!(driver.controller().dashboard_email(), Some("user@example.com"));
    assert!(driver.transcript().is_empty());

    driver.dispatch(Event::Logout);
    driver.run_until_settled().await;

    assert_eq!(driver.transcript(), [Message::info("You have been logged out.")]);
    assert_eq!(driver.store().raw(), None);
    assert_eq!(driver.controller().active_tab(), Some(Tab::Login));
}

#[tokio::test(start_paused = true)]
async fn panicking_call_still_releases_busy_action() {
    let api = StubApi::panicking();
    let mut driver = driver(MemorySessionStore::new(), &api);

    driver.fill(&login_fields());
    driver.dispatch(Event::SubmitLogin);
    driver.run_until_settled().await;

    let last = driver.transcript().last().cloned();
    assert_eq!(last, Some(Message::error(CONNECTION_ERROR_TEXT)));
    assert_eq!(last.map(|m| m.severity), Some(Severity::Error));
    assert!(!driver.controller().is_busy(controller::Action::Login));
}

#[test]
fn render_prefixes_severity() {
    assert_eq!(render(&Message::error("Invalid OTP")), "[error] Invalid OTP");
    assert_eq!(render(&Message::info("You have been logged out.")), "[info] You have been logged out.");
}
