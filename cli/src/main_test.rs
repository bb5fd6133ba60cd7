use super::*;
use crate::testing::StubApi;
use controller::CallError;
use controller::session::{MemorySessionStore, Session};

const STORED: &str = r#"{"email":"a@b.com"}"#;

fn quiet(store: MemorySessionStore, api: &StubApi) -> Driver<MemorySessionStore, StubApi> {
    Driver::new(store, api.clone()).quiet()
}

fn login(email: &str) -> Command {
    Command::Login { email: email.to_owned(), password: "secret1".to_owned(), otp: "123456".to_owned() }
}

#[test]
fn base_url_needs_http_scheme() {
    assert!(check_base_url("http://localhost:8080").is_ok());
    assert!(check_base_url("https://bonsai-auth-backend.onrender.com").is_ok());
    for bad in ["localhost:8080", "ftp://host", ""] {
        assert!(matches!(check_base_url(bad), Err(CliError::InvalidBaseUrl(url)) if url == bad));
    }
}

#[tokio::test(start_paused = true)]
async fn status_reports_restored_session() {
    let api = StubApi::replying(Ok(()));
    let mut driver = quiet(MemorySessionStore::with_raw(STORED), &api);

    let report = execute(&mut driver, Command::Status).await.unwrap();
    assert_eq!(report, Report { status: Some("Logged in as a@b.com".to_owned()), failed: false });
}

#[tokio::test(start_paused = true)]
async fn auth_commands_refused_while_logged_in() {
    let commands = [
        Command::Register {
            email: "n@b.com".to_owned(),
            password: "abcdef".to_owned(),
            confirm_password: "abcdef".to_owned(),
        },
        Command::RequestOtp { email: "n@b.com".to_owned() },
        login("n@b.com"),
    ];
    for command in commands {
        let api = StubApi::replying(Ok(()));
        let mut driver = quiet(MemorySessionStore::with_raw(STORED), &api);

        let result = execute(&mut driver, command).await;
        assert!(matches!(result, Err(CliError::AlreadyLoggedIn(email)) if email == "a@b.com"));
        assert!(api.sent().is_empty());
        assert_eq!(driver.store().get(), Some(Session::new("a@b.com")));
    }
}

#[tokio::test(start_paused = true)]
async fn logout_without_session_says_not_logged_in() {
    let api = StubApi::replying(Ok(()));
    let mut driver = quiet(MemorySessionStore::new(), &api);

    let report = execute(&mut driver, Command::Logout).await.unwrap();
    assert_eq!(report, Report { status: Some("Not logged in".to_owned()), failed: false });
    assert!(driver.transcript().is_empty());
}

#[tokio::test(start_paused = true)]
async fn logout_clears_stored_session() {
    let api = StubApi::replying(Ok(()));
    let mut driver = quiet(MemorySessionStore::with_raw(STORED), &api);

    let report = execute(&mut driver, Command::Logout).await.unwrap();
    assert_eq!(report, Report { status: Some("Not logged in".to_owned()), failed: false });
    assert_eq!(driver.store().raw(), None);
}

#[tokio::test(start_paused = true)]
async fn successful_login_reports_session() {
    let api = StubApi::replying(Ok(()));
    let mut driver = quiet(MemorySessionStore::new(), &api);

    let report = execute(&mut driver, login("u@x.com")).await.unwrap();
    assert_eq!(report, Report { status: Some("Logged in as u@x.com".to_owned()), failed: false });
    assert_eq!(driver.store().get(), Some(Session::new("u@x.com")));
}

#[tokio::test(start_paused = true)]
async fn rejected_login_fails_the_run() {
    let api = StubApi::replying(Err(CallError::Service {
        status: 401,
        message: Some("Invalid OTP".to_owned()),
    }));
    let mut driver = quiet(MemorySessionStore::new(), &api);

    let report = execute(&mut driver, login("u@x.com")).await.unwrap();
    assert_eq!(report, Report { status: Some("Not logged in".to_owned()), failed: true });
}

#[tokio::test(start_paused = true)]
async fn validation_error_fails_without_status_line() {
    let api = StubApi::replying(Ok(()));
    let mut driver = quiet(MemorySessionStore::new(), &api);

    let report = execute(&mut driver, Command::RequestOtp { email: "  ".to_owned() }).await.unwrap();
    assert_eq!(report, Report { status: None, failed: true });
    assert!(api.sent().is_empty());
}

#[tokio::test(start_paused = true)]
async fn successful_otp_request_exits_cleanly() {
    let api = StubApi::replying(Ok(()));
    let mut driver = quiet(MemorySessionStore::new(), &api);

    let report = execute(&mut driver, Command::RequestOtp { email: "u@x.com".to_owned() }).await.unwrap();
    assert_eq!(report, Report { status: None, failed: false });
    assert_eq!(api.sent().len(), 1);
}
