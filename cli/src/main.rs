mod api;
mod driver;
mod store;
#[cfg(test)]
mod testing;

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};
use controller::Event;
use controller::consts::DEFAULT_BASE_URL;
use controller::form::Field;
use controller::message::Severity;
use controller::session::SessionStore;
use controller::tab::Tab;
use tracing_subscriber::EnvFilter;

use crate::api::{AuthApi, HttpAuthApi};
use crate::driver::Driver;
use crate::store::FileSessionStore;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
    #[error("http client setup failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("already logged in as {0}; run `logout` first")]
    AlreadyLoggedIn(String),
}

#[derive(Parser, Debug)]
#[command(name = "bonsai-auth", about = "Register, request an OTP, and log in against the Bonsai auth service")]
struct Cli {
    #[arg(long, env = "AUTH_API_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    #[arg(long, env = "AUTH_SESSION_FILE", default_value = "auth-session.json")]
    session_file: PathBuf,

    #[arg(long, env = "AUTH_TIMEOUT_SECS", default_value_t = 30)]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show who is logged in.
    Status,
    Register {
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        password: String,
        #[arg(long, default_value = "")]
        confirm_password: String,
    },
    RequestOtp {
        #[arg(long, default_value = "")]
        email: String,
    },
    Login {
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        password: String,
        #[arg(long, default_value = "")]
        otp: String,
    },
    Logout,
}

#[tokio::main]
async fn main() -> Result<ExitCode, CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    run(cli).await
}

async fn run(cli: Cli) -> Result<ExitCode, CliError> {
    check_base_url(&cli.base_url)?;
    let api = HttpAuthApi::new(&cli.base_url, Duration::from_secs(cli.timeout_secs))?;
    let store = FileSessionStore::new(cli.session_file);
    tracing::debug!(base_url = api.base_url(), session_file = %store.path().display(), "starting");

    let mut driver = Driver::new(store, api);
    let report = execute(&mut driver, cli.command).await?;
    if let Some(status) = &report.status {
        println!("{status}");
    }
    Ok(if report.failed { ExitCode::FAILURE } else { ExitCode::SUCCESS })
}

/// What a finished command leaves for the terminal besides its messages.
#[derive(Debug, PartialEq, Eq)]
struct Report {
    /// Final `Logged in as ...` / `Not logged in` line, if the command prints one.
    status: Option<String>,
    /// The last message shown was an error.
    failed: bool,
}

fn check_base_url(base_url: &str) -> Result<(), CliError> {
    if base_url.starts_with("http://") || base_url.starts_with("https://") {
        Ok(())
    } else {
        Err(CliError::InvalidBaseUrl(base_url.to_owned()))
    }
}

/// Restore the session, run `command` until the flow settles, and report.
async fn execute<S, A>(driver: &mut Driver<S, A>, command: Command) -> Result<Report, CliError>
where
    S: SessionStore,
    A: AuthApi,
{
    driver.start();
    let logged_in = driver.controller().dashboard_email().map(str::to_owned);

    let report_status = matches!(command, Command::Login { .. } | Command::Logout);
    match command {
        Command::Status => {
            return Ok(Report { status: Some(status_line(driver)), failed: false });
        }
        Command::Logout => {
            if logged_in.is_none() {
                return Ok(Report { status: Some(status_line(driver)), failed: false });
            }
            driver.dispatch(Event::Logout);
        }
        Command::Register { email, password, confirm_password } => {
            refuse_if_logged_in(logged_in)?;
            driver.dispatch(Event::SelectTab(Tab::Register));
            driver.fill(&[
                (Field::RegisterEmail, email.as_str()),
                (Field::RegisterPassword, password.as_str()),
                (Field::RegisterConfirm, confirm_password.as_str()),
            ]);
            driver.dispatch(Event::SubmitRegister);
        }
        Command::RequestOtp { email } => {
            refuse_if_logged_in(logged_in)?;
            driver.fill(&[(Field::LoginEmail, email.as_str())]);
            driver.dispatch(Event::RequestOtp);
        }
        Command::Login { email, password, otp } => {
            refuse_if_logged_in(logged_in)?;
            driver.fill(&[
                (Field::LoginEmail, email.as_str()),
                (Field::LoginPassword, password.as_str()),
                (Field::LoginOtp, otp.as_str()),
            ]);
            driver.dispatch(Event::SubmitLogin);
        }
    }

    driver.run_until_settled().await;
    let failed = driver
        .transcript()
        .last()
        .is_some_and(|message| message.severity == Severity::Error);
    let status = report_status.then(|| status_line(driver));
    Ok(Report { status, failed })
}

fn refuse_if_logged_in(email: Option<String>) -> Result<(), CliError> {
    match email {
        Some(email) => Err(CliError::AlreadyLoggedIn(email)),
        None => Ok(()),
    }
}

fn status_line<S: SessionStore, A: AuthApi>(driver: &Driver<S, A>) -> String {
    match driver.controller().dashboard_email() {
        Some(email) => format!("Logged in as {email}"),
        None => "Not logged in".to_owned(),
    }
}
