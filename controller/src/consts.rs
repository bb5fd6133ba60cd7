//! Shared constants.

use std::time::Duration;

/// How long a status message stays visible before it hides itself.
pub const MESSAGE_TTL: Duration = Duration::from_millis(5_000);

/// Delay between a successful registration and switching to the login tab.
pub const OPEN_LOGIN_DELAY: Duration = Duration::from_millis(1_500);

/// Delay between a successful login and showing the dashboard.
pub const OPEN_DASHBOARD_DELAY: Duration = Duration::from_millis(1_000);

/// Minimum password length, counted in characters.
pub const MIN_PASSWORD_CHARS: usize = 6;

/// Durable storage key holding the JSON-encoded session.
pub const SESSION_KEY: &str = "user";

/// Production auth service.
pub const DEFAULT_BASE_URL: &str = "https://bonsai-auth-backend.onrender.com";
