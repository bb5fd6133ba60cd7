use super::*;

#[test]
fn validation_errors_display_user_text() {
    assert_eq!(ValidationError::Mismatch.to_string(), "Passwords do not match!");
    assert_eq!(
        ValidationError::TooShort.to_string(),
        "Password must be at least 6 characters!"
    );
    assert_eq!(ValidationError::MissingEmail.to_string(), "Please enter your email first!");
    assert_eq!(ValidationError::MissingOtp.to_string(), "Please enter the OTP code!");
}

#[test]
fn service_message_is_shown_verbatim() {
    let err = AuthError::from(CallError::Service {
        status: 401,
        message: Some("Invalid OTP".to_owned()),
    });
    assert_eq!(err.user_message(Action::Login), "Invalid OTP");
}

#[test]
fn service_without_message_uses_per_action_fallback() {
    let err = AuthError::from(CallError::Service { status: 500, message: None });
    assert_eq!(
        err.user_message(Action::Register),
        "Registration failed. Please try again."
    );
    assert_eq!(
        err.user_message(Action::RequestOtp),
        "Failed to send OTP. Please try again."
    );
    assert_eq!(err.user_message(Action::Login), "Login failed. Check your credentials.");
}

#[test]
fn transport_message_is_identical_across_actions() {
    let err = AuthError::from(CallError::Transport("dns".to_owned()));
    for action in [Action::Register, Action::RequestOtp, Action::Login] {
        assert_eq!(err.user_message(action), CONNECTION_ERROR_TEXT);
    }
}

#[test]
fn validation_user_message_ignores_action() {
    let err = AuthError::from(ValidationError::MissingOtp);
    assert_eq!(err.user_message(Action::Register), "Please enter the OTP code!");
}

#[test]
fn call_error_display_is_diagnostic() {
    let err = CallError::Service { status: 429, message: None };
    assert_eq!(err.to_string(), "auth service returned 429");
    assert_eq!(
        CallError::Transport("timed out".to_owned()).to_string(),
        "transport failure: timed out"
    );
}
