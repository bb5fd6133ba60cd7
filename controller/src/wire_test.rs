use super::*;

#[test]
fn paths_match_auth_service_routes() {
    let register = AuthRequest::Register(RegisterBody {
        email: "u@x.com".to_owned(),
        password: "abcdef".to_owned(),
    });
    let otp = AuthRequest::RequestOtp(OtpBody { email: "u@x.com".to_owned() });
    let login = AuthRequest::Login(LoginBody {
        email: "u@x.com".to_owned(),
        password: "abcdef".to_owned(),
        otp: "123456".to_owned(),
    });
    assert_eq!(register.path(), "/auth/register");
    assert_eq!(otp.path(), "/auth/request-otp");
    assert_eq!(login.path(), "/auth/login");
}

#[test]
fn register_body_only_carries_email_and_password() {
    let req = AuthRequest::Register(RegisterBody {
        email: "u@x.com".to_owned(),
        password: "abcdef".to_owned(),
    });
    let json: serde_json::Value = serde_json::from_str(&req.to_json().expect("json")).expect("parse");
    assert_eq!(json, serde_json::json!({ "email": "u@x.com", "password": "abcdef" }));
}

#[test]
fn login_body_carries_otp() {
    let req = AuthRequest::Login(LoginBody {
        email: "u@x.com".to_owned(),
        password: "abcdef".to_owned(),
        otp: "123456".to_owned(),
    });
    let json: serde_json::Value = serde_json::from_str(&req.to_json().expect("json")).expect("parse");
    assert_eq!(
        json,
        serde_json::json!({ "email": "u@x.com", "password": "abcdef", "otp": "123456" })
    );
}

#[test]
fn endpoint_url_trims_trailing_slash() {
    assert_eq!(
        endpoint_url("https://auth.example.com/", "/auth/login"),
        "https://auth.example.com/auth/login"
    );
    assert_eq!(
        endpoint_url("https://auth.example.com", "/auth/login"),
        "https://auth.example.com/auth/login"
    );
}

#[test]
fn classify_accepts_any_2xx() {
    assert_eq!(classify(200, ""), Ok(()));
    assert_eq!(classify(201, "not json"), Ok(()));
    assert_eq!(classify(204, ""), Ok(()));
}

#[test]
fn classify_surfaces_server_message() {
    assert_eq!(
        classify(401, r#"{"message":"Invalid OTP"}"#),
        Err(CallError::Service { status: 401, message: Some("Invalid OTP".to_owned()) })
    );
}

#[test]
fn classify_without_usable_message_leaves_it_empty() {
    for body in ["", "<html>bad gateway</html>", "{}", r#"{"message":""}"#, r#"{"message":null}"#] {
        assert_eq!(
            classify(502, body),
            Err(CallError::Service { status: 502, message: None }),
            "body: {body}"
        );
    }
}

#[test]
fn redirect_status_is_not_success() {
    assert!(classify(302, "").is_err());
}
