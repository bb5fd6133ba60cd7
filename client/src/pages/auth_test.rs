use super::*;

#[test]
fn field_value_reads_matching_slot() {
    let mut ctl = Controller::new();
    for (field, value) in [
        (Field::LoginEmail, "u@x.com"),
        (Field::LoginPassword, "secret1"),
        (Field::LoginOtp, "123456"),
        (Field::RegisterEmail, "r@x.com"),
        (Field::RegisterPassword, "abcdef"),
        (Field::RegisterConfirm, "abcdeg"),
    ] {
        ctl.handle(Event::Edit { field, value: value.to_owned() });
        assert_eq!(field_value(&ctl, field), value);
    }
    assert_eq!(field_value(&ctl, Field::LoginEmail), "u@x.com");
}

#[test]
fn field_value_empty_by_default() {
    let ctl = Controller::new();
    assert_eq!(field_value(&ctl, Field::RegisterConfirm), "");
}

#[test]
fn button_label_switches_while_busy() {
    assert_eq!(button_label(false, "Login", "Logging in..."), "Login");
    assert_eq!(button_label(true, "Login", "Logging in..."), "Logging in...");
}
