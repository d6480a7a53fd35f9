mod common;

use common::{FakeTransport, client};
use futures::executor::block_on;
use investment_lens::application::account::{
    EMAIL_REJECTED, EMAIL_SENT, ResetOutcome, ResetRequestOutcome, Submission, TOKEN_REJECTED, submit_login,
    submit_register, submit_reset_password, submit_reset_request,
};
use investment_lens::application::session::{Session, UNKNOWN_ERROR};
use investment_lens::domain::session::{LoginData, RegisterData, ResetPasswordData};
use investment_lens::infrastructure::http::endpoints;

fn newcomer() -> RegisterData {
    RegisterData { username: "newuser".into(), email: "new@user.io".into(), password: "longenough".into() }
}

#[test]
fn invalid_login_never_reaches_backend() {
    let transport = FakeTransport::new();
    let session = Session::new(client(&transport));
    let data = LoginData { username: "ab".into(), password: "".into() };

    let submission = block_on(submit_login(&session, &data));
    let errors = submission.errors().expect("validation should stop the submit");
    assert_eq!(errors.get("username"), Some("Username must be at least 3 characters long"));
    assert_eq!(errors.get("password"), Some("Password is required"));
    assert!(transport.requests().is_empty());
}

#[test]
fn register_success_and_failures() {
    let transport = FakeTransport::new();
    transport
        .reply(endpoints::REGISTER, 200, "{}")
        .reply(endpoints::REGISTER, 520, r#"{"message":"Username already exists"}"#)
        .reply(endpoints::REGISTER, 520, "")
        .reply(endpoints::REGISTER, 400, r#"{"message":"ignored"}"#);
    let api = client(&transport);

    let welcome = block_on(submit_register(&api, &newcomer()));
    assert_eq!(welcome.outcome().map(|o| (o.is_success, o.message.as_str())), Some((true, "Welcome, newuser!")));

    let taken = block_on(submit_register(&api, &newcomer()));
    assert_eq!(taken.outcome().map(|o| o.message.as_str()), Some("Username already exists"));

    let silent = block_on(submit_register(&api, &newcomer()));
    assert_eq!(silent.outcome().map(|o| o.message.as_str()), Some(UNKNOWN_ERROR));

    let bad = block_on(submit_register(&api, &newcomer()));
    let outcome = bad.outcome().expect("submitted");
    assert!(!outcome.is_success);
    assert_eq!(outcome.message, "An unknown error occurred with status code: 400");

    let offline = block_on(submit_register(&api, &newcomer()));
    assert_eq!(offline.outcome().map(|o| o.message.as_str()), Some(UNKNOWN_ERROR));
}

#[test]
fn register_validates_every_field() {
    let transport = FakeTransport::new();
    let data = RegisterData { username: "new user".into(), email: "nope".into(), password: "short".into() };

    let submission = block_on(submit_register(&client(&transport), &data));
    let Submission::Invalid(errors) = submission else {
        panic!("expected validation errors");
    };
    assert_eq!(errors.len(), 3);
    assert_eq!(errors.get("username"), Some("Username must be only alphanumeric"));
    assert_eq!(errors.get("email"), Some("Invalid email address"));
    assert_eq!(errors.get("password"), Some("Password must be at least 8 characters long"));
    assert!(transport.requests().is_empty());
}

#[test]
fn reset_request_reports_sent_or_rejected() {
    let transport = FakeTransport::new();
    transport
        .reply(endpoints::REQUEST_RESET_PASSWORD, 200, "{}")
        .reply(endpoints::REQUEST_RESET_PASSWORD, 521, r#"{"message":"no such email"}"#);
    let api = client(&transport);

    let sent = block_on(submit_reset_request(&api, "me@example.com"));
    assert_eq!(sent, Submission::Submitted(ResetRequestOutcome::Sent));
    assert_eq!(ResetRequestOutcome::Sent.message(), EMAIL_SENT);

    let rejected = block_on(submit_reset_request(&api, "me@example.com"));
    assert_eq!(rejected.outcome().map(|o| o.message()), Some(EMAIL_REJECTED));

    let request = &transport.requests()[0];
    assert_eq!(request.query, vec![("email".to_string(), "me@example.com".to_string())]);

    let invalid = block_on(submit_reset_request(&api, "not-an-email"));
    assert_eq!(invalid.errors().and_then(|e| e.get("email")), Some("Invalid email address"));
    assert_eq!(transport.requests().len(), 2);
}

#[test]
fn reset_password_outcomes_by_status() {
    let transport = FakeTransport::new();
    transport
        .reply(endpoints::RESET_PASSWORD, 403, r#"{"detail":"expired"}"#)
        .reply(endpoints::RESET_PASSWORD, 500, "")
        .reply(endpoints::RESET_PASSWORD, 200, "{}");
    let api = client(&transport);
    let data = ResetPasswordData { token: "tok-123".into(), new_password: "brandnew1".into() };

    let expired = block_on(submit_reset_password(&api, &data));
    assert_eq!(expired, Submission::Submitted(ResetOutcome::InvalidToken));
    assert_eq!(ResetOutcome::InvalidToken.message(), Some(TOKEN_REJECTED));

    let broken = block_on(submit_reset_password(&api, &data));
    assert_eq!(broken.outcome().and_then(|o| o.message()), None);

    let done = block_on(submit_reset_password(&api, &data));
    assert_eq!(done, Submission::Submitted(ResetOutcome::Success));

    let empty = ResetPasswordData { token: String::new(), new_password: "brandnew1".into() };
    let missing = block_on(submit_reset_password(&api, &empty));
    assert_eq!(missing.errors().and_then(|e| e.get("token")), Some("Token is required"));
    assert_eq!(transport.requests().len(), 3);
}
