use crate::application::session::{Session, UNKNOWN_ERROR};
use crate::domain::{
    errors::ApiError,
    forms::{FieldErrors, validate_login, validate_register, validate_reset_password, validate_reset_request},
    logging::{LogComponent, get_logger},
    session::{AuthOutcome, LoginData, RegisterData, ResetPasswordData},
};
use crate::infrastructure::http::ApiClient;

pub const EMAIL_SENT: &str = "Email sent! Check your inbox and paste the token below to reset your password.";
pub const EMAIL_REJECTED: &str = "Email not exists or invalid!";
pub const RESET_SUCCESSFUL: &str = "Reset password successful!";
pub const TOKEN_REJECTED: &str = "Access token is invalid or expired!";

/// A form submission either stops at validation or reaches the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission<T> {
    Invalid(FieldErrors),
    Submitted(T),
}

impl<T> Submission<T> {
    pub fn errors(&self) -> Option<&FieldErrors> {
        match self {
            Submission::Invalid(errors) => Some(errors),
            Submission::Submitted(_) => None,
        }
    }

    pub fn outcome(&self) -> Option<&T> {
        match self {
            Submission::Submitted(outcome) => Some(outcome),
            Submission::Invalid(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetRequestOutcome {
    Sent,
    Rejected,
}

impl ResetRequestOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            ResetRequestOutcome::Sent => EMAIL_SENT,
            ResetRequestOutcome::Rejected => EMAIL_REJECTED,
        }
    }
}

/// `Undetermined` leaves the form without a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetOutcome {
    Success,
    InvalidToken,
    Undetermined,
}

impl ResetOutcome {
    pub fn message(&self) -> Option<&'static str> {
        match self {
            ResetOutcome::Success => Some(RESET_SUCCESSFUL),
            ResetOutcome::InvalidToken => Some(TOKEN_REJECTED),
            ResetOutcome::Undetermined => None,
        }
    }
}

pub async fn submit_login(session: &Session, data: &LoginData) -> Submission<AuthOutcome> {
    let errors = validate_login(data);
    if !errors.is_empty() {
        return Submission::Invalid(errors);
    }
    Submission::Submitted(session.login(data).await)
}

pub async fn submit_register(api: &ApiClient, data: &RegisterData) -> Submission<AuthOutcome> {
    let errors = validate_register(data);
    if !errors.is_empty() {
        return Submission::Invalid(errors);
    }
    let outcome = match api.register(data).await {
        Ok(()) => {
            get_logger().info(LogComponent::Application("Account"), &format!("registered {}", data.username));
            AuthOutcome::success(format!("Welcome, {}!", data.username))
        }
        Err(ApiError::Status { status: 520, message }) => {
            AuthOutcome::failure(message.unwrap_or_else(|| UNKNOWN_ERROR.to_string()))
        }
        Err(ApiError::Status { status, .. }) => {
            AuthOutcome::failure(format!("An unknown error occurred with status code: {}", status))
        }
        Err(error) => {
            get_logger().warn(LogComponent::Application("Account"), &format!("register failed: {}", error));
            AuthOutcome::failure(UNKNOWN_ERROR)
        }
    };
    Submission::Submitted(outcome)
}

pub async fn submit_reset_request(api: &ApiClient, email: &str) -> Submission<ResetRequestOutcome> {
    let errors = validate_reset_request(email);
    if !errors.is_empty() {
        return Submission::Invalid(errors);
    }
    let outcome = match api.request_reset_password(email).await {
        Ok(()) => ResetRequestOutcome::Sent,
        Err(error) => {
            get_logger().warn(LogComponent::Application("Account"), &format!("reset request failed: {}", error));
            ResetRequestOutcome::Rejected
        }
    };
    Submission::Submitted(outcome)
}

pub async fn submit_reset_password(api: &ApiClient, data: &ResetPasswordData) -> Submission<ResetOutcome> {
    let errors = validate_reset_password(data);
    if !errors.is_empty() {
        return Submission::Invalid(errors);
    }
    let outcome = match api.reset_password(&data.token, &data.new_password).await {
        Ok(()) => ResetOutcome::Success,
        Err(error) if error.status() == Some(403) => ResetOutcome::InvalidToken,
        Err(error) => {
            get_logger().error(LogComponent::Application("Account"), &format!("reset password failed: {}", error));
            ResetOutcome::Undetermined
        }
    };
    Submission::Submitted(outcome)
}
