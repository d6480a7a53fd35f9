use serde::{Deserialize, Serialize};

/// The logged-in user as reported by `check_login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub user_id: String,
    pub username: String,
    pub is_admin: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginData {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RegisterData {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResetPasswordData {
    pub token: String,
    pub new_password: String,
}

/// Who is logged in, as far as this tab knows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AuthState {
    #[default]
    Loading,
    Authenticated(User),
    Anonymous,
}

impl AuthState {
    pub fn user(&self) -> Option<&User> {
        match self {
            AuthState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, AuthState::Loading)
    }
}

/// Result of a login or logout attempt, rendered inline by the forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthOutcome {
    pub is_success: bool,
    pub message: String,
}

impl AuthOutcome {
    pub fn success(message: impl Into<String>) -> Self {
        Self { is_success: true, message: message.into() }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self { is_success: false, message: message.into() }
    }
}
