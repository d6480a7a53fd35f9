use std::cell::{Cell, RefCell};

use crate::application::remote::RequestTracker;
use crate::domain::{
    errors::ApiError,
    logging::{LogComponent, get_logger},
    session::{AuthOutcome, AuthState, LoginData},
};
use crate::infrastructure::http::ApiClient;

pub const INVALID_CREDENTIALS: &str = "Invalid username or password";
pub const TOO_MANY_ATTEMPTS: &str = "Too many login attempts, please try again later";
pub const UNKNOWN_ERROR: &str = "An unknown error occurred";
pub const LOGOUT_SUCCESSFUL: &str = "Logout successful";

type Observer = Box<dyn Fn(&AuthState)>;

/// Owns the authentication state of this tab. All transitions go through
/// `bootstrap`, `login` and `logout`; the observer sees every change.
pub struct Session {
    api: ApiClient,
    state: RefCell<AuthState>,
    bootstrapped: Cell<bool>,
    /// Only the newest session check may change the state.
    checks: RequestTracker,
    observer: Option<Observer>,
}

impl Session {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            state: RefCell::new(AuthState::Loading),
            bootstrapped: Cell::new(false),
            checks: RequestTracker::new(),
            observer: None,
        }
    }

    pub fn with_observer(mut self, observer: impl Fn(&AuthState) + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    pub fn state(&self) -> AuthState {
        self.state.borrow().clone()
    }

    fn set_state(&self, next: AuthState) {
        *self.state.borrow_mut() = next.clone();
        if let Some(observer) = &self.observer {
            observer(&next);
        }
    }

    async fn refresh(&self) -> AuthState {
        let token = self.checks.begin();
        let next = match self.api.check_login().await {
            Ok(user) => {
                get_logger().debug(
                    LogComponent::Application("Session"),
                    &format!("session belongs to {}", user.username),
                );
                AuthState::Authenticated(user)
            }
            Err(e) => {
                get_logger().debug(LogComponent::Application("Session"), &format!("no active session: {}", e));
                AuthState::Anonymous
            }
        };
        if self.checks.is_current(token) {
            self.set_state(next);
        } else {
            get_logger().debug(LogComponent::Application("Session"), "session check superseded, result dropped");
        }
        self.state()
    }

    /// Check the session cookie once. Later calls return the current state.
    pub async fn bootstrap(&self) -> AuthState {
        if self.bootstrapped.replace(true) {
            return self.state();
        }
        self.refresh().await
    }

    /// Succeeds only once the follow-up session check confirms the user.
    pub async fn login(&self, credentials: &LoginData) -> AuthOutcome {
        if let Err(error) = self.api.login(credentials).await {
            get_logger().warn(LogComponent::Application("Session"), &format!("login failed: {}", error));
            return AuthOutcome::failure(login_failure_message(&error));
        }

        self.bootstrapped.set(true);
        let token = self.checks.begin();
        let checked = self.api.check_login().await;
        if !self.checks.is_current(token) {
            return AuthOutcome::failure(UNKNOWN_ERROR);
        }
        match checked {
            Ok(user) => {
                get_logger().info(LogComponent::Application("Session"), &format!("🔑 {} logged in", user.username));
                let welcome = format!("Welcome back, {}!", user.username);
                self.set_state(AuthState::Authenticated(user));
                AuthOutcome::success(welcome)
            }
            Err(error) => {
                get_logger().warn(
                    LogComponent::Application("Session"),
                    &format!("login accepted but session check failed: {}", error),
                );
                self.set_state(AuthState::Anonymous);
                AuthOutcome::failure(login_failure_message(&error))
            }
        }
    }

    /// Clears the local user whatever the backend answers.
    pub async fn logout(&self) -> AuthOutcome {
        self.checks.begin();
        let result = self.api.logout().await;
        self.set_state(AuthState::Anonymous);
        match result {
            Ok(()) => AuthOutcome::success(LOGOUT_SUCCESSFUL),
            Err(error) => {
                get_logger().warn(LogComponent::Application("Session"), &format!("logout failed: {}", error));
                AuthOutcome::failure(UNKNOWN_ERROR)
            }
        }
    }
}

fn login_failure_message(error: &ApiError) -> String {
    match error.status() {
        Some(403) => error.server_message().unwrap_or(INVALID_CREDENTIALS).to_string(),
        Some(429) => error.server_message().unwrap_or(TOO_MANY_ATTEMPTS).to_string(),
        Some(status) => format!("An error occurred with status code: {}", status),
        None => UNKNOWN_ERROR.to_string(),
    }
}
