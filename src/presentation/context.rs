use std::rc::Rc;

use leptos::*;

use crate::application::session::Session;
use crate::config::AppConfig;
use crate::domain::{
    logging::{LogComponent, get_logger},
    session::{AuthState, User},
};
use crate::infrastructure::http::ApiClient;

/// Auth state mirrored into a signal, plus the session that owns it.
#[derive(Clone)]
pub struct AuthContext {
    pub state: ReadSignal<AuthState>,
    session: Rc<Session>,
}

impl AuthContext {
    pub fn session(&self) -> Rc<Session> {
        self.session.clone()
    }

    pub fn user(&self) -> Option<User> {
        self.state.with(|state| state.user().cloned())
    }
}

/// Provide config, API client and auth context to the tree below, and kick
/// off the one-time session check.
pub fn provide_app_context(config: AppConfig) -> AuthContext {
    let api = ApiClient::browser(&config.api_base);
    provide_context(config);
    provide_context(api.clone());
    provide_auth(api)
}

fn provide_auth(api: ApiClient) -> AuthContext {
    let (state, set_state) = create_signal(AuthState::Loading);
    let session = Rc::new(Session::new(api).with_observer(move |next| set_state.set(next.clone())));
    let context = AuthContext { state, session: session.clone() };
    provide_context(context.clone());

    spawn_local(async move {
        let state = session.bootstrap().await;
        get_logger().info(
            LogComponent::Presentation("AuthContext"),
            &format!("session check finished: {}", if state.user().is_some() { "authenticated" } else { "anonymous" }),
        );
    });

    context
}

pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}

pub fn use_api() -> ApiClient {
    expect_context::<ApiClient>()
}

pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_else(|| crate::config::app_config().clone())
}
