use crate::domain::session::AuthState;

/// Where the guarded routes redirect anonymous visitors.
pub const LOGIN_ROUTE: &str = "/login";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    /// Session check still running; show a loading indicator.
    Pending,
    /// Redirect to the login route, replacing the history entry.
    Denied,
    Granted,
}

pub fn route_access(state: &AuthState) -> RouteAccess {
    match state {
        AuthState::Loading => RouteAccess::Pending,
        AuthState::Anonymous => RouteAccess::Denied,
        AuthState::Authenticated(_) => RouteAccess::Granted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::session::User;

    #[test]
    fn access_follows_auth_state() {
        assert_eq!(route_access(&AuthState::Loading), RouteAccess::Pending);
        assert_eq!(route_access(&AuthState::Anonymous), RouteAccess::Denied);
        let user = User { user_id: "u1".into(), username: "luntaixia".into(), is_admin: false };
        assert_eq!(route_access(&AuthState::Authenticated(user)), RouteAccess::Granted);
    }
}
