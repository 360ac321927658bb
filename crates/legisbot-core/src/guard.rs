//! Authentication state and route guard.
//!
//! The session's lifecycle is an explicit tagged union instead of a nullable
//! identity plus a boolean loading flag, so every consumer matches it
//! exhaustively.

use serde::{Deserialize, Serialize};

use crate::user::User;

/// The session's authentication state.
///
/// Owned exclusively by the session store; mutated only through its
/// bootstrap/login/register/logout operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum AuthState {
    /// The bootstrap identity fetch has not completed yet.
    Initializing,
    /// No identity: no persisted credential, or the credential was rejected.
    Anonymous,
    /// A user is logged in.
    Authenticated(User),
}

impl AuthState {
    /// Returns the authenticated user, if any.
    pub fn user(&self) -> Option<&User> {
        match self {
            AuthState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthState::Authenticated(_))
    }
}

/// Outcome of evaluating the route guard for a protected view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// The bootstrap fetch is still pending; show a loading placeholder.
    ShowLoading,
    /// Not logged in; send the user to the login view.
    RedirectToLogin,
    /// Logged in but not allowed here (admin-only view); send home.
    RedirectHome,
    /// Render the protected content.
    Render,
}

/// Decides whether a protected view may render.
///
/// Pure function of the session state and the view's `admin_only` flag;
/// it must be re-evaluated on every navigation.
pub fn evaluate(state: &AuthState, admin_only: bool) -> RouteDecision {
    match state {
        AuthState::Initializing => RouteDecision::ShowLoading,
        AuthState::Anonymous => RouteDecision::RedirectToLogin,
        AuthState::Authenticated(user) => {
            if admin_only && !user.is_admin() {
                RouteDecision::RedirectHome
            } else {
                RouteDecision::Render
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::Role;

    fn user_with_role(role: Role) -> User {
        serde_json::from_str::<User>(r#"{"id":7,"email":"a@b.com"}"#)
            .map(|mut u| {
                u.role = role;
                u
            })
            .unwrap()
    }

    #[test]
    fn test_initializing_shows_loading() {
        assert_eq!(
            evaluate(&AuthState::Initializing, false),
            RouteDecision::ShowLoading
        );
        assert_eq!(
            evaluate(&AuthState::Initializing, true),
            RouteDecision::ShowLoading
        );
    }

    #[test]
    fn test_anonymous_always_redirects_to_login() {
        assert_eq!(
            evaluate(&AuthState::Anonymous, false),
            RouteDecision::RedirectToLogin
        );
        assert_eq!(
            evaluate(&AuthState::Anonymous, true),
            RouteDecision::RedirectToLogin
        );
    }

    #[test]
    fn test_regular_user_never_renders_admin_views() {
        let state = AuthState::Authenticated(user_with_role(Role::User));
        assert_eq!(evaluate(&state, true), RouteDecision::RedirectHome);
        assert_eq!(evaluate(&state, false), RouteDecision::Render);
    }

    #[test]
    fn test_admin_renders_everywhere() {
        let state = AuthState::Authenticated(user_with_role(Role::Admin));
        assert_eq!(evaluate(&state, true), RouteDecision::Render);
        assert_eq!(evaluate(&state, false), RouteDecision::Render);
    }
}
