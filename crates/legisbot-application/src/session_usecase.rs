//! Session use case implementation.
//!
//! `SessionUseCase` is the single source of truth for "who is logged in".
//! It owns the `AuthState`, the persisted credential, and the token
//! attached to the API client; every state change goes through its
//! operations.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tokio::sync::RwLock;

use legisbot_core::LegisError;
use legisbot_core::api::LegisApi;
use legisbot_core::credential::CredentialStore;
use legisbot_core::guard::{self, AuthState, RouteDecision};
use legisbot_core::user::{OnboardingProfile, User};

/// Delay between a successful registration and the navigation away from
/// the register view, so the confirmation stays visible.
pub const REGISTER_REDIRECT_DELAY: Duration = Duration::from_millis(1500);

/// Where to send the user after a successful login or registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    /// The chat view.
    Home,
    /// The one-time profile-completion form.
    Onboarding,
}

impl NavTarget {
    /// Decides the post-login destination from the fetched identity.
    pub fn for_user(user: &User) -> Self {
        if user.has_completed_onboarding {
            NavTarget::Home
        } else {
            NavTarget::Onboarding
        }
    }
}

/// Use case for the session/authentication lifecycle.
///
/// # Responsibilities
///
/// - Bootstrapping the session from the persisted credential, exactly
///   once per process start
/// - Login (token endpoint, then identity fetch), registration with
///   auto-login, logout
/// - Keeping the persisted credential, the client's bearer token, and
///   the in-memory `AuthState` consistent with each other
///
/// # Thread Safety
///
/// State lives behind an `RwLock`; the write operations cannot overlap
/// under the one-at-a-time interaction model, and readers only ever see
/// a complete state.
pub struct SessionUseCase {
    /// Client for the remote service.
    api: Arc<dyn LegisApi>,
    /// Durable storage for the bearer token.
    credentials: Arc<dyn CredentialStore>,
    /// Current authentication state.
    state: Arc<RwLock<AuthState>>,
    /// Set once `bootstrap` has run.
    bootstrapped: AtomicBool,
}

impl SessionUseCase {
    pub fn new(api: Arc<dyn LegisApi>, credentials: Arc<dyn CredentialStore>) -> Self {
        Self {
            api,
            credentials,
            state: Arc::new(RwLock::new(AuthState::Initializing)),
            bootstrapped: AtomicBool::new(false),
        }
    }

    /// Initializes the session from the persisted credential.
    ///
    /// Runs the identity fetch at most once per process start; subsequent
    /// calls return the current state without touching the network.
    /// Any rejection of the stored token (expired, invalid, unreachable
    /// server, unreadable file) deletes the credential and leaves the
    /// session anonymous — bootstrap itself never fails.
    pub async fn bootstrap(&self) -> AuthState {
        if self.bootstrapped.swap(true, Ordering::SeqCst) {
            return self.state().await;
        }

        let next = match self.credentials.load().await {
            Ok(Some(token)) => {
                self.api.set_token(&token);
                match self.api.current_user().await {
                    Ok(user) => AuthState::Authenticated(user),
                    Err(err) => {
                        tracing::warn!("stored credential rejected: {err}");
                        self.discard_credential().await;
                        AuthState::Anonymous
                    }
                }
            }
            Ok(None) => AuthState::Anonymous,
            Err(err) => {
                tracing::warn!("could not read stored credential: {err}");
                self.discard_credential().await;
                AuthState::Anonymous
            }
        };

        *self.state.write().await = next.clone();
        next
    }

    /// Logs in with the given credentials.
    ///
    /// On success the token is persisted and attached, the identity is
    /// fetched (the token endpoint does not return the profile), stored,
    /// and returned. Failures propagate the server's rejection.
    pub async fn login(&self, username: &str, password: &str) -> Result<User, LegisError> {
        let token = self.api.obtain_token(username, password).await?;

        if let Err(err) = self.credentials.store(&token).await {
            // The session still works for this process; it just won't
            // survive a restart.
            tracing::warn!("could not persist credential: {err}");
        }
        self.api.set_token(&token);

        let user = self.api.current_user().await?;
        *self.state.write().await = AuthState::Authenticated(user.clone());
        Ok(user)
    }

    /// Registers a new account and immediately logs it in.
    ///
    /// Registration failures (e.g. duplicate email) propagate without
    /// attempting the login.
    pub async fn register(&self, email: &str, password: &str) -> Result<User, LegisError> {
        self.api.register(email, password).await?;
        self.login(email, password).await
    }

    /// Ends the session. Never fails and performs no network call.
    pub async fn logout(&self) {
        self.discard_credential().await;
        *self.state.write().await = AuthState::Anonymous;
    }

    /// Submits the onboarding profile and replaces the cached identity
    /// with the updated user returned by the service.
    pub async fn complete_onboarding(&self, profile: &OnboardingProfile) -> Result<User, LegisError> {
        let user = self.api.complete_onboarding(profile).await?;
        *self.state.write().await = AuthState::Authenticated(user.clone());
        Ok(user)
    }

    /// Returns a snapshot of the current authentication state.
    pub async fn state(&self) -> AuthState {
        self.state.read().await.clone()
    }

    /// Evaluates the route guard for a protected view against the current
    /// state.
    pub async fn guard(&self, admin_only: bool) -> RouteDecision {
        guard::evaluate(&*self.state.read().await, admin_only)
    }

    async fn discard_credential(&self) {
        if let Err(err) = self.credentials.delete().await {
            tracing::warn!("could not delete stored credential: {err}");
        }
        self.api.clear_token();
    }
}
