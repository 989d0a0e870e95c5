//! Login/logout flow and the session lifecycle.
//!
//! ```text
//! LoggedOut ──login ok──► LoggedIn ──logout──► LoggedOut
//! ```
//!
//! Logout always succeeds locally; the server is only notified.

use api::{ActivitiesApi, ApiError, LoginResponse};
use store::{KeyValueStore, Session, SessionStore};

use crate::effect::Effect;
use crate::message::UiMessage;

pub const GUEST_LABEL: &str = "Student View";
pub const LOGIN_REJECTED: &str = "Login failed";
pub const LOGIN_FAILED: &str = "Login failed. Please try again.";
pub const LOGGED_OUT: &str = "Logged out successfully";
pub const SESSION_EXPIRED: &str = "Your session has expired. Please log in again.";

/// The header's view of the session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthIndicator {
    pub authenticated: bool,
    pub label: String,
}

impl AuthIndicator {
    pub fn from_session(session: Option<&Session>) -> Self {
        match session.filter(|s| s.is_complete()) {
            Some(session) => Self {
                authenticated: true,
                label: format!("Logged in: {}", session.identity),
            },
            None => Self {
                authenticated: false,
                label: GUEST_LABEL.to_string(),
            },
        }
    }

    pub fn mode_class(&self) -> &'static str {
        if self.authenticated {
            "authenticated"
        } else {
            "not-authenticated"
        }
    }
}

/// Result of a login attempt. The error is the text for the login prompt.
pub type LoginResult = Result<Session, String>;

/// What the server said about a session restored from storage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionCheck {
    NoSession,
    Valid,
    /// The server no longer knows `token`.
    Invalid { token: String },
    /// The server could not be asked.
    Unknown,
}

pub struct AuthController<A> {
    api: A,
}

impl<A: ActivitiesApi> AuthController<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    pub async fn login(&self, email: &str, password: &str) -> LoginResult {
        match self.api.login(email, password).await {
            Ok(LoginResponse {
                session_token,
                email,
            }) => Ok(Session::new(session_token, email)),
            Err(ApiError::Rejected { detail, .. }) => {
                Err(detail.unwrap_or_else(|| LOGIN_REJECTED.to_string()))
            }
            Err(e) => {
                tracing::error!("Error logging in: {e}");
                Err(LOGIN_FAILED.to_string())
            }
        }
    }

    /// Best-effort server notification. Never fails.
    pub async fn logout(&self, credential: Option<&str>) {
        let Some(token) = credential else {
            tracing::debug!("logout without a session, skipping server notification");
            return;
        };
        if let Err(e) = self.api.logout(token).await {
            tracing::error!("Error logging out: {e}");
        }
    }

    pub async fn verify_restored(&self, credential: Option<&str>) -> SessionCheck {
        let Some(token) = credential else {
            return SessionCheck::NoSession;
        };
        match self.api.verify_session(token).await {
            Ok(status) if status.valid => SessionCheck::Valid,
            Ok(_) => SessionCheck::Invalid {
                token: token.to_string(),
            },
            Err(e) => {
                tracing::warn!("Could not verify restored session: {e}");
                SessionCheck::Unknown
            }
        }
    }
}

impl<A> AuthController<A> {
    pub fn apply_login<S: KeyValueStore>(
        &self,
        store: &mut SessionStore<S>,
        result: LoginResult,
    ) -> Vec<Effect> {
        match result {
            Ok(session) if !session.is_complete() => {
                tracing::error!("login response without a session token or identity");
                vec![Effect::LoginError(LOGIN_FAILED.to_string())]
            }
            Ok(session) => {
                let welcome = format!("Welcome back, {}!", session.identity);
                store.set(session.token, session.identity);
                vec![
                    Effect::CloseLoginModal,
                    Effect::ResetLoginForm,
                    Effect::RefreshActivities,
                    Effect::Message(UiMessage::success(welcome)),
                ]
            }
            Err(text) => vec![Effect::LoginError(text)],
        }
    }

    pub fn apply_logout<S: KeyValueStore>(&self, store: &mut SessionStore<S>) -> Vec<Effect> {
        store.clear();
        vec![
            Effect::RefreshActivities,
            Effect::CloseUserMenu,
            Effect::Message(UiMessage::success(LOGGED_OUT)),
        ]
    }

    pub fn apply_session_check<S: KeyValueStore>(
        &self,
        store: &mut SessionStore<S>,
        check: SessionCheck,
    ) -> Vec<Effect> {
        let SessionCheck::Invalid { token } = check else {
            return Vec::new();
        };
        // A login may have replaced the checked session while the check ran.
        if store.credential() != Some(token.as_str()) {
            tracing::debug!("ignoring verification of a session that is no longer current");
            return Vec::new();
        }
        store.clear();
        vec![
            Effect::RefreshActivities,
            Effect::Message(UiMessage::info(SESSION_EXPIRED)),
        ]
    }

    pub fn indicator<S: KeyValueStore>(store: &SessionStore<S>) -> AuthIndicator {
        AuthIndicator::from_session(store.session())
    }
}
