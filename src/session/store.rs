//! The session store — owns auth state, drives transitions, syncs UI.
//!
//! ARCHITECTURE
//! ============
//! A constructible object rather than an ambient global: the API client,
//! storage backend, and observers are injected, so tests run against fakes.
//! Network calls resolve to [`SessionEvent`]s fed through the pure machine
//! in [`super::state`]; persistence and observer notification happen at the
//! commit point, never inside the machine.
//!
//! Overlapping auth operations are ordered by a monotonically increasing
//! sequence: a response from a superseded operation is discarded instead of
//! clobbering newer state. User-initiated logout always applies.
//!
//! ERROR HANDLING
//! ==============
//! Session checks never fail outward — any failure degrades to
//! `Anonymous` so a page load cannot crash on auth. Login returns a
//! structured error distinguishing rejection, malformed responses, and an
//! unreachable server. Logout clears local state even when the server
//! cannot be told.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;
use serde_json::{Value, json};

use super::cookies::{self, CookieExpiry};
use super::policy::{self, Role};
use super::state::{self, SessionEvent, SessionState, User};
use super::storage::{self, SessionStorage};
use crate::net::error::RequestError;
use crate::net::http::ApiClient;

const HOME_PATH: &str = "/";

/// Side-effect seam notified after every state transition.
///
/// Default methods are no-ops so observers implement only what they need
/// (a renderer ignores cookies, a cookie jar ignores navigation).
pub trait SessionObserver: Send + Sync {
    fn session_changed(&self, state: &SessionState) {
        let _ = state;
    }

    fn navigate(&self, path: &str) {
        let _ = path;
    }

    fn expire_cookies(&self, directives: &[CookieExpiry]) {
        let _ = directives;
    }
}

/// Login failure, with three user-facing shapes.
#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    /// The server rejected the credentials; message is server-provided.
    #[error("{0}")]
    Rejected(String),

    /// The server answered with something we could not interpret.
    #[error("unexpected server response: {0}")]
    Malformed(String),

    /// The server could not be reached at all.
    #[error("cannot reach server: {0}")]
    Unreachable(String),
}

/// Landing page shown after a successful login.
#[must_use]
pub fn landing_path(role: Role) -> &'static str {
    match role {
        Role::Admin => "/admin",
        Role::Consignor => "/consignment",
        Role::YoutubeLinker => "/videos",
        Role::Public => HOME_PATH,
    }
}

#[derive(serde::Deserialize)]
struct SessionCheckResponse {
    logged_in: bool,
    #[serde(default)]
    user: Option<User>,
    #[serde(default)]
    token: Option<String>,
}

#[derive(serde::Deserialize)]
struct LoginResponse {
    user: User,
    #[serde(default)]
    token: Option<String>,
}

struct Inner {
    state: SessionState,
    applied_seq: u64,
    storage: Box<dyn SessionStorage>,
}

/// Owns the session state machine and its side effects.
pub struct SessionStore {
    api: ApiClient,
    hostname: String,
    observers: Vec<Box<dyn SessionObserver>>,
    issued_seq: AtomicU64,
    inner: Mutex<Inner>,
}

impl SessionStore {
    /// Build a store starting in `Unknown` with the given backends.
    #[must_use]
    pub fn new(api: ApiClient, hostname: impl Into<String>, storage: Box<dyn SessionStorage>) -> Self {
        Self {
            api,
            hostname: hostname.into(),
            observers: Vec::new(),
            issued_seq: AtomicU64::new(0),
            inner: Mutex::new(Inner { state: SessionState::default(), applied_seq: 0, storage }),
        }
    }

    /// Register an observer; call before sharing the store.
    pub fn subscribe(&mut self, observer: Box<dyn SessionObserver>) {
        self.observers.push(observer);
    }

    /// Current state, cloned. Other components read this, never mutate.
    #[must_use]
    pub fn snapshot(&self) -> SessionState {
        self.inner.lock().state.clone()
    }

    /// Whether the current role subsumes `required`.
    ///
    /// Always false when not authenticated.
    #[must_use]
    pub fn has_permission(&self, required: Role) -> bool {
        self.snapshot().role().is_some_and(|role| role.subsumes(required))
    }

    /// Whether the current session may use `feature` per the policy table.
    #[must_use]
    pub fn can_access(&self, feature: &str) -> bool {
        policy::can_access(feature, self.snapshot().role())
    }

    /// Re-notify observers with the current state. Idempotent; safe to call
    /// any time the page needs its auth-driven UI refreshed.
    pub fn sync_ui(&self) {
        let state = self.snapshot();
        self.notify(&state);
    }

    /// Ask the backend whether this client is logged in.
    ///
    /// Idempotent and infallible outward: every outcome lands the machine
    /// in `Authenticated` or `Anonymous`. Transport failures, non-2xx
    /// responses, and malformed payloads all degrade to `Anonymous`.
    pub async fn check_session(&self) {
        let seq = self.begin_op();
        let bearer = self.bearer();

        let event = match self.api.get("session", &[], bearer.as_deref()).await {
            Ok(value) => match serde_json::from_value::<SessionCheckResponse>(value) {
                Ok(SessionCheckResponse { logged_in: true, user: Some(user), token }) => {
                    SessionEvent::Confirmed { user, token }
                }
                Ok(SessionCheckResponse { logged_in: true, user: None, .. }) => {
                    tracing::warn!("session check reported logged-in without a user");
                    SessionEvent::Rejected
                }
                Ok(SessionCheckResponse { logged_in: false, .. }) => SessionEvent::Rejected,
                Err(error) => {
                    tracing::warn!(error = %error, "session check response malformed");
                    SessionEvent::Rejected
                }
            },
            Err(error) => {
                tracing::debug!(error = %error, "session check failed, degrading to anonymous");
                SessionEvent::Rejected
            }
        };

        if let Some(next) = self.commit(seq, event, false) {
            self.notify(&next);
        }
    }

    /// Authenticate with the backend.
    ///
    /// On success the machine transitions to `Authenticated`, storage is
    /// written, observers are notified, and navigation goes to the
    /// role-appropriate landing page. On failure nothing changes.
    ///
    /// # Errors
    ///
    /// [`LoginError::Rejected`] with the server's message for refused
    /// credentials, [`LoginError::Malformed`] for uninterpretable
    /// responses, [`LoginError::Unreachable`] for transport failure.
    pub async fn login(&self, username: &str, password: &str) -> Result<User, LoginError> {
        let seq = self.begin_op();
        let body = json!({ "username": username, "password": password });

        let value = match self.api.post("login", &body, None).await {
            Ok(value) => value,
            Err(error) => return Err(login_failure(error)),
        };

        let response: LoginResponse =
            serde_json::from_value(value).map_err(|e| LoginError::Malformed(e.to_string()))?;
        let user = response.user.clone();

        let event = SessionEvent::Confirmed { user: response.user, token: response.token };
        if let Some(next) = self.commit(seq, event, false) {
            self.notify(&next);
            self.navigate_all(landing_path(user.role));
        }

        Ok(user)
    }

    /// Log out: tell the server best-effort, then unconditionally clear
    /// local state, expire session cookies, and navigate home.
    pub async fn logout(&self) {
        let seq = self.begin_op();
        let bearer = self.bearer();

        if let Err(error) = self.api.post("logout", &json!({}), bearer.as_deref()).await {
            tracing::warn!(error = %error, "logout notification failed, clearing local state anyway");
        }

        // Forced: a user-initiated logout wins over any in-flight response.
        let next = self
            .commit(seq, SessionEvent::LoggedOut, true)
            .unwrap_or(SessionState::Anonymous);
        self.notify(&next);

        let directives = cookies::expiry_directives(cookies::SESSION_COOKIE_NAMES, &self.hostname);
        for observer in &self.observers {
            observer.expire_cookies(&directives);
        }

        self.navigate_all(HOME_PATH);
    }

    fn begin_op(&self) -> u64 {
        self.issued_seq.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Apply `event` at commit point `seq`. Stale commits (an older
    /// operation resolving after a newer one already applied) are
    /// discarded unless `force` is set.
    fn commit(&self, seq: u64, event: SessionEvent, force: bool) -> Option<SessionState> {
        let mut inner = self.inner.lock();

        if !force && seq < inner.applied_seq {
            tracing::debug!(seq, applied = inner.applied_seq, "discarding stale auth response");
            return None;
        }
        inner.applied_seq = inner.applied_seq.max(seq);

        let next = state::apply(&inner.state, event);
        match &next {
            SessionState::Authenticated { user, token } => {
                storage::persist_session(inner.storage.as_mut(), user, token.as_deref());
            }
            SessionState::Anonymous | SessionState::Unknown => {
                storage::clear_session(inner.storage.as_mut());
            }
        }
        inner.state = next.clone();

        Some(next)
    }

    fn bearer(&self) -> Option<String> {
        let inner = self.inner.lock();
        storage::stored_token(inner.storage.as_ref())
    }

    fn notify(&self, state: &SessionState) {
        for observer in &self.observers {
            observer.session_changed(state);
        }
    }

    fn navigate_all(&self, path: &str) {
        for observer in &self.observers {
            observer.navigate(path);
        }
    }
}

fn login_failure(error: RequestError) -> LoginError {
    match error {
        RequestError::Http { status, body } => match rejection_message(&body) {
            Some(message) => LoginError::Rejected(message),
            None => LoginError::Malformed(format!("status {status} with unrecognized body")),
        },
        RequestError::Api(message) => LoginError::Rejected(message),
        RequestError::Parse(message) => LoginError::Malformed(message),
        RequestError::Network(message) | RequestError::ClientBuild(message) => LoginError::Unreachable(message),
    }
}

/// Server-provided rejection message from a non-2xx body, if parseable.
fn rejection_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value
        .get("error")
        .or_else(|| value.get("message"))
        .and_then(Value::as_str)
        .map(ToOwned::to_owned)
}
