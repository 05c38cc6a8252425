use client::{KeyValueStore, Session};
use dioxus::prelude::*;
use shared_types::{AppError, PermissionSet};

use crate::routes::Route;

/// Global authentication state.
///
/// Written only by login, logout and a forced session teardown.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    pub session: Signal<Option<Session>>,
}

impl AuthState {
    /// Start from whatever session survived the last reload.
    pub fn restore(store: &dyn KeyValueStore) -> Self {
        Self {
            session: Signal::new(Session::restore(store)),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.read().is_some()
    }

    pub fn set_session(&mut self, session: Session) {
        self.session.set(Some(session));
    }

    pub fn clear_session(&mut self) {
        self.session.set(None);
    }

    pub fn user_id(&self) -> Option<String> {
        self.session
            .read()
            .as_ref()
            .map(|s| s.user_id.clone())
            .filter(|id| !id.is_empty())
    }

    pub fn user_name(&self) -> String {
        self.session
            .read()
            .as_ref()
            .map(|s| s.user_name.clone())
            .unwrap_or_default()
    }

    /// Capabilities of the current session, resolved fresh on every call.
    pub fn permissions(&self) -> PermissionSet {
        self.session
            .read()
            .as_ref()
            .map(Session::permissions)
            .unwrap_or_default()
    }

    /// Turn a failed request into the message a screen should show.
    ///
    /// An expired session has already wiped storage in the client; here the
    /// in-memory session is dropped too and the user is sent to login.
    pub fn request_error(&mut self, err: &AppError, fallback: &str) -> String {
        if err.is_session_expired() {
            tracing::info!("session expired, returning to login");
            self.clear_session();
            navigator().replace(Route::Login {});
        } else {
            tracing::warn!(error = %err, "request failed");
        }
        err.display_or(fallback)
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

/// Hook to access the shared API client.
pub fn use_api() -> client::ApiClient {
    use_context::<client::ApiClient>()
}
