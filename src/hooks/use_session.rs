use yew::prelude::*;

use crate::router::{self, Route};
use crate::services::{self, ApiError};
use crate::stores::{SessionAction, SessionStore};
use crate::utils::storage::{clear_token, save_token};

/// Handle to the session owned by the application root. Passed down via
/// context so the guard, the navbar and the auth screens all observe the
/// same state instead of an ambient singleton.
#[derive(Clone)]
pub struct UseSessionHandle {
    inner: UseReducerHandle<SessionStore>,
}

impl PartialEq for UseSessionHandle {
    fn eq(&self, other: &Self) -> bool {
        *self.inner == *other.inner
    }
}

impl UseSessionHandle {
    pub fn is_authenticated(&self) -> bool {
        self.inner.is_authenticated()
    }

    /// Exchange credentials for a token; persist it and flip the session.
    /// On failure the session is left cleared and the error carries the
    /// server's message (or a generic fallback).
    pub async fn login(&self, email: &str, password: &str) -> Result<(), ApiError> {
        match services::login(email, password).await {
            Ok(token) => {
                if let Err(e) = save_token(&token) {
                    log::error!("❌ Could not persist token: {}", e);
                }
                self.inner.dispatch(SessionAction::LoggedIn(token));
                Ok(())
            }
            Err(err) => {
                log::error!("❌ Login failed: {}", err);
                clear_token();
                self.inner.dispatch(SessionAction::LoggedOut);
                Err(err)
            }
        }
    }

    /// Clear persisted and in-memory session unconditionally. Never fails.
    pub fn logout(&self) {
        log::info!("👋 Logout");
        clear_token();
        self.inner.dispatch(SessionAction::LoggedOut);
    }

    /// 401 hook: any authenticated request that comes back unauthorized
    /// lands here, clearing the session and redirecting to login.
    pub fn expire(&self) {
        log::warn!("⚠️ Session expired, redirecting to login");
        clear_token();
        self.inner.dispatch(SessionAction::LoggedOut);
        router::replace(&Route::Login);
    }
}

/// Construct the session at the application root; restore() runs once.
#[hook]
pub fn use_session_provider() -> UseSessionHandle {
    UseSessionHandle {
        inner: use_reducer(SessionStore::restore),
    }
}

/// Access the session from anywhere under the root provider.
#[hook]
pub fn use_session() -> UseSessionHandle {
    use_context::<UseSessionHandle>().expect("session context not provided")
}
