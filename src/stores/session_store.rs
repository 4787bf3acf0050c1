use std::rc::Rc;
use yew::Reducible;

use crate::utils::storage::load_token;

/// Client-held authentication state. The token is the single source of
/// truth: `is_authenticated()` is derived, never stored separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionStore {
    pub token: Option<String>,
}

impl SessionStore {
    /// Read the persisted token on startup. The token is trusted as-is;
    /// no server round-trip, no expiry check. A later 401 expires it.
    pub fn restore() -> Self {
        let token = load_token();
        if token.is_some() {
            log::info!("🔑 Restored session from storage");
        }
        Self { token }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

pub enum SessionAction {
    LoggedIn(String),
    LoggedOut,
}

impl Reducible for SessionStore {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            SessionAction::LoggedIn(token) => Rc::new(SessionStore { token: Some(token) }),
            SessionAction::LoggedOut => Rc::new(SessionStore { token: None }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authentication_tracks_token_presence() {
        let cleared = SessionStore { token: None };
        assert!(!cleared.is_authenticated());

        let logged_in = cleared.clone();
        let logged_in = Rc::new(logged_in).reduce(SessionAction::LoggedIn("t0k3n".into()));
        assert!(logged_in.is_authenticated());
        assert_eq!(logged_in.token.as_deref(), Some("t0k3n"));

        let logged_out = logged_in.reduce(SessionAction::LoggedOut);
        assert!(!logged_out.is_authenticated());
        assert!(logged_out.token.is_none());
    }
}
