//! Session state management.
//!
//! Login is never checked against a credential store: a readable user record
//! in the local mirror is the whole session. The container exists so that
//! restoration and logout are explicit transitions instead of ambient
//! module state.

use leptos::prelude::*;
use shared::dto::User;

use crate::services::storage;

/// Session lifecycle. `Unknown` is the pre-restore state; `CheckingAuth`
/// exists so the shell can render nothing while the mirror is read.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Unknown,
    CheckingAuth,
    Authenticated(User),
    Unauthenticated,
}

impl SessionState {
    /// Resolve a saved mirror record into a session state. No remote
    /// verification happens anywhere.
    pub fn resolve(saved: Option<User>) -> Self {
        match saved {
            Some(user) if user.is_logged_in => SessionState::Authenticated(user),
            _ => SessionState::Unauthenticated,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }
}

/// Global session context
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub state: RwSignal<SessionState>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(SessionState::Unknown),
        }
    }

    /// Restore the session from the local mirror on startup.
    pub fn restore(&self) {
        self.state.set(SessionState::CheckingAuth);
        let resolved = SessionState::resolve(storage::load_user());
        log::info!(
            "session restored: {}",
            if resolved.is_authenticated() {
                "authenticated"
            } else {
                "unauthenticated"
            }
        );
        self.state.set(resolved);
    }

    /// Persist the user record and authenticate. Unconditional: the login
    /// log dispatch is best-effort and never gates this.
    pub fn login(&self, ign: String, email: String) {
        let user = User::logged_in(ign, email);
        storage::save_user(&user);
        self.state.set(SessionState::Authenticated(user));
    }

    pub fn logout(&self) {
        storage::clear_user();
        self.state.set(SessionState::Unauthenticated);
    }

    pub fn user(&self) -> Option<User> {
        self.state.with(|state| state.user().cloned())
    }
}

pub fn provide_session_context() -> SessionContext {
    let context = SessionContext::new();
    provide_context(context);
    context
}

pub fn use_session_context() -> SessionContext {
    expect_context::<SessionContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saved_record_restores_authenticated() {
        let saved = Some(User::logged_in("Steve", "steve@gmail.com"));
        let state = SessionState::resolve(saved);
        assert!(state.is_authenticated());
        assert_eq!(state.user().unwrap().ign, "Steve");
    }

    #[test]
    fn test_missing_record_restores_unauthenticated() {
        assert_eq!(SessionState::resolve(None), SessionState::Unauthenticated);
    }

    #[test]
    fn test_logged_out_record_restores_unauthenticated() {
        let saved = Some(User {
            ign: "Steve".to_string(),
            email: "steve@gmail.com".to_string(),
            is_logged_in: false,
        });
        assert_eq!(SessionState::resolve(saved), SessionState::Unauthenticated);
    }
}
