//! Session state authority.
//!
//! A single [`SessionManager`] owns the two-state machine
//! {unauthenticated -> authenticated}, exposes a read-only accessor, and
//! notifies subscribers of every transition. Only the auth module and the
//! 401 response stage perform transitions.

use std::sync::{PoisonError, RwLock};

use tokio::sync::broadcast;
use tracing::debug;

use crate::types::CurrentUser;

const EVENT_CAPACITY: usize = 16;

/// Current authentication state.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Unauthenticated,
    Authenticated(CurrentUser),
}

impl SessionState {
    pub fn user(&self) -> Option<&CurrentUser> {
        match self {
            Self::Authenticated(user) => Some(user),
            Self::Unauthenticated => None,
        }
    }
}

/// A session transition, broadcast to subscribers.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    /// A session was established (login, registration or a successful
    /// session check).
    LoggedIn(CurrentUser),
    /// The session ended by explicit logout.
    LoggedOut,
    /// The server rejected the session (401) or a session check came back
    /// anonymous while a user was held locally.
    Expired,
}

/// Owner of the client's authentication state.
pub struct SessionManager {
    state: RwLock<SessionState>,
    events: broadcast::Sender<SessionEvent>,
}

impl SessionManager {
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            state: RwLock::new(SessionState::Unauthenticated),
            events,
        }
    }

    /// Read-only snapshot of the current state.
    pub fn current(&self) -> SessionState {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn current_user(&self) -> Option<CurrentUser> {
        match self.current() {
            SessionState::Authenticated(user) => Some(user),
            SessionState::Unauthenticated => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.current(), SessionState::Authenticated(_))
    }

    /// Subscribe to session transitions.
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    pub(crate) fn establish(&self, user: CurrentUser) {
        debug!(username = %user.username, "session established");
        *self.state.write().unwrap_or_else(PoisonError::into_inner) =
            SessionState::Authenticated(user.clone());
        let _ = self.events.send(SessionEvent::LoggedIn(user));
    }

    pub(crate) fn clear(&self) {
        debug!("session cleared");
        *self.state.write().unwrap_or_else(PoisonError::into_inner) =
            SessionState::Unauthenticated;
        let _ = self.events.send(SessionEvent::LoggedOut);
    }

    /// Drop the session after a server-side rejection. Idempotent: expiring
    /// an already-unauthenticated session emits nothing.
    pub(crate) fn expire(&self) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        if matches!(*state, SessionState::Authenticated(_)) {
            debug!("session expired");
            *state = SessionState::Unauthenticated;
            drop(state);
            let _ = self.events.send(SessionEvent::Expired);
        }
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new()
    }
}
