use std::fmt;

use log::debug;
use serde::Serialize;

/// Lifecycle of one session. A context is always in exactly one state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SessionState {
    Idle,
    Active,
    Expired,
}

impl SessionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionState::Idle => "Idle",
            SessionState::Active => "Active",
            SessionState::Expired => "Expired",
        }
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Session state machine. The four event methods are the only mutators;
/// events that are not meaningful in the current state are no-ops, not
/// errors. Nothing here drives `timeout` on a clock; expiry is an event
/// the host delivers explicitly.
pub struct SessionContext {
    state: SessionState,
    last_activity: Option<u64>,
}

impl SessionContext {
    pub fn new() -> Self {
        debug!("Session created in Idle state");
        Self {
            state: SessionState::Idle,
            last_activity: None,
        }
    }

    pub fn login(&mut self) {
        match self.state {
            SessionState::Idle | SessionState::Expired => {
                self.last_activity = Some(crate::time::now());
                self.set_state(SessionState::Active);
            }
            SessionState::Active => {
                debug!("Login ignored, session already active");
            }
        }
    }

    pub fn activity(&mut self) {
        match self.state {
            SessionState::Active => {
                self.last_activity = Some(crate::time::now());
                debug!("Session activity recorded");
            }
            SessionState::Idle => debug!("Activity ignored, no active session"),
            SessionState::Expired => debug!("Activity ignored, session expired, login required"),
        }
    }

    pub fn timeout(&mut self) {
        match self.state {
            SessionState::Active => {
                self.set_state(SessionState::Expired);
            }
            // Only meaningful from Active.
            SessionState::Idle => debug!("Timeout ignored, session already idle"),
            SessionState::Expired => debug!("Timeout ignored, session already expired"),
        }
    }

    pub fn logout(&mut self) {
        match self.state {
            SessionState::Active | SessionState::Expired => {
                self.last_activity = None;
                self.set_state(SessionState::Idle);
            }
            SessionState::Idle => debug!("Logout ignored, no session to close"),
        }
    }

    pub fn current_state(&self) -> SessionState {
        self.state
    }

    /// Timestamp of the last login or activity while Active.
    pub fn last_activity(&self) -> Option<u64> {
        self.last_activity
    }

    fn set_state(&mut self, state: SessionState) {
        debug!("Session state changed: {} -> {state}", self.state);
        self.state = state;
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let session = SessionContext::new();
        assert_eq!(session.current_state(), SessionState::Idle);
        assert_eq!(session.last_activity(), None);
    }

    #[test]
    fn test_login_lifecycle() {
        let mut session = SessionContext::new();

        session.login();
        assert_eq!(session.current_state(), SessionState::Active);
        assert!(session.last_activity().is_some());

        // Second login is a no-op.
        session.login();
        assert_eq!(session.current_state(), SessionState::Active);

        session.logout();
        assert_eq!(session.current_state(), SessionState::Idle);
        assert_eq!(session.last_activity(), None);
    }

    #[test]
    fn test_timeout_and_relogin() {
        let mut session = SessionContext::new();

        session.timeout();
        assert_eq!(
            session.current_state(),
            SessionState::Idle,
            "timeout from Idle is a no-op"
        );

        session.login();
        session.timeout();
        assert_eq!(session.current_state(), SessionState::Expired);

        session.timeout();
        assert_eq!(session.current_state(), SessionState::Expired);

        // Re-login from Expired.
        session.login();
        assert_eq!(session.current_state(), SessionState::Active);
    }

    #[test]
    fn test_activity_only_refreshes_active() {
        let mut session = SessionContext::new();

        session.activity();
        assert_eq!(session.current_state(), SessionState::Idle);
        assert_eq!(session.last_activity(), None);

        session.login();
        session.activity();
        assert_eq!(session.current_state(), SessionState::Active);
        assert!(session.last_activity().is_some());

        session.timeout();
        session.activity();
        assert_eq!(
            session.current_state(),
            SessionState::Expired,
            "activity cannot revive an expired session"
        );
    }

    #[test]
    fn test_logout_from_expired() {
        let mut session = SessionContext::new();
        session.login();
        session.timeout();

        session.logout();
        assert_eq!(session.current_state(), SessionState::Idle);

        session.logout();
        assert_eq!(session.current_state(), SessionState::Idle);
    }
}
