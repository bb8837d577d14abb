//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend owns the session (an HTTP-only cookie this code never sees);
//! this state is only the client's latest picture of it. One credentialed
//! identity fetch per page view resolves `loading`, and the outcome
//! functions below are the only places the picture changes.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::Identity;
use crate::state::notice::Notice;

/// Identity snapshot plus whether the initial fetch is still in flight.
#[derive(Clone, Debug)]
pub struct SessionState {
    pub identity: Option<Identity>,
    pub loading: bool,
}

impl SessionState {
    /// State for a freshly loaded page: no identity yet, fetch pending.
    pub fn new() -> Self {
        Self { identity: None, loading: true }
    }

    pub fn is_signed_in(&self) -> bool {
        self.identity.is_some()
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

/// Fold the identity-fetch result into the session.
///
/// Success installs the identity; any failure (including plain "no session")
/// lands on the signed-out screen with the failure message as the notice.
/// Either way the loading window is over. Returns the notice to display.
pub fn apply_bootstrap_outcome(
    state: &mut SessionState,
    result: Result<Identity, String>,
) -> Option<Notice> {
    state.loading = false;
    match result {
        Ok(identity) => {
            state.identity = Some(identity);
            None
        }
        Err(message) => {
            state.identity = None;
            Some(Notice::error(message))
        }
    }
}

/// Fold the logout result into the session.
///
/// Only a confirmed logout drops the identity; on failure the user stays
/// signed in from the client's point of view and sees the error. Returns
/// the notice to display.
pub fn apply_logout_outcome(
    state: &mut SessionState,
    result: Result<(), String>,
) -> Option<Notice> {
    match result {
        Ok(()) => {
            state.identity = None;
            None
        }
        Err(message) => Some(Notice::error(message)),
    }
}
