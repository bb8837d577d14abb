use super::*;

use crate::net::types::Identity;
use crate::state::session::apply_bootstrap_outcome;

// =============================================================
// Screen selection
// =============================================================

#[test]
fn fresh_session_shows_checking() {
    let state = SessionState::new();
    assert_eq!(screen_for(&state), Screen::Checking);
}

#[test]
fn resolved_identity_shows_signed_in() {
    let mut state = SessionState::new();
    apply_bootstrap_outcome(
        &mut state,
        Ok(Identity {
            name: "Alice".to_owned(),
            email: "alice@example.com".to_owned(),
        }),
    );
    assert_eq!(screen_for(&state), Screen::SignedIn);
}

#[test]
fn resolved_without_identity_shows_signed_out() {
    let mut state = SessionState::new();
    apply_bootstrap_outcome(&mut state, Err("Failed to fetch user info".to_owned()));
    assert_eq!(screen_for(&state), Screen::SignedOut);
}
