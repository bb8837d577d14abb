use super::*;

fn identity() -> Identity {
    Identity {
        name: "Alice".to_owned(),
        email: "alice@example.com".to_owned(),
    }
}

// =============================================================
// SessionState basics
// =============================================================

#[test]
fn new_session_is_loading_and_signed_out() {
    let state = SessionState::new();
    assert!(state.loading);
    assert!(!state.is_signed_in());
    assert_eq!(state.identity, None);
}

#[test]
fn default_matches_new() {
    let state = SessionState::default();
    assert!(state.loading);
    assert_eq!(state.identity, None);
}

// =============================================================
// Bootstrap outcome
// =============================================================

#[test]
fn bootstrap_success_installs_identity() {
    let mut state = SessionState::new();
    let notice = apply_bootstrap_outcome(&mut state, Ok(identity()));
    assert!(!state.loading);
    assert_eq!(state.identity, Some(identity()));
    assert_eq!(notice, None);
}

#[test]
fn bootstrap_failure_lands_signed_out_with_error() {
    let mut state = SessionState::new();
    let notice = apply_bootstrap_outcome(&mut state, Err("Failed to fetch user info".to_owned()));
    assert!(!state.loading);
    assert_eq!(state.identity, None);
    assert_eq!(notice, Some(Notice::error("Failed to fetch user info")));
}

#[test]
fn bootstrap_replaces_previous_identity_wholesale() {
    let mut state = SessionState::new();
    state.identity = Some(identity());
    let notice = apply_bootstrap_outcome(&mut state, Err("session expired".to_owned()));
    assert_eq!(state.identity, None);
    assert!(notice.is_some());
}

// =============================================================
// Logout outcome
// =============================================================

#[test]
fn logout_success_drops_identity() {
    let mut state = SessionState::new();
    apply_bootstrap_outcome(&mut state, Ok(identity()));
    let notice = apply_logout_outcome(&mut state, Ok(()));
    assert_eq!(state.identity, None);
    assert_eq!(notice, None);
}

#[test]
fn logout_failure_keeps_identity() {
    let mut state = SessionState::new();
    apply_bootstrap_outcome(&mut state, Ok(identity()));
    let notice = apply_logout_outcome(&mut state, Err("Failed to log out".to_owned()));
    assert_eq!(state.identity, Some(identity()));
    assert_eq!(notice, Some(Notice::error("Failed to log out")));
}
