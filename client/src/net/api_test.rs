use super::*;

#[test]
fn error_from_body_prefers_server_message() {
    assert_eq!(
        error_from_body(r#"{"error": "Not authenticated"}"#, FETCH_IDENTITY_FALLBACK),
        "Not authenticated"
    );
}

#[test]
fn error_from_body_falls_back_without_error_field() {
    assert_eq!(
        error_from_body(r#"{"detail": "nope"}"#, LOGOUT_FALLBACK),
        "Failed to log out"
    );
}

#[test]
fn error_from_body_falls_back_on_blank_message() {
    assert_eq!(error_from_body(r#"{"error": ""}"#, SEND_EMAIL_FALLBACK), "Failed to send email");
    assert_eq!(error_from_body(r#"{"error": "   "}"#, SEND_EMAIL_FALLBACK), "Failed to send email");
}

#[test]
fn error_from_body_falls_back_on_non_json_body() {
    assert_eq!(
        error_from_body("<html>502 Bad Gateway</html>", SEND_EMAIL_FALLBACK),
        "Failed to send email"
    );
    assert_eq!(error_from_body("", FETCH_IDENTITY_FALLBACK), "Failed to fetch user info");
}

#[test]
fn fallback_messages_match_screen_copy() {
    assert_eq!(FETCH_IDENTITY_FALLBACK, "Failed to fetch user info");
    assert_eq!(LOGOUT_FALLBACK, "Failed to log out");
    assert_eq!(SEND_EMAIL_FALLBACK, "Failed to send email");
}

#[test]
fn login_url_points_at_backend_login() {
    let url = login_url();
    assert!(url.ends_with("/login"), "unexpected login url: {url}");
    assert!(url.starts_with(backend::backend_url().trim_end_matches('/')));
}
