use super::*;

// =============================================================
// Draft payload
// =============================================================

#[test]
fn draft_payload_keeps_values_verbatim() {
    let payload = draft_payload(" a@b.com ", "", "<p>Hello</p>\n");
    assert_eq!(payload.to_email, " a@b.com ");
    assert_eq!(payload.subject, "");
    assert_eq!(payload.html_body, "<p>Hello</p>\n");
}

#[test]
fn draft_payload_allows_all_empty_fields() {
    let payload = draft_payload("", "", "");
    assert_eq!(
        payload,
        SendEmailRequest {
            to_email: String::new(),
            subject: String::new(),
            html_body: String::new(),
        }
    );
}

// =============================================================
// Send outcome
// =============================================================

#[test]
fn send_success_produces_confirmation() {
    let notice = send_outcome_notice(Ok(()));
    assert_eq!(notice, Notice::success("Email sent successfully"));
}

#[test]
fn send_failure_produces_error_with_message() {
    let notice = send_outcome_notice(Err("Invalid recipient".to_owned()));
    assert_eq!(notice, Notice::error("Invalid recipient"));
    assert!(notice.is_error());
}
