//! Wire DTOs for the mail-backend exchanges.
//!
//! DESIGN
//! ======
//! The backend speaks plain JSON over three endpoints; these types pin the
//! field names so the wire contract lives in one place. Deserialization is
//! tolerant of extra fields because the identity endpoint relays whatever
//! the OAuth provider returned.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The signed-in user as reported by the backend identity endpoint.
///
/// Only the two fields the screen renders are kept; the provider's other
/// userinfo fields are ignored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Display name.
    pub name: String,
    /// Email address of the signed-in account.
    pub email: String,
}

/// Error payload the backend attaches to failed responses.
///
/// Every failing endpoint uses the same `{"error": "..."}` shape; the field
/// stays optional so bodies without it still decode.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorBody {
    pub error: Option<String>,
}

/// JSON payload for the send-email endpoint.
///
/// Values are forwarded exactly as typed in the compose form, including
/// empty strings; the backend does its own validation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SendEmailRequest {
    /// Recipient address.
    pub to_email: String,
    /// Subject line.
    pub subject: String,
    /// Message body, sent as raw HTML.
    pub html_body: String,
}
