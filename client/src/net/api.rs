//! REST operations against the mail backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, each sent with
//! browser credentials so the backend can resolve its session cookie.
//! Server-side (SSR): stubs reporting failure since the backend is only
//! reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every operation returns `Result<_, String>` with a display-ready message:
//! the backend's `error` field when the response carried one, a fixed
//! per-operation fallback otherwise. Transport details go to the console,
//! never to the screen.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "hydrate"))]
use super::types::ErrorBody;
use super::types::{Identity, SendEmailRequest};
use crate::util::backend;

/// Shown when the identity fetch fails without a server-supplied message.
pub const FETCH_IDENTITY_FALLBACK: &str = "Failed to fetch user info";
/// Shown when logout fails without a server-supplied message.
pub const LOGOUT_FALLBACK: &str = "Failed to log out";
/// Shown when the email send fails without a server-supplied message.
pub const SEND_EMAIL_FALLBACK: &str = "Failed to send email";

/// Pick the user-facing message for a failed exchange: the backend's
/// `error` field when present and non-blank, else the fallback.
#[cfg(any(test, feature = "hydrate"))]
fn error_from_body(body: &str, fallback: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.error)
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| fallback.to_owned())
}

#[cfg(feature = "hydrate")]
async fn failure_message(resp: gloo_net::http::Response, fallback: &str) -> String {
    let body = resp.text().await.unwrap_or_default();
    error_from_body(&body, fallback)
}

/// Fetch the signed-in identity from the backend root endpoint.
///
/// # Errors
///
/// Returns a display-ready message when the backend rejects the call or is
/// unreachable; callers treat any error as "no session".
pub async fn fetch_identity() -> Result<Identity, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = backend::endpoint("/");
        let resp = gloo_net::http::Request::get(&url)
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| {
                leptos::logging::warn!("identity fetch failed: {e}");
                FETCH_IDENTITY_FALLBACK.to_owned()
            })?;
        if !resp.ok() {
            return Err(failure_message(resp, FETCH_IDENTITY_FALLBACK).await);
        }
        resp.json::<Identity>().await.map_err(|e| {
            leptos::logging::warn!("identity response did not decode: {e}");
            FETCH_IDENTITY_FALLBACK.to_owned()
        })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(FETCH_IDENTITY_FALLBACK.to_owned())
    }
}

/// URL of the backend login endpoint. Login is a full-page navigation into
/// the backend's OAuth flow, not an API call.
pub fn login_url() -> String {
    backend::endpoint("/login")
}

/// Navigate the browser to the backend login flow. No-op on the server.
pub fn redirect_to_login() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(&login_url());
        }
    }
}

/// End the backend session via its logout endpoint.
///
/// # Errors
///
/// Returns a display-ready message when the backend rejects the call; the
/// session should be treated as still alive in that case.
pub async fn logout() -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let url = backend::endpoint("/logout");
        let resp = gloo_net::http::Request::get(&url)
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| {
                leptos::logging::warn!("logout failed: {e}");
                LOGOUT_FALLBACK.to_owned()
            })?;
        if !resp.ok() {
            return Err(failure_message(resp, LOGOUT_FALLBACK).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(LOGOUT_FALLBACK.to_owned())
    }
}

/// Submit a draft email to the backend send endpoint.
///
/// # Errors
///
/// Returns a display-ready message when the payload cannot be encoded, the
/// request fails in transit, or the backend responds non-2xx.
pub async fn send_email(draft: &SendEmailRequest) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let url = backend::endpoint("/send-email");
        let resp = gloo_net::http::Request::post(&url)
            .credentials(web_sys::RequestCredentials::Include)
            .json(draft)
            .map_err(|e| {
                leptos::logging::warn!("send-email payload failed to encode: {e}");
                SEND_EMAIL_FALLBACK.to_owned()
            })?
            .send()
            .await
            .map_err(|e| {
                leptos::logging::warn!("send-email failed: {e}");
                SEND_EMAIL_FALLBACK.to_owned()
            })?;
        if !resp.ok() {
            return Err(failure_message(resp, SEND_EMAIL_FALLBACK).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = draft;
        Err(SEND_EMAIL_FALLBACK.to_owned())
    }
}
