//! Signed-in header: greeting plus the logout control.

#[cfg(test)]
#[path = "session_header_test.rs"]
mod session_header_test;

use leptos::prelude::*;

use crate::net::types::Identity;
use crate::state::notice::Notice;
use crate::state::session::SessionState;

/// Greeting line for the signed-in identity.
fn greeting(identity: &Identity) -> String {
    format!("Hello, {} ({})", identity.name, identity.email)
}

/// Header shown while an identity is present.
///
/// Logout only drops the identity once the backend confirms it; a failed
/// logout leaves the signed-in view up with the error on the notice line.
#[component]
pub fn SessionHeader() -> impl IntoView {
    let session_state = expect_context::<RwSignal<SessionState>>();
    let notice = expect_context::<RwSignal<Option<Notice>>>();

    let greeting_text = move || {
        session_state
            .get()
            .identity
            .as_ref()
            .map(greeting)
            .unwrap_or_default()
    };

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::logout().await;
            let mut state = session_state.get_untracked();
            let next = crate::state::session::apply_logout_outcome(&mut state, result);
            session_state.set(state);
            notice.set(next);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &notice;
        }
    };

    view! {
        <header class="session-header">
            <h2 class="session-header__greeting">{greeting_text}</h2>
            <button class="session-header__logout" on:click=on_logout>
                "Logout"
            </button>
        </header>
    }
}
