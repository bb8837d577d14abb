//! Signed-out panel with the backend login control.

use leptos::prelude::*;

use crate::components::notice_line::NoticeLine;
use crate::net::api;

/// Login control shown once the identity fetch has resolved with no
/// session. Clicking hands the whole page to the backend's OAuth flow;
/// the identity is picked up by the bootstrap fetch after the provider
/// redirects back.
#[component]
pub fn LoginPanel() -> impl IntoView {
    view! {
        <div class="login-panel">
            <NoticeLine/>
            <a
                href=api::login_url()
                class="login-panel__button"
                on:click=move |ev| {
                    ev.prevent_default();
                    api::redirect_to_login();
                }
            >
                "Login with Google"
            </a>
        </div>
    }
}
