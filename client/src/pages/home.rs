//! The single screen: greeting and compose form when signed in, the login
//! control otherwise, a placeholder while the session check is in flight.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::components::compose_form::ComposeForm;
use crate::components::login_panel::LoginPanel;
use crate::components::session_header::SessionHeader;
use crate::state::session::SessionState;

/// Which face of the screen to render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Screen {
    /// Identity fetch still in flight; neither login nor compose yet.
    Checking,
    SignedIn,
    SignedOut,
}

fn screen_for(state: &SessionState) -> Screen {
    if state.loading {
        Screen::Checking
    } else if state.is_signed_in() {
        Screen::SignedIn
    } else {
        Screen::SignedOut
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let session_state = expect_context::<RwSignal<SessionState>>();

    view! {
        <main class="home-page">
            <h1 class="home-page__title">"Welcome to the Google OAuth App"</h1>
            {move || match screen_for(&session_state.get()) {
                Screen::Checking => view! {
                    <p class="home-page__checking">"Checking session..."</p>
                }
                .into_any(),
                Screen::SignedIn => view! {
                    <div class="home-page__session">
                        <SessionHeader/>
                        <ComposeForm/>
                    </div>
                }
                .into_any(),
                Screen::SignedOut => view! { <LoginPanel/> }.into_any(),
            }}
        </main>
    }
}
