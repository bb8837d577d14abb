//! Root application component with routing, context providers, and the
//! one-shot session bootstrap.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::home::HomePage;
use crate::state::notice::Notice;
use crate::state::session::SessionState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session and notice contexts, kicks off the single
/// credentialed identity fetch for this page view, and mounts the router.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session_state = RwSignal::new(SessionState::new());
    let notice = RwSignal::new(None::<Notice>);

    provide_context(session_state);
    provide_context(notice);

    // One identity fetch per page view; the outcome replaces the session
    // picture wholesale and ends the loading window.
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_identity().await;
        let mut state = session_state.get_untracked();
        let next = crate::state::session::apply_bootstrap_outcome(&mut state, result);
        session_state.set(state);
        notice.set(next);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/sendbox.css"/>
        <Title text="Sendbox"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
