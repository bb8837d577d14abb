//! Single-line readout for the most recent operation outcome.

use leptos::prelude::*;

use crate::state::notice::Notice;

/// Renders the current notice, if any. Color comes from the variant class;
/// the slot collapses entirely when there is nothing to say.
#[component]
pub fn NoticeLine() -> impl IntoView {
    let notice = expect_context::<RwSignal<Option<Notice>>>();

    view! {
        <Show when=move || notice.get().is_some()>
            <p class=move || notice.get().map(|n| n.css_class()).unwrap_or_default()>
                {move || notice.get().map(|n| n.text().to_owned()).unwrap_or_default()}
            </p>
        </Show>
    }
}
