//! Compose form posting the draft to the backend.
//!
//! DESIGN
//! ======
//! No client-side validation and no draft reset: fields go to the backend
//! exactly as typed, the outcome lands on the notice line, and the draft
//! stays put either way so a failed send can be retried as-is.

#[cfg(test)]
#[path = "compose_form_test.rs"]
mod compose_form_test;

use leptos::prelude::*;

use crate::components::notice_line::NoticeLine;
use crate::net::types::SendEmailRequest;
use crate::state::notice::Notice;

/// Confirmation shown after the backend accepts a send.
pub const SEND_EMAIL_SUCCESS: &str = "Email sent successfully";

/// Build the wire payload from the draft fields, verbatim. Empty strings
/// included; the backend does its own validation.
fn draft_payload(to_email: &str, subject: &str, html_body: &str) -> SendEmailRequest {
    SendEmailRequest {
        to_email: to_email.to_owned(),
        subject: subject.to_owned(),
        html_body: html_body.to_owned(),
    }
}

/// Notice for a completed send exchange.
fn send_outcome_notice(result: Result<(), String>) -> Notice {
    match result {
        Ok(()) => Notice::success(SEND_EMAIL_SUCCESS),
        Err(message) => Notice::error(message),
    }
}

/// Email compose form for the signed-in screen.
#[component]
pub fn ComposeForm() -> impl IntoView {
    let notice = expect_context::<RwSignal<Option<Notice>>>();

    let to_email = RwSignal::new(String::new());
    let subject = RwSignal::new(String::new());
    let html_body = RwSignal::new(String::new());

    let on_send = move |_| {
        let payload = draft_payload(&to_email.get(), &subject.get(), &html_body.get());
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::send_email(&payload).await;
            notice.set(Some(send_outcome_notice(result)));
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = payload;
            let _ = &notice;
        }
    };

    view! {
        <section class="compose-form">
            <h3 class="compose-form__title">"Send Email"</h3>
            <input
                class="compose-form__field"
                type="email"
                placeholder="Recipient's Email"
                prop:value=move || to_email.get()
                on:input=move |ev| to_email.set(event_target_value(&ev))
            />
            <input
                class="compose-form__field"
                type="text"
                placeholder="Subject"
                prop:value=move || subject.get()
                on:input=move |ev| subject.set(event_target_value(&ev))
            />
            <textarea
                class="compose-form__field compose-form__body"
                placeholder="HTML Body"
                prop:value=move || html_body.get()
                on:input=move |ev| html_body.set(event_target_value(&ev))
            ></textarea>
            <button class="compose-form__send" on:click=on_send>
                "Send Email"
            </button>
            <NoticeLine/>
        </section>
    }
}
