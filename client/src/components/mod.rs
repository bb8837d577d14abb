//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the three faces of the screen (checking, signed out,
//! signed in) while reading/writing shared state from Leptos context
//! providers.

pub mod compose_form;
pub mod login_panel;
pub mod notice_line;
pub mod session_header;
