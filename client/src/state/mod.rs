//! Shared application state provided through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` tracks the backend-reported identity, `notice` the outcome line
//! for the most recent operation. Both are provided as `RwSignal`s from the
//! app root so any component can read or replace them.

pub mod notice;
pub mod session;
