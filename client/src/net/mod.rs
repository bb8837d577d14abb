//! Networking modules for the mail backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the credentialed HTTP exchanges and `types` defines the
//! wire schema they share. The backend's origin comes from `util::backend`.

pub mod api;
pub mod types;
