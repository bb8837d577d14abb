//! Backend origin resolution.
//!
//! The mail backend is an opaque collaborator on a fixed origin; everything
//! here is about producing absolute URLs for it. The origin can be swapped
//! at build time with `SENDBOX_BACKEND_URL` for deployments where the
//! backend is not on the default local port.

#[cfg(test)]
#[path = "backend_test.rs"]
mod backend_test;

/// Backend origin used when `SENDBOX_BACKEND_URL` is unset at build time.
pub const DEFAULT_BACKEND_URL: &str = "https://localhost:3001";

/// The backend origin compiled into this build.
pub fn backend_url() -> &'static str {
    option_env!("SENDBOX_BACKEND_URL").unwrap_or(DEFAULT_BACKEND_URL)
}

/// Absolute URL for a backend path.
pub fn endpoint(path: &str) -> String {
    join(backend_url(), path)
}

/// Join origin and path, tolerating stray slashes on either side. The
/// backend's identity endpoint is the bare origin, so an empty path maps to
/// `{origin}/`.
fn join(origin: &str, path: &str) -> String {
    let origin = origin.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{origin}/{path}")
}
