//! Host router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This binary only delivers the UI: Leptos SSR routes, the compiled `/pkg`
//! assets, and a liveness probe. The mail backend is a separate service the
//! browser talks to directly; nothing here proxies it.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Listening port: `PORT` env var, else 3000 (the cargo-leptos site addr).
pub fn listen_port() -> u16 {
    parse_port(std::env::var("PORT").ok())
}

fn parse_port(raw: Option<String>) -> u16 {
    raw.and_then(|value| value.trim().parse().ok()).unwrap_or(3000)
}

/// Full host router: Leptos SSR plus `/pkg` assets plus `/healthz`.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[[workspace.metadata.leptos]]` section / environment).
pub fn host_app() -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    // Compiled WASM/CSS/JS under /pkg; anything else unmatched falls through
    // to the site root (favicon and friends).
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(Router::new()
        .route("/healthz", get(healthz))
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .fallback_service(ServeDir::new(&site_root_path))
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
