mod routes;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let port = routes::listen_port();

    let app = routes::host_app().expect("leptos host init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "sendbox host listening");
    axum::serve(listener, app).await.expect("server failed");
}
