pub mod embed;
pub mod error;
pub mod render;
pub mod routes;
pub mod state;

use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Build the axum Router with the page, API routes and middleware.
/// Used by `serve()` and available for integration testing.
pub fn build_router() -> anyhow::Result<Router> {
    let app_state = state::AppState::new()?;

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Ok(Router::new()
        // HTML
        .route("/", get(routes::day::today_page))
        .route("/date/{date}", get(routes::day::date_page))
        // JSON
        .route("/api/today", get(routes::day::today_json))
        .route("/api/date/{date}", get(routes::day::date_json))
        .route("/api/rules", get(routes::rules::list_rules))
        .fallback(embed::static_handler)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state))
}

/// Start the server on `host:port`.
pub async fn serve(host: &str, port: u16, open_browser: bool) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind((host, port)).await?;
    serve_on(listener, open_browser).await
}

/// Start the server on a pre-bound listener.
///
/// The caller can read the actual port before starting (useful when
/// `port = 0` and the OS picks a free port).
pub async fn serve_on(listener: tokio::net::TcpListener, open_browser: bool) -> anyhow::Result<()> {
    let addr = listener.local_addr()?;
    let app = build_router()?;

    tracing::info!("tachanun server listening on http://{addr}");

    if open_browser {
        let url = format!("http://localhost:{}", addr.port());
        if let Err(e) = open::that(&url) {
            tracing::warn!(error = %e, "failed to open browser");
        }
    }

    axum::serve(listener, app).await?;
    Ok(())
}
