pub mod auth;
pub mod error;
pub mod routes;
pub mod state;

use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use standup_core::config::{Config, JiraSettings};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Build the axum Router with all API routes and middleware.
/// Used by `serve()` and available for integration testing.
pub fn build_router(settings: JiraSettings, passphrase: Option<String>) -> Router {
    let app_state = state::AppState::new(settings, passphrase);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/issues", get(routes::list_issues))
        .route("/api/users", get(routes::list_users))
        .route("/api/sprint-url", get(routes::sprint_url))
        .route("/api/health", get(routes::health))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .layer(middleware::from_fn_with_state(
            app_state.clone(),
            auth::require_session,
        ))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

/// Start the standup API server.
pub async fn serve(config: Config) -> anyhow::Result<()> {
    if !config.jira.is_configured() {
        tracing::warn!("tracker credentials not configured; API serves mock data");
    }
    if config.auth_passphrase.is_none() {
        tracing::warn!("AUTH_PASSPHRASE not set; login endpoint disabled, API unauthenticated");
    }

    let app = build_router(config.jira, config.auth_passphrase);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("standup API listening on http://localhost:{}", config.port);

    axum::serve(listener, app).await?;
    Ok(())
}
