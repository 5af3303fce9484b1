//! # idea-server
//!
//! HTTP API for the ideabox board.
//!
//! Public routes accept submissions and handle admin login; every route that
//! reads or changes submitted ideas requires an [`session::AdminSession`].
//!
//! | Route | Auth |
//! |---|---|
//! | `GET /health` | no |
//! | `POST /api/admin/login`, `POST /api/admin/logout`, `GET /api/admin/check` | no |
//! | `POST /api/ideas` | no |
//! | `GET /api/ideas`, `GET /api/ideas/export` | admin |
//! | `PUT /api/ideas/{id}/status`, `DELETE /api/ideas/{id}` | admin |
//!
//! Unmatched paths are served from the configured static directory.

pub mod error;
pub mod routes;
pub mod session;
pub mod state;

use std::future::Future;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::{delete, get, post, put},
};
use tokio::net::TcpListener;
use tower_cookies::CookieManagerLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

pub use state::AppState;

/// Build the application router.
pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE]);

    let static_files = ServeDir::new(&state.static_dir);

    Router::new()
        .route("/health", get(routes::health::health))
        .route("/api/admin/login", post(routes::admin::login))
        .route("/api/admin/logout", post(routes::admin::logout))
        .route("/api/admin/check", get(routes::admin::check))
        .route(
            "/api/ideas",
            post(routes::ideas::submit).get(routes::ideas::list),
        )
        .route("/api/ideas/export", get(routes::ideas::export))
        .route("/api/ideas/{id}/status", put(routes::ideas::update_status))
        .route("/api/ideas/{id}", delete(routes::ideas::delete))
        .fallback_service(static_files)
        .layer(CookieManagerLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Bind `addr` and serve until `shutdown` resolves.
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails.
pub async fn serve<F>(state: Arc<AppState>, addr: &str, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let secure_cookies = state.secure_cookies;
    let app = create_router(state);

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Server running on {addr}");
    if secure_cookies {
        info!("Production mode: secure cookies enabled");
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .context("server terminated with an error")?;

    info!("Server shut down");
    Ok(())
}
