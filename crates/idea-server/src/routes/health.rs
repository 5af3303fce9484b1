use axum::Json;
use idea_core::responses::HealthResponse;

/// Liveness probe for hosting platforms.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
