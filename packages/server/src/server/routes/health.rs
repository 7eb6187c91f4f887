use axum::{extract::Extension, http::StatusCode, Json};
use serde::Serialize;

use crate::server::app::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    message: String,
    database: &'static str,
}

/// Health check endpoint
///
/// Returns 200 with `status: "UP"` when the database answers `SELECT 1`
/// within five seconds, 503 with `status: "DOWN"` otherwise.
pub async fn health_handler(
    Extension(state): Extension<AppState>,
) -> (StatusCode, Json<HealthResponse>) {
    let db_check = tokio::time::timeout(
        std::time::Duration::from_secs(5),
        sqlx::query("SELECT 1").execute(&state.db_pool),
    )
    .await;

    let failure = match db_check {
        Ok(Ok(_)) => None,
        Ok(Err(e)) => Some(format!("Query failed: {}", e)),
        Err(_) => Some("Query timeout (>5s)".to_string()),
    };

    match failure {
        None => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "UP",
                message: "Backend is running".to_string(),
                database: "ok",
            }),
        ),
        Some(error) => {
            tracing::warn!(error = %error, "Health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "DOWN",
                    message: "Database unavailable".to_string(),
                    database: "error",
                }),
            )
        }
    }
}
