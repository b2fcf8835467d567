use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;
use utoipa::ToSchema;

use crate::common::AppState;

const UP: &str = "up";
const DOWN: &str = "down";

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub components: HealthComponents,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthComponents {
    pub database: ComponentHealth,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ComponentHealth {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Aggregate health, including database connectivity
///
/// Pings the connection pool: 200 while the database answers, 503 once it
/// does not. The pool re-establishes connections on its own, so the status
/// recovers without intervention when the database comes back.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service and database are healthy", body = HealthResponse),
        (status = 503, description = "Database is unreachable", body = HealthResponse),
    ),
    tag = "health"
)]
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    match state.db.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: UP.to_string(),
                components: HealthComponents {
                    database: ComponentHealth {
                        status: UP.to_string(),
                        detail: None,
                    },
                },
            }),
        ),
        Err(e) => {
            tracing::error!("Database ping failed: {e}");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: DOWN.to_string(),
                    components: HealthComponents {
                        database: ComponentHealth {
                            status: DOWN.to_string(),
                            detail: Some(e.to_string()),
                        },
                    },
                }),
            )
        }
    }
}

/// Liveness probe
///
/// Returns 200 OK while the process is running, regardless of database
/// state. Suitable for Kubernetes probes.
#[utoipa::path(
    get,
    path = "/healthz",
    responses(
        (status = 200, description = "Service is running"),
    ),
    tag = "health"
)]
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}
