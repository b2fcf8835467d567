pub mod entities;
pub mod health;

use axum::{Router, routing::get};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::common::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        health::healthz,
        entities::list_entities,
        entities::create_entity,
    ),
    components(
        schemas(
            entities::CreateEntityRequest,
            entities::EntityResponse,
            health::HealthResponse,
            health::HealthComponents,
            health::ComponentHealth,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "entities", description = "Stored entity identifiers"),
    ),
    info(
        title = "Entity API",
        description = "Minimal entity API demonstrating automatic database reconnection",
        version = "0.1.0"
    )
)]
struct ApiDoc;

pub fn build_router(state: AppState) -> Router {
    let entity_routes = Router::new()
        .route(
            "/entities",
            get(entities::list_entities).post(entities::create_entity),
        )
        .layer(RequestBodyLimitLayer::new(64 * 1024)); // 64KB body limit

    // Health check routes (no request bodies, no limit)
    let health_routes = Router::new()
        .route("/health", get(health::health))
        .route("/healthz", get(health::healthz));

    // OpenAPI documentation
    let docs_routes = Router::new().merge(Scalar::with_url("/docs", ApiDoc::openapi()));

    // Combine all routes
    Router::new()
        .merge(entity_routes)
        .merge(health_routes)
        .merge(docs_routes)
        .layer(CompressionLayer::new())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
