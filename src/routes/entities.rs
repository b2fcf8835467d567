use axum::{Json, extract::State, http::StatusCode};
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set, SqlErr};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::common::AppState;
use crate::entity::entities;
use crate::error::{AppError, AppResult};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateEntityRequest {
    pub id: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EntityResponse {
    pub id: String,
}

/// List all stored entity identifiers
#[utoipa::path(
    get,
    path = "/entities",
    responses(
        (status = 200, description = "Identifiers retrieved successfully", body = Vec<String>),
        (status = 503, description = "Database unreachable"),
    ),
    tag = "entities"
)]
pub async fn list_entities(State(state): State<AppState>) -> AppResult<Json<Vec<String>>> {
    tracing::debug!("Requested all entities");

    let rows = entities::Entity::find()
        .order_by_asc(entities::Column::Id)
        .all(&state.db)
        .await?;

    let ids: Vec<String> = rows.into_iter().map(|e| e.id).collect();

    Ok(Json(ids))
}

/// Store a new entity identifier
#[utoipa::path(
    post,
    path = "/entities",
    request_body = CreateEntityRequest,
    responses(
        (status = 201, description = "Entity created", body = EntityResponse),
        (status = 400, description = "Invalid identifier"),
        (status = 409, description = "Identifier already stored"),
        (status = 503, description = "Database unreachable"),
    ),
    tag = "entities"
)]
pub async fn create_entity(
    State(state): State<AppState>,
    Json(payload): Json<CreateEntityRequest>,
) -> AppResult<(StatusCode, Json<EntityResponse>)> {
    if payload.id.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Entity id must not be empty".to_string(),
        ));
    }

    let row = entities::ActiveModel {
        id: Set(payload.id),
    };

    match row.insert(&state.db).await {
        Ok(created) => {
            tracing::debug!(id = %created.id, "Created entity");
            Ok((StatusCode::CREATED, Json(EntityResponse { id: created.id })))
        }
        Err(e) => {
            if let Some(SqlErr::UniqueConstraintViolation(_)) = e.sql_err() {
                return Err(AppError::Conflict("Entity id already stored".to_string()));
            }
            Err(AppError::Database(e))
        }
    }
}
