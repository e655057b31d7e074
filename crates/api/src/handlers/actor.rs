//! Handlers for the `/actors` resource.

use axum::extract::State;
use axum::Json;
use casting_core::error::CoreError;
use casting_core::fields::{optional_text, required_text};
use casting_db::models::actor::{CreateActor, UpdateActor};
use casting_db::repositories::ActorRepo;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::extract::{JsonBody, ResourceId};
use crate::middleware::rbac::{DeleteActors, GetActors, PatchActors, PostActors, Require};
use crate::response::{self, Resource};
use crate::state::AppState;

const ENTITY: &str = "Actor";

/// GET /actors
///
/// An empty table is reported as 404, not as an empty list.
pub async fn list(_: Require<GetActors>, State(state): State<AppState>) -> AppResult<Json<Value>> {
    let actors = ActorRepo::list(&state.pool).await?;
    if actors.is_empty() {
        return Err(AppError::Core(CoreError::EmptyCollection { entity: ENTITY }));
    }
    tracing::debug!(count = actors.len(), "Listed actors");
    Ok(response::listed(Resource::Actor, &actors))
}

/// POST /actors
pub async fn create(
    caller: Require<PostActors>,
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> AppResult<Json<Value>> {
    let input = CreateActor {
        name: required_text(&body, "name")?,
        age: required_text(&body, "age")?,
        gender: required_text(&body, "gender")?,
    };

    let actor = ActorRepo::create(&state.pool, &input).await?;
    let total = ActorRepo::count(&state.pool).await?;
    tracing::info!(actor_id = actor.id, subject = ?caller.user().subject, "Created actor");

    Ok(response::created(Resource::Actor, actor.id, total))
}

/// PATCH /actors/{id}
///
/// Only truthy fields overwrite; omitted or falsy fields are left unchanged.
pub async fn update(
    ResourceId(id): ResourceId,
    caller: Require<PatchActors>,
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> AppResult<Json<Value>> {
    ActorRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: ENTITY, id }))?;

    let input = UpdateActor {
        name: optional_text(&body, "name")?,
        age: optional_text(&body, "age")?,
        gender: optional_text(&body, "gender")?,
    };

    let actor = ActorRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: ENTITY, id }))?;
    tracing::info!(actor_id = actor.id, subject = ?caller.user().subject, "Updated actor");

    Ok(response::updated(Resource::Actor, actor.id))
}

/// DELETE /actors/{id}
pub async fn delete(
    ResourceId(id): ResourceId,
    caller: Require<DeleteActors>,
    State(state): State<AppState>,
) -> AppResult<Json<Value>> {
    if !ActorRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound { entity: ENTITY, id }));
    }
    let total = ActorRepo::count(&state.pool).await?;
    tracing::info!(actor_id = id, subject = ?caller.user().subject, "Deleted actor");

    Ok(response::deleted(Resource::Actor, id, total))
}
