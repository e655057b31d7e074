//! Handlers for the `/movies` resource.

use axum::extract::State;
use axum::Json;
use casting_core::error::CoreError;
use casting_core::fields::{optional_text, required_text};
use casting_core::release_date::parse_release_date;
use casting_db::models::movie::{CreateMovie, UpdateMovie};
use casting_db::repositories::MovieRepo;
use chrono::NaiveDate;
use serde_json::{Map, Value};

use crate::error::{AppError, AppResult};
use crate::extract::{JsonBody, ResourceId};
use crate::middleware::rbac::{DeleteMovies, GetMovies, PatchMovies, PostMovies, Require};
use crate::response::{self, Resource};
use crate::state::AppState;

const ENTITY: &str = "Movie";

/// Read and parse `release_date` if it is provided.
fn optional_release_date(body: &Map<String, Value>) -> AppResult<Option<NaiveDate>> {
    match optional_text(body, "release_date")? {
        Some(text) => Ok(Some(parse_release_date(&text).map_err(CoreError::from)?)),
        None => Ok(None),
    }
}

/// GET /movies
///
/// An empty table is reported as 404, not as an empty list.
pub async fn list(_: Require<GetMovies>, State(state): State<AppState>) -> AppResult<Json<Value>> {
    let movies = MovieRepo::list(&state.pool).await?;
    if movies.is_empty() {
        return Err(AppError::Core(CoreError::EmptyCollection { entity: ENTITY }));
    }
    tracing::debug!(count = movies.len(), "Listed movies");
    Ok(response::listed(Resource::Movie, &movies))
}

/// POST /movies
///
/// `release_date` is `"YYYY M D"`.
pub async fn create(
    caller: Require<PostMovies>,
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> AppResult<Json<Value>> {
    let title = required_text(&body, "title")?;
    let release_date = optional_release_date(&body)?
        .ok_or_else(|| CoreError::Validation("release_date is required".into()))?;

    let input = CreateMovie {
        title,
        release_date,
    };
    let movie = MovieRepo::create(&state.pool, &input).await?;
    let total = MovieRepo::count(&state.pool).await?;
    tracing::info!(movie_id = movie.id, subject = ?caller.user().subject, "Created movie");

    Ok(response::created(Resource::Movie, movie.id, total))
}

/// PATCH /movies/{id}
///
/// All provided fields are validated before anything is written, so a bad
/// `release_date` leaves the title untouched too.
pub async fn update(
    ResourceId(id): ResourceId,
    caller: Require<PatchMovies>,
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> AppResult<Json<Value>> {
    MovieRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: ENTITY, id }))?;

    let input = UpdateMovie {
        title: optional_text(&body, "title")?,
        release_date: optional_release_date(&body)?,
    };

    let movie = MovieRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: ENTITY, id }))?;
    tracing::info!(movie_id = movie.id, subject = ?caller.user().subject, "Updated movie");

    Ok(response::updated(Resource::Movie, movie.id))
}

/// DELETE /movies/{id}
pub async fn delete(
    ResourceId(id): ResourceId,
    caller: Require<DeleteMovies>,
    State(state): State<AppState>,
) -> AppResult<Json<Value>> {
    if !MovieRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound { entity: ENTITY, id }));
    }
    let total = MovieRepo::count(&state.pool).await?;
    tracing::info!(movie_id = id, subject = ?caller.user().subject, "Deleted movie");

    Ok(response::deleted(Resource::Movie, id, total))
}
