//! Handlers for the `/films` resource.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use filmstore_core::film::parse_minimum_duration;
use filmstore_core::types::RecordId;
use filmstore_db::models::film::{CreateFilm, Film, FilmListParams, ReplaceFilm, UpdateFilm};
use filmstore_db::repositories::FilmRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiPath};
use crate::state::AppState;

/// GET /films
///
/// `?minimum-duration=N` keeps films of at least N minutes. A negative value
/// is rejected here and never reaches the repository.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<FilmListParams>,
) -> AppResult<Json<Vec<Film>>> {
    let min_duration = parse_minimum_duration(params.minimum_duration.as_deref())?;
    let films = FilmRepo::list(&state.store, min_duration).await;
    Ok(Json(films))
}

/// GET /films/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<RecordId>,
) -> AppResult<Json<Film>> {
    let film = FilmRepo::find_by_id(&state.store, id)
        .await
        .ok_or(AppError::Core(FilmRepo::not_found(id)))?;
    Ok(Json(film))
}

/// POST /films
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateFilm>,
) -> AppResult<(StatusCode, Json<Film>)> {
    let film = FilmRepo::create(&state.store, &input).await?;

    tracing::info!(film_id = film.id, title = %film.title, "Film created");

    Ok((StatusCode::CREATED, Json(film)))
}

/// PATCH /films/{id}
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<RecordId>,
    ApiJson(input): ApiJson<UpdateFilm>,
) -> AppResult<Json<Film>> {
    let film = FilmRepo::update(&state.store, id, &input)
        .await
        .ok_or(AppError::Core(FilmRepo::not_found(id)))?;

    tracing::info!(film_id = id, "Film updated");

    Ok(Json(film))
}

/// PUT /films/{id}
///
/// 200 when an existing film was replaced, 201 when the id was new.
pub async fn replace(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<RecordId>,
    ApiJson(input): ApiJson<ReplaceFilm>,
) -> AppResult<(StatusCode, Json<Film>)> {
    let outcome = FilmRepo::replace(&state.store, id, &input).await?;

    let film = outcome.film();
    let status = if outcome.is_created() {
        tracing::info!(film_id = film.id, title = %film.title, "Film created by replace");
        StatusCode::CREATED
    } else {
        tracing::info!(film_id = film.id, title = %film.title, "Film replaced");
        StatusCode::OK
    };

    Ok((status, Json(outcome.into_film())))
}

/// DELETE /films/{id}
pub async fn delete(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<RecordId>,
) -> AppResult<StatusCode> {
    if FilmRepo::delete(&state.store, id).await {
        tracing::info!(film_id = id, "Film deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(FilmRepo::not_found(id)))
    }
}
