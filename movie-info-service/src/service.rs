use std::sync::Arc;

use axum::{
    Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
};
use serde::Deserialize;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::domain::MovieInfo;
use crate::store::MovieInfoStore;

type ApiError = (StatusCode, String);

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn MovieInfoStore>,
}

#[derive(Debug, Deserialize)]
struct MovieInfoQuery {
    year: Option<i32>,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route(
            "/v1/movieinfos",
            get(get_all_movie_info).post(add_movie_info),
        )
        .route(
            "/v1/movieinfos/{id}",
            get(get_movie_info_by_id)
                .put(update_movie_info)
                .delete(delete_movie_info),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

fn storage_error(err: impl std::fmt::Display) -> ApiError {
    error!("storage failure: {}", err);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "storage failure".to_string(),
    )
}

async fn add_movie_info(
    State(state): State<AppState>,
    Json(movie_info): Json<MovieInfo>,
) -> Result<(StatusCode, Json<MovieInfo>), ApiError> {
    movie_info
        .validate()
        .map_err(|message| (StatusCode::BAD_REQUEST, message))?;

    let stored = state.store.save(movie_info).await.map_err(storage_error)?;
    info!(movie_info_id = ?stored.movie_info_id, "movie info added");
    Ok((StatusCode::CREATED, Json(stored)))
}

async fn get_all_movie_info(
    State(state): State<AppState>,
    Query(query): Query<MovieInfoQuery>,
) -> Result<Json<Vec<MovieInfo>>, ApiError> {
    let movies = match query.year {
        Some(year) => state.store.get_by_year(year).await,
        None => state.store.get_all().await,
    }
    .map_err(storage_error)?;

    Ok(Json(movies))
}

async fn get_movie_info_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MovieInfo>, ApiError> {
    match state.store.get_by_id(&id).await.map_err(storage_error)? {
        Some(movie_info) => Ok(Json(movie_info)),
        None => Err((StatusCode::NOT_FOUND, String::new())),
    }
}

async fn update_movie_info(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(update): Json<MovieInfo>,
) -> Result<Json<MovieInfo>, ApiError> {
    let Some(mut existing) = state.store.get_by_id(&id).await.map_err(storage_error)? else {
        return Err((StatusCode::NOT_FOUND, String::new()));
    };

    existing.name = update.name;
    existing.year = update.year;
    existing.cast = update.cast;
    existing.release_date = update.release_date;

    let stored = state.store.save(existing).await.map_err(storage_error)?;
    Ok(Json(stored))
}

async fn delete_movie_info(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.store.delete(&id).await.map_err(storage_error)?;
    Ok(StatusCode::NO_CONTENT)
}
