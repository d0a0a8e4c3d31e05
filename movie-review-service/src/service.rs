use std::sync::Arc;

use axum::{
    Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
};
use serde::Deserialize;
use tracing::{error, info};

use crate::domain::Review;
use crate::store::ReviewStore;

type ApiError = (StatusCode, String);

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ReviewStore>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReviewQuery {
    movie_info_id: Option<String>,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/v1/reviews", get(get_reviews).post(add_review))
        .route(
            "/v1/reviews/{id}",
            get(get_review_by_id).put(update_review).delete(delete_review),
        )
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

async fn add_review(
    State(state): State<AppState>,
    Json(review): Json<Review>,
) -> Result<(StatusCode, Json<Review>), ApiError> {
    review
        .validate()
        .map_err(|message| (StatusCode::BAD_REQUEST, message))?;

    let stored = state.store.save(review).await.map_err(storage_error)?;
    info!(review_id = ?stored.review_id, "review added");
    Ok((StatusCode::CREATED, Json(stored)))
}

/// Without a `movieInfoId` filter all reviews are returned; with one, the
/// possibly-empty list for that movie.
async fn get_reviews(
    State(state): State<AppState>,
    Query(query): Query<ReviewQuery>,
) -> Result<Json<Vec<Review>>, ApiError> {
    let reviews = match query.movie_info_id {
        Some(movie_info_id) => state.store.find_by_movie_info_id(&movie_info_id).await,
        None => state.store.get_all().await,
    }
    .map_err(storage_error)?;

    Ok(Json(reviews))
}

async fn get_review_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Review>, ApiError> {
    match state.store.get_by_id(&id).await.map_err(storage_error)? {
        Some(review) => Ok(Json(review)),
        None => Err((StatusCode::NOT_FOUND, String::new())),
    }
}

async fn update_review(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(update): Json<Review>,
) -> Result<Json<Review>, ApiError> {
    let Some(mut existing) = state.store.get_by_id(&id).await.map_err(storage_error)? else {
        return Err((StatusCode::NOT_FOUND, String::new()));
    };

    existing.comment = update.comment;
    existing.rating = update.rating;
    existing.movie_info_id = update.movie_info_id;

    let stored = state.store.save(existing).await.map_err(storage_error)?;
    Ok(Json(stored))
}

async fn delete_review(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.store.delete(&id).await.map_err(storage_error)?;
    Ok(StatusCode::NO_CONTENT)
}
