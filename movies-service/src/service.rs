use std::sync::Arc;

use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::aggregate::MovieAggregator;
use crate::domain::Movie;

#[derive(Clone)]
pub struct AppState {
    pub aggregator: Arc<MovieAggregator>,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/v1/movies/{id}", get(get_movie_by_id))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

/// Failures carry the classified status and the caller-facing message as a
/// plain text body.
async fn get_movie_by_id(
    State(state): State<AppState>,
    Path(movie_id): Path<String>,
) -> Result<Json<Movie>, (StatusCode, String)> {
    info!(%movie_id, "retrieving movie");

    match state.aggregator.aggregate(&movie_id).await {
        Ok(movie) => Ok(Json(movie)),
        Err(err) => {
            error!(%movie_id, error = %err, "aggregation failed");
            Err((err.status_code(), err.to_string()))
        }
    }
}
