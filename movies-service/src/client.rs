use async_trait::async_trait;
use reqwest::{Response, StatusCode};
use tracing::debug;

use crate::domain::{MovieInfo, Review};
use crate::error::FetchError;

/// Read source for movie metadata.
#[async_trait]
pub trait MovieInfoSource: Send + Sync {
    async fn fetch(&self, movie_id: &str) -> Result<MovieInfo, FetchError>;
}

/// Read source for the reviews of one movie.
#[async_trait]
pub trait ReviewsSource: Send + Sync {
    async fn fetch(&self, movie_info_id: &str) -> Result<Vec<Review>, FetchError>;
}

/// HTTP client for the movie-info service.
pub struct MovieInfoClient {
    http: reqwest::Client,
    base_url: String,
}

impl MovieInfoClient {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl MovieInfoSource for MovieInfoClient {
    async fn fetch(&self, movie_id: &str) -> Result<MovieInfo, FetchError> {
        let url = format!("{}/{}", self.base_url, movie_id);
        let response = self.http.get(&url).send().await.map_err(transport_error)?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            debug!(%movie_id, "movie info not found upstream");
            return Err(FetchError::NotFound);
        }
        if status.is_client_error() {
            debug!(status = %status, "movie info fetch rejected");
            return Err(FetchError::Client(error_body(response).await));
        }
        if status.is_server_error() {
            debug!(status = %status, "movie info service failed");
            return Err(FetchError::Server(error_body(response).await));
        }

        response.json::<MovieInfo>().await.map_err(transport_error)
    }
}

/// HTTP client for the movie-review service.
pub struct ReviewsClient {
    http: reqwest::Client,
    base_url: String,
}

impl ReviewsClient {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl ReviewsSource for ReviewsClient {
    async fn fetch(&self, movie_info_id: &str) -> Result<Vec<Review>, FetchError> {
        let url = format!("{}?movieInfoId={}", self.base_url, movie_info_id);
        let response = self.http.get(&url).send().await.map_err(transport_error)?;
        let status = response.status();

        // A movie with no reviews is expected, not exceptional.
        if status == StatusCode::NOT_FOUND {
            debug!(%movie_info_id, "no reviews available upstream");
            return Ok(Vec::new());
        }
        if status.is_client_error() {
            debug!(status = %status, "reviews fetch rejected");
            return Err(FetchError::Client(error_body(response).await));
        }
        if status.is_server_error() {
            debug!(status = %status, "reviews service failed");
            return Err(FetchError::Server(error_body(response).await));
        }

        response.json::<Vec<Review>>().await.map_err(transport_error)
    }
}

/// The downstream's error body doubles as the caller-facing message.
async fn error_body(response: Response) -> String {
    response.text().await.unwrap_or_default()
}

/// Connection failures, timeouts and undecodable bodies are treated like a
/// downstream server fault so the retry policy gets a chance to mask them.
fn transport_error(err: reqwest::Error) -> FetchError {
    FetchError::Server(err.to_string())
}
