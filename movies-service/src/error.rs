use axum::http::StatusCode;
use thiserror::Error;

/// Classified outcome of a single downstream call.
///
/// The classification happens at the point the HTTP status is inspected, so
/// retry eligibility is a plain pattern match on the variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The resource does not exist upstream (HTTP 404).
    #[error("not found")]
    NotFound,
    /// The request was rejected by the downstream (4xx other than 404).
    /// Carries the downstream response body.
    #[error("{0}")]
    Client(String),
    /// The downstream failed internally (5xx) or was unreachable.
    /// Carries the downstream response body or transport message.
    #[error("{0}")]
    Server(String),
}

impl FetchError {
    /// Only server-side failures are worth another attempt.
    pub fn is_retryable(&self) -> bool {
        matches!(self, FetchError::Server(_))
    }
}

/// Caller-facing failure of a whole aggregation request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AggregateError {
    #[error("There is no MovieInfo Available for the passed in Id : {0}")]
    MovieInfoNotFound(String),
    /// A downstream rejected the request; the body is propagated verbatim.
    #[error("{0}")]
    Client(String),
    #[error("Server Exception in Movie Info Service {0}")]
    MovieInfoServer(String),
    #[error("Server Exception in Movie Reviews Service {0}")]
    ReviewsServer(String),
}

impl AggregateError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AggregateError::MovieInfoNotFound(_) => StatusCode::NOT_FOUND,
            AggregateError::Client(_) => StatusCode::BAD_REQUEST,
            AggregateError::MovieInfoServer(_) | AggregateError::ReviewsServer(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}
