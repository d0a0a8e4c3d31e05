pub mod aggregate;
pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod retry;
pub mod service;

pub use aggregate::MovieAggregator;
pub use client::{MovieInfoClient, MovieInfoSource, ReviewsClient, ReviewsSource};
pub use config::AppConfig;
pub use domain::{Movie, MovieInfo, Review};
pub use error::{AggregateError, FetchError};
pub use retry::RetryPolicy;
pub use service::{AppState, build_router};
