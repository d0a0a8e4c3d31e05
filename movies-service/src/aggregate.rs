use std::sync::Arc;

use tracing::info;

use crate::client::{MovieInfoSource, ReviewsSource};
use crate::domain::Movie;
use crate::error::{AggregateError, FetchError};
use crate::retry::RetryPolicy;

/// Composes one movie's metadata with its reviews from two independent
/// downstream services.
///
/// Both fetches run concurrently under the retry policy. Movie info is
/// mandatory: any info failure fails the aggregation regardless of the
/// reviews outcome. Reviews are optional content: an upstream "not found"
/// degrades to an empty list.
pub struct MovieAggregator {
    info: Arc<dyn MovieInfoSource>,
    reviews: Arc<dyn ReviewsSource>,
    retry: RetryPolicy,
}

impl MovieAggregator {
    pub fn new(
        info: Arc<dyn MovieInfoSource>,
        reviews: Arc<dyn ReviewsSource>,
        retry: RetryPolicy,
    ) -> Self {
        Self {
            info,
            reviews,
            retry,
        }
    }

    pub async fn aggregate(&self, movie_id: &str) -> Result<Movie, AggregateError> {
        // The two fetches share no state and have no ordering dependency.
        let info_fut = self.retry.run(|| self.info.fetch(movie_id));
        let reviews_fut = self.retry.run(|| self.reviews.fetch(movie_id));
        let (info_result, reviews_result) = tokio::join!(info_fut, reviews_fut);

        // Info failure wins over whatever happened on the reviews side.
        let movie_info = info_result.map_err(|err| match err {
            FetchError::NotFound => AggregateError::MovieInfoNotFound(movie_id.to_string()),
            FetchError::Client(msg) => AggregateError::Client(msg),
            FetchError::Server(msg) => AggregateError::MovieInfoServer(msg),
        })?;

        let review_list = match reviews_result {
            Ok(reviews) => reviews,
            Err(FetchError::NotFound) => Vec::new(),
            Err(FetchError::Client(msg)) => return Err(AggregateError::Client(msg)),
            Err(FetchError::Server(msg)) => return Err(AggregateError::ReviewsServer(msg)),
        };

        info!(
            %movie_id,
            reviews = review_list.len(),
            "aggregated movie response"
        );

        Ok(Movie {
            movie_info,
            review_list,
        })
    }
}
