use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use crate::domain::Review;
use crate::error::Result;

/// Trait for storing and retrieving reviews
#[async_trait]
pub trait ReviewStore: Send + Sync {
    /// Persists the review, filling in a generated id when absent, and
    /// returns the stored entity.
    async fn save(&self, review: Review) -> Result<Review>;
    async fn get_all(&self) -> Result<Vec<Review>>;
    async fn find_by_movie_info_id(&self, movie_info_id: &str) -> Result<Vec<Review>>;
    async fn get_by_id(&self, id: &str) -> Result<Option<Review>>;
    async fn delete(&self, id: &str) -> Result<()>;
}

/// In-memory implementation of ReviewStore
pub struct InMemoryReviewStore {
    reviews: DashMap<String, Review>,
}

impl InMemoryReviewStore {
    pub fn new() -> Self {
        Self {
            reviews: DashMap::new(),
        }
    }
}

impl Default for InMemoryReviewStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReviewStore for InMemoryReviewStore {
    async fn save(&self, mut review: Review) -> Result<Review> {
        let id = review
            .review_id
            .clone()
            .unwrap_or_else(|| Uuid::new_v4().to_string());
        review.review_id = Some(id.clone());
        self.reviews.insert(id, review.clone());
        Ok(review)
    }

    async fn get_all(&self) -> Result<Vec<Review>> {
        Ok(self.reviews.iter().map(|entry| entry.clone()).collect())
    }

    async fn find_by_movie_info_id(&self, movie_info_id: &str) -> Result<Vec<Review>> {
        Ok(self
            .reviews
            .iter()
            .filter(|entry| entry.movie_info_id.as_deref() == Some(movie_info_id))
            .map(|entry| entry.clone())
            .collect())
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Review>> {
        Ok(self.reviews.get(id).map(|entry| entry.clone()))
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.reviews.remove(id);
        Ok(())
    }
}
