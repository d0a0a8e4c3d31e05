use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use crate::domain::MovieInfo;
use crate::error::Result;

/// Trait for storing and retrieving movie metadata
#[async_trait]
pub trait MovieInfoStore: Send + Sync {
    /// Persists the movie, filling in a generated id when absent, and returns
    /// the stored entity.
    async fn save(&self, movie_info: MovieInfo) -> Result<MovieInfo>;
    async fn get_all(&self) -> Result<Vec<MovieInfo>>;
    async fn get_by_year(&self, year: i32) -> Result<Vec<MovieInfo>>;
    async fn get_by_id(&self, id: &str) -> Result<Option<MovieInfo>>;
    async fn delete(&self, id: &str) -> Result<()>;
}

/// In-memory implementation of MovieInfoStore
pub struct InMemoryMovieInfoStore {
    movies: DashMap<String, MovieInfo>,
}

impl InMemoryMovieInfoStore {
    pub fn new() -> Self {
        Self {
            movies: DashMap::new(),
        }
    }
}

impl Default for InMemoryMovieInfoStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MovieInfoStore for InMemoryMovieInfoStore {
    async fn save(&self, mut movie_info: MovieInfo) -> Result<MovieInfo> {
        let id = movie_info
            .movie_info_id
            .clone()
            .unwrap_or_else(|| Uuid::new_v4().to_string());
        movie_info.movie_info_id = Some(id.clone());
        self.movies.insert(id, movie_info.clone());
        Ok(movie_info)
    }

    async fn get_all(&self) -> Result<Vec<MovieInfo>> {
        Ok(self.movies.iter().map(|entry| entry.clone()).collect())
    }

    async fn get_by_year(&self, year: i32) -> Result<Vec<MovieInfo>> {
        Ok(self
            .movies
            .iter()
            .filter(|entry| entry.year == year)
            .map(|entry| entry.clone())
            .collect())
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<MovieInfo>> {
        Ok(self.movies.get(id).map(|entry| entry.clone()))
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.movies.remove(id);
        Ok(())
    }
}
