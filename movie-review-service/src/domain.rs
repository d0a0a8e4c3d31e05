use serde::{Deserialize, Serialize};

/// A user review tied to one movie-info id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub review_id: Option<String>,
    pub movie_info_id: Option<String>,
    pub comment: String,
    pub rating: f64,
}

impl Review {
    pub fn validate(&self) -> Result<(), String> {
        let mut messages = Vec::new();
        if self
            .movie_info_id
            .as_deref()
            .is_none_or(|id| id.trim().is_empty())
        {
            messages.push("review.movieInfoId : must not be null");
        }
        if self.rating < 0.0 {
            messages.push("rating.negative : rating is negative and please pass a non-negative value");
        }

        if messages.is_empty() {
            Ok(())
        } else {
            messages.sort_unstable();
            Err(messages.join(", "))
        }
    }
}
