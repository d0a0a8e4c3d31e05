use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Movie metadata as served by the movie-info service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieInfo {
    pub movie_info_id: Option<String>,
    pub name: String,
    pub year: i32,
    pub cast: Vec<String>,
    pub release_date: NaiveDate,
}

/// A single review as served by the movie-review service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub review_id: Option<String>,
    pub movie_info_id: String,
    pub comment: String,
    pub rating: f64,
}

/// The aggregated response: one movie plus all of its reviews.
///
/// Only ever built with a present `MovieInfo`; a failed or empty review
/// lookup yields an empty `review_list`, never an absent `Movie`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub movie_info: MovieInfo,
    pub review_list: Vec<Review>,
}
