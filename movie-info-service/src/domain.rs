use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Movie metadata owned by this service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieInfo {
    pub movie_info_id: Option<String>,
    pub name: String,
    pub year: i32,
    pub cast: Vec<String>,
    pub release_date: NaiveDate,
}

impl MovieInfo {
    /// Field checks applied before persisting. Messages are sorted and
    /// comma-joined so responses are deterministic.
    pub fn validate(&self) -> Result<(), String> {
        let mut messages = Vec::new();
        if self.name.trim().is_empty() {
            messages.push("movieInfo.name must be present");
        }
        if self.year <= 0 {
            messages.push("movieInfo.year must be a Positive Value");
        }
        if self.cast.is_empty() || self.cast.iter().any(|member| member.trim().is_empty()) {
            messages.push("movieInfo.cast must be present");
        }

        if messages.is_empty() {
            Ok(())
        } else {
            messages.sort_unstable();
            Err(messages.join(", "))
        }
    }
}
