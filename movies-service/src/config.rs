use std::time::Duration;

use anyhow::Context;

/// Runtime configuration, read once from the environment at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the movie-info service, e.g. `http://localhost:8080/v1/movieinfos`.
    pub movie_info_url: String,
    /// Base URL of the movie-review service, e.g. `http://localhost:8081/v1/reviews`.
    pub reviews_url: String,
    /// Additional attempts after the first, for transient server failures.
    pub retry_max: u32,
    /// Fixed pause between consecutive attempts.
    pub retry_delay: Duration,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let movie_info_url = std::env::var("MOVIE_INFO_URL")
            .unwrap_or_else(|_| "http://localhost:8080/v1/movieinfos".to_string());
        let reviews_url = std::env::var("REVIEWS_URL")
            .unwrap_or_else(|_| "http://localhost:8081/v1/reviews".to_string());

        let retry_max = env_parse("RETRY_MAX", 3u32)?;
        let retry_delay_ms = env_parse("RETRY_DELAY_MS", 1000u64)?;
        let port = env_parse("PORT", 8082u16)?;

        Ok(Self {
            movie_info_url,
            reviews_url,
            retry_max,
            retry_delay: Duration::from_millis(retry_delay_ms),
            port,
        })
    }
}

fn env_parse<T: std::str::FromStr>(name: &str, default: T) -> anyhow::Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(name) {
        Ok(value) => value
            .parse::<T>()
            .with_context(|| format!("invalid value for {name}: {value}")),
        Err(_) => Ok(default),
    }
}
