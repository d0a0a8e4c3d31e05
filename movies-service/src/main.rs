use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use movies_service::{
    AppConfig, AppState, MovieAggregator, MovieInfoClient, ReviewsClient, RetryPolicy,
    build_router,
};

/// Defensive per-call cap; the downstream contract itself defines no timeout
/// beyond retry exhaustion.
const DOWNSTREAM_TIMEOUT: Duration = Duration::from_secs(5);

/// Initialize structured tracing based on environment variables
fn init_tracing() {
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "movies_service=debug,tower_http=debug".into());

    match log_format.as_str() {
        "pretty" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_target(true)
                        .with_level(true),
                )
                .init();
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = AppConfig::from_env()?;
    info!(
        movie_info_url = %config.movie_info_url,
        reviews_url = %config.reviews_url,
        retry_max = config.retry_max,
        "starting movies service"
    );

    // One outbound client shared by both downstream clients.
    let http = reqwest::Client::builder()
        .timeout(DOWNSTREAM_TIMEOUT)
        .build()?;

    let aggregator = Arc::new(MovieAggregator::new(
        Arc::new(MovieInfoClient::new(http.clone(), config.movie_info_url)),
        Arc::new(ReviewsClient::new(http, config.reviews_url)),
        RetryPolicy::new(config.retry_max, config.retry_delay),
    ));

    let app = build_router(AppState { aggregator });

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    info!("Server running on http://0.0.0.0:{}", config.port);

    axum::serve(listener, app).await?;

    Ok(())
}
