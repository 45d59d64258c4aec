use anyhow::Result;
use common::ApiConfig;
use resources::{ApiClient, Resource, ResourceClient};
use tracing::{Level, error, info, info_span};
use tracing_subscriber::EnvFilter;

/// Probe a resource and list its collection
async fn report<R: Resource>(client: &ResourceClient<R>) -> Result<usize> {
    if !client.test_connection().await {
        error!(probe_path = client.probe_path(), "{} endpoint is unreachable", R::NAME);
    }

    let items = client.list().await?;
    info!("{}: {} items", R::NAME, items.len());
    Ok(items.len())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(Level::INFO.as_str())),
        )
        .init();

    let config = ApiConfig::from_env()?;
    info!("Checking resource server at {}", config.base_url);

    let api = ApiClient::new(&config)?;
    let essays = api.essays.with_span(info_span!("console", resource = "essays"));
    let narratives = api
        .narratives
        .with_span(info_span!("console", resource = "narratives"));

    let (essays, narratives) = tokio::join!(report(&essays), report(&narratives));
    let total = essays? + narratives?;

    info!("Resource server holds {} items in total", total);

    Ok(())
}
