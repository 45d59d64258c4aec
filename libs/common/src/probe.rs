//! Connectivity probe
//!
//! Pure reachability: a success-range status means the server is up. The
//! body is never read and no failure escapes.

use reqwest::{Client, Url, header::ACCEPT};
use tracing::{error, info, warn};

/// Check whether `url` answers a GET with a success status
pub async fn probe(client: &Client, url: Url) -> bool {
    info!(%url, "Testing API connectivity");

    match client
        .get(url)
        .header(ACCEPT, "application/json")
        .send()
        .await
    {
        Ok(response) if response.status().is_success() => {
            info!(status = response.status().as_u16(), "API connection successful");
            true
        }
        Ok(response) => {
            warn!(
                status = response.status().as_u16(),
                "API responded but with error status"
            );
            false
        }
        Err(e) => {
            error!("API connection failed: {}", e);
            false
        }
    }
}
