//! Essay and narrative API clients
//!
//! One generic [`ResourceClient`] serves both resources; they differ only in
//! their collection path and the path their connectivity probe targets.

pub mod client;
pub mod models;
pub mod resource;

use common::{ApiConfig, ClientResult};
use reqwest::Client;

pub use client::ResourceClient;
pub use resource::{Essays, Narratives, Resource};

/// Client for the `/essays` resource
pub type EssayClient = ResourceClient<Essays>;

/// Client for the `/narratives` resource
pub type NarrativeClient = ResourceClient<Narratives>;

/// Both resource clients sharing one HTTP transport
#[derive(Debug, Clone)]
pub struct ApiClient {
    pub essays: EssayClient,
    pub narratives: NarrativeClient,
}

impl ApiClient {
    /// Create both clients from one configuration
    pub fn new(config: &ApiConfig) -> ClientResult<Self> {
        let http = Client::builder().build()?;

        Ok(Self {
            essays: EssayClient::with_client(http.clone(), config)?,
            narratives: NarrativeClient::with_client(http, config)?,
        })
    }
}
