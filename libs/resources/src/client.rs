//! Generic CRUD client for a single resource

use std::{future::Future, marker::PhantomData};

use common::{
    ApiConfig, ClientError, ClientResult, Expect,
    normalizer::{into_collection, into_single, normalize},
    probe::probe,
};
use reqwest::{Client, Url};
use tracing::{Instrument, Span, error, info, info_span};

use crate::{
    models::{DeleteAcknowledgment, ItemRequest},
    resource::Resource,
};

/// CRUD client for one resource type
///
/// Every call is a single request/response exchange. Diagnostics are
/// emitted inside the client's span, which callers may replace with
/// [`ResourceClient::with_span`].
pub struct ResourceClient<R: Resource> {
    http: Client,
    base_url: Url,
    probe_path: String,
    span: Span,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource> Clone for ResourceClient<R> {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            base_url: self.base_url.clone(),
            probe_path: self.probe_path.clone(),
            span: self.span.clone(),
            _resource: PhantomData,
        }
    }
}

impl<R: Resource> std::fmt::Debug for ResourceClient<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceClient")
            .field("resource", &R::NAME)
            .field("base_url", &self.base_url.as_str())
            .field("probe_path", &self.probe_path)
            .finish()
    }
}

impl<R: Resource> ResourceClient<R> {
    /// Create a new client with its own HTTP transport
    pub fn new(config: &ApiConfig) -> ClientResult<Self> {
        Self::with_client(Client::builder().build()?, config)
    }

    /// Create a new client on top of an existing HTTP transport
    pub fn with_client(http: Client, config: &ApiConfig) -> ClientResult<Self> {
        Ok(Self {
            http,
            base_url: config.parse_base_url()?,
            probe_path: R::PROBE_PATH.to_string(),
            span: info_span!("resource_client", resource = R::NAME),
            _resource: PhantomData,
        })
    }

    /// Replace the span that all diagnostics of this client are recorded in
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Replace the path targeted by [`ResourceClient::test_connection`]
    pub fn with_probe_path(mut self, path: impl Into<String>) -> Self {
        self.probe_path = path.into();
        self
    }

    /// Path currently targeted by [`ResourceClient::test_connection`]
    pub fn probe_path(&self) -> &str {
        &self.probe_path
    }

    /// Test API connectivity
    pub async fn test_connection(&self) -> bool {
        let url = match join(&self.base_url, &self.probe_path, None) {
            Ok(url) => url,
            Err(e) => {
                error!(parent: &self.span, "Cannot build probe URL: {}", e);
                return false;
            }
        };

        probe(&self.http, url).instrument(self.span.clone()).await
    }

    /// Get all items; never yields anything but a sequence on success
    pub async fn list(&self) -> ClientResult<Vec<R::Item>> {
        self.traced(format!("fetch {}", R::NAME), async {
            let url = self.endpoint(None)?;
            info!(%url, "Fetching all {}", R::NAME);

            let response = self.http.get(url).send().await?;
            let value = normalize(response, Expect::Collection).await?;
            let items: Vec<R::Item> = into_collection(value)?;

            info!(count = items.len(), "Successfully fetched {}", R::NAME);
            Ok::<_, ClientError>(items)
        })
        .await
    }

    /// Get a single item by ID
    pub async fn get(&self, id: &str) -> ClientResult<R::Item> {
        self.traced(format!("fetch {} {}", R::NAME, id), async {
            let url = self.endpoint(Some(id))?;
            info!(%id, "Fetching {} by ID", R::NAME);

            let response = self.http.get(url.clone()).send().await?;
            let value = normalize(response, Expect::Single).await?;
            into_single(value, url.as_str())
        })
        .await
    }

    /// Create a new item
    pub async fn create(&self, payload: &ItemRequest) -> ClientResult<R::Item> {
        self.traced(format!("create {} item", R::NAME), async {
            let url = self.endpoint(None)?;
            info!(title = %payload.title, "Creating new {} item", R::NAME);

            let response = self.http.post(url.clone()).json(payload).send().await?;
            let value = normalize(response, Expect::Single).await?;
            into_single(value, url.as_str())
        })
        .await
    }

    /// Update an existing item
    pub async fn update(&self, id: &str, payload: &ItemRequest) -> ClientResult<R::Item> {
        self.traced(format!("update {} {}", R::NAME, id), async {
            let url = self.endpoint(Some(id))?;
            info!(%id, title = %payload.title, "Updating {} item", R::NAME);

            let response = self.http.put(url.clone()).json(payload).send().await?;
            let value = normalize(response, Expect::Single).await?;
            into_single(value, url.as_str())
        })
        .await
    }

    /// Delete an item
    ///
    /// Returns `None` when the server confirms with an empty or `null` body.
    pub async fn delete(&self, id: &str) -> ClientResult<Option<DeleteAcknowledgment>> {
        self.traced(format!("delete {} {}", R::NAME, id), async {
            let url = self.endpoint(Some(id))?;
            info!(%id, "Deleting {} item", R::NAME);

            let response = self.http.delete(url.clone()).send().await?;
            let value = normalize(response, Expect::Acknowledgment).await?;
            value
                .map(|value| into_single(Some(value), url.as_str()))
                .transpose()
        })
        .await
    }

    fn endpoint(&self, id: Option<&str>) -> ClientResult<Url> {
        join(&self.base_url, R::PATH, id)
    }

    /// Run an operation inside the client span, logging any failure before
    /// handing it back to the caller
    async fn traced<T>(
        &self,
        action: String,
        operation: impl Future<Output = ClientResult<T>>,
    ) -> ClientResult<T> {
        async move {
            operation
                .await
                .inspect_err(|e| error!("Failed to {}: {}", action, e))
        }
        .instrument(self.span.clone())
        .await
    }
}

/// Append a slash separated path and an optional ID segment to the base URL
///
/// The ID is always a single percent-encoded segment.
fn join(base: &Url, path: &str, id: Option<&str>) -> ClientResult<Url> {
    let mut url = base.clone();
    {
        let mut segments = url.path_segments_mut().map_err(|_| {
            ClientError::Configuration(format!("Base URL cannot carry resource paths: {}", base))
        })?;
        segments
            .pop_if_empty()
            .extend(path.split('/').filter(|segment| !segment.is_empty()));
        if let Some(id) = id {
            segments.push(id);
        }
    }
    Ok(url)
}
