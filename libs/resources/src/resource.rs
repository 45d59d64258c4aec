//! Resource definitions
//!
//! A resource is fully described by its item type, its collection path and
//! the path its connectivity probe targets.

use serde::de::DeserializeOwned;

use crate::models::{Essay, Narrative};

/// A server-managed collection reachable under the API base URL
pub trait Resource {
    /// Item type returned by list/get/create/update
    type Item: DeserializeOwned + Send;

    /// Plural name used in diagnostics
    const NAME: &'static str;
    /// Collection path relative to the base URL
    const PATH: &'static str;
    /// Default connectivity probe path relative to the base URL
    const PROBE_PATH: &'static str;
}

/// The `/essays` resource
#[derive(Debug, Clone, Copy)]
pub struct Essays;

impl Resource for Essays {
    type Item = Essay;

    const NAME: &'static str = "essays";
    const PATH: &'static str = "/essays";
    const PROBE_PATH: &'static str = "/essays";
}

/// The `/narratives` resource
#[derive(Debug, Clone, Copy)]
pub struct Narratives;

impl Resource for Narratives {
    type Item = Narrative;

    const NAME: &'static str = "narratives";
    const PATH: &'static str = "/narratives";
    const PROBE_PATH: &'static str = "/health";
}
