//! Common library for the essay and narrative API clients
//!
//! This crate provides the pieces shared by every resource client: client
//! configuration, the classified error type, response normalization and the
//! connectivity probe.

pub mod config;
pub mod error;
pub mod normalizer;
pub mod probe;

pub use config::{ApiConfig, DEFAULT_API_BASE_URL};
pub use error::{ClientError, ClientResult};
pub use normalizer::Expect;

/// Example usage of the normalizer with a plain reqwest client
///
/// ```rust,no_run
/// use common::{ApiConfig, Expect, normalizer};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let base = ApiConfig::from_env()?.parse_base_url()?;
///     let response = reqwest::get(format!("{}/essays", base)).await?;
///     let value = normalizer::normalize(response, Expect::Collection).await?;
///     let titles: Vec<serde_json::Value> = normalizer::into_collection(value)?;
///     println!("{} essays", titles.len());
///     Ok(())
/// }
/// ```
pub fn example_usage() {}
