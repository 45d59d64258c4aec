//! Response normalization shared by every resource client
//!
//! Turns a raw `reqwest::Response` into either a JSON value or a classified
//! [`ClientError`]. The expected shape of the call decides what an empty
//! success body means; everything else is the same for every endpoint.

use reqwest::Response;
use serde::{Deserialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::{debug, error, warn};

use crate::error::{ClientError, ClientResult};

/// Shape the caller expects from a successful response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expect {
    /// A JSON array; an empty body means an empty collection
    Collection,
    /// One item; an empty body means the item is missing
    Single,
    /// A confirmation message; an empty body is a bare success
    Acknowledgment,
}

/// Normalize a completed response
///
/// Non-2xx statuses always fail with [`ClientError::Http`] and the body is
/// never decoded. `Ok(None)` is only produced for an empty or `null` acknowledgment.
pub async fn normalize(response: Response, expect: Expect) -> ClientResult<Option<Value>> {
    let status = response.status();
    let url = response.url().to_string();
    debug!(
        status = status.as_u16(),
        headers = ?response.headers(),
        %url,
        "Received response"
    );

    if !status.is_success() {
        let body = match response.text().await {
            Ok(text) => {
                if !text.is_empty() {
                    error!(status = status.as_u16(), body = %text, "API error response");
                }
                Some(text)
            }
            Err(e) => {
                warn!("Failed to read error response body: {}", e);
                None
            }
        };

        return Err(ClientError::http(status, body));
    }

    let text = response.text().await?;
    decode_body(&text, expect, &url)
}

/// Apply the success-path body rules to already read text
pub fn decode_body(text: &str, expect: Expect, url: &str) -> ClientResult<Option<Value>> {
    debug!(raw = %text, "Raw response text");

    if text.is_empty() {
        return match expect {
            Expect::Collection => {
                debug!("Empty response body, returning empty collection");
                Ok(Some(Value::Array(Vec::new())))
            }
            Expect::Single => Err(ClientError::EmptyBody {
                url: url.to_string(),
            }),
            Expect::Acknowledgment => Ok(None),
        };
    }

    let parsed: Value = serde_json::from_str(text).map_err(|e| {
        error!("Failed to parse JSON response: {}", e);
        ClientError::Decode {
            raw: text.to_string(),
            source: e,
        }
    })?;

    debug!(is_array = parsed.is_array(), "Parsed response");

    // A `null` acknowledgment carries no more than an empty one
    if expect == Expect::Acknowledgment && parsed.is_null() {
        return Ok(None);
    }

    Ok(Some(parsed))
}

/// Convert a normalized value into a sequence, never failing on odd shapes
///
/// Absent, `null` and non-array values all become an empty `Vec`. Elements
/// that do not match `T` are a decode failure.
pub fn into_collection<T: DeserializeOwned>(value: Option<Value>) -> ClientResult<Vec<T>> {
    match value {
        Some(Value::Array(items)) => from_value(Value::Array(items)),
        None | Some(Value::Null) => {
            debug!("API returned no collection, returning empty list");
            Ok(Vec::new())
        }
        Some(other) => {
            warn!(response = %other, "API returned non-array response");
            Ok(Vec::new())
        }
    }
}

/// Convert a normalized value into a single item
pub fn into_single<T: DeserializeOwned>(value: Option<Value>, url: &str) -> ClientResult<T> {
    match value {
        Some(value) => from_value(value),
        None => Err(ClientError::EmptyBody {
            url: url.to_string(),
        }),
    }
}

fn from_value<T: DeserializeOwned>(value: Value) -> ClientResult<T> {
    T::deserialize(&value).map_err(|e| {
        error!("Response does not match the expected type: {}", e);
        ClientError::Decode {
            raw: value.to_string(),
            source: e,
        }
    })
}
