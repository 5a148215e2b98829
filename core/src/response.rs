//! Response decoding and the result handed back to generated operations.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::http::HttpResponse;

/// How a response payload is turned into a `ResponseBody`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeStrategy {
    Json,
    Text,
}

impl DecodeStrategy {
    /// Pick a strategy from a `Content-Type` value.
    ///
    /// The media type is compared case-insensitively and parameters such as
    /// `charset` are ignored.
    pub fn from_content_type(content_type: &str) -> Self {
        let media_type = content_type.split(';').next().unwrap_or_default().trim();
        if media_type.eq_ignore_ascii_case("application/json") {
            DecodeStrategy::Json
        } else {
            DecodeStrategy::Text
        }
    }
}

/// Decoded payload of a response.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ResponseBody {
    /// Nothing usable: no content type or a JSON decode failure.
    #[default]
    Empty,
    Text(String),
    Json(Value),
}

impl ResponseBody {
    pub fn is_empty(&self) -> bool {
        matches!(self, ResponseBody::Empty)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ResponseBody::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            ResponseBody::Json(value) => Some(value),
            _ => None,
        }
    }
}

/// Outcome of one executed request.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResult {
    pub url: String,
    pub ok: bool,
    pub status: u16,
    pub status_text: String,
    pub body: ResponseBody,
}

impl ApiResult {
    /// Deserialize a JSON body into `T`. Returns `None` when the body is not
    /// JSON or does not match `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Option<T> {
        self.body
            .as_json()
            .and_then(|value| serde_json::from_value(value.clone()).ok())
    }
}

/// Decode `response` according to its `Content-Type`.
///
/// A missing content type yields `Empty`. A JSON decode failure is logged and
/// also yields `Empty`; it never fails the call. Text is decoded lossily.
pub fn decode_body(response: &HttpResponse) -> ResponseBody {
    let Some(content_type) = response.header("content-type") else {
        return ResponseBody::Empty;
    };

    match DecodeStrategy::from_content_type(content_type) {
        DecodeStrategy::Json => match serde_json::from_slice(&response.body) {
            Ok(value) => ResponseBody::Json(value),
            Err(e) => {
                tracing::warn!(target: "apigen::http", status = response.status, "failed to decode JSON response body: {e}");
                ResponseBody::Empty
            }
        },
        DecodeStrategy::Text => ResponseBody::Text(String::from_utf8_lossy(&response.body).into_owned()),
    }
}

/// Value of the requested response header, if present and non-empty.
pub fn header_text(response: &HttpResponse, name: &str) -> Option<String> {
    response
        .header(name)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
