//! Generic request executor called by every generated operation.
//!
//! # Design
//! `RequestExecutor` holds only an immutable `Config` and a transport and
//! carries no state between calls. A call is split into `build_request`
//! (descriptor to `HttpRequest`) and `parse_response` (`HttpResponse` to
//! `ApiResult`), both pure; `execute` runs the single network round-trip
//! between them.

use crate::config::Config;
use crate::error::{ApiError, Error, ErrorTable};
use crate::http::{HttpBody, HttpRequest, HttpResponse};
use crate::request::{RequestBody, RequestDescriptor};
use crate::response::{self, ApiResult, ResponseBody};
use crate::transport::{ReqwestTransport, Transport};
use crate::url;

/// Executes `RequestDescriptor`s against the configured base URL.
#[derive(Debug, Clone)]
pub struct RequestExecutor<T = ReqwestTransport> {
    config: Config,
    transport: T,
}

impl RequestExecutor<ReqwestTransport> {
    pub fn new(config: Config) -> Self {
        Self::with_transport(config, ReqwestTransport::new())
    }
}

impl<T: Transport> RequestExecutor<T> {
    pub fn with_transport(config: Config, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Send `descriptor` and classify the response.
    ///
    /// Transport failures are returned as `Error::Transport` without
    /// modification. Status failures follow `ErrorTable::check`.
    pub async fn execute(&self, descriptor: &RequestDescriptor) -> Result<ApiResult, Error> {
        let request = self.build_request(descriptor)?;
        let url = request.url.clone();
        tracing::debug!(target: "apigen::http", method = %request.method, url = %url, "sending request");

        let response = self
            .transport
            .send(request)
            .await
            .map_err(Error::Transport)?;
        tracing::debug!(target: "apigen::http", url = %url, status = response.status, "response received");

        Ok(self.parse_response(url, &response, descriptor)?)
    }

    /// Assemble the URL, headers, and body for `descriptor`.
    pub fn build_request(&self, descriptor: &RequestDescriptor) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: descriptor.method,
            url: url::build_url(&self.config.base_url, &descriptor.path, &descriptor.query),
            headers: self.build_headers(descriptor),
            body: build_body(descriptor)?,
        })
    }

    /// `Accept: application/json`, then caller headers, then the bearer
    /// token, then an inferred `Content-Type` for the body.
    pub fn build_headers(&self, descriptor: &RequestDescriptor) -> Vec<(String, String)> {
        let mut headers = vec![("Accept".to_string(), "application/json".to_string())];
        for (name, value) in &descriptor.headers {
            match headers.iter_mut().find(|(key, _)| key.eq_ignore_ascii_case(name)) {
                Some(existing) => existing.1 = value.clone(),
                None => headers.push((name.clone(), value.clone())),
            }
        }

        if let Some(token) = self.config.bearer_token() {
            headers.push(("Authorization".to_string(), format!("Bearer {token}")));
        }

        if descriptor.form_data.is_none() {
            if let Some(content_type) = descriptor.body.as_ref().and_then(content_type_for) {
                headers.push(("Content-Type".to_string(), content_type));
            }
        }

        headers
    }

    /// Decode `response` and apply the descriptor's error table.
    ///
    /// A requested response header replaces the decoded body when it is
    /// present and non-empty.
    pub fn parse_response(
        &self,
        url: String,
        response: &HttpResponse,
        descriptor: &RequestDescriptor,
    ) -> Result<ApiResult, ApiError> {
        let decoded = response::decode_body(response);
        let body = descriptor
            .response_header
            .as_deref()
            .and_then(|name| response::header_text(response, name))
            .map(ResponseBody::Text)
            .unwrap_or(decoded);

        let result = ApiResult {
            url,
            ok: response.is_ok(),
            status: response.status,
            status_text: response.status_text.clone(),
            body,
        };

        ErrorTable::with_overrides(&descriptor.errors).check(result)
    }
}

fn content_type_for(body: &RequestBody) -> Option<String> {
    if !body.is_present() {
        return None;
    }
    match body {
        RequestBody::Binary { content_type, .. } => content_type.clone().filter(|ct| !ct.is_empty()),
        RequestBody::Text(_) => Some("text/plain".to_string()),
        RequestBody::Json(_) => Some("application/json".to_string()),
    }
}

fn build_body(descriptor: &RequestDescriptor) -> Result<Option<HttpBody>, ApiError> {
    if let Some(fields) = &descriptor.form_data {
        let fields = fields
            .iter()
            .filter(|(_, value)| !value.is_null())
            .map(|(key, value)| (key.clone(), url::scalar_text(value)))
            .collect();
        return Ok(Some(HttpBody::Form(fields)));
    }

    let Some(body) = descriptor.body.as_ref().filter(|body| body.is_present()) else {
        return Ok(None);
    };

    let encoded = match body {
        RequestBody::Binary { data, .. } => HttpBody::Bytes(data.clone()),
        RequestBody::Text(text) => HttpBody::Text(text.clone()),
        RequestBody::Json(value) => HttpBody::Text(
            serde_json::to_string(value).map_err(|e| ApiError::Serialization(e.to_string()))?,
        ),
    };
    Ok(Some(encoded))
}
