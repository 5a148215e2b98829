//! Error types for the request executor.
//!
//! # Design
//! Status failures carry the whole `ApiResult` so callers can inspect the
//! decoded body of an error response. Transport failures are passed through
//! untouched in `Error::Transport`; only the executor's own classification
//! produces `ApiError`.

use std::collections::BTreeMap;

use crate::response::ApiResult;
use crate::transport::TransportError;

/// Message used when a non-2xx status has no entry in the error table.
pub const GENERIC_ERROR: &str = "Generic Error";

const DEFAULT_ERRORS: [(u16, &str); 7] = [
    (400, "Bad Request"),
    (401, "Unauthorized"),
    (403, "Forbidden"),
    (404, "Not Found"),
    (500, "Internal Server Error"),
    (502, "Bad Gateway"),
    (503, "Service Unavailable"),
];

/// Failures produced by the executor itself.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The status has an entry in the effective error table.
    #[error("{message}")]
    Status {
        result: Box<ApiResult>,
        message: String,
    },

    /// The status is not 2xx and has no table entry.
    #[error("{message}")]
    Generic {
        result: Box<ApiResult>,
        message: String,
    },

    /// The structured request body could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl ApiError {
    /// The response that triggered the error, if one was received.
    pub fn result(&self) -> Option<&ApiResult> {
        match self {
            ApiError::Status { result, .. } | ApiError::Generic { result, .. } => Some(result),
            ApiError::Serialization(_) => None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        self.result().map(|result| result.status)
    }
}

/// Everything `RequestExecutor::execute` can fail with.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Transport(TransportError),
}

impl Error {
    pub fn as_api(&self) -> Option<&ApiError> {
        match self {
            Error::Api(e) => Some(e),
            Error::Transport(_) => None,
        }
    }
}

/// Status-to-message table: the defaults with per-request overrides on top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorTable {
    messages: BTreeMap<u16, String>,
}

impl Default for ErrorTable {
    fn default() -> Self {
        Self {
            messages: DEFAULT_ERRORS
                .iter()
                .map(|(status, message)| (*status, message.to_string()))
                .collect(),
        }
    }
}

impl ErrorTable {
    pub fn with_overrides(overrides: &BTreeMap<u16, String>) -> Self {
        let mut table = Self::default();
        for (status, message) in overrides {
            table.messages.insert(*status, message.clone());
        }
        table
    }

    /// Message for `status`. An empty override masks the default and counts
    /// as no entry.
    pub fn message(&self, status: u16) -> Option<&str> {
        self.messages
            .get(&status)
            .map(String::as_str)
            .filter(|message| !message.is_empty())
    }

    /// Turn `result` into an error when its status is in the table or it is
    /// not ok. A table entry wins even for a 2xx status.
    pub fn check(&self, result: ApiResult) -> Result<ApiResult, ApiError> {
        if let Some(message) = self.message(result.status) {
            return Err(ApiError::Status {
                message: message.to_string(),
                result: Box::new(result),
            });
        }
        if !result.ok {
            return Err(ApiError::Generic {
                result: Box::new(result),
                message: GENERIC_ERROR.to_string(),
            });
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::ResponseBody;

    fn result(status: u16) -> ApiResult {
        ApiResult {
            url: "http://localhost/pets".to_string(),
            ok: (200..300).contains(&status),
            status,
            status_text: String::new(),
            body: ResponseBody::Empty,
        }
    }

    #[test]
    fn default_table_maps_not_found() {
        let err = ErrorTable::default().check(result(404)).unwrap_err();
        assert_eq!(err.to_string(), "Not Found");
        assert_eq!(err.status(), Some(404));
        assert!(matches!(err, ApiError::Status { .. }));
    }

    #[test]
    fn override_replaces_default_message() {
        let overrides = BTreeMap::from([(404, "Missing".to_string())]);
        let err = ErrorTable::with_overrides(&overrides).check(result(404)).unwrap_err();
        assert_eq!(err.to_string(), "Missing");
    }

    #[test]
    fn override_on_success_status_still_fails() {
        let overrides = BTreeMap::from([(200, "Unexpected".to_string())]);
        let err = ErrorTable::with_overrides(&overrides).check(result(200)).unwrap_err();
        assert_eq!(err.to_string(), "Unexpected");
    }

    #[test]
    fn unknown_failure_status_is_generic() {
        let err = ErrorTable::default().check(result(418)).unwrap_err();
        assert!(matches!(err, ApiError::Generic { .. }));
        assert_eq!(err.to_string(), GENERIC_ERROR);
    }

    #[test]
    fn empty_override_masks_default() {
        let overrides = BTreeMap::from([(404, String::new())]);
        let table = ErrorTable::with_overrides(&overrides);
        assert_eq!(table.message(404), None);
        let err = table.check(result(404)).unwrap_err();
        assert!(matches!(err, ApiError::Generic { .. }));
    }

    #[test]
    fn ok_status_passes_through() {
        let ok = ErrorTable::default().check(result(201)).unwrap();
        assert_eq!(ok.status, 201);
    }

    #[test]
    fn every_default_status_has_a_message() {
        let table = ErrorTable::default();
        for (status, message) in DEFAULT_ERRORS {
            assert_eq!(table.message(status), Some(message));
        }
    }
}
