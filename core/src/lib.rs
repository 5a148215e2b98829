//! Request runtime shared by generated OpenAPI clients.
//!
//! # Overview
//! Every generated operation describes its call as a `RequestDescriptor` and
//! passes it to `RequestExecutor::execute`, which performs exactly one HTTP
//! round-trip and returns an `ApiResult` or a typed error.
//!
//! # Design
//! - `RequestExecutor` is stateless apart from an explicit `Config`; there is
//!   no process-wide base URL or token.
//! - Assembly (`build_request`) and interpretation (`parse_response`) are pure
//!   and public, so a host can run the I/O itself. `execute` glues them to a
//!   `Transport`, `reqwest` by default.
//! - Response payloads are decoded by `DecodeStrategy`, chosen from the
//!   `Content-Type` alone.
//! - Status failures are classified by `ErrorTable`: built-in messages for
//!   common statuses with per-request overrides on top.

pub mod config;
pub mod error;
pub mod executor;
pub mod http;
pub mod request;
pub mod response;
pub mod transport;
pub mod url;

pub use config::{Config, ConfigError};
pub use error::{ApiError, Error, ErrorTable};
pub use executor::RequestExecutor;
pub use http::{HttpBody, HttpMethod, HttpRequest, HttpResponse};
pub use request::{RequestBody, RequestDescriptor};
pub use response::{ApiResult, DecodeStrategy, ResponseBody};
pub use transport::{ReqwestTransport, Transport, TransportError};
