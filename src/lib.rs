//! Fluent assertions for received HTTP responses.
//!
//! ```rust
//! use std::sync::Arc;
//! use http_expect::{PanicReporter, RawResponse, Response};
//!
//! # fn main() -> Result<(), http_expect::ExpectError> {
//! let raw = RawResponse::new(200)
//!     .header("Content-Type", "application/json; charset=utf-8")?
//!     .with_body(r#"{"key": "value"}"#);
//!
//! let resp = Response::new(Arc::new(PanicReporter), raw);
//! resp.status(200).content_type_json();
//! resp.json().object().value("key").string().equal("value");
//! # Ok(())
//! # }
//! ```
pub mod chain;
pub mod config;
pub mod errors;
pub mod net;
pub mod reporter;
pub mod response;
pub mod status;
pub mod value;

pub use chain::Chain;
pub use config::{ExpectConfig, ExpectConfigBuilder, ExpectConfigError};
pub use errors::ExpectError;
pub use net::RawResponse;
pub use reporter::{LogReporter, NoopReporter, PanicReporter, RecordingReporter, Reporter, ReporterHandle};
pub use response::Response;
pub use status::StatusRange;
pub use value::{ArrayValue, BooleanValue, HeadersValue, JsonValue, NumberValue, ObjectValue, StringValue};
