//! Raw HTTP response record.
//!
//! This struct represents an HTTP response **as received** from whatever
//! transport the caller uses. It contains the final URL (if known), status
//! code + reason, response headers, and an optional body stream.
//!
//! ## Notes
//! - The body is an unread `Read` stream. [`Response`](crate::Response)
//!   drains it at most once, on first access, and caches the bytes.
//! - `headers` is an `http::HeaderMap`, which is **case-insensitive** for
//!   header names and keeps every value of a repeated header in order.
//! - `status_text` is derived from the status code’s canonical reason phrase
//!   and is `"Unknown"` for non-standard codes.
//!
use std::fmt;
use std::io::{Cursor, Read};

use http::header::{HeaderName, HeaderValue};
use http::{HeaderMap, StatusCode};
use url::Url;

use crate::errors::ExpectError;

/// A body stream that has not been read yet.
pub type BodyReader = Box<dyn Read + Send>;

/// Simple structure for received HTTP responses.
///
/// All fields reflect the **received** response as-is; no additional parsing
/// or transformation is performed by this type.
pub struct RawResponse {
    /// Final URL of the response (after redirects, if any), when the transport knows it.
    pub url: Option<Url>,

    /// Numeric HTTP status code (e.g., `200`, `404`).
    pub status: u16,

    /// Human-readable reason phrase (e.g., `"OK"`, `"Not Found"`).
    pub status_text: String,

    /// Response headers as a case-insensitive multimap.
    pub headers: HeaderMap,

    /// Unread body stream. `None` behaves like an empty body.
    pub body: Option<BodyReader>,
}

impl RawResponse {
    /// Creates a response with the given status, no headers and no body.
    pub fn new(status: u16) -> Self {
        Self {
            url: None,
            status,
            status_text: reason_phrase(status),
            headers: HeaderMap::new(),
            body: None,
        }
    }

    pub fn with_url(mut self, url: Url) -> Self {
        self.url = Some(url);
        self
    }

    /// Appends a header value. Repeated names keep all values in insertion order.
    pub fn header(mut self, name: &str, value: &str) -> Result<Self, ExpectError> {
        let name = HeaderName::from_bytes(name.as_bytes())?;
        let value = HeaderValue::from_str(value)?;
        self.headers.append(name, value);
        Ok(self)
    }

    /// Attaches an in-memory body.
    pub fn with_body(self, body: impl Into<Vec<u8>>) -> Self {
        self.with_body_reader(Cursor::new(body.into()))
    }

    /// Attaches a body stream that is read lazily.
    pub fn with_body_reader(mut self, reader: impl Read + Send + 'static) -> Self {
        self.body = Some(Box::new(reader));
        self
    }
}

impl<T: Into<Vec<u8>>> From<http::Response<T>> for RawResponse {
    fn from(response: http::Response<T>) -> Self {
        let (parts, body) = response.into_parts();
        let status = parts.status.as_u16();

        Self {
            url: None,
            status,
            status_text: reason_phrase(status),
            headers: parts.headers,
            body: Some(Box::new(Cursor::new(body.into()))),
        }
    }
}

impl fmt::Debug for RawResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawResponse")
            .field("url", &self.url.as_ref().map(Url::as_str))
            .field("status", &self.status)
            .field("status_text", &self.status_text)
            .field("headers", &self.headers)
            .field("body", &self.body.as_ref().map(|_| "<stream>"))
            .finish()
    }
}

fn reason_phrase(status: u16) -> String {
    StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .unwrap_or("Unknown")
        .to_string()
}
