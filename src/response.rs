//! Entry point of the assertion DSL.
//!
//! A [`Response`] wraps one [`RawResponse`] together with a [`Chain`]. Its
//! checks (`status`, `no_content`, `content_type_json`, ...) fail the
//! response's own chain. Its accessors (`headers`, `header`, `body`, `json`)
//! build a fresh wrapper on every call, each with a clone of the chain taken
//! *after* the accessor's own preconditions were checked.
//!
//! The body stream is drained at most once, on first use, and the bytes are
//! cached for every later accessor.
use std::cell::{Cell, OnceCell};
use std::fmt;
use std::io::Read;
use std::sync::Arc;

use serde_json::Value;

use crate::chain::Chain;
use crate::config::ExpectConfig;
use crate::errors::ExpectError;
use crate::net::{BodyReader, MediaType, RawResponse};
use crate::reporter::ReporterHandle;
use crate::status::StatusRange;
use crate::value::{HeadersValue, JsonValue, StringValue};

const JSON_MEDIA_TYPE: &str = "application/json";

/// How the `charset` parameter of a `Content-Type` is checked.
enum CharsetRule<'a> {
    /// No constraint.
    Any,
    /// Absent, or equal to `utf-8` ignoring case.
    AbsentOrUtf8,
    /// Present and equal to the given name ignoring case.
    Require(&'a str),
}

pub struct Response {
    chain: Chain,
    raw: RawResponse,
    /// Body stream until it is drained.
    pending: Cell<Option<BodyReader>>,
    /// Drained body, or the message of the read error.
    content: OnceCell<Result<Vec<u8>, String>>,
}

impl Response {
    /// Wraps `raw` with the default [`ExpectConfig`].
    pub fn new(reporter: ReporterHandle, raw: RawResponse) -> Self {
        Self::with_config(reporter, raw, ExpectConfig::default())
    }

    pub fn with_config(reporter: ReporterHandle, mut raw: RawResponse, config: ExpectConfig) -> Self {
        let pending = raw.body.take();
        Self {
            chain: Chain::new(reporter, Arc::new(config)),
            raw,
            pending: Cell::new(pending),
            content: OnceCell::new(),
        }
    }

    /// The wrapped response. Its `body` is always `None` here: the stream
    /// belongs to this `Response` and is read through [`Response::body`].
    pub fn raw(&self) -> &RawResponse {
        &self.raw
    }

    pub fn is_failed(&self) -> bool {
        self.chain.is_failed()
    }

    pub fn status(&self, expected: u16) -> &Self {
        self.chain.check(
            || self.raw.status == expected,
            || format!(
                "expected status {expected}, got {} {}{}",
                self.raw.status,
                self.raw.status_text,
                self.location()
            ),
        );
        self
    }

    pub fn status_range(&self, expected: StatusRange) -> &Self {
        self.chain.check(
            || expected.contains(self.raw.status),
            || format!(
                "expected status in range {expected}, got {} {}{}",
                self.raw.status,
                self.raw.status_text,
                self.location()
            ),
        );
        self
    }

    pub fn headers(&self) -> HeadersValue {
        HeadersValue::new(self.chain.clone(), &self.raw.headers)
    }

    /// First value of header `name` (case-insensitive). A missing header
    /// yields an empty string and is not a failure by itself.
    pub fn header(&self, name: &str) -> StringValue {
        StringValue::new(self.chain.clone(), self.header_value(name).unwrap_or_default())
    }

    /// Body as text. Invalid UTF-8 is replaced, a read error fails the chain
    /// and yields an empty string.
    pub fn body(&self) -> StringValue {
        let text = match self.content() {
            Ok(bytes) => String::from_utf8_lossy(bytes).into_owned(),
            Err(message) => {
                self.chain.check(|| false, || message.to_string());
                String::new()
            }
        };
        StringValue::new(self.chain.clone(), text)
    }

    /// Succeeds if the body is empty and `Content-Type` is absent or empty.
    pub fn no_content(&self) -> &Self {
        if self.chain.is_failed() {
            return self;
        }

        let content_type = self.header_value("content-type").unwrap_or_default();
        let ok = self.chain.check(
            || content_type.is_empty(),
            || format!("expected empty Content-Type header, got {content_type:?}"),
        );
        if !ok {
            return self;
        }

        match self.content() {
            Ok(bytes) => {
                self.chain.check(
                    || bytes.is_empty(),
                    || format!(
                        "expected empty body, got {:?}",
                        self.chain.preview(&String::from_utf8_lossy(bytes))
                    ),
                );
            }
            Err(message) => self.chain.fail(message),
        }
        self
    }

    /// Succeeds if the media type is exactly `application/json` and the
    /// `charset` parameter, if present, is `utf-8`.
    pub fn content_type_json(&self) -> &Self {
        self.check_content_type(JSON_MEDIA_TYPE, CharsetRule::AbsentOrUtf8);
        self
    }

    /// Succeeds if the media type is exactly `media_type`. When `charset` is
    /// given, the `charset` parameter must be present and match it ignoring case.
    pub fn content_type(&self, media_type: &str, charset: Option<&str>) -> &Self {
        let rule = match charset {
            Some(charset) => CharsetRule::Require(charset),
            None => CharsetRule::Any,
        };
        self.check_content_type(media_type, rule);
        self
    }

    /// Decoded body. Requires a JSON content type and a valid JSON body;
    /// otherwise the chain fails and the returned value is absent.
    pub fn json(&self) -> JsonValue {
        let value = self.decode_json();
        JsonValue::new(self.chain.clone(), value)
    }

    fn decode_json(&self) -> Option<Value> {
        if !self.check_content_type(JSON_MEDIA_TYPE, CharsetRule::AbsentOrUtf8) {
            return None;
        }

        let bytes = match self.content() {
            Ok(bytes) => bytes,
            Err(message) => {
                self.chain.fail(message);
                return None;
            }
        };

        match serde_json::from_slice(bytes) {
            Ok(value) => Some(value),
            Err(e) => {
                self.chain.fail(ExpectError::JsonDecode(e).to_string());
                None
            }
        }
    }

    fn check_content_type(&self, expected: &str, charset: CharsetRule<'_>) -> bool {
        if self.chain.is_failed() {
            return false;
        }

        let header = self.header_value("content-type").unwrap_or_default();
        if header.is_empty() {
            self.chain.fail(format!("expected Content-Type {expected:?}, but header is missing"));
            return false;
        }

        let media_type = match MediaType::parse(&header) {
            Ok(media_type) => media_type,
            Err(e) => {
                self.chain.fail(e.to_string());
                return false;
            }
        };

        if !self.chain.check(
            || media_type.essence == expected,
            || format!("expected Content-Type {expected:?}, got {:?}", media_type.essence),
        ) {
            return false;
        }

        let actual = media_type.charset();
        match charset {
            CharsetRule::Any => true,
            CharsetRule::AbsentOrUtf8 => self.chain.check(
                || actual.map_or(true, |c| c.eq_ignore_ascii_case("utf-8")),
                || format!("expected charset \"utf-8\" in Content-Type, got {:?}", actual.unwrap_or_default()),
            ),
            CharsetRule::Require(wanted) => self.chain.check(
                || actual.is_some_and(|c| c.eq_ignore_ascii_case(wanted)),
                || match actual {
                    Some(c) => format!("expected charset {wanted:?} in Content-Type, got {c:?}"),
                    None => format!("expected charset {wanted:?} in Content-Type, but it has none"),
                },
            ),
        }
    }

    fn header_value(&self, name: &str) -> Option<String> {
        self.raw
            .headers
            .get(name)
            .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
    }

    fn content(&self) -> Result<&[u8], &str> {
        self.content
            .get_or_init(|| drain(self.pending.take()).map_err(|e| e.to_string()))
            .as_ref()
            .map(Vec::as_slice)
            .map_err(String::as_str)
    }

    fn location(&self) -> String {
        match &self.raw.url {
            Some(url) => format!(" from {url}"),
            None => String::new(),
        }
    }
}

impl fmt::Debug for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Response")
            .field("chain", &self.chain)
            .field("raw", &self.raw)
            .field("body_read", &self.content.get().is_some())
            .finish()
    }
}

/// Reads the body to the end and closes it. A missing body is empty.
fn drain(reader: Option<BodyReader>) -> Result<Vec<u8>, ExpectError> {
    let Some(mut reader) = reader else {
        log::trace!("response has no body");
        return Ok(Vec::new());
    };

    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    log::trace!("drained {} body bytes", bytes.len());
    Ok(bytes)
}
