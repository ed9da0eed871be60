//! Typed, read-only views over response data.
//!
//! Every wrapper carries its own [`Chain`]. Assertion methods take `&self`
//! and return `&Self`, so checks can be chained regardless of outcome:
//!
//! ```rust
//! # use std::sync::Arc;
//! # use http_expect::{RawResponse, RecordingReporter, Response};
//! let reporter = Arc::new(RecordingReporter::new());
//! let raw = RawResponse::new(200)
//!     .header("Content-Type", "application/json")?
//!     .with_body(r#"{"name": "foo", "tags": ["a", "b"]}"#);
//! let resp = Response::new(reporter.clone(), raw);
//!
//! let obj = resp.json().object();
//! obj.contains_key("name").value("name").string().equal("foo");
//! obj.value("tags").array().length().equal(2.0);
//!
//! assert_eq!(reporter.count(), 0);
//! # Ok::<(), http_expect::ExpectError>(())
//! ```
mod array;
mod boolean;
mod headers;
mod json;
mod number;
mod object;
mod string;

pub use array::ArrayValue;
pub use boolean::BooleanValue;
pub use headers::HeadersValue;
pub use json::JsonValue;
pub use number::NumberValue;
pub use object::ObjectValue;
pub use string::StringValue;

use serde::Serialize;
use serde_json::Value;

use crate::chain::Chain;
use crate::errors::ExpectError;

/// Serializes an expected value, failing the chain if that is impossible.
pub(crate) fn to_json<T: Serialize + ?Sized>(chain: &Chain, expected: &T) -> Option<Value> {
    match serde_json::to_value(expected) {
        Ok(value) => Some(value),
        Err(e) => {
            chain.fail(ExpectError::JsonEncode(e).to_string());
            None
        }
    }
}

/// Compact, length-limited rendering of a JSON value for failure messages.
pub(crate) fn describe(chain: &Chain, value: &Value) -> String {
    chain.preview(&value.to_string())
}

/// Name of the JSON shape, as used in failure messages.
pub(crate) fn kind(value: Option<&Value>) -> &'static str {
    match value {
        None => "absent value",
        Some(Value::Null) => "null",
        Some(Value::Bool(_)) => "boolean",
        Some(Value::Number(_)) => "number",
        Some(Value::String(_)) => "string",
        Some(Value::Array(_)) => "array",
        Some(Value::Object(_)) => "object",
    }
}

/// True if every key of `inner` is present in `outer` with a matching value.
/// Nested objects are compared the same way; everything else must be equal.
pub(crate) fn contains_subset(outer: &Value, inner: &Value) -> bool {
    match (outer, inner) {
        (Value::Object(outer), Value::Object(inner)) => inner
            .iter()
            .all(|(k, v)| outer.get(k).is_some_and(|o| contains_subset(o, v))),
        _ => outer == inner,
    }
}
