use serde::Serialize;
use serde_json::{Map, Value};

use crate::chain::Chain;
use crate::value::{describe, kind, to_json, ArrayValue, BooleanValue, NumberValue, ObjectValue, StringValue};

/// A decoded JSON tree of unknown shape.
///
/// `raw()` is `None` when the tree is absent: the body was not JSON, the
/// content type was wrong, or the value was derived from a failed lookup.
/// The narrowing accessors (`object()`, `array()`, ...) check the shape and
/// fail the chain on a mismatch, returning an empty view instead.
#[derive(Debug, Clone)]
pub struct JsonValue {
    pub(crate) chain: Chain,
    value: Option<Value>,
}

impl JsonValue {
    pub(crate) fn new(chain: Chain, value: Option<Value>) -> Self {
        Self { chain, value }
    }

    pub fn raw(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    pub fn is_failed(&self) -> bool {
        self.chain.is_failed()
    }

    pub fn object(&self) -> ObjectValue {
        let value = match &self.value {
            Some(Value::Object(map)) => map.clone(),
            _ => {
                self.fail_shape("object");
                Map::new()
            }
        };
        ObjectValue::new(self.chain.clone(), value)
    }

    pub fn array(&self) -> ArrayValue {
        let value = match &self.value {
            Some(Value::Array(items)) => items.clone(),
            _ => {
                self.fail_shape("array");
                Vec::new()
            }
        };
        ArrayValue::new(self.chain.clone(), value)
    }

    pub fn string(&self) -> StringValue {
        let value = match &self.value {
            Some(Value::String(s)) => s.clone(),
            _ => {
                self.fail_shape("string");
                String::new()
            }
        };
        StringValue::new(self.chain.clone(), value)
    }

    pub fn number(&self) -> NumberValue {
        // Every serde_json number is representable as f64, possibly with rounding.
        let value = match self.value.as_ref().and_then(Value::as_f64) {
            Some(n) => n,
            None => {
                self.fail_shape("number");
                0.0
            }
        };
        NumberValue::new(self.chain.clone(), value)
    }

    pub fn boolean(&self) -> BooleanValue {
        let value = match &self.value {
            Some(Value::Bool(b)) => *b,
            _ => {
                self.fail_shape("boolean");
                false
            }
        };
        BooleanValue::new(self.chain.clone(), value)
    }

    pub fn null(&self) -> &Self {
        self.chain.check(
            || matches!(self.value, Some(Value::Null)),
            || format!("expected null, got {}", self.describe()),
        );
        self
    }

    /// Fails on `null` and on an absent value.
    pub fn not_null(&self) -> &Self {
        self.chain.check(
            || !matches!(self.value, Some(Value::Null) | None),
            || format!("expected non-null value, got {}", kind(self.raw())),
        );
        self
    }

    /// Deep equality against any serializable value.
    pub fn equal<T: Serialize + ?Sized>(&self, expected: &T) -> &Self {
        if self.chain.is_failed() {
            return self;
        }
        if let Some(expected) = to_json(&self.chain, expected) {
            self.chain.check(
                || self.value.as_ref() == Some(&expected),
                || format!("expected {}, got {}", describe(&self.chain, &expected), self.describe()),
            );
        }
        self
    }

    pub fn not_equal<T: Serialize + ?Sized>(&self, unexpected: &T) -> &Self {
        if self.chain.is_failed() {
            return self;
        }
        if let Some(unexpected) = to_json(&self.chain, unexpected) {
            self.chain.check(
                || self.value.as_ref() != Some(&unexpected),
                || format!("expected value not equal to {}", describe(&self.chain, &unexpected)),
            );
        }
        self
    }

    fn fail_shape(&self, expected: &str) {
        self.chain.check(
            || false,
            || format!("expected {expected}, got {}", kind(self.raw())),
        );
    }

    fn describe(&self) -> String {
        match &self.value {
            Some(value) => describe(&self.chain, value),
            None => kind(None).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::tests::recording_chain;
    use serde_json::json;

    fn tree(value: Option<Value>) -> (JsonValue, std::sync::Arc<crate::RecordingReporter>) {
        let (chain, reporter) = recording_chain();
        (JsonValue::new(chain, value), reporter)
    }

    #[test]
    fn narrowing_matches_shape() {
        let (v, _) = tree(Some(json!({"a": 1})));
        assert_eq!(v.object().raw(), json!({"a": 1}).as_object().unwrap());
        v.chain.assert_ok();

        let (v, _) = tree(Some(json!([1, 2])));
        assert_eq!(v.array().raw(), &[json!(1), json!(2)][..]);

        let (v, _) = tree(Some(json!("s")));
        assert_eq!(v.string().raw(), "s");

        let (v, _) = tree(Some(json!(42)));
        assert_eq!(v.number().raw(), 42.0);

        let (v, _) = tree(Some(json!(true)));
        assert!(v.boolean().raw());
        v.chain.assert_ok();
    }

    #[test]
    fn wrong_shape_fails_and_yields_zero_value() {
        let (v, reporter) = tree(Some(json!("text")));

        let obj = v.object();
        obj.chain.assert_failed();
        v.chain.assert_failed();
        assert!(obj.raw().is_empty());
        assert_eq!(reporter.messages(), vec!["expected object, got string".to_string()]);

        // Further narrowing on the failed value is silent.
        assert_eq!(v.number().raw(), 0.0);
        assert!(!v.boolean().raw());
        assert!(v.array().raw().is_empty());
        assert_eq!(reporter.count(), 1);
    }

    #[test]
    fn absent_value_fails_every_narrowing() {
        let (v, reporter) = tree(None);
        assert!(v.raw().is_none());

        let s = v.string();
        s.chain.assert_failed();
        assert_eq!(s.raw(), "");
        assert_eq!(reporter.messages(), vec!["expected string, got absent value".to_string()]);
    }

    #[test]
    fn narrowed_child_failure_stays_in_child() {
        let (v, _) = tree(Some(json!({"a": 1})));
        let obj = v.object();

        obj.contains_key("missing");
        obj.chain.assert_failed();
        v.chain.assert_ok();
    }

    #[test]
    fn null_checks() {
        let (v, _) = tree(Some(Value::Null));
        v.null().chain.assert_ok();
        v.not_null().chain.assert_failed();

        let (v, _) = tree(Some(json!(0)));
        v.not_null().chain.assert_ok();
        v.null().chain.assert_failed();

        let (v, _) = tree(None);
        v.not_null().chain.assert_failed();
    }

    #[test]
    fn equal_serializes_expected() {
        #[derive(Serialize)]
        struct Thing {
            name: &'static str,
            size: u32,
        }

        let (v, _) = tree(Some(json!({"name": "foo", "size": 3})));
        v.equal(&Thing { name: "foo", size: 3 })
            .not_equal(&json!({"name": "bar"}))
            .chain
            .assert_ok();

        v.equal(&json!({"name": "foo"})).chain.assert_failed();
        v.chain.reset();
        v.not_equal(&Thing { name: "foo", size: 3 }).chain.assert_failed();
    }

    #[test]
    fn equal_message_shows_both_values() {
        let (v, reporter) = tree(Some(json!([1])));
        v.equal(&[2]);
        assert_eq!(reporter.messages(), vec!["expected [2], got [1]".to_string()]);
    }
}
