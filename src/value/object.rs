use serde::Serialize;
use serde_json::{Map, Value};

use crate::chain::Chain;
use crate::value::{contains_subset, describe, kind, to_json, ArrayValue, JsonValue};

/// Assertions on a JSON object.
#[derive(Debug, Clone)]
pub struct ObjectValue {
    pub(crate) chain: Chain,
    value: Map<String, Value>,
}

impl ObjectValue {
    pub(crate) fn new(chain: Chain, value: Map<String, Value>) -> Self {
        Self { chain, value }
    }

    pub fn raw(&self) -> &Map<String, Value> {
        &self.value
    }

    pub fn is_failed(&self) -> bool {
        self.chain.is_failed()
    }

    pub fn empty(&self) -> &Self {
        self.chain.check(
            || self.value.is_empty(),
            || format!("expected empty object, got {}", self.describe()),
        );
        self
    }

    pub fn not_empty(&self) -> &Self {
        self.chain.check(|| !self.value.is_empty(), || "expected non-empty object".to_string());
        self
    }

    /// Keys as an array of strings, in map order.
    pub fn keys(&self) -> ArrayValue {
        let keys = self.value.keys().cloned().map(Value::String).collect();
        ArrayValue::new(self.chain.clone(), keys)
    }

    pub fn values(&self) -> ArrayValue {
        ArrayValue::new(self.chain.clone(), self.value.values().cloned().collect())
    }

    /// Value stored under `key`. A missing key fails the chain and yields an absent value.
    pub fn value(&self, key: &str) -> JsonValue {
        let value = self.value.get(key).cloned();
        if value.is_none() {
            self.chain.check(|| false, || format!("expected object containing key {key:?}"));
        }
        JsonValue::new(self.chain.clone(), value)
    }

    pub fn contains_key(&self, key: &str) -> &Self {
        self.chain.check(
            || self.value.contains_key(key),
            || format!("expected object containing key {key:?}, got {}", self.describe()),
        );
        self
    }

    pub fn not_contains_key(&self, key: &str) -> &Self {
        self.chain.check(
            || !self.value.contains_key(key),
            || format!("expected object not containing key {key:?}"),
        );
        self
    }

    /// Every key of `subset` must be present with an equal value. Nested
    /// objects in `subset` are matched the same way.
    pub fn contains_map<T: Serialize + ?Sized>(&self, subset: &T) -> &Self {
        if self.chain.is_failed() {
            return self;
        }
        let Some(subset) = to_json(&self.chain, subset) else {
            return self;
        };
        if !subset.is_object() {
            self.chain.fail(format!("expected an object to look for, got {}", kind(Some(&subset))));
            return self;
        }

        let actual = Value::Object(self.value.clone());
        self.chain.check(
            || contains_subset(&actual, &subset),
            || format!(
                "expected object containing {}, got {}",
                describe(&self.chain, &subset),
                self.describe()
            ),
        );
        self
    }

    pub fn equal<T: Serialize + ?Sized>(&self, expected: &T) -> &Self {
        if self.chain.is_failed() {
            return self;
        }
        if let Some(expected) = to_json(&self.chain, expected) {
            self.chain.check(
                || expected.as_object() == Some(&self.value),
                || format!("expected object {}, got {}", describe(&self.chain, &expected), self.describe()),
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
                || unexpected.as_object() != Some(&self.value),
                || format!("expected object not equal to {}", describe(&self.chain, &unexpected)),
            );
        }
        self
    }

    fn describe(&self) -> String {
        self.chain.preview(&Value::Object(self.value.clone()).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::tests::recording_chain;
    use serde_json::json;
    use std::collections::BTreeMap;

    fn object(value: Value) -> (ObjectValue, std::sync::Arc<crate::RecordingReporter>) {
        let (chain, reporter) = recording_chain();
        let map = value.as_object().cloned().unwrap_or_default();
        (ObjectValue::new(chain, map), reporter)
    }

    #[test]
    fn empty_and_not_empty() {
        let (o, _) = object(json!({}));
        o.empty().chain.assert_ok();
        o.not_empty().chain.assert_failed();

        let (o, _) = object(json!({"a": 1}));
        o.not_empty().chain.assert_ok();
        o.empty().chain.assert_failed();
    }

    #[test]
    fn keys_and_values() {
        let (o, _) = object(json!({"b": 2, "a": 1}));
        o.keys().equal(&["a", "b"]).chain.assert_ok();
        o.values().equal(&[1, 2]).chain.assert_ok();
    }

    #[test]
    fn value_lookup() {
        let (o, reporter) = object(json!({"name": "foo"}));
        o.value("name").string().equal("foo").chain.assert_ok();
        o.chain.assert_ok();

        let missing = o.value("nope");
        assert!(missing.raw().is_none());
        missing.chain.assert_failed();
        o.chain.assert_failed();
        assert_eq!(reporter.messages(), vec!["expected object containing key \"nope\"".to_string()]);
    }

    #[test]
    fn key_presence() {
        let (o, _) = object(json!({"a": null}));
        o.contains_key("a").not_contains_key("b").chain.assert_ok();

        o.contains_key("b").chain.assert_failed();
        o.chain.reset();
        o.not_contains_key("a").chain.assert_failed();
    }

    #[test]
    fn contains_map_matches_nested_subsets() {
        let (o, _) = object(json!({"a": 1, "b": {"c": true, "d": "x"}}));
        o.contains_map(&json!({"b": {"d": "x"}})).chain.assert_ok();

        let mut subset = BTreeMap::new();
        subset.insert("a", 1);
        o.contains_map(&subset).chain.assert_ok();

        o.contains_map(&json!({"b": {"d": "y"}})).chain.assert_failed();
        o.chain.reset();

        o.contains_map(&[1, 2]).chain.assert_failed();
    }

    #[test]
    fn equality() {
        let (o, _) = object(json!({"key": "value"}));
        o.equal(&json!({"key": "value"})).not_equal(&json!({"key": "other"})).chain.assert_ok();

        o.equal(&json!(["key", "value"])).chain.assert_failed();
        o.chain.reset();
        o.not_equal(&json!({"key": "value"})).chain.assert_failed();
    }
}
