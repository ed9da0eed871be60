use serde::Serialize;
use serde_json::Value;

use crate::chain::Chain;
use crate::value::{describe, to_json, JsonValue, NumberValue};

/// Assertions on a JSON array.
#[derive(Debug, Clone)]
pub struct ArrayValue {
    pub(crate) chain: Chain,
    value: Vec<Value>,
}

impl ArrayValue {
    pub(crate) fn new(chain: Chain, value: Vec<Value>) -> Self {
        Self { chain, value }
    }

    pub fn raw(&self) -> &[Value] {
        &self.value
    }

    pub fn is_failed(&self) -> bool {
        self.chain.is_failed()
    }

    pub fn length(&self) -> NumberValue {
        NumberValue::new(self.chain.clone(), self.value.len() as f64)
    }

    pub fn empty(&self) -> &Self {
        self.chain.check(
            || self.value.is_empty(),
            || format!("expected empty array, got {}", self.describe()),
        );
        self
    }

    pub fn not_empty(&self) -> &Self {
        self.chain.check(|| !self.value.is_empty(), || "expected non-empty array".to_string());
        self
    }

    /// Element at `index`. Out of range fails the chain and yields an absent value.
    pub fn element(&self, index: usize) -> JsonValue {
        let value = self.value.get(index).cloned();
        if value.is_none() {
            self.chain.check(
                || false,
                || format!("expected array index {index} to exist, array has {} elements", self.value.len()),
            );
        }
        JsonValue::new(self.chain.clone(), value)
    }

    pub fn first(&self) -> JsonValue {
        self.element(0)
    }

    pub fn last(&self) -> JsonValue {
        match self.value.len() {
            0 => self.element(0),
            n => self.element(n - 1),
        }
    }

    pub fn contains<T: Serialize + ?Sized>(&self, item: &T) -> &Self {
        if self.chain.is_failed() {
            return self;
        }
        if let Some(item) = to_json(&self.chain, item) {
            self.chain.check(
                || self.value.contains(&item),
                || format!("expected array containing {}, got {}", describe(&self.chain, &item), self.describe()),
            );
        }
        self
    }

    pub fn not_contains<T: Serialize + ?Sized>(&self, item: &T) -> &Self {
        if self.chain.is_failed() {
            return self;
        }
        if let Some(item) = to_json(&self.chain, item) {
            self.chain.check(
                || !self.value.contains(&item),
                || format!("expected array not containing {}", describe(&self.chain, &item)),
            );
        }
        self
    }

    /// Positional, element-wise equality.
    pub fn equal<T: Serialize + ?Sized>(&self, expected: &T) -> &Self {
        if self.chain.is_failed() {
            return self;
        }
        if let Some(expected) = to_json(&self.chain, expected) {
            self.chain.check(
                || expected.as_array() == Some(&self.value),
                || format!("expected array {}, got {}", describe(&self.chain, &expected), self.describe()),
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
                || unexpected.as_array() != Some(&self.value),
                || format!("expected array not equal to {}", describe(&self.chain, &unexpected)),
            );
        }
        self
    }

    fn describe(&self) -> String {
        self.chain.preview(&Value::Array(self.value.clone()).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::tests::recording_chain;
    use serde_json::json;

    fn array(value: Value) -> (ArrayValue, std::sync::Arc<crate::RecordingReporter>) {
        let (chain, reporter) = recording_chain();
        let items = value.as_array().cloned().unwrap_or_default();
        (ArrayValue::new(chain, items), reporter)
    }

    #[test]
    fn length_and_emptiness() {
        let (a, _) = array(json!([1, "two", null]));
        a.length().equal(3.0).chain.assert_ok();
        a.not_empty().chain.assert_ok();
        a.empty().chain.assert_failed();

        let (a, _) = array(json!([]));
        a.empty().length().equal(0.0).chain.assert_ok();
    }

    #[test]
    fn element_access() {
        let (a, _) = array(json!(["a", "b", "c"]));
        a.first().string().equal("a");
        a.element(1).string().equal("b");
        a.last().string().equal("c");
        a.chain.assert_ok();

        let out = a.element(3);
        assert!(out.raw().is_none());
        out.chain.assert_failed();
        a.chain.assert_failed();
    }

    #[test]
    fn last_on_empty_array_fails() {
        let (a, reporter) = array(json!([]));
        a.last().chain.assert_failed();
        assert_eq!(
            reporter.messages(),
            vec!["expected array index 0 to exist, array has 0 elements".to_string()]
        );
    }

    #[test]
    fn contains_uses_deep_equality() {
        let (a, _) = array(json!([{"id": 1}, {"id": 2}]));
        a.contains(&json!({"id": 2})).not_contains(&json!({"id": 3})).chain.assert_ok();

        a.contains(&json!({"id": 3})).chain.assert_failed();
        a.chain.reset();
        a.not_contains(&json!({"id": 1})).chain.assert_failed();
    }

    #[test]
    fn equality_is_positional() {
        let (a, _) = array(json!([1, 2]));
        a.equal(&[1, 2]).not_equal(&[2, 1]).chain.assert_ok();

        a.equal(&[2, 1]).chain.assert_failed();
        a.chain.reset();
        a.equal(&json!({"0": 1})).chain.assert_failed();
    }
}
