use crate::chain::Chain;

/// Assertions on a piece of text: the body, a header value or a JSON string.
#[derive(Debug, Clone)]
pub struct StringValue {
    pub(crate) chain: Chain,
    value: String,
}

impl StringValue {
    pub(crate) fn new(chain: Chain, value: impl Into<String>) -> Self {
        Self {
            chain,
            value: value.into(),
        }
    }

    pub fn raw(&self) -> &str {
        &self.value
    }

    pub fn is_failed(&self) -> bool {
        self.chain.is_failed()
    }

    pub fn empty(&self) -> &Self {
        self.chain.check(
            || self.value.is_empty(),
            || format!("expected empty string, got {:?}", self.preview()),
        );
        self
    }

    pub fn not_empty(&self) -> &Self {
        self.chain.check(|| !self.value.is_empty(), || "expected non-empty string".to_string());
        self
    }

    pub fn equal(&self, expected: &str) -> &Self {
        self.chain.check(
            || self.value == expected,
            || format!("expected string equal to {expected:?}, got {:?}", self.preview()),
        );
        self
    }

    pub fn not_equal(&self, unexpected: &str) -> &Self {
        self.chain.check(
            || self.value != unexpected,
            || format!("expected string not equal to {unexpected:?}"),
        );
        self
    }

    /// Case-insensitive equality (Unicode lowercase folding).
    pub fn equal_fold(&self, expected: &str) -> &Self {
        self.chain.check(
            || self.value.to_lowercase() == expected.to_lowercase(),
            || format!("expected string equal to {expected:?} ignoring case, got {:?}", self.preview()),
        );
        self
    }

    pub fn contains(&self, needle: &str) -> &Self {
        self.chain.check(
            || self.value.contains(needle),
            || format!("expected string containing {needle:?}, got {:?}", self.preview()),
        );
        self
    }

    pub fn not_contains(&self, needle: &str) -> &Self {
        self.chain.check(
            || !self.value.contains(needle),
            || format!("expected string not containing {needle:?}, got {:?}", self.preview()),
        );
        self
    }

    pub fn contains_fold(&self, needle: &str) -> &Self {
        self.chain.check(
            || self.value.to_lowercase().contains(&needle.to_lowercase()),
            || format!("expected string containing {needle:?} ignoring case, got {:?}", self.preview()),
        );
        self
    }

    /// Length in characters, not bytes.
    pub fn length(&self, expected: usize) -> &Self {
        let actual = self.value.chars().count();
        self.chain.check(
            || actual == expected,
            || format!("expected string of length {expected}, got length {actual}"),
        );
        self
    }

    fn preview(&self) -> String {
        self.chain.preview(&self.value)
    }
}
