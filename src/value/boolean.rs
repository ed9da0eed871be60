use crate::chain::Chain;

/// Assertions on a JSON boolean.
#[derive(Debug, Clone)]
pub struct BooleanValue {
    pub(crate) chain: Chain,
    value: bool,
}

impl BooleanValue {
    pub(crate) fn new(chain: Chain, value: bool) -> Self {
        Self { chain, value }
    }

    pub fn raw(&self) -> bool {
        self.value
    }

    pub fn is_failed(&self) -> bool {
        self.chain.is_failed()
    }

    pub fn equal(&self, expected: bool) -> &Self {
        self.chain.check(
            || self.value == expected,
            || format!("expected {expected}, got {}", self.value),
        );
        self
    }

    pub fn expect_true(&self) -> &Self {
        self.equal(true)
    }

    pub fn expect_false(&self) -> &Self {
        self.equal(false)
    }
}
