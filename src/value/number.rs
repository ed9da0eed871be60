use crate::chain::Chain;

/// Assertions on a JSON number (or a derived count, such as an array length).
#[derive(Debug, Clone)]
pub struct NumberValue {
    pub(crate) chain: Chain,
    value: f64,
}

impl NumberValue {
    pub(crate) fn new(chain: Chain, value: f64) -> Self {
        Self { chain, value }
    }

    pub fn raw(&self) -> f64 {
        self.value
    }

    pub fn is_failed(&self) -> bool {
        self.chain.is_failed()
    }

    pub fn equal(&self, expected: f64) -> &Self {
        self.chain.check(
            || self.value == expected,
            || format!("expected number equal to {expected}, got {}", self.value),
        );
        self
    }

    pub fn not_equal(&self, unexpected: f64) -> &Self {
        self.chain.check(
            || self.value != unexpected,
            || format!("expected number not equal to {unexpected}"),
        );
        self
    }

    /// Equality within `delta` (inclusive).
    pub fn equal_delta(&self, expected: f64, delta: f64) -> &Self {
        self.chain.check(
            || (self.value - expected).abs() <= delta,
            || format!("expected number equal to {expected} (delta {delta}), got {}", self.value),
        );
        self
    }

    pub fn gt(&self, bound: f64) -> &Self {
        self.compare(self.value > bound, ">", bound)
    }

    pub fn ge(&self, bound: f64) -> &Self {
        self.compare(self.value >= bound, ">=", bound)
    }

    pub fn lt(&self, bound: f64) -> &Self {
        self.compare(self.value < bound, "<", bound)
    }

    pub fn le(&self, bound: f64) -> &Self {
        self.compare(self.value <= bound, "<=", bound)
    }

    /// Inclusive on both ends.
    pub fn in_range(&self, min: f64, max: f64) -> &Self {
        self.chain.check(
            || (min..=max).contains(&self.value),
            || format!("expected number in range [{min}, {max}], got {}", self.value),
        );
        self
    }

    fn compare(&self, ok: bool, op: &str, bound: f64) -> &Self {
        self.chain.check(
            || ok,
            || format!("expected number {op} {bound}, got {}", self.value),
        );
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::tests::recording_chain;

    fn number(value: f64) -> NumberValue {
        let (chain, _) = recording_chain();
        NumberValue::new(chain, value)
    }

    #[test]
    fn equality() {
        let n = number(1.5);
        n.equal(1.5).not_equal(2.0).equal_delta(1.6, 0.11).chain.assert_ok();

        n.equal(1.0).chain.assert_failed();
        n.chain.reset();
        n.not_equal(1.5).chain.assert_failed();
        n.chain.reset();
        n.equal_delta(2.0, 0.1).chain.assert_failed();
    }

    #[test]
    fn ordering() {
        let n = number(10.0);
        n.gt(9.0).ge(10.0).lt(11.0).le(10.0).in_range(10.0, 10.0).chain.assert_ok();

        number(10.0).gt(10.0).chain.assert_failed();
        number(10.0).lt(10.0).chain.assert_failed();
        number(10.0).ge(10.5).chain.assert_failed();
        number(10.0).le(9.5).chain.assert_failed();
        number(10.0).in_range(11.0, 20.0).chain.assert_failed();
    }

    #[test]
    fn nan_never_matches() {
        let n = number(f64::NAN);
        n.equal(f64::NAN).chain.assert_failed();
    }
}
