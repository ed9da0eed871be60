use std::collections::BTreeMap;

use http::HeaderMap;

use crate::chain::Chain;
use crate::value::StringValue;

/// Assertions on the full header multimap of a response.
///
/// Header names are stored lowercased, so every name-based check is
/// case-insensitive. Values of a repeated header keep their received order
/// and are compared positionally.
#[derive(Debug, Clone)]
pub struct HeadersValue {
    pub(crate) chain: Chain,
    value: BTreeMap<String, Vec<String>>,
}

impl HeadersValue {
    pub(crate) fn new(chain: Chain, headers: &HeaderMap) -> Self {
        let mut value: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (name, v) in headers {
            value
                .entry(name.as_str().to_string())
                .or_default()
                .push(String::from_utf8_lossy(v.as_bytes()).into_owned());
        }
        Self { chain, value }
    }

    pub fn raw(&self) -> &BTreeMap<String, Vec<String>> {
        &self.value
    }

    pub fn is_failed(&self) -> bool {
        self.chain.is_failed()
    }

    /// Exact match: same names, same values in the same order.
    ///
    /// ```rust
    /// # use std::sync::Arc;
    /// # use http_expect::{RawResponse, PanicReporter, Response};
    /// let raw = RawResponse::new(200).header("X-Id", "7")?;
    /// Response::new(Arc::new(PanicReporter), raw)
    ///     .headers()
    ///     .equal([("x-id", ["7"])]);
    /// # Ok::<(), http_expect::ExpectError>(())
    /// ```
    pub fn equal<I, K, L, V>(&self, expected: I) -> &Self
    where
        I: IntoIterator<Item = (K, L)>,
        K: AsRef<str>,
        L: IntoIterator<Item = V>,
        V: Into<String>,
    {
        if self.chain.is_failed() {
            return self;
        }
        let expected = normalize(expected);
        self.chain.check(
            || expected == self.value,
            || format!("expected headers {expected:?}, got {}", self.describe()),
        );
        self
    }

    pub fn not_equal<I, K, L, V>(&self, unexpected: I) -> &Self
    where
        I: IntoIterator<Item = (K, L)>,
        K: AsRef<str>,
        L: IntoIterator<Item = V>,
        V: Into<String>,
    {
        if self.chain.is_failed() {
            return self;
        }
        let unexpected = normalize(unexpected);
        self.chain.check(
            || unexpected != self.value,
            || format!("expected headers not equal to {unexpected:?}"),
        );
        self
    }

    pub fn empty(&self) -> &Self {
        self.chain.check(
            || self.value.is_empty(),
            || format!("expected no headers, got {}", self.describe()),
        );
        self
    }

    pub fn not_empty(&self) -> &Self {
        self.chain.check(|| !self.value.is_empty(), || "expected at least one header".to_string());
        self
    }

    pub fn contains_key(&self, name: &str) -> &Self {
        let name = name.to_ascii_lowercase();
        self.chain.check(
            || self.value.contains_key(&name),
            || format!("expected header {name:?} to be present"),
        );
        self
    }

    pub fn not_contains_key(&self, name: &str) -> &Self {
        let name = name.to_ascii_lowercase();
        self.chain.check(
            || !self.value.contains_key(&name),
            || format!("expected header {name:?} to be absent"),
        );
        self
    }

    /// First value of header `name`. Unlike [`Response::header`](crate::Response::header),
    /// a missing header fails the chain.
    pub fn value(&self, name: &str) -> StringValue {
        let name = name.to_ascii_lowercase();
        let first = self.value.get(&name).and_then(|values| values.first()).cloned();
        if first.is_none() {
            self.chain.check(|| false, || format!("expected header {name:?} to be present"));
        }
        StringValue::new(self.chain.clone(), first.unwrap_or_default())
    }

    fn describe(&self) -> String {
        self.chain.preview(&format!("{:?}", self.value))
    }
}

fn normalize<I, K, L, V>(headers: I) -> BTreeMap<String, Vec<String>>
where
    I: IntoIterator<Item = (K, L)>,
    K: AsRef<str>,
    L: IntoIterator<Item = V>,
    V: Into<String>,
{
    let mut out: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for (name, values) in headers {
        out.entry(name.as_ref().to_ascii_lowercase())
            .or_default()
            .extend(values.into_iter().map(Into::into));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::tests::recording_chain;
    use http::header::{HeaderName, HeaderValue};
    use std::collections::HashMap;

    fn header_map(pairs: &[(&str, &str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (k, v) in pairs {
            map.append(
                HeaderName::from_bytes(k.as_bytes()).unwrap(),
                HeaderValue::from_str(v).unwrap(),
            );
        }
        map
    }

    fn headers(pairs: &[(&str, &str)]) -> HeadersValue {
        let (chain, _) = recording_chain();
        HeadersValue::new(chain, &header_map(pairs))
    }

    #[test]
    fn raw_groups_values_by_lowercased_name() {
        let h = headers(&[("Set-Cookie", "a=1"), ("X-Id", "7"), ("set-cookie", "b=2")]);

        let mut expected = BTreeMap::new();
        expected.insert("set-cookie".to_string(), vec!["a=1".to_string(), "b=2".to_string()]);
        expected.insert("x-id".to_string(), vec!["7".to_string()]);
        assert_eq!(h.raw(), &expected);
    }

    #[test]
    fn equal_ignores_name_case_but_not_value_order() {
        let h = headers(&[("First-Header", "foo"), ("Second-Header", "bar"), ("Second-Header", "baz")]);

        let mut expected: HashMap<&str, Vec<&str>> = HashMap::new();
        expected.insert("First-Header", vec!["foo"]);
        expected.insert("Second-Header", vec!["bar", "baz"]);
        h.equal(expected).chain.assert_ok();

        h.equal([("first-header", vec!["foo"]), ("second-header", vec!["baz", "bar"])])
            .chain
            .assert_failed();
        h.chain.reset();

        h.equal([("first-header", vec!["foo"])]).chain.assert_failed();
        h.chain.reset();

        h.not_equal([("first-header", vec!["foo"])]).chain.assert_ok();
    }

    #[test]
    fn empty_and_presence() {
        let h = headers(&[]);
        h.empty().not_contains_key("x").chain.assert_ok();
        h.not_empty().chain.assert_failed();

        let h = headers(&[("Content-Type", "text/plain")]);
        h.not_empty().contains_key("content-type").contains_key("CONTENT-TYPE").chain.assert_ok();
        h.not_contains_key("Content-Type").chain.assert_failed();
    }

    #[test]
    fn value_requires_presence() {
        let h = headers(&[("X-Id", "7"), ("x-id", "8")]);
        h.value("X-ID").equal("7").chain.assert_ok();

        let missing = h.value("X-Other");
        assert_eq!(missing.raw(), "");
        missing.chain.assert_failed();
        h.chain.assert_failed();
    }

    #[test]
    fn non_utf8_values_are_decoded_lossily() {
        let mut map = HeaderMap::new();
        map.insert("x-bin", HeaderValue::from_bytes(b"caf\xe9").unwrap());

        let (chain, _) = recording_chain();
        let h = HeadersValue::new(chain, &map);
        assert_eq!(h.raw()["x-bin"], vec!["caf\u{fffd}".to_string()]);
    }
}
