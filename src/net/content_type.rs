//! Minimal `Content-Type` parsing.
//!
//! Only what the assertions need: a media type followed by `;`-separated
//! `name=value` parameters. Parameter names are case-insensitive, values may
//! be quoted. The media type itself is kept exactly as sent.
use crate::errors::ExpectError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaType {
    /// Media type as sent, e.g. `application/json`.
    pub essence: String,
    /// Parameters in order of appearance, names lowercased.
    pub params: Vec<(String, String)>,
}

impl MediaType {
    pub fn parse(header: &str) -> Result<Self, ExpectError> {
        let malformed = || ExpectError::MalformedContentType(header.to_string());

        let mut parts = header.split(';');
        let essence = parts.next().unwrap_or_default().trim();
        if essence.is_empty() {
            return Err(malformed());
        }

        let mut params = Vec::new();
        for part in parts {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }

            let (name, value) = part.split_once('=').ok_or_else(malformed)?;
            let name = name.trim();
            if name.is_empty() {
                return Err(malformed());
            }
            let value = value.trim();
            let value = value
                .strip_prefix('"')
                .and_then(|v| v.strip_suffix('"'))
                .unwrap_or(value);
            params.push((name.to_ascii_lowercase(), value.to_string()));
        }

        Ok(Self {
            essence: essence.to_string(),
            params,
        })
    }

    /// Value of the first parameter called `name` (case-insensitive).
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn charset(&self) -> Option<&str> {
        self.param("charset")
    }
}
