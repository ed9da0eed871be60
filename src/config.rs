//! Expectation configuration.
//!
//! `ExpectConfig` controls how failures are described and logged. It is
//! attached to a [`Response`](crate::Response) at construction time and
//! travels inside the chain to every wrapper derived from it, so all
//! failure messages of one response share the same formatting.
//!
//! `ExpectConfig` provides sensible defaults via [`Default`] and a fluent
//! [`ExpectConfig::builder()`] for customization with validation.
//!
//! # Examples
//!
//! ## Use defaults
//! ```rust
//! use http_expect::ExpectConfig;
//! let cfg = ExpectConfig::default();
//! assert_eq!(cfg.max_preview_len, 512);
//! ```
//!
//! ## Customize with the builder
//! ```rust
//! use http_expect::ExpectConfig;
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let cfg = ExpectConfig::builder()
//!     .max_preview_len(80)
//!     .failure_log_level(log::LevelFilter::Warn)
//!     .build()?; // returns Result<ExpectConfig, ExpectConfigError>
//! # Ok(()) }
//! ```
//!
//! # Fields (summary)
//! - `max_preview_len`: Actual values longer than this many characters are
//!   truncated in failure messages (default: 512).
//! - `failure_log_level`: Level at which every failure is logged before it is
//!   reported (default: `Debug`; `Off` disables it).

use crate::errors::ExpectError;
use serde::{Deserialize, Serialize};
use std::fmt;

const DEFAULT_MAX_PREVIEW_LEN: usize = 512;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpectConfig {
    pub max_preview_len: usize,
    pub failure_log_level: log::LevelFilter,
}

impl Default for ExpectConfig {
    fn default() -> Self {
        Self {
            max_preview_len: DEFAULT_MAX_PREVIEW_LEN,
            failure_log_level: log::LevelFilter::Debug,
        }
    }
}

impl ExpectConfig {
    pub fn builder() -> ExpectConfigBuilder {
        ExpectConfigBuilder::default()
    }

    /// Loads a configuration from JSON. Missing fields take their default value.
    pub fn from_json(json: &str) -> Result<Self, ExpectError> {
        let config: ExpectConfig = serde_json::from_str(json).map_err(ExpectError::JsonDecode)?;
        validate(&config).map_err(|e| ExpectError::Config(e.to_string()))?;
        Ok(config)
    }

    /// Shortens `text` to at most `max_preview_len` characters for use in a failure message.
    pub fn preview(&self, text: &str) -> String {
        match text.char_indices().nth(self.max_preview_len) {
            Some((idx, _)) => format!("{}...", &text[..idx]),
            None => text.to_string(),
        }
    }
}

/// Builder for [`ExpectConfig`].
#[derive(Debug, Clone, Default)]
pub struct ExpectConfigBuilder {
    inner: ExpectConfig,
}

impl ExpectConfigBuilder {
    #[inline]
    fn map(mut self, f: impl FnOnce(&mut ExpectConfig)) -> Self {
        f(&mut self.inner);
        self
    }

    pub fn max_preview_len(self, n: usize) -> Self { self.map(|c| c.max_preview_len = n) }
    pub fn failure_log_level(self, level: log::LevelFilter) -> Self { self.map(|c| c.failure_log_level = level) }

    /// Validate and build the final config.
    pub fn build(self) -> Result<ExpectConfig, ExpectConfigError> {
        validate(&self.inner)?;
        Ok(self.inner)
    }
}

// ---------- Validation ----------

#[derive(Debug, Clone, PartialEq)]
pub enum ExpectConfigError {
    ZeroPreview,
}

impl fmt::Display for ExpectConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpectConfigError::ZeroPreview =>
                write!(f, "max_preview_len must be at least 1"),
        }
    }
}
impl std::error::Error for ExpectConfigError {}

fn validate(c: &ExpectConfig) -> Result<(), ExpectConfigError> {
    if c.max_preview_len == 0 {
        return Err(ExpectConfigError::ZeroPreview);
    }
    Ok(())
}
