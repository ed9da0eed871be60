#[derive(Debug, thiserror::Error)]
pub enum ExpectError {
    #[error("failed to read body: {0}")]
    BodyRead(#[from] std::io::Error),

    #[error("failed to decode JSON: {0}")]
    JsonDecode(#[source] serde_json::Error),

    #[error("failed to encode expected value as JSON: {0}")]
    JsonEncode(#[source] serde_json::Error),

    #[error("invalid header name: {0}")]
    InvalidHeaderName(#[from] http::header::InvalidHeaderName),

    #[error("invalid header value: {0}")]
    InvalidHeaderValue(#[from] http::header::InvalidHeaderValue),

    #[error("malformed Content-Type {0:?}")]
    MalformedContentType(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}
