use thiserror::Error;

/// A telemetry message that could not be turned into a frame.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("malformed telemetry message: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Connection-level failures. All of them end the current session and are
/// recovered by reconnecting.
#[derive(Debug, Error)]
pub enum LinkError {
    #[error("unsupported endpoint: {0}")]
    Endpoint(String),

    #[error("connect failed: {0}")]
    Connect(String),

    #[error("read failed: {0}")]
    Read(String),

    #[error("connection closed by peer")]
    Closed,
}
