use async_trait::async_trait;
use url::Url;
use crate::error::LinkError;

/// Opens telemetry sessions.
#[async_trait]
pub trait Connector: Send + Sync {
    async fn connect(&self, endpoint: &Url) -> Result<Box<dyn TelemetryStream>, LinkError>;
}

/// An open session delivering opaque message payloads.
#[async_trait]
pub trait TelemetryStream: Send {
    /// Next payload. `None` means the peer closed the session.
    ///
    /// Must be cancellation safe: the client races it against shutdown.
    async fn next_message(&mut self) -> Option<Result<Vec<u8>, LinkError>>;

    /// Release the session. Errors while closing are not reported.
    async fn close(&mut self);
}

#[async_trait]
impl<C: Connector + ?Sized> Connector for std::sync::Arc<C> {
    async fn connect(&self, endpoint: &Url) -> Result<Box<dyn TelemetryStream>, LinkError> {
        (**self).connect(endpoint).await
    }
}
