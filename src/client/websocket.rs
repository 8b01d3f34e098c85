use async_trait::async_trait;
use futures_util::stream::StreamExt;
use tokio::net::TcpStream;
use tokio_tungstenite::{connect_async, tungstenite::protocol::Message, MaybeTlsStream, WebSocketStream};
use tracing::debug;
use url::Url;
use crate::error::LinkError;
use super::{Connector, TelemetryStream};

pub type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// WebSocket transport. Each text or binary message carries one frame.
///
/// `wss` endpoints go through native-tls.
#[derive(Debug, Default, Clone)]
pub struct WebSocketConnector;

impl WebSocketConnector {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Connector for WebSocketConnector {
    async fn connect(&self, endpoint: &Url) -> Result<Box<dyn TelemetryStream>, LinkError> {
        if !matches!(endpoint.scheme(), "ws" | "wss") {
            return Err(LinkError::Endpoint(endpoint.to_string()));
        }
        let (stream, response) = connect_async(endpoint.as_str())
            .await
            .map_err(|e| LinkError::Connect(e.to_string()))?;
        debug!(status = %response.status(), endpoint = %endpoint, "websocket handshake complete");
        Ok(Box::new(WebSocketTelemetry { stream }))
    }
}

pub struct WebSocketTelemetry {
    stream: WsStream,
}

#[async_trait]
impl TelemetryStream for WebSocketTelemetry {
    async fn next_message(&mut self) -> Option<Result<Vec<u8>, LinkError>> {
        loop {
            match self.stream.next().await? {
                Ok(msg @ (Message::Text(_) | Message::Binary(_))) => {
                    return Some(Ok(msg.into_data().to_vec()));
                }
                Ok(Message::Close(frame)) => {
                    debug!(?frame, "server sent close frame");
                    return None;
                }
                // pings are answered by tungstenite itself
                Ok(_) => continue,
                Err(e) => return Some(Err(LinkError::Read(e.to_string()))),
            }
        }
    }

    async fn close(&mut self) {
        if let Err(e) = self.stream.close(None).await {
            debug!("websocket close: {}", e);
        }
    }
}
