use anyhow::{anyhow, Result};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::broadcast;
use tokio::time::{sleep, timeout};
use tracing::{debug, info, warn};
use url::Url;
use crate::core::{LatestFrameMailbox, PanelContext, TelemetryFrame};
use crate::error::{DecodeError, LinkError};
use crate::observability::LinkMetrics;
use crate::resilience::BackoffPolicy;
use super::{ConnectionState, Connector, TelemetryStream};

/// Upper bound on the closing handshake. A peer that stalls is abandoned.
pub const CLOSE_TIMEOUT: Duration = Duration::from_secs(2);

/// How a streaming session ended.
enum SessionEnd {
    Shutdown,
    Failed(LinkError),
}

/// Ingestion side of the panel.
///
/// Owns the connection, decodes each inbound message and publishes good
/// frames to the mailbox. Malformed messages are dropped; connection failures
/// lead to a reconnect after a backoff delay, indefinitely, until shutdown is
/// signalled.
pub struct TelemetryClient<C: Connector> {
    connector: C,
    endpoint: Url,
    backoff: BackoffPolicy,
    mailbox: Arc<LatestFrameMailbox>,
    metrics: Arc<LinkMetrics>,
    state: ConnectionState,
}

impl<C: Connector> TelemetryClient<C> {
    pub fn new(connector: C, endpoint: Url, backoff: BackoffPolicy, context: &PanelContext) -> Self {
        Self {
            connector,
            endpoint,
            backoff,
            mailbox: context.mailbox.clone(),
            metrics: context.link_metrics.clone(),
            state: ConnectionState::Disconnected,
        }
    }

    pub fn state(&self) -> &ConnectionState {
        &self.state
    }

    fn transition_to(&mut self, new_state: ConnectionState) -> Result<()> {
        if !self.state.can_transition_to(&new_state) {
            return Err(anyhow!(
                "Invalid connection transition: {} -> {}",
                self.state.name(),
                new_state.name()
            ));
        }
        debug!(from = self.state.name(), to = new_state.name(), "connection state");
        self.state = new_state;
        Ok(())
    }

    /// Decode one payload and publish it. Nothing is published on error.
    pub fn ingest(&self, payload: &[u8]) -> Result<TelemetryFrame, DecodeError> {
        let frame = TelemetryFrame::decode(payload)?;
        self.mailbox.publish(frame);
        self.metrics.record_frame_published();
        Ok(frame)
    }

    /// Connect/stream/reconnect until `shutdown` fires (or its sender is
    /// dropped). The current session is closed before returning.
    pub async fn run(mut self, mut shutdown: broadcast::Receiver<()>) -> Result<()> {
        let mut attempt: u32 = 0;

        loop {
            attempt = attempt.saturating_add(1);
            self.transition_to(ConnectionState::Connecting { attempt })?;
            self.metrics.record_connect_attempt();

            let connected = tokio::select! {
                biased;
                _ = shutdown.recv() => None,
                result = self.connector.connect(&self.endpoint) => Some(result),
            };
            let Some(connected) = connected else {
                self.transition_to(ConnectionState::Disconnected)?;
                break;
            };

            match connected {
                Ok(mut stream) => {
                    info!(endpoint = %self.endpoint, attempt, "telemetry stream connected");
                    self.transition_to(ConnectionState::Streaming {
                        since: Some(Instant::now()),
                        frames: 0,
                    })?;
                    attempt = 0;

                    let end = self.stream(stream.as_mut(), &mut shutdown).await;
                    if timeout(CLOSE_TIMEOUT, stream.close()).await.is_err() {
                        warn!(endpoint = %self.endpoint, "close handshake timed out, dropping connection");
                    }
                    self.transition_to(ConnectionState::Disconnected)?;

                    match end {
                        SessionEnd::Shutdown => break,
                        SessionEnd::Failed(e) => {
                            self.metrics.record_connection_failure();
                            warn!(endpoint = %self.endpoint, "telemetry stream lost: {}", e);
                        }
                    }
                }
                Err(e) => {
                    self.metrics.record_connection_failure();
                    warn!(endpoint = %self.endpoint, attempt, "{}", e);
                    self.transition_to(ConnectionState::Disconnected)?;
                }
            }

            let delay = self.backoff.delay_for(attempt.max(1));
            warn!(delay_ms = delay.as_millis() as u64, "reconnecting after delay");

            let cancelled = tokio::select! {
                biased;
                _ = shutdown.recv() => true,
                _ = sleep(delay) => false,
            };
            if cancelled {
                break;
            }
        }

        info!("telemetry client stopped");
        Ok(())
    }

    async fn stream(
        &mut self,
        stream: &mut dyn TelemetryStream,
        shutdown: &mut broadcast::Receiver<()>,
    ) -> SessionEnd {
        loop {
            let next = tokio::select! {
                biased;
                _ = shutdown.recv() => return SessionEnd::Shutdown,
                next = stream.next_message() => next,
            };

            match next {
                Some(Ok(payload)) => match self.ingest(&payload) {
                    Ok(_) => {
                        if let ConnectionState::Streaming { frames, .. } = &mut self.state {
                            *frames += 1;
                        }
                    }
                    Err(e) => {
                        self.metrics.record_malformed();
                        warn!("discarding message: {}", e);
                    }
                },
                Some(Err(e)) => return SessionEnd::Failed(e),
                None => return SessionEnd::Failed(LinkError::Closed),
            }
        }
    }
}
