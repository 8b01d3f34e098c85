use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use url::Url;
use crate::error::LinkError;
use super::{Connector, TelemetryStream};

/// One step of a scripted session.
#[derive(Debug, Clone)]
pub enum ScriptedEvent {
    /// Deliver this payload
    Message(String),
    /// Fail the read, ending the session
    Fail(String),
    /// Never deliver anything again
    Hang,
}

/// Connector replaying pre-recorded sessions, one per `connect` call.
///
/// A session that runs out of events reports a peer close. Once every
/// session has been used, further connects are refused.
pub struct ScriptedConnector {
    sessions: Mutex<VecDeque<Result<Vec<ScriptedEvent>, String>>>,
    connects: AtomicUsize,
    closes: Arc<AtomicUsize>,
    stall_close: bool,
}

impl ScriptedConnector {
    pub fn new() -> Self {
        Self {
            sessions: Mutex::new(VecDeque::new()),
            connects: AtomicUsize::new(0),
            closes: Arc::new(AtomicUsize::new(0)),
            stall_close: false,
        }
    }

    /// Make every session's `close` hang after being counted, like a peer
    /// that never answers the closing handshake.
    pub fn stalling_close(mut self) -> Self {
        self.stall_close = true;
        self
    }

    pub fn session(self, events: Vec<ScriptedEvent>) -> Self {
        self.push(Ok(events));
        self
    }

    pub fn refuse(self, reason: impl Into<String>) -> Self {
        self.push(Err(reason.into()));
        self
    }

    fn push(&self, session: Result<Vec<ScriptedEvent>, String>) {
        self.sessions
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push_back(session);
    }

    /// Number of `connect` calls so far, refused ones included.
    pub fn connects(&self) -> usize {
        self.connects.load(Ordering::SeqCst)
    }

    /// Number of sessions released through `close`.
    pub fn closes(&self) -> usize {
        self.closes.load(Ordering::SeqCst)
    }
}

impl Default for ScriptedConnector {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Connector for ScriptedConnector {
    async fn connect(&self, _endpoint: &Url) -> Result<Box<dyn TelemetryStream>, LinkError> {
        self.connects.fetch_add(1, Ordering::SeqCst);
        let next = self.sessions
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .pop_front();

        match next {
            Some(Ok(events)) => Ok(Box::new(ScriptedStream {
                events: events.into(),
                closes: self.closes.clone(),
                stall_close: self.stall_close,
            })),
            Some(Err(reason)) => Err(LinkError::Connect(reason)),
            None => Err(LinkError::Connect("no scripted session left".to_string())),
        }
    }
}

struct ScriptedStream {
    events: VecDeque<ScriptedEvent>,
    closes: Arc<AtomicUsize>,
    stall_close: bool,
}

#[async_trait]
impl TelemetryStream for ScriptedStream {
    async fn next_message(&mut self) -> Option<Result<Vec<u8>, LinkError>> {
        // yield so a tight script cannot starve the shutdown branch
        tokio::task::yield_now().await;
        match self.events.pop_front()? {
            ScriptedEvent::Message(text) => Some(Ok(text.into_bytes())),
            ScriptedEvent::Fail(reason) => Some(Err(LinkError::Read(reason))),
            ScriptedEvent::Hang => {
                self.events.push_front(ScriptedEvent::Hang);
                std::future::pending().await
            }
        }
    }

    async fn close(&mut self) {
        self.closes.fetch_add(1, Ordering::SeqCst);
        if self.stall_close {
            std::future::pending::<()>().await;
        }
    }
}
