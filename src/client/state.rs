use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Lifecycle of the telemetry connection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConnectionState {
    Disconnected,
    Connecting { attempt: u32 },
    Streaming {
        #[serde(skip)]
        since: Option<Instant>,
        frames: u64,
    },
}

impl ConnectionState {
    pub fn can_transition_to(&self, target: &ConnectionState) -> bool {
        use ConnectionState::*;

        matches!(
            (self, target),
            (Disconnected, Connecting { .. }) |
            (Connecting { .. }, Streaming { .. }) |
            (Connecting { .. }, Disconnected) |
            (Streaming { .. }, Disconnected)
        )
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Disconnected => "Disconnected",
            Self::Connecting { .. } => "Connecting",
            Self::Streaming { .. } => "Streaming",
        }
    }
}

impl Default for ConnectionState {
    fn default() -> Self {
        Self::Disconnected
    }
}
