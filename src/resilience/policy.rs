use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Delay schedule between reconnect attempts.
///
/// There is deliberately no attempt limit: the ingestion path keeps retrying
/// until it is told to shut down.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum BackoffPolicy {
    /// Same delay before every attempt
    Fixed { delay_ms: u64 },

    /// Doubling delay starting at `base_ms`, capped at `max_ms`
    Exponential { base_ms: u64, max_ms: u64 },
}

impl BackoffPolicy {
    /// Delay to wait before reconnect attempt `attempt` (1-based).
    pub fn delay_for(&self, attempt: u32) -> Duration {
        match self {
            BackoffPolicy::Fixed { delay_ms } => Duration::from_millis(*delay_ms),
            BackoffPolicy::Exponential { base_ms, max_ms } => {
                let shift = attempt.saturating_sub(1).min(63);
                let factor = 1u64.checked_shl(shift).unwrap_or(u64::MAX);
                let delay = base_ms.saturating_mul(factor).min(*max_ms);
                Duration::from_millis(delay)
            }
        }
    }
}

impl Default for BackoffPolicy {
    fn default() -> Self {
        BackoffPolicy::Exponential {
            base_ms: 500,
            max_ms: 10_000,
        }
    }
}
