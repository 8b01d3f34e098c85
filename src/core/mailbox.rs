use std::sync::Mutex;
use super::TelemetryFrame;

/// Single-slot, last-write-wins cell shared between the ingestion and
/// render paths.
///
/// `publish` replaces the whole frame under the lock, so a reader never sees
/// a mix of fields from two publishes. `try_read` is a peek: it copies the
/// current frame out and leaves the slot intact.
///
/// The publish count lives in the same slot as the frame, so a reader that
/// needs both gets a matching pair from one lock.
pub struct LatestFrameMailbox {
    slot: Mutex<(u64, Option<TelemetryFrame>)>,
}

impl LatestFrameMailbox {
    pub fn new() -> Self {
        Self {
            slot: Mutex::new((0, None)),
        }
    }

    pub fn publish(&self, frame: TelemetryFrame) {
        let mut slot = self.slot
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        slot.0 += 1;
        slot.1 = Some(frame);
    }

    pub fn try_read(&self) -> Option<TelemetryFrame> {
        self.try_read_with_sequence().1
    }

    /// Current frame together with the sequence number it was published
    /// under.
    pub fn try_read_with_sequence(&self) -> (u64, Option<TelemetryFrame>) {
        *self.slot
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Number of frames published so far. Zero means "no data yet".
    pub fn sequence(&self) -> u64 {
        self.try_read_with_sequence().0
    }
}

impl Default for LatestFrameMailbox {
    fn default() -> Self {
        Self::new()
    }
}
