use serde::{Deserialize, Serialize};
use crate::error::DecodeError;

/// One decoded telemetry update.
///
/// Frames are plain `Copy` values: once decoded they are never mutated, and
/// the render side only ever sees whole frames.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TelemetryFrame {
    /// Indicated airspeed in knots
    pub airspeed: f64,

    /// Altitude in feet
    pub altitude: f64,

    /// Vertical speed in feet per minute, positive when climbing
    pub vertical_speed: f64,

    /// Magnetic heading in degrees, [0, 360)
    pub heading: f64,

    /// Pitch in degrees, positive nose up
    pub pitch: f64,

    /// Roll in degrees, positive right wing down
    pub roll: f64,
}

impl TelemetryFrame {
    /// Decode a single wire message.
    ///
    /// Unknown fields are ignored. Every field of the frame is required, so a
    /// message missing any of them is rejected as a whole.
    pub fn decode(payload: &[u8]) -> Result<Self, DecodeError> {
        Ok(serde_json::from_slice(payload)?)
    }

    /// Static panel state shown by `--demo`.
    pub fn demo() -> Self {
        Self {
            airspeed: 47.0,
            altitude: 10000.0,
            vertical_speed: 500.0,
            heading: 45.0,
            pitch: 2.0,
            roll: 10.0,
        }
    }
}
