pub mod airspeed;
pub mod altimeter;
pub mod attitude;
pub mod geometry;
pub mod heading;
pub mod layout;
pub mod panel;
pub mod turn_coordinator;
pub mod vertical_speed;

use serde::{Deserialize, Serialize};
use crate::core::TelemetryFrame;
use crate::render::{DrawCommand, Point};

pub use airspeed::AirspeedIndicator;
pub use altimeter::Altimeter;
pub use attitude::{AttitudeIndicator, Horizon};
pub use geometry::{Label, Needle, NeedleReading, Segment};
pub use heading::HeadingIndicator;
pub use layout::{InstrumentLayout, PanelLayout};
pub use panel::InstrumentPanel;
pub use turn_coordinator::TurnCoordinator;
pub use vertical_speed::{VerticalSpeedIndicator, VsiScale};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InstrumentKind {
    Airspeed,
    Attitude,
    Altimeter,
    VerticalSpeed,
    Heading,
    TurnCoordinator,
}

/// Drawable output of one instrument for one frame.
///
/// `commands` is the complete ordered draw list. The other fields expose the
/// same geometry in semantic form.
#[derive(Debug, Clone, PartialEq)]
pub struct InstrumentGeometry {
    pub kind: InstrumentKind,
    pub ticks: Vec<Segment>,
    pub labels: Vec<Label>,
    pub needle: Option<Needle>,
    /// Fixed reference dots (turn coordinator)
    pub marks: Vec<Point>,
    /// Rotating horizon (attitude indicator)
    pub horizon: Option<Horizon>,
    pub commands: Vec<DrawCommand>,
}

impl InstrumentGeometry {
    pub fn new(kind: InstrumentKind) -> Self {
        Self {
            kind,
            ticks: Vec::new(),
            labels: Vec::new(),
            needle: None,
            marks: Vec::new(),
            horizon: None,
            commands: Vec::new(),
        }
    }
}

/// Maps telemetry onto the geometry of one gauge.
///
/// Implementations are pure: the same frame and layout always produce the
/// same geometry. Values are never clamped, so a gauge pegs past its printed
/// scale exactly as computed.
pub trait InstrumentTransform: Send + Sync {
    fn kind(&self) -> InstrumentKind;

    fn layout(&self) -> &InstrumentLayout;

    fn transform(&self, frame: &TelemetryFrame) -> InstrumentGeometry;
}
