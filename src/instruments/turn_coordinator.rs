use crate::core::TelemetryFrame;
use crate::render::{Color, DrawCommand, Point};
use super::geometry::{compass, housing, Needle, NeedleReading};
use super::{InstrumentGeometry, InstrumentKind, InstrumentLayout, InstrumentTransform};

pub const ROLL_MARKS_DEG: [f64; 7] = [-30.0, -20.0, -10.0, 0.0, 10.0, 20.0, 30.0];

const MARK_RADIUS: f32 = 3.0;
const ARC_INSET: f32 = 20.0;

/// Half-height roll gauge: fixed reference dots on an arc and a needle
/// pivoting from the middle of the housing.
pub struct TurnCoordinator {
    layout: InstrumentLayout,
    marks: Vec<Point>,
}

impl TurnCoordinator {
    pub fn new(layout: InstrumentLayout) -> Self {
        let pivot = Self::pivot_of(&layout);
        let arc = Self::arc_radius_of(&layout);
        let marks = ROLL_MARKS_DEG.iter().map(|m| compass(pivot, arc, *m)).collect();
        Self { layout, marks }
    }

    fn pivot_of(layout: &InstrumentLayout) -> Point {
        Point::new(layout.x + layout.size() / 2.0, layout.y + layout.size() / 4.0)
    }

    fn arc_radius_of(layout: &InstrumentLayout) -> f32 {
        layout.size() / 2.0 - ARC_INSET
    }

    pub fn pivot(&self) -> Point {
        Self::pivot_of(&self.layout)
    }
}

impl InstrumentTransform for TurnCoordinator {
    fn kind(&self) -> InstrumentKind {
        InstrumentKind::TurnCoordinator
    }

    fn layout(&self) -> &InstrumentLayout {
        &self.layout
    }

    fn transform(&self, frame: &TelemetryFrame) -> InstrumentGeometry {
        let pivot = self.pivot();
        let needle = Needle {
            from: pivot,
            to: compass(pivot, Self::arc_radius_of(&self.layout), frame.roll),
            reading: NeedleReading::Angle(frame.roll),
        };

        let mut geometry = InstrumentGeometry::new(InstrumentKind::TurnCoordinator);
        housing(self.layout.origin(), self.layout.width, self.layout.height, &mut geometry.commands);
        geometry.commands.extend(self.marks.iter().map(|m| DrawCommand::Circle {
            center: *m,
            radius: MARK_RADIUS,
            color: Color::BLACK,
        }));
        geometry.commands.push(needle.line());

        geometry.marks = self.marks.clone();
        geometry.needle = Some(needle);
        geometry
    }
}
