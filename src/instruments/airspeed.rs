use crate::core::TelemetryFrame;
use crate::render::Color;
use super::geometry::{bezel, center_cap, polar, DialFace, DialScale, Needle, NeedleReading};
use super::{InstrumentGeometry, InstrumentKind, InstrumentLayout, InstrumentTransform};

/// 0-160 kt dial: 17 ticks 22.5° apart starting at -135°, labelled every
/// other tick.
pub const SCALE: DialScale = DialScale {
    ticks: 17,
    start_deg: -135.0,
    step_deg: 22.5,
    label_every: 2,
    label_value_step: 10,
    label_inset: 45.0,
};

const DEGREES_PER_KNOT: f64 = 2.25;
const NEEDLE_INSET: f32 = 40.0;

pub fn needle_angle(airspeed: f64) -> f64 {
    airspeed * DEGREES_PER_KNOT + SCALE.start_deg
}

pub struct AirspeedIndicator {
    layout: InstrumentLayout,
    face: DialFace,
}

impl AirspeedIndicator {
    pub fn new(layout: InstrumentLayout) -> Self {
        let face = SCALE.face(layout.center(), layout.radius());
        Self { layout, face }
    }
}

impl InstrumentTransform for AirspeedIndicator {
    fn kind(&self) -> InstrumentKind {
        InstrumentKind::Airspeed
    }

    fn layout(&self) -> &InstrumentLayout {
        &self.layout
    }

    fn transform(&self, frame: &TelemetryFrame) -> InstrumentGeometry {
        let center = self.layout.center();
        let radius = self.layout.radius();
        let angle = needle_angle(frame.airspeed);

        let needle = Needle {
            from: center,
            to: polar(center, radius - NEEDLE_INSET, angle),
            reading: NeedleReading::Angle(angle),
        };

        let mut geometry = InstrumentGeometry::new(InstrumentKind::Airspeed);
        geometry.commands.extend(bezel(center, radius, Color::DARK_GRAY));
        geometry.commands.extend(self.face.commands());
        geometry.commands.push(needle.line());
        center_cap(center, true, &mut geometry.commands);

        geometry.ticks = self.face.ticks.clone();
        geometry.labels = self.face.labels.clone();
        geometry.needle = Some(needle);
        geometry
    }
}
