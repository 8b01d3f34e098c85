use crate::core::TelemetryFrame;
use crate::render::Color;
use super::geometry::{bezel, center_cap, polar, DialFace, DialScale, Needle, NeedleReading};
use super::{InstrumentGeometry, InstrumentKind, InstrumentLayout, InstrumentTransform};

/// 36 ticks 10° apart, labelled every 6th tick in tens of feet.
pub const SCALE: DialScale = DialScale {
    ticks: 36,
    start_deg: 0.0,
    step_deg: 10.0,
    label_every: 6,
    label_value_step: 10,
    label_inset: 40.0,
};

const FEET_PER_REVOLUTION: f64 = 1000.0;
const NEEDLE_INSET: f32 = 40.0;

/// One revolution per 1000 ft. Not reduced modulo 360, so 1000 ft reads 360°.
pub fn needle_angle(altitude: f64) -> f64 {
    altitude / FEET_PER_REVOLUTION * 360.0
}

pub struct Altimeter {
    layout: InstrumentLayout,
    face: DialFace,
}

impl Altimeter {
    pub fn new(layout: InstrumentLayout) -> Self {
        let face = SCALE.face(layout.center(), layout.radius());
        Self { layout, face }
    }
}

impl InstrumentTransform for Altimeter {
    fn kind(&self) -> InstrumentKind {
        InstrumentKind::Altimeter
    }

    fn layout(&self) -> &InstrumentLayout {
        &self.layout
    }

    fn transform(&self, frame: &TelemetryFrame) -> InstrumentGeometry {
        let center = self.layout.center();
        let radius = self.layout.radius();
        let angle = needle_angle(frame.altitude);

        let needle = Needle {
            from: center,
            to: polar(center, radius - NEEDLE_INSET, angle),
            reading: NeedleReading::Angle(angle),
        };

        let mut geometry = InstrumentGeometry::new(InstrumentKind::Altimeter);
        geometry.commands.extend(bezel(center, radius, Color::GRAY));
        geometry.commands.extend(self.face.commands());
        geometry.commands.push(needle.line());
        center_cap(center, false, &mut geometry.commands);

        geometry.ticks = self.face.ticks.clone();
        geometry.labels = self.face.labels.clone();
        geometry.needle = Some(needle);
        geometry
    }
}
