use crate::core::TelemetryFrame;
use crate::render::Color;
use super::geometry::{bezel, center_cap, compass, DialFace, DialScale, Needle, NeedleReading};
use super::{InstrumentGeometry, InstrumentKind, InstrumentLayout, InstrumentTransform};

/// 36 ticks 10° apart, labelled 0/90/180/270.
pub const SCALE: DialScale = DialScale {
    ticks: 36,
    start_deg: 0.0,
    step_deg: 10.0,
    label_every: 9,
    label_value_step: 10,
    label_inset: 40.0,
};

const NEEDLE_INSET: f32 = 20.0;

pub struct HeadingIndicator {
    layout: InstrumentLayout,
    face: DialFace,
}

impl HeadingIndicator {
    pub fn new(layout: InstrumentLayout) -> Self {
        let face = SCALE.face(layout.center(), layout.radius());
        Self { layout, face }
    }
}

impl InstrumentTransform for HeadingIndicator {
    fn kind(&self) -> InstrumentKind {
        InstrumentKind::Heading
    }

    fn layout(&self) -> &InstrumentLayout {
        &self.layout
    }

    // The needle is compass-relative: 0° is straight up, clockwise positive.
    fn transform(&self, frame: &TelemetryFrame) -> InstrumentGeometry {
        let center = self.layout.center();
        let radius = self.layout.radius();

        let needle = Needle {
            from: center,
            to: compass(center, radius - NEEDLE_INSET, frame.heading),
            reading: NeedleReading::Angle(frame.heading),
        };

        let mut geometry = InstrumentGeometry::new(InstrumentKind::Heading);
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
