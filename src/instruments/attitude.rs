use crate::core::TelemetryFrame;
use crate::render::{Color, DrawCommand, Point};
use super::geometry::{center_cap, Segment};
use super::{InstrumentGeometry, InstrumentKind, InstrumentLayout, InstrumentTransform};

const PIXELS_PER_DEGREE: f64 = 10.0;
const LADDER_RUNGS: i32 = 9;
const LADDER_SPACING: f64 = 10.0;
const LADDER_WIDTH: f32 = 80.0;

/// Horizon state of the attitude indicator.
#[derive(Debug, Clone, PartialEq)]
pub struct Horizon {
    /// Vertical shift of the sky/ground split, in pixels
    pub offset_px: f64,
    /// Rotation of the face about its centre, in degrees
    pub roll_deg: f64,
    /// Pitch ladder before rotation, top rung first
    pub ladder: Vec<Segment>,
}

pub fn horizon_offset(pitch: f64) -> f64 {
    pitch * PIXELS_PER_DEGREE
}

/// Artificial horizon. Sky, ground and pitch ladder rotate with roll; the
/// roll index marks and the top pointer stay fixed.
pub struct AttitudeIndicator {
    layout: InstrumentLayout,
}

impl AttitudeIndicator {
    pub fn new(layout: InstrumentLayout) -> Self {
        Self { layout }
    }

    fn ladder(&self, pitch: f64) -> Vec<Segment> {
        let center = self.layout.center();
        let half = LADDER_WIDTH / 2.0;

        (-LADDER_RUNGS..=LADDER_RUNGS)
            .rev()
            .filter(|i| *i != 0)
            .map(|i| {
                let pitch_offset = horizon_offset(pitch) + i as f64 * LADDER_SPACING;
                let y = center.y - pitch_offset as f32;
                Segment::horizontal(center.x - half, center.x + half, y)
            })
            .collect()
    }

    fn roll_scale(&self, out: &mut Vec<DrawCommand>) {
        let center = self.layout.center();
        let radius = self.layout.radius();

        out.push(DrawCommand::Rect {
            origin: Point::new(center.x - 2.0, center.y - radius),
            width: 4.0,
            height: 20.0,
            color: Color::BLACK,
        });
        out.push(DrawCommand::Rect {
            origin: Point::new(center.x - 2.0, center.y + radius - 20.0),
            width: 4.0,
            height: 20.0,
            color: Color::BLACK,
        });
        out.push(DrawCommand::Triangle {
            a: Point::new(center.x, center.y - radius + 20.0),
            b: Point::new(center.x - 5.0, center.y - radius + 35.0),
            c: Point::new(center.x + 5.0, center.y - radius + 35.0),
            color: Color::RED,
        });
    }
}

impl InstrumentTransform for AttitudeIndicator {
    fn kind(&self) -> InstrumentKind {
        InstrumentKind::Attitude
    }

    fn layout(&self) -> &InstrumentLayout {
        &self.layout
    }

    fn transform(&self, frame: &TelemetryFrame) -> InstrumentGeometry {
        let center = self.layout.center();
        let size = self.layout.size();
        let offset = horizon_offset(frame.pitch);
        let ladder = self.ladder(frame.pitch);

        let top = self.layout.y - offset as f32;
        let mut face = vec![
            DrawCommand::Rect {
                origin: Point::new(self.layout.x, top),
                width: size,
                height: size / 2.0,
                color: Color::SKY_BLUE,
            },
            DrawCommand::Rect {
                origin: Point::new(self.layout.x, top + size / 2.0),
                width: size,
                height: size / 2.0,
                color: Color::DARK_GREEN,
            },
        ];
        face.extend(ladder.iter().map(|rung| rung.line(Color::BLACK)));

        let mut geometry = InstrumentGeometry::new(InstrumentKind::Attitude);
        geometry.commands.push(DrawCommand::Rotated {
            center,
            degrees: frame.roll as f32,
            commands: face,
        });
        self.roll_scale(&mut geometry.commands);
        center_cap(center, true, &mut geometry.commands);

        geometry.horizon = Some(Horizon {
            offset_px: offset,
            roll_deg: frame.roll,
            ladder,
        });
        geometry
    }
}
