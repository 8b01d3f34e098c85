//! Shared dial math.
//!
//! Angles are in degrees everywhere and only become radians at the trig
//! call. Screen Y grows downward, so math-convention points use
//! `y = cy - r*sin(θ)` and compass-convention points use `y = cy - r*cos(θ)`.

use crate::render::{Color, DrawCommand, Point};

const TICK_OUTER_INSET: f32 = 15.0;
const TICK_INNER_INSET: f32 = 25.0;
const LABEL_FONT_SIZE: f32 = 10.0;
const LABEL_HALF_EXTENT: f32 = 5.0;
const CENTER_CAP_RADIUS: f32 = 10.0;

/// Point at `angle_deg` on a circle, 0° pointing right and increasing
/// counter-clockwise.
pub fn polar(center: Point, radius: f32, angle_deg: f64) -> Point {
    let rad = angle_deg.to_radians();
    Point::new(
        center.x + radius * rad.cos() as f32,
        center.y - radius * rad.sin() as f32,
    )
}

/// Point at `bearing_deg` on a circle, 0° pointing up and increasing
/// clockwise.
pub fn compass(center: Point, radius: f32, bearing_deg: f64) -> Point {
    let rad = bearing_deg.to_radians();
    Point::new(
        center.x + radius * rad.sin() as f32,
        center.y - radius * rad.cos() as f32,
    )
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

impl Segment {
    pub fn new(from: Point, to: Point) -> Self {
        Self { from, to }
    }

    pub fn horizontal(x0: f32, x1: f32, y: f32) -> Self {
        Self::new(Point::new(x0, y), Point::new(x1, y))
    }

    pub fn line(&self, color: Color) -> DrawCommand {
        DrawCommand::Line { from: self.from, to: self.to, color }
    }
}

/// A scale label. `anchor` is the point the text is centred on.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub anchor: Point,
}

impl Label {
    pub fn text(&self, color: Color) -> DrawCommand {
        DrawCommand::Text {
            text: self.text.clone(),
            pos: self.anchor.offset(-LABEL_HALF_EXTENT, -LABEL_HALF_EXTENT),
            size: LABEL_FONT_SIZE,
            color,
        }
    }
}

/// What a needle position means for its instrument.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NeedleReading {
    /// Dial needles, in degrees of the dial's own convention
    Angle(f64),
    /// Linear scales, in pixels down from the top of the scale
    Offset(f64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Needle {
    pub from: Point,
    pub to: Point,
    pub reading: NeedleReading,
}

impl Needle {
    pub fn angle_deg(&self) -> Option<f64> {
        match self.reading {
            NeedleReading::Angle(deg) => Some(deg),
            NeedleReading::Offset(_) => None,
        }
    }

    pub fn offset_px(&self) -> Option<f64> {
        match self.reading {
            NeedleReading::Offset(px) => Some(px),
            NeedleReading::Angle(_) => None,
        }
    }

    pub fn line(&self) -> DrawCommand {
        DrawCommand::Line { from: self.from, to: self.to, color: Color::RED }
    }
}

/// Tick/label layout of a round dial.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DialScale {
    pub ticks: usize,
    pub start_deg: f64,
    pub step_deg: f64,
    pub label_every: usize,
    pub label_value_step: u32,
    pub label_inset: f32,
}

/// Precomputed static face of a dial.
#[derive(Debug, Clone, PartialEq)]
pub struct DialFace {
    pub ticks: Vec<Segment>,
    pub labels: Vec<Label>,
}

impl DialScale {
    pub fn tick_angle(&self, index: usize) -> f64 {
        self.start_deg + index as f64 * self.step_deg
    }

    pub fn face(&self, center: Point, radius: f32) -> DialFace {
        let mut ticks = Vec::with_capacity(self.ticks);
        let mut labels = Vec::new();

        for i in 0..self.ticks {
            let angle = self.tick_angle(i);
            ticks.push(Segment::new(
                polar(center, radius - TICK_OUTER_INSET, angle),
                polar(center, radius - TICK_INNER_INSET, angle),
            ));

            if i % self.label_every == 0 {
                labels.push(Label {
                    text: (i as u32 * self.label_value_step).to_string(),
                    anchor: polar(center, radius - self.label_inset, angle),
                });
            }
        }

        DialFace { ticks, labels }
    }
}

impl DialFace {
    pub fn commands(&self) -> impl Iterator<Item = DrawCommand> + '_ {
        self.ticks
            .iter()
            .map(|t| t.line(Color::BLACK))
            .chain(self.labels.iter().map(|l| l.text(Color::BLACK)))
    }
}

/// Outer rim plus white inner face of a round instrument.
pub fn bezel(center: Point, radius: f32, rim: Color) -> [DrawCommand; 2] {
    [
        DrawCommand::Circle { center, radius, color: rim },
        DrawCommand::Circle { center, radius: radius - 10.0, color: Color::RAY_WHITE },
    ]
}

/// Needle hub, optionally outlined.
pub fn center_cap(center: Point, outlined: bool, out: &mut Vec<DrawCommand>) {
    out.push(DrawCommand::Circle { center, radius: CENTER_CAP_RADIUS, color: Color::RAY_WHITE });
    if outlined {
        out.push(DrawCommand::CircleLines { center, radius: CENTER_CAP_RADIUS, color: Color::BLACK });
    }
}

/// Rectangular instrument housing: gray frame with a white inset.
pub fn housing(origin: Point, width: f32, height: f32, out: &mut Vec<DrawCommand>) {
    out.push(DrawCommand::Rect { origin, width, height, color: Color::GRAY });
    out.push(DrawCommand::Rect {
        origin: origin.offset(5.0, 5.0),
        width: width - 10.0,
        height: height - 10.0,
        color: Color::RAY_WHITE,
    });
}
