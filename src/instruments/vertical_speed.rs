use serde::{Deserialize, Serialize};
use crate::core::TelemetryFrame;
use crate::render::{Color, Point};
use super::geometry::{housing, Label, Needle, NeedleReading, Segment};
use super::{InstrumentGeometry, InstrumentKind, InstrumentLayout, InstrumentTransform};

const GRIDLINES: usize = 13;
const LABELS: usize = 7;
const SCALE_MARGIN: f32 = 20.0;
const NEEDLE_MARGIN: f32 = 10.0;

/// Printed scale and needle gain of the vertical speed indicator.
///
/// The two are independent: the face is printed for ±`label_full_scale_fpm`
/// while the needle reaches the end of the scale at ±`gain_fpm`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VsiScale {
    pub label_full_scale_fpm: f64,
    pub gain_fpm: f64,
}

impl Default for VsiScale {
    fn default() -> Self {
        Self {
            label_full_scale_fpm: 600.0,
            gain_fpm: 2000.0,
        }
    }
}

impl VsiScale {
    /// Label texts top to bottom, in hundreds of feet per minute.
    pub fn label_texts(&self) -> Vec<String> {
        let step = self.label_full_scale_fpm / ((LABELS - 1) as f64 / 2.0);
        (0..LABELS)
            .map(|k| {
                let fpm = (self.label_full_scale_fpm - k as f64 * step).abs();
                format!("{}", (fpm / 100.0).round() as i64)
            })
            .collect()
    }

    /// Needle distance below the top of a scale `scale_height` pixels tall.
    pub fn needle_offset(&self, vertical_speed: f64, scale_height: f64) -> f64 {
        let half = scale_height / 2.0;
        half - vertical_speed / self.gain_fpm * half
    }
}

/// Linear vertical speed scale. Climb moves the needle up.
pub struct VerticalSpeedIndicator {
    layout: InstrumentLayout,
    scale: VsiScale,
    gridlines: Vec<Segment>,
    labels: Vec<Label>,
}

impl VerticalSpeedIndicator {
    pub fn new(layout: InstrumentLayout, scale: VsiScale) -> Self {
        let step = Self::scale_height_of(&layout) / (GRIDLINES - 1) as f32;
        let top = layout.y + SCALE_MARGIN;

        let gridlines = (0..GRIDLINES)
            .map(|i| {
                Segment::horizontal(
                    layout.x + SCALE_MARGIN,
                    layout.x + layout.width - SCALE_MARGIN,
                    top + i as f32 * step,
                )
            })
            .collect();

        // seven labels over thirteen gridlines: every other line, so 6 and 6
        // land on the top and bottom of the scale and 0 on the centre line
        let label_stride = (GRIDLINES - 1) / (LABELS - 1);
        let labels = scale
            .label_texts()
            .into_iter()
            .enumerate()
            .map(|(k, text)| Label {
                text,
                anchor: Point::new(
                    layout.x + layout.width / 2.0 - 5.0,
                    top + (k * label_stride) as f32 * step,
                ),
            })
            .collect();

        Self { layout, scale, gridlines, labels }
    }

    fn scale_height_of(layout: &InstrumentLayout) -> f32 {
        layout.size() - 2.0 * SCALE_MARGIN
    }

    pub fn scale_height(&self) -> f32 {
        Self::scale_height_of(&self.layout)
    }

    /// Screen Y of the top of the scale.
    pub fn scale_top(&self) -> f32 {
        self.layout.y + SCALE_MARGIN
    }
}

impl InstrumentTransform for VerticalSpeedIndicator {
    fn kind(&self) -> InstrumentKind {
        InstrumentKind::VerticalSpeed
    }

    fn layout(&self) -> &InstrumentLayout {
        &self.layout
    }

    fn transform(&self, frame: &TelemetryFrame) -> InstrumentGeometry {
        let offset = self.scale.needle_offset(frame.vertical_speed, self.scale_height() as f64);
        let y = self.scale_top() + offset as f32;
        let span = Segment::horizontal(
            self.layout.x + NEEDLE_MARGIN,
            self.layout.x + self.layout.width - NEEDLE_MARGIN,
            y,
        );
        let needle = Needle {
            from: span.from,
            to: span.to,
            reading: NeedleReading::Offset(offset),
        };

        let mut geometry = InstrumentGeometry::new(InstrumentKind::VerticalSpeed);
        housing(self.layout.origin(), self.layout.width, self.layout.height, &mut geometry.commands);
        geometry.commands.extend(self.gridlines.iter().map(|g| g.line(Color::BLACK)));
        geometry.commands.extend(self.labels.iter().map(|l| l.text(Color::BLACK)));
        geometry.commands.push(needle.line());

        geometry.ticks = self.gridlines.clone();
        geometry.labels = self.labels.clone();
        geometry.needle = Some(needle);
        geometry
    }
}
