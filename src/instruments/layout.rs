use crate::config::WindowConfig;
use crate::render::Point;

/// Screen region of one instrument. Fixed once the panel is built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InstrumentLayout {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl InstrumentLayout {
    pub fn square(x: f32, y: f32, size: f32) -> Self {
        Self { x, y, width: size, height: size }
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Nominal instrument size; round dials use it as their diameter.
    pub fn size(&self) -> f32 {
        self.width
    }

    pub fn radius(&self) -> f32 {
        self.width / 2.0
    }

    pub fn center(&self) -> Point {
        let r = self.radius();
        Point::new(self.x + r, self.y + r)
    }
}

/// Regions of all six instruments.
///
/// Top row: airspeed, attitude, altimeter. Bottom row: vertical speed,
/// heading, turn coordinator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelLayout {
    pub airspeed: InstrumentLayout,
    pub attitude: InstrumentLayout,
    pub altimeter: InstrumentLayout,
    pub vertical_speed: InstrumentLayout,
    pub heading: InstrumentLayout,
    pub turn_coordinator: InstrumentLayout,
}

impl PanelLayout {
    pub fn reference(window: &WindowConfig) -> Self {
        const MARGIN: f32 = 50.0;

        let size = window.instrument_size as f32;
        let width = window.width as f32;
        let height = window.height as f32;

        let left = MARGIN;
        let middle = width / 2.0 - size / 2.0;
        let right = width - size - MARGIN;
        let top = MARGIN;
        let bottom = height / 2.0 + MARGIN;

        Self {
            airspeed: InstrumentLayout::square(left, top, size),
            attitude: InstrumentLayout::square(middle, top, size),
            altimeter: InstrumentLayout::square(right, top, size),
            vertical_speed: InstrumentLayout::square(left, bottom, size),
            heading: InstrumentLayout::square(middle, bottom, size),
            turn_coordinator: InstrumentLayout {
                x: right,
                y: bottom,
                width: size,
                height: size / 2.0,
            },
        }
    }
}

impl Default for PanelLayout {
    fn default() -> Self {
        Self::reference(&WindowConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_positions() {
        let layout = PanelLayout::default();
        assert_eq!(layout.airspeed.origin(), Point::new(50.0, 50.0));
        assert_eq!(layout.attitude.origin(), Point::new(412.0, 50.0));
        assert_eq!(layout.altimeter.origin(), Point::new(774.0, 50.0));
        assert_eq!(layout.vertical_speed.origin(), Point::new(50.0, 350.0));
        assert_eq!(layout.heading.origin(), Point::new(412.0, 350.0));
        assert_eq!(layout.turn_coordinator.origin(), Point::new(774.0, 350.0));
        assert_eq!(layout.turn_coordinator.height, 100.0);
        assert_eq!(layout.airspeed.center(), Point::new(150.0, 150.0));
    }
}
