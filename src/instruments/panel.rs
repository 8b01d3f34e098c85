use crate::core::TelemetryFrame;
use super::{
    AirspeedIndicator, Altimeter, AttitudeIndicator, HeadingIndicator, InstrumentGeometry,
    InstrumentTransform, PanelLayout, TurnCoordinator, VerticalSpeedIndicator, VsiScale,
};

/// The six gauges in draw order.
pub struct InstrumentPanel {
    instruments: Vec<Box<dyn InstrumentTransform>>,
}

impl InstrumentPanel {
    pub fn new(layout: &PanelLayout, vsi: VsiScale) -> Self {
        let instruments: Vec<Box<dyn InstrumentTransform>> = vec![
            Box::new(AirspeedIndicator::new(layout.airspeed)),
            Box::new(AttitudeIndicator::new(layout.attitude)),
            Box::new(Altimeter::new(layout.altimeter)),
            Box::new(VerticalSpeedIndicator::new(layout.vertical_speed, vsi)),
            Box::new(HeadingIndicator::new(layout.heading)),
            Box::new(TurnCoordinator::new(layout.turn_coordinator)),
        ];
        Self { instruments }
    }

    pub fn instruments(&self) -> &[Box<dyn InstrumentTransform>] {
        &self.instruments
    }

    pub fn transform_all(&self, frame: &TelemetryFrame) -> Vec<InstrumentGeometry> {
        self.instruments.iter().map(|i| i.transform(frame)).collect()
    }
}
