use sixpack::core::TelemetryFrame;
use sixpack::instruments::{
    airspeed, altimeter, AirspeedIndicator, Altimeter, HeadingIndicator, InstrumentKind,
    InstrumentTransform, PanelLayout,
};
use sixpack::render::{Color, DrawCommand, Point};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

fn near(p: Point, x: f32, y: f32) -> bool {
    (p.x - x).abs() < 1e-3 && (p.y - y).abs() < 1e-3
}

fn with(f: impl FnOnce(&mut TelemetryFrame)) -> TelemetryFrame {
    let mut frame = TelemetryFrame::default();
    f(&mut frame);
    frame
}

#[test]
fn test_airspeed_needle_angles() {
    assert!(approx(airspeed::needle_angle(0.0), -135.0));
    assert!(approx(airspeed::needle_angle(60.0), 0.0));
    assert!(approx(airspeed::needle_angle(120.0), 135.0));
}

#[test]
fn test_airspeed_is_not_clamped() {
    // 200 kt pegs beyond the printed 160 kt
    assert!(approx(airspeed::needle_angle(200.0), 315.0));
    assert!(approx(airspeed::needle_angle(-10.0), -157.5));
}

#[test]
fn test_airspeed_face() {
    let dial = AirspeedIndicator::new(PanelLayout::default().airspeed);
    let geometry = dial.transform(&TelemetryFrame::default());

    assert_eq!(geometry.kind, InstrumentKind::Airspeed);
    assert_eq!(geometry.ticks.len(), 17);

    let labels: Vec<_> = geometry.labels.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(labels, ["0", "20", "40", "60", "80", "100", "120", "140", "160"]);

    // first tick at -135°, between radius-15 and radius-25 from (150,150)
    let first = geometry.ticks[0];
    let (s, c) = (-135f64).to_radians().sin_cos();
    assert!(near(first.from, 150.0 + 85.0 * c as f32, 150.0 - 85.0 * s as f32));
    assert!(near(first.to, 150.0 + 75.0 * c as f32, 150.0 - 75.0 * s as f32));

    assert!(matches!(
        geometry.commands[0],
        DrawCommand::Circle { radius, color: Color::DARK_GRAY, .. } if radius == 100.0
    ));
    assert!(matches!(geometry.commands.last(), Some(DrawCommand::CircleLines { .. })));
}

#[test]
fn test_airspeed_needle_points_right_at_60_knots() {
    let dial = AirspeedIndicator::new(PanelLayout::default().airspeed);
    let geometry = dial.transform(&with(|f| f.airspeed = 60.0));
    let needle = geometry.needle.unwrap();

    assert!(approx(needle.angle_deg().unwrap(), 0.0));
    assert!(near(needle.from, 150.0, 150.0));
    assert!(near(needle.to, 210.0, 150.0));
    assert!(geometry.commands.contains(&needle.line()));
}

#[test]
fn test_altimeter_needle_angles() {
    assert!(approx(altimeter::needle_angle(0.0), 0.0));
    assert!(approx(altimeter::needle_angle(500.0), 180.0));
    assert!(approx(altimeter::needle_angle(1000.0), 360.0));
    assert!(approx(altimeter::needle_angle(10_250.0), 3690.0));
}

#[test]
fn test_altimeter_full_revolution_looks_like_zero() {
    let dial = Altimeter::new(PanelLayout::default().altimeter);
    let zero = dial.transform(&with(|f| f.altitude = 0.0)).needle.unwrap();
    let thousand = dial.transform(&with(|f| f.altitude = 1000.0)).needle.unwrap();

    assert!(approx(thousand.angle_deg().unwrap(), 360.0));
    assert!(near(thousand.to, zero.to.x, zero.to.y));
}

#[test]
fn test_altimeter_face() {
    let dial = Altimeter::new(PanelLayout::default().altimeter);
    let geometry = dial.transform(&with(|f| f.altitude = 500.0));

    assert_eq!(geometry.ticks.len(), 36);
    let labels: Vec<_> = geometry.labels.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(labels, ["0", "60", "120", "180", "240", "300"]);

    // 500 ft points left of centre (874,150)
    let needle = geometry.needle.unwrap();
    assert!(near(needle.to, 814.0, 150.0));
}

#[test]
fn test_heading_needle_north_points_up() {
    let dial = HeadingIndicator::new(PanelLayout::default().heading);
    let needle = dial.transform(&with(|f| f.heading = 0.0)).needle.unwrap();

    let dx = needle.to.x - needle.from.x;
    let dy = needle.to.y - needle.from.y;
    assert!(dx.abs() < 1e-3);
    assert!(dy < 0.0);
    assert!(near(needle.to, 512.0, 370.0));
}

#[test]
fn test_heading_needle_east_points_right() {
    let dial = HeadingIndicator::new(PanelLayout::default().heading);
    let needle = dial.transform(&with(|f| f.heading = 90.0)).needle.unwrap();

    let dx = needle.to.x - needle.from.x;
    let dy = needle.to.y - needle.from.y;
    assert!(dx > 0.0);
    assert!(dy.abs() < 1e-3);
    assert!(approx(needle.angle_deg().unwrap(), 90.0));
}

#[test]
fn test_heading_labels() {
    let dial = HeadingIndicator::new(PanelLayout::default().heading);
    let geometry = dial.transform(&TelemetryFrame::default());

    assert_eq!(geometry.ticks.len(), 36);
    let labels: Vec<_> = geometry.labels.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(labels, ["0", "90", "180", "270"]);
}

#[test]
fn test_dial_faces_are_static() {
    let dial = HeadingIndicator::new(PanelLayout::default().heading);
    let a = dial.transform(&with(|f| f.heading = 10.0));
    let b = dial.transform(&with(|f| f.heading = 200.0));

    assert_eq!(a.ticks, b.ticks);
    assert_eq!(a.labels, b.labels);
    assert_ne!(a.needle, b.needle);
}
