use sixpack::config::PanelConfig;
use sixpack::resilience::BackoffPolicy;
use std::io::Write;
use tempfile::NamedTempFile;
use tokio_test::{assert_err, assert_ok};

#[test]
fn test_defaults() {
    let config = PanelConfig::default();

    assert_eq!(config.endpoint, "ws://localhost:8080/simconnect");
    assert_eq!(config.window.width, 1024);
    assert_eq!(config.window.height, 600);
    assert_eq!(config.window.tick_rate_hz, 30);
    assert_eq!(config.window.instrument_size, 200);
    assert_eq!(config.window.title, "Aviation Six-Pack");
    assert_eq!(config.vsi.label_full_scale_fpm, 600.0);
    assert_eq!(config.vsi.gain_fpm, 2000.0);
    assert_ok!(config.validate());
}

#[test]
fn test_empty_object_uses_defaults() {
    let config = PanelConfig::from_json("{}").unwrap();
    assert_eq!(config, PanelConfig::default());
}

#[test]
fn test_partial_override() {
    let config = PanelConfig::from_json(
        r#"{
            "endpoint": "wss://sim.example.org/telemetry",
            "window": { "tick_rate_hz": 60 },
            "reconnect": { "strategy": "fixed", "delay_ms": 1000 },
            "vsi": { "gain_fpm": 1000 }
        }"#,
    )
    .unwrap();

    assert_eq!(config.window.tick_rate_hz, 60);
    assert_eq!(config.window.width, 1024);
    assert_eq!(config.reconnect, BackoffPolicy::Fixed { delay_ms: 1000 });
    assert_eq!(config.vsi.gain_fpm, 1000.0);
    assert_eq!(config.vsi.label_full_scale_fpm, 600.0);
    assert_eq!(config.endpoint_url().unwrap().host_str(), Some("sim.example.org"));
}

#[test]
fn test_rejects_bad_endpoint() {
    assert_err!(PanelConfig::from_json(r#"{"endpoint": "not a url"}"#));
    assert_err!(PanelConfig::from_json(r#"{"endpoint": "http://localhost/simconnect"}"#));
}

#[test]
fn test_rejects_zero_tick_rate() {
    assert_err!(PanelConfig::from_json(r#"{"window": {"tick_rate_hz": 0}}"#));
}

#[test]
fn test_rejects_zero_vsi_gain() {
    assert_err!(PanelConfig::from_json(r#"{"vsi": {"gain_fpm": 0}}"#));
}

#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{"endpoint": "ws://10.0.0.5:9000/simconnect"}}"#).unwrap();

    let config = PanelConfig::load(file.path()).unwrap();
    assert_eq!(config.endpoint, "ws://10.0.0.5:9000/simconnect");
}

#[test]
fn test_load_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let result = PanelConfig::load(dir.path().join("absent.json"));
    assert!(result.is_err());
}
