use sixpack::client::mock::{ScriptedConnector, ScriptedEvent};
use sixpack::client::{ConnectionState, TelemetryClient, CLOSE_TIMEOUT};
use sixpack::core::{PanelContext, TelemetryFrame};
use sixpack::engine::RenderLoop;
use sixpack::instruments::{PanelLayout, VsiScale};
use sixpack::render::RecordingSurface;
use sixpack::resilience::BackoffPolicy;
use std::sync::Arc;
use tokio::sync::broadcast;
use tokio::time::{sleep, timeout, Duration};
use url::Url;

const FIRST: &str = r#"{"airspeed":60,"altitude":1000,"verticalSpeed":0,"heading":90,"pitch":0,"roll":0}"#;
const SECOND: &str = r#"{"airspeed":95,"altitude":3200,"verticalSpeed":-400,"heading":180,"pitch":-2,"roll":5}"#;

fn endpoint() -> Url {
    Url::parse("ws://localhost:8080/simconnect").unwrap()
}

fn quick_backoff() -> BackoffPolicy {
    BackoffPolicy::Fixed { delay_ms: 1 }
}

fn decoded(json: &str) -> TelemetryFrame {
    TelemetryFrame::decode(json.as_bytes()).unwrap()
}

async fn wait_until(mut condition: impl FnMut() -> bool) {
    timeout(Duration::from_secs(2), async {
        while !condition() {
            sleep(Duration::from_millis(1)).await;
        }
    })
    .await
    .expect("condition not reached in time");
}

#[test]
fn test_ingest_publishes_valid_frame() {
    let context = PanelContext::new(PanelLayout::default());
    let client = TelemetryClient::new(ScriptedConnector::new(), endpoint(), quick_backoff(), &context);

    let frame = client.ingest(FIRST.as_bytes()).unwrap();

    assert_eq!(frame, decoded(FIRST));
    assert_eq!(context.mailbox.try_read(), Some(frame));
    assert_eq!(context.link_metrics.frames_published(), 1);
    assert_eq!(client.state(), &ConnectionState::Disconnected);
}

#[test]
fn test_ingest_leaves_mailbox_untouched_on_error() {
    let context = PanelContext::new(PanelLayout::default());
    let client = TelemetryClient::new(ScriptedConnector::new(), endpoint(), quick_backoff(), &context);

    client.ingest(FIRST.as_bytes()).unwrap();
    assert!(client.ingest(br#"{"airspeed":10}"#).is_err());

    assert_eq!(context.mailbox.try_read(), Some(decoded(FIRST)));
    assert_eq!(context.mailbox.sequence(), 1);
}

#[tokio::test]
async fn test_malformed_messages_are_discarded() {
    let context = PanelContext::new(PanelLayout::default());
    let connector = Arc::new(ScriptedConnector::new().session(vec![
        ScriptedEvent::Message(FIRST.to_string()),
        ScriptedEvent::Message("garbage".to_string()),
        ScriptedEvent::Message(r#"{"airspeed":1,"altitude":2}"#.to_string()),
        ScriptedEvent::Hang,
    ]));
    let client = TelemetryClient::new(connector.clone(), endpoint(), quick_backoff(), &context);

    let (shutdown_tx, shutdown_rx) = broadcast::channel(1);
    let handle = tokio::spawn(client.run(shutdown_rx));

    let metrics = context.link_metrics.clone();
    wait_until(|| metrics.malformed_messages() == 2).await;

    assert_eq!(context.mailbox.try_read(), Some(decoded(FIRST)));
    assert_eq!(metrics.frames_published(), 1);
    assert_eq!(metrics.connection_failures(), 0);
    assert_eq!(connector.connects(), 1);

    shutdown_tx.send(()).unwrap();
    timeout(Duration::from_secs(1), handle).await.unwrap().unwrap().unwrap();
    assert_eq!(connector.closes(), 1);
}

#[tokio::test]
async fn test_reconnect_after_drop_while_render_keeps_ticking() {
    let context = PanelContext::new(PanelLayout::default());
    let connector = Arc::new(
        ScriptedConnector::new()
            .session(vec![
                ScriptedEvent::Message(FIRST.to_string()),
                ScriptedEvent::Fail("connection reset".to_string()),
            ])
            .refuse("connection refused")
            .session(vec![ScriptedEvent::Message(SECOND.to_string()), ScriptedEvent::Hang]),
    );
    let client = TelemetryClient::new(connector.clone(), endpoint(), quick_backoff(), &context);

    let (shutdown_tx, shutdown_rx) = broadcast::channel(1);
    let mut render = RenderLoop::new(&context, VsiScale::default(), 1000, shutdown_tx.clone());
    let mut surface = RecordingSurface::new();

    let handle = tokio::spawn(client.run(shutdown_rx));

    let second = decoded(SECOND);
    timeout(Duration::from_secs(2), async {
        loop {
            render.tick(&mut surface).unwrap();
            if *render.current_frame() == second {
                break;
            }
            sleep(Duration::from_millis(1)).await;
        }
    })
    .await
    .expect("render loop never saw the reconnected stream");

    let metrics = &context.link_metrics;
    assert_eq!(metrics.connection_failures(), 2);
    assert_eq!(metrics.frames_published(), 2);
    assert_eq!(metrics.connect_attempts(), 3);
    assert_eq!(connector.connects(), 3);
    assert!(surface.frame_count() >= 1);

    shutdown_tx.send(()).unwrap();
    timeout(Duration::from_secs(1), handle).await.unwrap().unwrap().unwrap();
    assert_eq!(connector.closes(), 2);
}

#[tokio::test]
async fn test_shutdown_interrupts_backoff() {
    let context = PanelContext::new(PanelLayout::default());
    let connector = Arc::new(ScriptedConnector::new().refuse("connection refused"));
    let client = TelemetryClient::new(
        connector.clone(),
        endpoint(),
        BackoffPolicy::Fixed { delay_ms: 60_000 },
        &context,
    );

    let (shutdown_tx, shutdown_rx) = broadcast::channel(1);
    let handle = tokio::spawn(client.run(shutdown_rx));

    let metrics = context.link_metrics.clone();
    wait_until(|| metrics.connection_failures() == 1).await;

    shutdown_tx.send(()).unwrap();
    timeout(Duration::from_secs(1), handle).await.unwrap().unwrap().unwrap();

    assert_eq!(connector.connects(), 1);
    assert_eq!(context.mailbox.try_read(), None);
}

#[tokio::test]
async fn test_dropping_shutdown_sender_stops_client() {
    let context = PanelContext::new(PanelLayout::default());
    let connector = Arc::new(ScriptedConnector::new().session(vec![ScriptedEvent::Hang]));
    let client = TelemetryClient::new(connector.clone(), endpoint(), quick_backoff(), &context);

    let (shutdown_tx, shutdown_rx) = broadcast::channel::<()>(1);
    let handle = tokio::spawn(client.run(shutdown_rx));

    wait_until(|| connector.connects() == 1).await;
    drop(shutdown_tx);

    timeout(Duration::from_secs(1), handle).await.unwrap().unwrap().unwrap();
    assert_eq!(connector.closes(), 1);
}

#[tokio::test]
async fn test_stalled_close_does_not_block_shutdown() {
    let context = PanelContext::new(PanelLayout::default());
    let connector = Arc::new(
        ScriptedConnector::new()
            .session(vec![ScriptedEvent::Message(FIRST.to_string()), ScriptedEvent::Hang])
            .stalling_close(),
    );
    let client = TelemetryClient::new(connector.clone(), endpoint(), quick_backoff(), &context);

    let (shutdown_tx, shutdown_rx) = broadcast::channel(1);
    let handle = tokio::spawn(client.run(shutdown_rx));

    let metrics = context.link_metrics.clone();
    wait_until(|| metrics.frames_published() == 1).await;

    shutdown_tx.send(()).unwrap();
    timeout(CLOSE_TIMEOUT + Duration::from_secs(2), handle)
        .await
        .expect("client stuck in close")
        .unwrap()
        .unwrap();
    assert_eq!(connector.closes(), 1);
}
