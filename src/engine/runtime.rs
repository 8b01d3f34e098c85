use anyhow::{Context, Result};
use tokio::sync::broadcast;
use tracing::info;
use crate::client::{Connector, TelemetryClient};
use crate::config::PanelConfig;
use crate::core::PanelContext;
use crate::instruments::PanelLayout;
use crate::observability::PanelMonitor;
use crate::render::DrawSurface;
use super::RenderLoop;

#[derive(Debug, Clone)]
pub struct RunSummary {
    pub ticks: u64,
    pub report: String,
}

/// Wires the ingestion and render paths together around one shared
/// [`PanelContext`].
pub struct PanelRuntime {
    config: PanelConfig,
    context: PanelContext,
    shutdown_tx: broadcast::Sender<()>,
}

impl PanelRuntime {
    pub fn new(config: PanelConfig) -> Result<Self> {
        config.validate()?;
        let layout = PanelLayout::reference(&config.window);
        let (shutdown_tx, _) = broadcast::channel(16);

        Ok(Self {
            config,
            context: PanelContext::new(layout),
            shutdown_tx,
        })
    }

    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    pub fn context(&self) -> &PanelContext {
        &self.context
    }

    /// Run until the surface closes.
    ///
    /// The telemetry client runs as a tokio task and the render loop on a
    /// blocking thread. Shutdown order: render loop stops, shutdown is
    /// broadcast, the client closes its connection, the client is joined.
    pub async fn run<S, C>(self, surface: S, connector: C) -> Result<RunSummary>
    where
        S: DrawSurface + 'static,
        C: Connector + 'static,
    {
        let endpoint = self.config.endpoint_url()?;
        let client = TelemetryClient::new(
            connector,
            endpoint,
            self.config.reconnect.clone(),
            &self.context,
        );
        let client_handle = tokio::spawn(client.run(self.shutdown_tx.subscribe()));

        let mut render = RenderLoop::new(
            &self.context,
            self.config.vsi.clone(),
            self.config.window.tick_rate_hz,
            self.shutdown_tx.clone(),
        );
        let render_handle = tokio::task::spawn_blocking(move || {
            let mut surface = surface;
            render.run(&mut surface)
        });

        let render_result = render_handle.await.context("render loop panicked");

        // the render loop already signalled on a clean close; repeat for the
        // error and panic paths
        let _ = self.shutdown_tx.send(());
        client_handle.await.context("telemetry client panicked")??;

        let ticks = render_result??;
        let report = PanelMonitor::new(
            self.context.link_metrics.clone(),
            self.context.render_metrics.clone(),
        )
        .generate_report();
        info!("{}", report);

        Ok(RunSummary { ticks, report })
    }
}
