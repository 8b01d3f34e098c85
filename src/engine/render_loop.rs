use anyhow::Result;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::broadcast;
use tracing::{debug, info};
use crate::core::{LatestFrameMailbox, PanelContext, TelemetryFrame};
use crate::instruments::{InstrumentGeometry, InstrumentPanel, VsiScale};
use crate::observability::RenderMetrics;
use crate::render::{Color, DrawSurface};

/// Result of one render tick.
#[derive(Debug, Clone)]
pub struct TickReport {
    /// Whether a frame newer than the previous tick's was picked up
    pub fresh: bool,
    pub instruments: Vec<InstrumentGeometry>,
}

/// Fixed-rate render side of the panel.
///
/// Every tick peeks the mailbox without blocking, keeps the previous frame
/// when nothing was ever published, and redraws all six instruments. Until
/// the first frame arrives the panel shows the all-zero default frame.
pub struct RenderLoop {
    mailbox: Arc<LatestFrameMailbox>,
    metrics: Arc<RenderMetrics>,
    panel: InstrumentPanel,
    current: TelemetryFrame,
    last_sequence: u64,
    period: Duration,
    shutdown: broadcast::Sender<()>,
}

impl RenderLoop {
    pub fn new(
        context: &PanelContext,
        vsi: VsiScale,
        tick_rate_hz: u32,
        shutdown: broadcast::Sender<()>,
    ) -> Self {
        Self {
            mailbox: context.mailbox.clone(),
            metrics: context.render_metrics.clone(),
            panel: InstrumentPanel::new(&context.layout, vsi),
            current: TelemetryFrame::default(),
            last_sequence: 0,
            period: Duration::from_secs_f64(1.0 / tick_rate_hz.max(1) as f64),
            shutdown,
        }
    }

    pub fn current_frame(&self) -> &TelemetryFrame {
        &self.current
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn tick(&mut self, surface: &mut dyn DrawSurface) -> Result<TickReport> {
        let start = self.metrics.start_tick();

        let (sequence, latest) = self.mailbox.try_read_with_sequence();
        if let Some(frame) = latest {
            self.current = frame;
        }
        let fresh = sequence != self.last_sequence;
        self.last_sequence = sequence;

        let instruments = self.panel.transform_all(&self.current);

        surface.begin_frame(Color::RAY_WHITE)?;
        for instrument in &instruments {
            surface.submit(&instrument.commands)?;
        }
        surface.end_frame()?;

        self.metrics.finish_tick(start, fresh);
        Ok(TickReport { fresh, instruments })
    }

    /// Tick until the surface asks to close, then signal the ingestion side
    /// to shut down. Returns the number of completed ticks.
    ///
    /// Blocks the calling thread between ticks. A tick that misses its
    /// deadline is counted as an overrun and the schedule restarts from now.
    pub fn run(&mut self, surface: &mut dyn DrawSurface) -> Result<u64> {
        info!(period_ms = self.period.as_millis() as u64, "render loop started");

        let mut ticks = 0u64;
        let mut deadline = Instant::now();

        let result = loop {
            if surface.should_close() {
                break Ok(ticks);
            }
            if let Err(e) = self.tick(surface) {
                break Err(e);
            }
            ticks += 1;

            deadline += self.period;
            let now = Instant::now();
            if deadline > now {
                std::thread::sleep(deadline - now);
            } else {
                self.metrics.record_overrun();
                debug!(late_us = (now - deadline).as_micros() as u64, "render tick overran");
                deadline = now;
            }
        };

        // no receivers just means the client is already gone
        let _ = self.shutdown.send(());
        info!(ticks, "render loop stopped");
        result
    }
}
