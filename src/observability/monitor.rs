use std::sync::Arc;
use super::{LinkMetrics, RenderMetrics};

pub struct PanelMonitor {
    link: Arc<LinkMetrics>,
    render: Arc<RenderMetrics>,
}

impl PanelMonitor {
    pub fn new(link: Arc<LinkMetrics>, render: Arc<RenderMetrics>) -> Self {
        Self { link, render }
    }

    pub fn generate_report(&self) -> String {
        let mut report = String::from("=== Panel Metrics ===\n");

        let failures = self.link.connection_failures();
        let malformed = self.link.malformed_messages();
        report.push_str(&format!(
            "\n[telemetry]\n  Connects: {} attempts, {}\n  Frames: {} frames published\n  Malformed: {}\n",
            self.link.connect_attempts(),
            plural(failures, "failure"),
            self.link.frames_published(),
            plural(malformed, "message"),
        ));

        report.push_str(&format!(
            "\n[render]\n  Ticks: {} ticks, {} with new data\n  Overruns: {}\n  Avg Tick: {}μs\n",
            self.render.ticks(),
            self.render.fresh_ticks(),
            self.render.overruns(),
            self.render.avg_tick_us(),
        ));

        report
    }
}

fn plural(count: u64, noun: &str) -> String {
    format!("{} {}{}", count, noun, if count == 1 { "" } else { "s" })
}
