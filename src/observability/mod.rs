pub mod metrics;
pub mod monitor;

pub use metrics::{LinkMetrics, RenderMetrics};
pub use monitor::PanelMonitor;
