use std::sync::Arc;
use crate::instruments::PanelLayout;
use crate::observability::{LinkMetrics, RenderMetrics};
use super::LatestFrameMailbox;

/// State shared by the ingestion and render paths.
///
/// The mailbox is the only mutable state crossing the boundary; the layout is
/// fixed at construction and the metrics are counters each side only writes
/// its own half of.
#[derive(Clone)]
pub struct PanelContext {
    pub mailbox: Arc<LatestFrameMailbox>,
    pub layout: PanelLayout,
    pub link_metrics: Arc<LinkMetrics>,
    pub render_metrics: Arc<RenderMetrics>,
}

impl PanelContext {
    pub fn new(layout: PanelLayout) -> Self {
        Self {
            mailbox: Arc::new(LatestFrameMailbox::new()),
            layout,
            link_metrics: Arc::new(LinkMetrics::new()),
            render_metrics: Arc::new(RenderMetrics::new()),
        }
    }
}
