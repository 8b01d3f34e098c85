use anyhow::{anyhow, Result};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{info, trace};
use crate::config::WindowConfig;
use super::{Color, DrawCommand, DrawSurface};

/// Window-less surface used by the binary.
///
/// It tallies the primitives of each frame and logs them at trace level. It
/// closes when the shared `close_requested` flag is raised or after a fixed
/// number of frames.
pub struct HeadlessSurface {
    title: String,
    close_requested: Arc<AtomicBool>,
    frame_limit: Option<u64>,
    frames: u64,
    primitives: usize,
}

impl HeadlessSurface {
    pub fn new(window: &WindowConfig, close_requested: Arc<AtomicBool>) -> Result<Self> {
        if window.width == 0 || window.height == 0 {
            return Err(anyhow!(
                "cannot create a {}x{} surface",
                window.width,
                window.height
            ));
        }
        info!(title = %window.title, width = window.width, height = window.height, "surface created");
        Ok(Self {
            title: window.title.clone(),
            close_requested,
            frame_limit: None,
            frames: 0,
            primitives: 0,
        })
    }

    pub fn with_frame_limit(mut self, limit: u64) -> Self {
        self.frame_limit = Some(limit);
        self
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl DrawSurface for HeadlessSurface {
    fn begin_frame(&mut self, _clear: Color) -> Result<()> {
        self.primitives = 0;
        Ok(())
    }

    fn submit(&mut self, commands: &[DrawCommand]) -> Result<()> {
        self.primitives += commands.iter().map(DrawCommand::primitive_count).sum::<usize>();
        Ok(())
    }

    fn end_frame(&mut self) -> Result<()> {
        self.frames += 1;
        trace!(title = %self.title, frame = self.frames, primitives = self.primitives, "frame presented");
        Ok(())
    }

    fn should_close(&self) -> bool {
        if self.close_requested.load(Ordering::Relaxed) {
            return true;
        }
        matches!(self.frame_limit, Some(limit) if self.frames >= limit)
    }
}
