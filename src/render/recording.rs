use anyhow::{anyhow, Result};
use super::{Color, DrawCommand, DrawSurface};

/// Surface that keeps every submitted frame in memory.
///
/// Closes itself after `close_after` completed frames when a limit is set.
pub struct RecordingSurface {
    frames: Vec<Vec<DrawCommand>>,
    current: Option<Vec<DrawCommand>>,
    close_after: Option<usize>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self {
            frames: Vec::new(),
            current: None,
            close_after: None,
        }
    }

    pub fn closing_after(frames: usize) -> Self {
        Self {
            close_after: Some(frames),
            ..Self::new()
        }
    }

    pub fn frames(&self) -> &[Vec<DrawCommand>] {
        &self.frames
    }

    pub fn last_frame(&self) -> Option<&[DrawCommand]> {
        self.frames.last().map(|f| f.as_slice())
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawSurface for RecordingSurface {
    fn begin_frame(&mut self, _clear: Color) -> Result<()> {
        if self.current.is_some() {
            return Err(anyhow!("begin_frame called twice without end_frame"));
        }
        self.current = Some(Vec::new());
        Ok(())
    }

    fn submit(&mut self, commands: &[DrawCommand]) -> Result<()> {
        let current = self.current
            .as_mut()
            .ok_or(anyhow!("submit outside of a frame"))?;
        current.extend_from_slice(commands);
        Ok(())
    }

    fn end_frame(&mut self) -> Result<()> {
        let frame = self.current
            .take()
            .ok_or(anyhow!("end_frame without begin_frame"))?;
        self.frames.push(frame);
        Ok(())
    }

    fn should_close(&self) -> bool {
        matches!(self.close_after, Some(limit) if self.frames.len() >= limit)
    }
}
