use anyhow::Result;
use super::{Color, DrawCommand};

/// The drawing collaborator driven once per render tick.
///
/// Implementations own the window (or whatever stands in for it). The render
/// loop calls `begin_frame`, one `submit` per instrument, then `end_frame`.
pub trait DrawSurface: Send {
    fn begin_frame(&mut self, clear: Color) -> Result<()>;

    fn submit(&mut self, commands: &[DrawCommand]) -> Result<()>;

    fn end_frame(&mut self) -> Result<()>;

    /// True once the user (or host) asked the window to close.
    fn should_close(&self) -> bool;
}
