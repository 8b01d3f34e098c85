pub mod render_loop;
pub mod runtime;

pub use render_loop::{RenderLoop, TickReport};
pub use runtime::{PanelRuntime, RunSummary};
