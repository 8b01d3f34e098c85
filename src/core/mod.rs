pub mod context;
pub mod frame;
pub mod mailbox;

pub use context::PanelContext;
pub use frame::TelemetryFrame;
pub use mailbox::LatestFrameMailbox;
