pub mod headless;
pub mod primitives;
pub mod recording;
pub mod surface;

pub use headless::HeadlessSurface;
pub use primitives::{Color, DrawCommand, Point};
pub use recording::RecordingSurface;
pub use surface::DrawSurface;
