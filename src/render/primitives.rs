/// Screen position in pixels. Y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const RAY_WHITE: Color = Color::rgb(245, 245, 245);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const GRAY: Color = Color::rgb(130, 130, 130);
    pub const DARK_GRAY: Color = Color::rgb(80, 80, 80);
    pub const RED: Color = Color::rgb(230, 41, 55);
    pub const SKY_BLUE: Color = Color::rgb(102, 191, 255);
    pub const DARK_GREEN: Color = Color::rgb(0, 117, 44);
}

/// A single primitive handed to the drawing collaborator.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Line { from: Point, to: Point, color: Color },
    Circle { center: Point, radius: f32, color: Color },
    CircleLines { center: Point, radius: f32, color: Color },
    Rect { origin: Point, width: f32, height: f32, color: Color },
    Triangle { a: Point, b: Point, c: Point, color: Color },
    Text { text: String, pos: Point, size: f32, color: Color },

    /// Children drawn rotated by `degrees` about `center`
    Rotated { center: Point, degrees: f32, commands: Vec<DrawCommand> },
}

impl DrawCommand {
    /// Number of leaf primitives, counting the children of rotated groups.
    pub fn primitive_count(&self) -> usize {
        match self {
            DrawCommand::Rotated { commands, .. } => {
                commands.iter().map(DrawCommand::primitive_count).sum()
            }
            _ => 1,
        }
    }
}
