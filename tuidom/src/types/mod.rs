mod color;
mod enums;
mod style;
mod theme;

pub use color::{Color, Rgb};
pub use enums::{Border, Direction, Position, TextStyle, Wrap};
pub use style::Style;
pub use theme::{resolve_color, Theme};
