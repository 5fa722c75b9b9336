//! RGB colors used by the renderer.
//!
//! Mirrors the handful of named colors the game needs so that the core does
//! not depend on the console library.

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }
}

pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };
pub const WHITE: Color = Color { r: 255, g: 255, b: 255 };
pub const YELLOW: Color = Color { r: 255, g: 255, b: 0 };

#[cfg(feature = "tcod")]
impl From<Color> for tcod::colors::Color {
    fn from(color: Color) -> Self {
        tcod::colors::Color {
            r: color.r,
            g: color.g,
            b: color.b,
        }
    }
}
