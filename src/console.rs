//! The console and input surface the game draws into and reads from.
//!
//! `Console` is a grid of character cells, `Backend` owns one and presents it
//! to the player. `FrameBuffer` is an in-memory console with no display
//! attached.

use crate::colors::{self, Color};

/// A grid of cells that objects and tiles are drawn into.
pub trait Console {
    fn width(&self) -> i32;
    fn height(&self) -> i32;

    /// Foreground color used by subsequent `put_char` calls.
    fn set_default_foreground(&mut self, color: Color);

    /// Write a character at the given cell, leaving its background alone.
    fn put_char(&mut self, x: i32, y: i32, glyph: char);

    fn set_char_background(&mut self, x: i32, y: i32, color: Color);
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum KeyCode {
    Escape,
    Enter,
    Up,
    Down,
    Left,
    Right,
    Char(char),
    Other,
}

impl Default for KeyCode {
    fn default() -> Self {
        KeyCode::Other
    }
}

/// A single keystroke with its modifier state.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Key {
    pub code: KeyCode,
    pub alt: bool,
    pub ctrl: bool,
    pub shift: bool,
}

impl Key {
    pub fn new(code: KeyCode) -> Self {
        Key {
            code,
            ..Default::default()
        }
    }

    pub fn with_alt(self) -> Self {
        Key { alt: true, ..self }
    }
}

impl From<KeyCode> for Key {
    fn from(code: KeyCode) -> Self {
        Key::new(code)
    }
}

/// A window (or anything pretending to be one) the game runs in.
pub trait Backend {
    /// The offscreen console the frame is composed in.
    fn console(&mut self) -> &mut dyn Console;

    /// Blit the offscreen console and present the frame.
    fn flush(&mut self);

    /// Block until a key is pressed.
    fn wait_for_keypress(&mut self) -> Key;

    /// Return a pending key press, if any, without blocking.
    fn check_for_keypress(&mut self) -> Option<Key>;

    fn window_closed(&self) -> bool;

    fn is_fullscreen(&self) -> bool;

    fn set_fullscreen(&mut self, fullscreen: bool);
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub glyph: char,
    pub foreground: Color,
    pub background: Color,
}

impl Default for Cell {
    fn default() -> Self {
        Cell {
            glyph: ' ',
            foreground: colors::WHITE,
            background: colors::BLACK,
        }
    }
}

/// Console kept entirely in memory. Writes outside the grid are dropped,
/// the same way libtcod ignores them.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameBuffer {
    width: i32,
    height: i32,
    foreground: Color,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: i32, height: i32) -> Self {
        let (width, height) = (width.max(0), height.max(0));
        FrameBuffer {
            width,
            height,
            foreground: colors::WHITE,
            cells: vec![Cell::default(); (width * height) as usize],
        }
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && x < self.width && y >= 0 && y < self.height {
            Some((y * self.width + x) as usize)
        } else {
            None
        }
    }

    pub fn cell(&self, x: i32, y: i32) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    pub fn glyph(&self, x: i32, y: i32) -> Option<char> {
        self.cell(x, y).map(|cell| cell.glyph)
    }

    /// One row of glyphs as a string.
    pub fn row(&self, y: i32) -> String {
        (0..self.width)
            .filter_map(|x| self.glyph(x, y))
            .collect()
    }
}

impl Console for FrameBuffer {
    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn set_default_foreground(&mut self, color: Color) {
        self.foreground = color;
    }

    fn put_char(&mut self, x: i32, y: i32, glyph: char) {
        let foreground = self.foreground;
        if let Some(i) = self.index(x, y) {
            let cell = &mut self.cells[i];
            cell.glyph = glyph;
            cell.foreground = foreground;
        }
    }

    fn set_char_background(&mut self, x: i32, y: i32, color: Color) {
        if let Some(i) = self.index(x, y) {
            self.cells[i].background = color;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_char_uses_default_foreground() {
        let mut con = FrameBuffer::new(4, 2);
        con.set_default_foreground(colors::YELLOW);
        con.put_char(1, 1, '@');
        let cell = con.cell(1, 1).unwrap();
        assert_eq!(cell.glyph, '@');
        assert_eq!(cell.foreground, colors::YELLOW);
        assert_eq!(cell.background, colors::BLACK);
        assert_eq!(con.row(1), " @  ");
    }

    #[test]
    fn background_does_not_touch_glyph() {
        let mut con = FrameBuffer::new(2, 2);
        con.put_char(0, 0, '#');
        con.set_char_background(0, 0, colors::YELLOW);
        assert_eq!(con.glyph(0, 0), Some('#'));
        assert_eq!(con.cell(0, 0).unwrap().background, colors::YELLOW);
    }

    #[test]
    fn writes_off_the_grid_are_dropped() {
        let mut con = FrameBuffer::new(2, 2);
        con.put_char(2, 0, '@');
        con.set_char_background(-1, 0, colors::YELLOW);
        assert_eq!(con, FrameBuffer::new(2, 2));
        assert_eq!(con.glyph(2, 0), None);
    }

    #[test]
    fn alt_modifier() {
        let key = Key::new(KeyCode::Enter).with_alt();
        assert!(key.alt);
        assert!(!key.ctrl);
        assert_eq!(Key::from(KeyCode::Up).code, KeyCode::Up);
    }
}
