//! libtcod window: an offscreen console blitted to the root console on flush.

use tcod::console::{self as tcod_console, BackgroundFlag, FontLayout, FontType, Offscreen, Root};
use tcod::console::Console as _;
use tcod::input::{self, Event, KeyCode as TcodKeyCode};

use crate::colors::Color;
use crate::config::Settings;
use crate::console::{Backend, Console, Key, KeyCode};

pub struct TcodConsole {
    con: Offscreen,
}

impl Console for TcodConsole {
    fn width(&self) -> i32 {
        self.con.width()
    }

    fn height(&self) -> i32 {
        self.con.height()
    }

    fn set_default_foreground(&mut self, color: Color) {
        self.con.set_default_foreground(color.into());
    }

    fn put_char(&mut self, x: i32, y: i32, glyph: char) {
        self.con.put_char(x, y, glyph, BackgroundFlag::None);
    }

    fn set_char_background(&mut self, x: i32, y: i32, color: Color) {
        self.con.set_char_background(x, y, color.into(), BackgroundFlag::Set);
    }
}

pub struct TcodBackend {
    root: Root,
    con: TcodConsole,
}

impl TcodBackend {
    pub fn new(settings: &Settings) -> Self {
        let root = Root::initializer()
            .font(&settings.font, FontLayout::Tcod)
            .font_type(FontType::Greyscale)
            .size(settings.screen_width, settings.screen_height)
            .title(&settings.title)
            .fullscreen(settings.fullscreen)
            .init();
        tcod::system::set_fps(settings.limit_fps);
        let con = Offscreen::new(settings.screen_width, settings.screen_height);
        TcodBackend {
            root,
            con: TcodConsole { con },
        }
    }
}

fn convert_key(key: tcod::input::Key) -> Key {
    let code = match key.code {
        TcodKeyCode::Escape => KeyCode::Escape,
        TcodKeyCode::Enter => KeyCode::Enter,
        TcodKeyCode::Up => KeyCode::Up,
        TcodKeyCode::Down => KeyCode::Down,
        TcodKeyCode::Left => KeyCode::Left,
        TcodKeyCode::Right => KeyCode::Right,
        TcodKeyCode::Char => KeyCode::Char(key.printable),
        _ => KeyCode::Other,
    };
    Key {
        code,
        alt: key.alt,
        ctrl: key.ctrl,
        shift: key.shift,
    }
}

impl Backend for TcodBackend {
    fn console(&mut self) -> &mut dyn Console {
        &mut self.con
    }

    fn flush(&mut self) {
        let (w, h) = (self.con.width(), self.con.height());
        tcod_console::blit(&self.con.con, (0, 0), (w, h), &mut self.root, (0, 0), 1.0, 1.0);
        self.root.flush();
    }

    fn wait_for_keypress(&mut self) -> Key {
        convert_key(self.root.wait_for_keypress(true))
    }

    fn check_for_keypress(&mut self) -> Option<Key> {
        match input::check_for_event(input::KEY_PRESS) {
            Some((_, Event::Key(key))) => Some(convert_key(key)),
            _ => None,
        }
    }

    fn window_closed(&self) -> bool {
        self.root.window_closed()
    }

    fn is_fullscreen(&self) -> bool {
        self.root.is_fullscreen()
    }

    fn set_fullscreen(&mut self, fullscreen: bool) {
        self.root.set_fullscreen(fullscreen);
    }
}
