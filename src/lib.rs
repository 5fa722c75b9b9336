//! A tiny libtcod roguelike: a player and an NPC on an open floor with two
//! pillars, moved with the arrow keys one key press at a time.

pub mod colors;
pub mod config;
pub mod console;
pub mod game;
pub mod map;
pub mod object;
#[cfg(feature = "tcod")]
pub mod tcod_backend;
pub mod tile;

pub use crate::config::Settings;
pub use crate::console::{Backend, Console, FrameBuffer, Key, KeyCode};
pub use crate::game::{Game, GameError, LoopState, PlayerAction};
pub use crate::map::{make_map, Map, MapError};
pub use crate::object::{Object, ObjectId, Objects};
pub use crate::tile::Tile;
