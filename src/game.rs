use tracing::{debug, info, trace};

use crate::colors;
use crate::config::{Settings, COLOR_DARK_GROUND, COLOR_DARK_WALL};
use crate::console::{Backend, Console, Key, KeyCode};
use crate::map::{make_map, Map, MapError};
use crate::object::{Object, ObjectId, Objects};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Exiting,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlayerAction {
    TookTurn,
    DidntTakeTurn,
    Exit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error(transparent)]
    Map(#[from] MapError),

    #[error("spawn point ({x}, {y}) is blocked")]
    SpawnBlocked { x: i32, y: i32 },

    #[error("player {0:?} is not in the object list")]
    UnknownPlayer(ObjectId),
}

pub struct Game {
    pub map: Map,
    pub objects: Objects,
    pub player: ObjectId,
    state: LoopState,
    turn_based: bool,
}

impl Game {
    /// A fresh map with the player in the middle of the screen and an NPC
    /// next to them.
    pub fn new(settings: &Settings) -> Result<Self, GameError> {
        let map = make_map(settings.map_width, settings.map_height)?;
        let (x, y) = (settings.screen_width / 2, settings.screen_height / 2);

        let mut objects = Objects::new();
        let player = objects.register(Object::new(x, y, '@', colors::WHITE));
        objects.register(Object::new(x + 6, y + 3, '@', colors::YELLOW));

        Game::with_objects(map, objects, player, settings.turn_based)
    }

    /// Every object has to start on a walkable tile of `map`, and `player`
    /// has to be one of `objects`.
    pub fn with_objects(
        map: Map,
        objects: Objects,
        player: ObjectId,
        turn_based: bool,
    ) -> Result<Self, GameError> {
        if !objects.contains(player) {
            return Err(GameError::UnknownPlayer(player));
        }
        for object in objects.iter() {
            let (x, y) = object.pos();
            if map.is_blocked(x, y)? {
                return Err(GameError::SpawnBlocked { x, y });
            }
        }
        Ok(Game {
            map,
            objects,
            player,
            state: LoopState::Running,
            turn_based,
        })
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn player(&self) -> &Object {
        self.objects.get(self.player)
    }

    /// Draw all objects, then paint every tile's background.
    pub fn render_all(&self, con: &mut dyn Console) {
        self.objects.draw(con);

        for (x, y, tile) in self.map.tiles() {
            let color = if tile.block_sight {
                COLOR_DARK_WALL
            } else {
                COLOR_DARK_GROUND
            };
            con.set_char_background(x, y, color);
        }
    }

    /// Erase all objects at their current location, before they move.
    pub fn clear_all(&self, con: &mut dyn Console) {
        self.objects.clear(con);
    }

    fn next_key<B: Backend + ?Sized>(&self, backend: &mut B) -> Option<Key> {
        if self.turn_based {
            Some(backend.wait_for_keypress())
        } else {
            backend.check_for_keypress()
        }
    }

    pub fn handle_keys<B: Backend + ?Sized>(&mut self, backend: &mut B, key: Key) -> PlayerAction {
        use KeyCode::*;

        let (dx, dy) = match key {
            Key {
                code: Enter,
                alt: true,
                ..
            } => {
                // Alt+Enter: toggle fullscreen
                let fullscreen = backend.is_fullscreen();
                backend.set_fullscreen(!fullscreen);
                return PlayerAction::DidntTakeTurn;
            }
            Key { code: Escape, .. } => return PlayerAction::Exit, // exit game

            // movement keys
            Key { code: Up, .. } => (0, -1),
            Key { code: Down, .. } => (0, 1),
            Key { code: Left, .. } => (-1, 0),
            Key { code: Right, .. } => (1, 0),

            _ => return PlayerAction::DidntTakeTurn,
        };

        let player = self.objects.get_mut(self.player);
        player.move_by(dx, dy, &self.map);
        PlayerAction::TookTurn
    }

    /// One frame: render, present, clear, then read and apply input.
    pub fn step<B: Backend + ?Sized>(&mut self, backend: &mut B) -> PlayerAction {
        self.render_all(backend.console());
        backend.flush();
        self.clear_all(backend.console());

        let action = match self.next_key(backend) {
            Some(key) => self.handle_keys(backend, key),
            None => PlayerAction::DidntTakeTurn,
        };
        trace!(?action, player = ?self.player().pos(), "frame");

        if action == PlayerAction::Exit {
            debug!("exit requested");
            self.state = LoopState::Exiting;
        }
        action
    }

    pub fn play_game<B: Backend + ?Sized>(&mut self, backend: &mut B) {
        info!(objects = self.objects.len(), "starting game");
        while self.state == LoopState::Running && !backend.window_closed() {
            self.step(backend);
        }
        info!(state = ?self.state, "game over");
    }
}
