/// A tile of the map and its properties
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tile {
    pub blocked: bool,
    pub block_sight: bool,
}

impl Tile {
    /// By default, a blocked tile also blocks sight.
    pub fn new(blocked: bool) -> Self {
        Tile::with_sight(blocked, blocked)
    }

    pub fn with_sight(blocked: bool, block_sight: bool) -> Self {
        Tile { blocked, block_sight }
    }

    pub fn empty() -> Self {
        Tile::new(false)
    }

    pub fn wall() -> Self {
        Tile::new(true)
    }
}

impl Default for Tile {
    fn default() -> Self {
        Tile::empty()
    }
}
