use thiserror::Error;
use tracing::debug;

use crate::tile::Tile;

/// Cells carved out of the open floor by `make_map`.
pub const OBSTACLES: [(i32, i32); 2] = [(30, 22), (50, 22)];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum MapError {
    #[error("tile ({x}, {y}) is outside the {width}x{height} map")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },
}

/// Fixed-size grid of tiles, indexed `[x][y]`.
#[derive(Clone, Debug, PartialEq)]
pub struct Map {
    width: i32,
    height: i32,
    tiles: Vec<Vec<Tile>>,
}

impl Map {
    /// A map of unblocked tiles.
    pub fn new(width: i32, height: i32) -> Self {
        let (w, h) = (width.max(0), height.max(0));
        Map {
            width: w,
            height: h,
            tiles: vec![vec![Tile::empty(); h as usize]; w as usize],
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    fn check(&self, x: i32, y: i32) -> Result<(usize, usize), MapError> {
        if self.contains(x, y) {
            Ok((x as usize, y as usize))
        } else {
            Err(MapError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }

    pub fn get(&self, x: i32, y: i32) -> Result<&Tile, MapError> {
        let (x, y) = self.check(x, y)?;
        Ok(&self.tiles[x][y])
    }

    pub fn set(&mut self, x: i32, y: i32, tile: Tile) -> Result<(), MapError> {
        let (x, y) = self.check(x, y)?;
        self.tiles[x][y] = tile;
        Ok(())
    }

    pub fn is_blocked(&self, x: i32, y: i32) -> Result<bool, MapError> {
        self.get(x, y).map(|tile| tile.blocked)
    }

    pub fn blocks_sight(&self, x: i32, y: i32) -> Result<bool, MapError> {
        self.get(x, y).map(|tile| tile.block_sight)
    }

    /// Every cell with its coordinates, row by row.
    pub fn tiles(&self) -> impl Iterator<Item = (i32, i32, &Tile)> + '_ {
        (0..self.height).flat_map(move |y| {
            (0..self.width).map(move |x| (x, y, &self.tiles[x as usize][y as usize]))
        })
    }
}

/// Open floor with two pillars.
pub fn make_map(width: i32, height: i32) -> Result<Map, MapError> {
    let mut map = Map::new(width, height);
    for &(x, y) in OBSTACLES.iter() {
        map.set(x, y, Tile::wall())?;
    }
    debug!(width, height, "generated map");
    Ok(map)
}
