//! The boneyard: undealt tiles, drawn from the head.

use super::tile::{Tile, TileId};
use crate::core::{DominoError, DominoResult, GameRng};

/// The pool of tiles not yet dealt or drawn.
#[derive(Clone, Debug, Default)]
pub struct Boneyard {
    tiles: Vec<Tile>,
}

impl Boneyard {
    /// The full double-six set in canonical order, unshuffled.
    #[must_use]
    pub fn build() -> Self {
        Self {
            tiles: TileId::all().map(Tile::from_id).collect(),
        }
    }

    /// A boneyard holding exactly `tiles`, head first.
    #[must_use]
    pub fn from_tiles(tiles: Vec<Tile>) -> Self {
        Self { tiles }
    }

    /// Randomize the order. Called once, before dealing.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.tiles);
    }

    /// Remove and return the first `n` tiles.
    pub fn draw(&mut self, n: usize) -> DominoResult<Vec<Tile>> {
        if n > self.tiles.len() {
            return Err(DominoError::Exhausted {
                requested: n,
                remaining: self.tiles.len(),
            });
        }
        Ok(self.tiles.drain(..n).collect())
    }

    /// Remove and return the head tile.
    pub fn draw_one(&mut self) -> DominoResult<Tile> {
        if self.tiles.is_empty() {
            return Err(DominoError::Exhausted {
                requested: 1,
                remaining: 0,
            });
        }
        Ok(self.tiles.remove(0))
    }

    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}
