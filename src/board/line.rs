//! The line of play.
//!
//! Adjacent tiles always touch with equal pips:
//! `tiles[i].right() == tiles[i + 1].left()`. The open ends are the left
//! pip of the first tile and the right pip of the last.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{DominoError, DominoResult};
use crate::tiles::Tile;

/// An end of the line of play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// Placed tiles, leftmost first.
///
/// Backed by a persistent vector so prepending is as cheap as appending.
#[derive(Clone, Debug, Default)]
pub struct Board {
    tiles: Vector<Tile>,
}

impl Board {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Place the opening tile.
    pub fn place_first(&mut self, tile: Tile) -> DominoResult<()> {
        if !self.tiles.is_empty() {
            return Err(DominoError::BoardOccupied);
        }
        self.tiles.push_back(tile);
        Ok(())
    }

    /// Append `tile`, whose left pip must equal the right end.
    pub fn play_right(&mut self, tile: Tile) -> DominoResult<()> {
        if tile.left() != self.right_end()? {
            return Err(DominoError::EndMismatch { tile, side: Side::Right });
        }
        self.tiles.push_back(tile);
        Ok(())
    }

    /// Prepend `tile`, whose right pip must equal the left end.
    pub fn play_left(&mut self, tile: Tile) -> DominoResult<()> {
        if tile.right() != self.left_end()? {
            return Err(DominoError::EndMismatch { tile, side: Side::Left });
        }
        self.tiles.push_front(tile);
        Ok(())
    }

    /// Place `tile` on `side`.
    pub fn play(&mut self, tile: Tile, side: Side) -> DominoResult<()> {
        match side {
            Side::Left => self.play_left(tile),
            Side::Right => self.play_right(tile),
        }
    }

    pub fn left_end(&self) -> DominoResult<u8> {
        self.tiles.front().map(|t| t.left()).ok_or(DominoError::EmptyBoard)
    }

    pub fn right_end(&self) -> DominoResult<u8> {
        self.tiles.back().map(|t| t.right()).ok_or(DominoError::EmptyBoard)
    }

    /// Placed tiles, leftmost first.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Render every placed tile, leftmost first.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for tile in &self.tiles {
            write!(f, "{}", tile)?;
        }
        Ok(())
    }
}
