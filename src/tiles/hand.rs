//! A player's hand.
//!
//! Tiles are kept in deal/draw order; that order drives both the
//! first-legal-tile move choice and the opening tile fallback. Identity
//! lookups go through a set of `TileId`s.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use super::tile::{Tile, TileId};
use crate::core::{DominoError, DominoResult, PlayerId};

/// The tiles held by one player.
#[derive(Clone, Debug)]
pub struct Hand {
    owner: PlayerId,
    tiles: SmallVec<[Tile; 7]>,
    ids: FxHashSet<TileId>,
}

impl Hand {
    #[must_use]
    pub fn new(owner: PlayerId) -> Self {
        Self {
            owner,
            tiles: SmallVec::new(),
            ids: FxHashSet::default(),
        }
    }

    /// Create a hand holding `tiles`, in the given order.
    pub fn with_tiles(owner: PlayerId, tiles: impl IntoIterator<Item = Tile>) -> Self {
        let mut hand = Self::new(owner);
        for tile in tiles {
            hand.add_tile(tile);
        }
        hand
    }

    /// Add a tile at the end of the hand.
    ///
    /// Returns `false` and leaves the hand unchanged if a tile with the same
    /// identity is already held.
    pub fn add_tile(&mut self, tile: Tile) -> bool {
        if !self.ids.insert(tile.id()) {
            return false;
        }
        self.tiles.push(tile);
        true
    }

    /// Remove the tile with identity `id`, returning it.
    pub fn remove_tile(&mut self, id: TileId) -> DominoResult<Tile> {
        if !self.ids.remove(&id) {
            return Err(DominoError::NotInHand {
                tile: id,
                player: self.owner,
            });
        }
        let pos = self
            .tiles
            .iter()
            .position(|t| t.id() == id)
            .ok_or(DominoError::NotInHand {
                tile: id,
                player: self.owner,
            })?;
        Ok(self.tiles.remove(pos))
    }

    /// All tiles in deal/draw order.
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    #[must_use]
    pub fn contains(&self, id: TileId) -> bool {
        self.ids.contains(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Sum of `left() + right()` over every tile, in its current orientation.
    #[must_use]
    pub fn total_pips(&self) -> u32 {
        self.tiles.iter().map(|t| t.pips()).sum()
    }

    /// The highest double held, if any.
    ///
    /// On equal values the earliest tile in hand order wins, though a hand
    /// cannot hold two doubles of the same value.
    #[must_use]
    pub fn best_opening_double(&self) -> Option<Tile> {
        self.tiles
            .iter()
            .copied()
            .filter(|t| t.is_double())
            .fold(None, |best: Option<Tile>, t| match best {
                Some(b) if b.left() >= t.left() => Some(b),
                _ => Some(t),
            })
    }
}
