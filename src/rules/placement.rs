//! Move legality: where a tile attaches to the board.

use serde::{Deserialize, Serialize};

use crate::board::{Board, Side};
use crate::core::DominoResult;
use crate::tiles::Tile;

/// Where and how a tile attaches to the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub side: Side,
    /// The tile must be turned before it is placed.
    pub flip: bool,
}

impl Placement {
    /// The tile in the orientation it takes on the board.
    #[must_use]
    pub fn orient(self, tile: Tile) -> Tile {
        if self.flip { tile.flipped() } else { tile }
    }
}

/// Find where `tile` can be played, if anywhere.
///
/// Rules are tried in a fixed order and the first match wins:
///
/// 1. left pip meets the right end: right, as is
/// 2. right pip meets the left end: left, as is
/// 3. left pip meets the left end: left, turned
/// 4. right pip meets the right end: right, turned
///
/// A double matching both ends therefore always goes right unturned.
pub fn match_side(tile: Tile, board: &Board) -> DominoResult<Option<Placement>> {
    let left_end = board.left_end()?;
    let right_end = board.right_end()?;

    let placement = if tile.left() == right_end {
        Some(Placement { side: Side::Right, flip: false })
    } else if tile.right() == left_end {
        Some(Placement { side: Side::Left, flip: false })
    } else if tile.left() == left_end {
        Some(Placement { side: Side::Left, flip: true })
    } else if tile.right() == right_end {
        Some(Placement { side: Side::Right, flip: true })
    } else {
        None
    };

    Ok(placement)
}
