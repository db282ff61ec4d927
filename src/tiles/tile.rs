//! Domino tiles.
//!
//! A `Tile` is a pip pair plus an orientation flag. Orientation only matters
//! on the board; the tile's identity is the unordered pip pair (`TileId`).
//!
//! Flipping does not mutate a tile in place: [`Tile::flipped`] returns the
//! same tile in the turned orientation, which is then placed on the board.

use serde::{Deserialize, Serialize};

use crate::core::DominoError;

/// Highest pip value on a double-six set.
pub const MAX_PIP: u8 = 6;

/// Number of tiles in a double-six set.
pub const FULL_SET_SIZE: usize = 28;

/// Identity of a tile: its unordered pip pair, stored low end first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawTileId")]
pub struct TileId {
    low: u8,
    high: u8,
}

impl TileId {
    /// Create the identity of the tile showing `a` and `b`, in either order.
    #[must_use]
    pub fn new(a: u8, b: u8) -> Self {
        assert!(a <= MAX_PIP && b <= MAX_PIP, "pip out of range: {}-{}", a, b);
        Self {
            low: a.min(b),
            high: a.max(b),
        }
    }

    #[must_use]
    pub const fn low(self) -> u8 {
        self.low
    }

    #[must_use]
    pub const fn high(self) -> u8 {
        self.high
    }

    /// Every identity of the double-six set, `(0,0), (0,1) .. (6,6)`.
    pub fn all() -> impl Iterator<Item = TileId> {
        (0..=MAX_PIP).flat_map(|low| (low..=MAX_PIP).map(move |high| TileId { low, high }))
    }
}

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.low, self.high)
    }
}

/// A domino tile with display orientation.
///
/// ```
/// use dominoes::tiles::Tile;
///
/// let tile = Tile::new(5, 3);
/// assert_eq!((tile.left(), tile.right()), (5, 3));
///
/// let turned = tile.flipped();
/// assert_eq!((turned.left(), turned.right()), (3, 5));
/// assert_eq!(turned.to_string(), "| 3 -- 5 |");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawTile")]
pub struct Tile {
    a: u8,
    b: u8,
    flipped: bool,
}

impl Tile {
    /// Create an unflipped tile showing `a` on the left and `b` on the right.
    #[must_use]
    pub fn new(a: u8, b: u8) -> Self {
        assert!(a <= MAX_PIP && b <= MAX_PIP, "pip out of range: {}-{}", a, b);
        Self { a, b, flipped: false }
    }

    /// Create the canonical tile for an identity (low pip on the left).
    #[must_use]
    pub fn from_id(id: TileId) -> Self {
        Self::new(id.low(), id.high())
    }

    #[must_use]
    pub fn id(self) -> TileId {
        TileId::new(self.a, self.b)
    }

    /// This tile in the turned orientation.
    ///
    /// Sets the flag rather than toggling it: a tile is turned at most once,
    /// when it is placed.
    #[must_use]
    pub fn flipped(self) -> Self {
        Self { flipped: true, ..self }
    }

    #[must_use]
    pub fn is_flipped(self) -> bool {
        self.flipped
    }

    /// Pip value exposed on the left.
    #[must_use]
    pub fn left(self) -> u8 {
        if self.flipped { self.b } else { self.a }
    }

    /// Pip value exposed on the right.
    #[must_use]
    pub fn right(self) -> u8 {
        if self.flipped { self.a } else { self.b }
    }

    #[must_use]
    pub fn is_double(self) -> bool {
        self.a == self.b
    }

    /// Sum of the pips as currently oriented.
    #[must_use]
    pub fn pips(self) -> u32 {
        u32::from(self.left()) + u32::from(self.right())
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "| {} -- {} |", self.left(), self.right())
    }
}

fn check_pips(a: u8, b: u8) -> Result<(), DominoError> {
    if a > MAX_PIP || b > MAX_PIP {
        return Err(DominoError::PipOutOfRange { a, b });
    }
    Ok(())
}

// Deserialized tiles go through the same pip check as the constructors.

#[derive(Deserialize)]
struct RawTileId {
    low: u8,
    high: u8,
}

impl TryFrom<RawTileId> for TileId {
    type Error = DominoError;

    fn try_from(raw: RawTileId) -> Result<Self, Self::Error> {
        check_pips(raw.low, raw.high)?;
        Ok(TileId::new(raw.low, raw.high))
    }
}

#[derive(Deserialize)]
struct RawTile {
    a: u8,
    b: u8,
    flipped: bool,
}

impl TryFrom<RawTile> for Tile {
    type Error = DominoError;

    fn try_from(raw: RawTile) -> Result<Self, Self::Error> {
        check_pips(raw.a, raw.b)?;
        Ok(Tile {
            a: raw.a,
            b: raw.b,
            flipped: raw.flipped,
        })
    }
}
