//! Tiles and where they live before reaching the board.
//!
//! ## Key Types
//!
//! - `Tile`: A pip pair with display orientation
//! - `TileId`: Unordered pip pair identifying a tile
//! - `Hand`: A player's tiles in deal/draw order
//! - `Boneyard`: Shuffled pool of undealt tiles

pub mod tile;
pub mod hand;
pub mod boneyard;

pub use tile::{Tile, TileId, FULL_SET_SIZE, MAX_PIP};
pub use hand::Hand;
pub use boneyard::Boneyard;
