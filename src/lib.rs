//! # dominoes
//!
//! A double-six dominoes match engine for 2-4 players.
//!
//! ## Design Principles
//!
//! 1. **Engine, not narrator**: The engine never prints. It records a
//!    transcript of `MatchEvent`s that callers render however they like.
//!
//! 2. **Deterministic**: A seeded match deals and plays identically every
//!    time. Unseeded matches record the seed they drew.
//!
//! 3. **Values, not objects**: Tiles are `Copy` values keyed by their
//!    unordered pip pair. Turning a tile yields a new value.
//!
//! ## Modules
//!
//! - `core`: Player ids, per-player storage, RNG, configuration, errors
//! - `tiles`: Tiles, hands and the boneyard
//! - `board`: The line of play and its open ends
//! - `rules`: Placement matching, match events and the `MatchEngine`

pub mod core;
pub mod tiles;
pub mod board;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{DominoError, DominoResult, GameRng, MatchConfig, PlayerId, PlayerMap};

pub use crate::tiles::{Boneyard, Hand, Tile, TileId};

pub use crate::board::{Board, Side};

pub use crate::rules::{
    match_side, MatchEngine, MatchEvent, MatchOutcome, MatchPhase, Placement, Position, WinReason,
};
