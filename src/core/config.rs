//! Match configuration.
//!
//! The binary builds a `MatchConfig` from its arguments; tests build one
//! directly with a fixed seed for reproducible deals.

use serde::{Deserialize, Serialize};

use super::error::{DominoError, DominoResult};
use crate::tiles::FULL_SET_SIZE;

/// Fewest players a match accepts.
pub const MIN_PLAYERS: usize = 2;

/// Most players a match accepts.
pub const MAX_PLAYERS: usize = 4;

/// Tiles dealt to each player at setup.
pub const DEFAULT_HAND_SIZE: usize = 7;

/// Match configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Number of players (2-4).
    pub player_count: usize,

    /// Tiles dealt to each player.
    pub hand_size: usize,

    /// Shuffle seed. `None` draws one from entropy.
    pub seed: Option<u64>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            player_count: MIN_PLAYERS,
            hand_size: DEFAULT_HAND_SIZE,
            seed: None,
        }
    }
}

impl MatchConfig {
    pub fn new(player_count: usize) -> Self {
        Self {
            player_count,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Check the player count and that the deal fits in the tile set.
    pub fn validate(&self) -> DominoResult<()> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.player_count) {
            return Err(DominoError::InvalidPlayerCount(self.player_count));
        }
        let too_many = self
            .hand_size
            .checked_mul(self.player_count)
            .map_or(true, |total| total > FULL_SET_SIZE);
        if self.hand_size == 0 || too_many {
            return Err(DominoError::InvalidHandSize {
                hand_size: self.hand_size,
                player_count: self.player_count,
            });
        }
        Ok(())
    }
}
