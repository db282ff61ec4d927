//! Core engine types: players, RNG, configuration, errors.

pub mod player;
pub mod rng;
pub mod config;
pub mod error;

pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
pub use config::{MatchConfig, DEFAULT_HAND_SIZE, MAX_PLAYERS, MIN_PLAYERS};
pub use error::{DominoError, DominoResult};
