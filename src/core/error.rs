//! Engine error type.
//!
//! Apart from `InvalidPlayerCount`, every variant marks a broken engine
//! invariant: the move loop never produces them during normal play. A player
//! without a legal move is not an error, it is a draw or a blocked board.

use thiserror::Error;

use super::player::PlayerId;
use crate::board::Side;
use crate::tiles::{Tile, TileId};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DominoError {
    #[error("the game is played by a minimum of 2 players and a max of 4, got {0}")]
    InvalidPlayerCount(usize),

    #[error("cannot deal {hand_size} tiles to each of {player_count} players from a 28 tile set")]
    InvalidHandSize { hand_size: usize, player_count: usize },

    #[error("{0} is not seated in this match")]
    UnknownPlayer(PlayerId),

    #[error("pip out of range: {a}-{b}")]
    PipOutOfRange { a: u8, b: u8 },

    #[error("tile {0} appears more than once")]
    DuplicateTile(TileId),

    #[error("{0} holds no tiles")]
    EmptyHand(PlayerId),

    #[error("tile {tile} is not in the hand of {player}")]
    NotInHand { tile: TileId, player: PlayerId },

    #[error("the board is empty")]
    EmptyBoard,

    #[error("the board already holds tiles")]
    BoardOccupied,

    #[error("tile {tile} does not match the {side} end of the board")]
    EndMismatch { tile: Tile, side: Side },

    #[error("boneyard exhausted: requested {requested}, {remaining} remaining")]
    Exhausted { requested: usize, remaining: usize },

    #[error("the match is already over")]
    MatchOver,
}

pub type DominoResult<T> = Result<T, DominoError>;
