//! Match events and outcomes.
//!
//! The engine records one or more events per step. Together they form a
//! transcript of the match: enough to narrate it or to replay it by hand.

use serde::{Deserialize, Serialize};

use crate::board::Side;
use crate::core::{PlayerId, PlayerMap};
use crate::tiles::Tile;

/// How the match was won.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WinReason {
    /// The winner played their last tile.
    Domino,
    /// The board was blocked and the winner held the fewest pips.
    LowestPips,
}

/// Something that happened during a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum MatchEvent {
    /// Tiles dealt to a player at setup.
    Dealt { player: PlayerId, tiles: Vec<Tile> },

    /// The opening tile was placed.
    Opened { player: PlayerId, tile: Tile },

    /// A tile was played; `tile` is shown as placed.
    Played {
        player: PlayerId,
        tile: Tile,
        side: Side,
        flipped: bool,
    },

    /// A player could not play and drew from the boneyard.
    Drew { player: PlayerId, tile: Tile },

    /// Nobody can move: boneyard empty and the player to act is stuck.
    Blocked { player: PlayerId, pip_totals: PlayerMap<u32> },

    /// The match ended.
    Won { player: PlayerId, reason: WinReason },
}

impl MatchEvent {
    /// The player this event concerns.
    #[must_use]
    pub fn player(&self) -> PlayerId {
        match self {
            MatchEvent::Dealt { player, .. }
            | MatchEvent::Opened { player, .. }
            | MatchEvent::Played { player, .. }
            | MatchEvent::Drew { player, .. }
            | MatchEvent::Blocked { player, .. }
            | MatchEvent::Won { player, .. } => *player,
        }
    }

    /// Whether this event put a tile on the board.
    #[must_use]
    pub fn is_placement(&self) -> bool {
        matches!(self, MatchEvent::Opened { .. } | MatchEvent::Played { .. })
    }
}

/// Final result of a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOutcome {
    pub winner: PlayerId,
    pub reason: WinReason,
    /// Pips left in each hand when the match ended.
    pub pip_totals: PlayerMap<u32>,
}
