//! The match engine.
//!
//! A match moves through three phases:
//!
//! - `OpeningMove`: the holder of the highest double places it
//! - `TurnInProgress`: one step per call, play, draw or detect a block
//! - `GameOver`: a hand was emptied or the board is blocked
//!
//! Each step either shrinks a hand or shrinks the boneyard, so a match on a
//! 28 tile set always ends within a few dozen steps.

use rustc_hash::FxHashSet;
use tracing::{debug, info};

use super::event::{MatchEvent, MatchOutcome, WinReason};
use super::placement::{match_side, Placement};
use crate::board::Board;
use crate::core::{
    DominoError, DominoResult, GameRng, MatchConfig, PlayerId, PlayerMap, DEFAULT_HAND_SIZE,
    MAX_PLAYERS, MIN_PLAYERS,
};
use crate::tiles::{Boneyard, Hand, Tile};

/// Where a match stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchPhase {
    OpeningMove,
    TurnInProgress,
    GameOver,
}

/// A mid-match position to resume from.
///
/// Hands are listed in seat order, tiles in hand order. An empty board
/// resumes at the opening move.
#[derive(Clone, Debug)]
pub struct Position {
    pub hands: Vec<Vec<Tile>>,
    pub boneyard: Vec<Tile>,
    pub board: Board,
    pub to_act: PlayerId,
}

/// Runs one dominoes match.
///
/// ## Usage
///
/// ```
/// use dominoes::core::MatchConfig;
/// use dominoes::rules::MatchEngine;
///
/// let mut engine = MatchEngine::new(&MatchConfig::new(3).with_seed(7)).unwrap();
/// let outcome = engine.run().unwrap();
/// assert!(engine.is_over());
/// assert!(outcome.winner.index() < 3);
/// ```
#[derive(Clone, Debug)]
pub struct MatchEngine {
    hands: PlayerMap<Hand>,
    boneyard: Boneyard,
    board: Board,
    current: PlayerId,
    phase: MatchPhase,
    outcome: Option<MatchOutcome>,
    history: Vec<MatchEvent>,
    seed: Option<u64>,
}

impl MatchEngine {
    /// Set up a match: build and shuffle the set, then deal in seat order.
    pub fn new(config: &MatchConfig) -> DominoResult<Self> {
        config.validate()?;

        let mut rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let mut boneyard = Boneyard::build();
        boneyard.shuffle(&mut rng);

        let mut engine = Self::deal(config.player_count, config.hand_size, boneyard)?;
        engine.seed = Some(rng.seed());
        info!(
            players = config.player_count,
            seed = rng.seed(),
            "match set up"
        );
        Ok(engine)
    }

    /// Set up a match dealing seven tiles each from `boneyard` as ordered.
    pub fn deal_from(player_count: usize, boneyard: Boneyard) -> DominoResult<Self> {
        Self::deal(player_count, DEFAULT_HAND_SIZE, boneyard)
    }

    fn deal(player_count: usize, hand_size: usize, mut boneyard: Boneyard) -> DominoResult<Self> {
        check_player_count(player_count)?;

        let mut hands = PlayerMap::new(player_count, Hand::new);
        let mut history = Vec::with_capacity(player_count + 1);

        for player in PlayerId::all(player_count) {
            let tiles = boneyard.draw(hand_size)?;
            for &tile in &tiles {
                if !hands[player].add_tile(tile) {
                    return Err(DominoError::DuplicateTile(tile.id()));
                }
            }
            history.push(MatchEvent::Dealt { player, tiles });
        }

        Ok(Self {
            hands,
            boneyard,
            board: Board::new(),
            current: PlayerId::new(0),
            phase: MatchPhase::OpeningMove,
            outcome: None,
            history,
            seed: None,
        })
    }

    /// Resume from an arbitrary position.
    ///
    /// Every tile identity may appear at most once across hands, boneyard
    /// and board, and every hand must hold at least one tile.
    pub fn from_position(position: Position) -> DominoResult<Self> {
        let player_count = position.hands.len();
        check_player_count(player_count)?;
        if position.to_act.index() >= player_count {
            return Err(DominoError::UnknownPlayer(position.to_act));
        }

        let mut seen = FxHashSet::default();
        let all_tiles = position
            .hands
            .iter()
            .flatten()
            .chain(position.boneyard.iter())
            .chain(position.board.tiles());
        for tile in all_tiles {
            if !seen.insert(tile.id()) {
                return Err(DominoError::DuplicateTile(tile.id()));
            }
        }

        let mut hands = Vec::with_capacity(player_count);
        for (player, tiles) in PlayerId::all(player_count).zip(position.hands) {
            if tiles.is_empty() {
                return Err(DominoError::EmptyHand(player));
            }
            hands.push(Hand::with_tiles(player, tiles));
        }

        let phase = if position.board.is_empty() {
            MatchPhase::OpeningMove
        } else {
            MatchPhase::TurnInProgress
        };

        Ok(Self {
            hands: PlayerMap::from_vec(hands),
            boneyard: Boneyard::from_tiles(position.boneyard),
            board: position.board,
            current: position.to_act,
            phase,
            outcome: None,
            history: Vec::new(),
            seed: None,
        })
    }

    // === Accessors ===

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.hands.player_count()
    }

    #[must_use]
    pub fn hand(&self, player: PlayerId) -> &Hand {
        &self.hands[player]
    }

    #[must_use]
    pub fn hands(&self) -> &PlayerMap<Hand> {
        &self.hands
    }

    #[must_use]
    pub fn boneyard(&self) -> &Boneyard {
        &self.boneyard
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    #[must_use]
    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase == MatchPhase::GameOver
    }

    #[must_use]
    pub fn outcome(&self) -> Option<&MatchOutcome> {
        self.outcome.as_ref()
    }

    /// Every event recorded so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &[MatchEvent] {
        &self.history
    }

    /// Shuffle seed, for matches set up from a config.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Tiles across boneyard, hands and board.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.boneyard.len() + self.hands.values().map(Hand::len).sum::<usize>() + self.board.len()
    }

    // === Play ===

    /// Advance the match by one step, returning the events it produced.
    pub fn step(&mut self) -> DominoResult<&[MatchEvent]> {
        let start = self.history.len();
        match self.phase {
            MatchPhase::OpeningMove => self.open()?,
            MatchPhase::TurnInProgress => self.take_turn()?,
            MatchPhase::GameOver => return Err(DominoError::MatchOver),
        }
        Ok(&self.history[start..])
    }

    /// Step until the match ends.
    pub fn run(&mut self) -> DominoResult<MatchOutcome> {
        loop {
            if let Some(outcome) = &self.outcome {
                return Ok(outcome.clone());
            }
            self.step()?;
        }
    }

    /// The player holding the highest double opens.
    ///
    /// Holding no double ranks below holding the 0-0, and ties go to the
    /// lowest seat. When nobody holds a double, player 0 opens.
    #[must_use]
    pub fn opening_player(&self) -> PlayerId {
        let mut best = (PlayerId::new(0), None);
        for (player, hand) in self.hands.iter() {
            let value = hand.best_opening_double().map(Tile::left);
            if value > best.1 {
                best = (player, value);
            }
        }
        best.0
    }

    fn open(&mut self) -> DominoResult<()> {
        let player = self.opening_player();
        let hand = &self.hands[player];
        // Without any double the opener leads their first tile.
        let tile = hand
            .best_opening_double()
            .or_else(|| hand.tiles().first().copied())
            .ok_or(DominoError::EmptyHand(player))?;

        let tile = self.hands[player].remove_tile(tile.id())?;
        self.board.place_first(tile)?;
        debug!(%player, %tile, "opening tile");
        self.history.push(MatchEvent::Opened { player, tile });

        if self.hands[player].is_empty() {
            self.finish(player, WinReason::Domino);
        } else {
            self.phase = MatchPhase::TurnInProgress;
            self.current = player.next(self.player_count());
        }
        Ok(())
    }

    /// The first tile in hand order that fits the board.
    fn first_playable(&self, player: PlayerId) -> DominoResult<Option<(Tile, Placement)>> {
        for &tile in self.hands[player].tiles() {
            if let Some(placement) = match_side(tile, &self.board)? {
                return Ok(Some((tile, placement)));
            }
        }
        Ok(None)
    }

    fn take_turn(&mut self) -> DominoResult<()> {
        let player = self.current;

        match self.first_playable(player)? {
            Some((tile, placement)) => {
                self.hands[player].remove_tile(tile.id())?;
                let placed = placement.orient(tile);
                self.board.play(placed, placement.side)?;
                debug!(%player, tile = %placed, side = %placement.side, "tile played");
                self.history.push(MatchEvent::Played {
                    player,
                    tile: placed,
                    side: placement.side,
                    flipped: placement.flip,
                });

                if self.hands[player].is_empty() {
                    self.finish(player, WinReason::Domino);
                } else {
                    self.current = player.next(self.player_count());
                }
            }
            None if self.boneyard.is_empty() => {
                let pip_totals = self.pip_totals();
                let winner = lowest_pips(&pip_totals);
                debug!(%player, "board blocked");
                self.history.push(MatchEvent::Blocked { player, pip_totals });
                self.finish(winner, WinReason::LowestPips);
            }
            None => {
                // Same player goes again next step.
                let tile = self.boneyard.draw_one()?;
                if !self.hands[player].add_tile(tile) {
                    return Err(DominoError::DuplicateTile(tile.id()));
                }
                debug!(%player, %tile, remaining = self.boneyard.len(), "drew from boneyard");
                self.history.push(MatchEvent::Drew { player, tile });
            }
        }
        Ok(())
    }

    fn pip_totals(&self) -> PlayerMap<u32> {
        self.hands.map(Hand::total_pips)
    }

    fn finish(&mut self, winner: PlayerId, reason: WinReason) {
        let outcome = MatchOutcome {
            winner,
            reason,
            pip_totals: self.pip_totals(),
        };
        info!(%winner, ?reason, "game over");
        self.history.push(MatchEvent::Won { player: winner, reason });
        self.outcome = Some(outcome);
        self.phase = MatchPhase::GameOver;
    }
}

fn check_player_count(player_count: usize) -> DominoResult<()> {
    if (MIN_PLAYERS..=MAX_PLAYERS).contains(&player_count) {
        Ok(())
    } else {
        Err(DominoError::InvalidPlayerCount(player_count))
    }
}

/// Seat with the fewest pips, lowest seat on ties.
fn lowest_pips(pip_totals: &PlayerMap<u32>) -> PlayerId {
    let mut best = (PlayerId::new(0), u32::MAX);
    for (player, &total) in pip_totals.iter() {
        if total < best.1 {
            best = (player, total);
        }
    }
    best.0
}
