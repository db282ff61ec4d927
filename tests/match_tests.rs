//! Match scenario tests.
//!
//! These drive the engine through the public API from hand-built deals and
//! positions, checking turn order, move choice and both ways a match ends.

use dominoes::core::{MatchConfig, PlayerId};
use dominoes::{
    Board, Boneyard, DominoError, MatchEngine, MatchEvent, MatchPhase, Position, Side, Tile,
    TileId, WinReason,
};

fn tiles(pairs: &[(u8, u8)]) -> Vec<Tile> {
    pairs.iter().map(|&(a, b)| Tile::new(a, b)).collect()
}

fn board_of(pairs: &[(u8, u8)]) -> Board {
    let mut board = Board::new();
    let mut iter = pairs.iter();
    if let Some(&(a, b)) = iter.next() {
        board.place_first(Tile::new(a, b)).unwrap();
    }
    for &(a, b) in iter {
        board.play_right(Tile::new(a, b)).unwrap();
    }
    board
}

fn p(i: u8) -> PlayerId {
    PlayerId::new(i)
}

// =============================================================================
// Setup and Opening
// =============================================================================

/// Boneyard order dealing 6-6 to player 0 and no double to player 1.
fn six_six_deal() -> Boneyard {
    let mut order = tiles(&[
        (6, 6), (0, 1), (0, 2), (0, 3), (0, 4), (0, 5), (0, 6),
        (1, 2), (1, 3), (1, 4), (1, 5), (1, 6), (2, 3), (2, 4),
    ]);
    let dealt: Vec<TileId> = order.iter().map(|t| t.id()).collect();
    order.extend(
        TileId::all()
            .filter(|id| !dealt.contains(id))
            .map(Tile::from_id),
    );
    Boneyard::from_tiles(order)
}

#[test]
fn test_deal_consumes_seven_per_player() {
    for n in 2..=4 {
        let engine = MatchEngine::new(&MatchConfig::new(n).with_seed(2024)).unwrap();
        let in_hands: usize = engine.hands().values().map(|h| h.len()).sum();

        assert_eq!(in_hands, 7 * n);
        assert_eq!(engine.boneyard().len() + in_hands, 28);
    }
}

#[test]
fn test_deal_in_seat_order() {
    let engine = MatchEngine::deal_from(2, six_six_deal()).unwrap();

    assert_eq!(engine.hand(p(0)).tiles()[0], Tile::new(6, 6));
    assert_eq!(engine.hand(p(1)).tiles()[0], Tile::new(1, 2));
    assert_eq!(engine.boneyard().len(), 14);

    match &engine.history()[1] {
        MatchEvent::Dealt { player, tiles } => {
            assert_eq!(*player, p(1));
            assert_eq!(tiles.len(), 7);
        }
        other => panic!("expected a deal, got {:?}", other),
    }
}

#[test]
fn test_highest_double_opens() {
    let mut engine = MatchEngine::deal_from(2, six_six_deal()).unwrap();
    assert_eq!(engine.hand(p(1)).best_opening_double(), None);
    assert_eq!(engine.opening_player(), p(0));

    let events = engine.step().unwrap().to_vec();
    assert_eq!(events, vec![MatchEvent::Opened { player: p(0), tile: Tile::new(6, 6) }]);
    assert_eq!(engine.board().render(), "| 6 -- 6 |");
    assert_eq!(engine.hand(p(0)).len(), 6);
    assert_eq!(engine.current_player(), p(1));
    assert_eq!(engine.phase(), MatchPhase::TurnInProgress);
}

#[test]
fn test_opening_picks_highest_among_players() {
    let mut engine = MatchEngine::from_position(Position {
        hands: vec![
            tiles(&[(2, 2), (0, 1)]),
            tiles(&[(1, 2), (5, 5)]),
            tiles(&[(4, 4), (3, 6)]),
        ],
        boneyard: vec![],
        board: Board::new(),
        to_act: p(0),
    })
    .unwrap();

    engine.step().unwrap();
    assert_eq!(engine.board().render(), "| 5 -- 5 |");
    assert_eq!(engine.current_player(), p(2));
}

#[test]
fn test_no_double_anywhere_player_zero_leads_first_tile() {
    let mut engine = MatchEngine::from_position(Position {
        hands: vec![tiles(&[(1, 2), (3, 4)]), tiles(&[(0, 5), (2, 6)])],
        boneyard: tiles(&[(0, 1)]),
        board: Board::new(),
        to_act: p(1),
    })
    .unwrap();

    let events = engine.step().unwrap().to_vec();
    assert_eq!(events, vec![MatchEvent::Opened { player: p(0), tile: Tile::new(1, 2) }]);
    assert_eq!(engine.current_player(), p(1));
}

#[test]
fn test_same_seed_same_match() {
    let config = MatchConfig::new(3).with_seed(77);

    let mut a = MatchEngine::new(&config).unwrap();
    let mut b = MatchEngine::new(&config).unwrap();

    assert_eq!(a.run().unwrap(), b.run().unwrap());
    assert_eq!(a.history(), b.history());
}

// =============================================================================
// Turns
// =============================================================================

#[test]
fn test_plays_right_without_flip() {
    let mut engine = MatchEngine::from_position(Position {
        hands: vec![tiles(&[(1, 1), (5, 3), (2, 0)]), tiles(&[(4, 4)])],
        boneyard: tiles(&[(6, 6)]),
        board: board_of(&[(2, 5)]),
        to_act: p(0),
    })
    .unwrap();

    let events = engine.step().unwrap().to_vec();
    assert_eq!(
        events,
        vec![MatchEvent::Played {
            player: p(0),
            tile: Tile::new(5, 3),
            side: Side::Right,
            flipped: false,
        }]
    );
    assert_eq!(engine.board().left_end(), Ok(2));
    assert_eq!(engine.board().right_end(), Ok(3));
    assert!(!engine.hand(p(0)).contains(TileId::new(3, 5)));
    assert_eq!(engine.current_player(), p(1));
}

#[test]
fn test_plays_left_with_flip() {
    let mut engine = MatchEngine::from_position(Position {
        hands: vec![tiles(&[(2, 0), (6, 6)]), tiles(&[(4, 4)])],
        boneyard: vec![],
        board: board_of(&[(2, 5)]),
        to_act: p(0),
    })
    .unwrap();

    engine.step().unwrap();
    assert_eq!(engine.board().render(), "| 0 -- 2 || 2 -- 5 |");
    assert!(engine.board().tiles().next().unwrap().is_flipped());
}

#[test]
fn test_double_matching_both_ends_goes_right() {
    let mut engine = MatchEngine::from_position(Position {
        hands: vec![tiles(&[(3, 3), (0, 0)]), tiles(&[(4, 4)])],
        boneyard: vec![],
        board: board_of(&[(3, 1), (1, 2), (2, 3)]),
        to_act: p(0),
    })
    .unwrap();

    let events = engine.step().unwrap().to_vec();
    assert_eq!(
        events,
        vec![MatchEvent::Played {
            player: p(0),
            tile: Tile::new(3, 3),
            side: Side::Right,
            flipped: false,
        }]
    );
}

#[test]
fn test_round_robin_over_all_players() {
    let mut engine = MatchEngine::from_position(Position {
        hands: vec![
            tiles(&[(3, 1), (2, 2)]),
            tiles(&[(1, 4), (5, 5)]),
            tiles(&[(4, 0), (6, 6)]),
        ],
        boneyard: vec![],
        board: board_of(&[(3, 3)]),
        to_act: p(0),
    })
    .unwrap();

    let mut order = Vec::new();
    for _ in 0..3 {
        let events = engine.step().unwrap().to_vec();
        order.push(events[0].player());
    }
    assert_eq!(order, vec![p(0), p(1), p(2)]);
    assert_eq!(engine.current_player(), p(0));
    assert_eq!(engine.board().render(), "| 3 -- 3 || 3 -- 1 || 1 -- 4 || 4 -- 0 |");
}

#[test]
fn test_no_match_draws_and_keeps_turn() {
    let mut engine = MatchEngine::from_position(Position {
        hands: vec![tiles(&[(0, 1)]), tiles(&[(4, 4)])],
        boneyard: tiles(&[(5, 6), (2, 3)]),
        board: board_of(&[(6, 6)]),
        to_act: p(0),
    })
    .unwrap();

    let events = engine.step().unwrap().to_vec();
    assert_eq!(events, vec![MatchEvent::Drew { player: p(0), tile: Tile::new(5, 6) }]);
    assert_eq!(engine.current_player(), p(0));
    assert_eq!(engine.boneyard().len(), 1);

    // The drawn tile is only tried on the next step; its 6 meets the left end.
    let events = engine.step().unwrap().to_vec();
    assert_eq!(
        events,
        vec![MatchEvent::Played {
            player: p(0),
            tile: Tile::new(5, 6),
            side: Side::Left,
            flipped: false,
        }]
    );
    assert_eq!(engine.current_player(), p(1));
}

// =============================================================================
// Game Over
// =============================================================================

#[test]
fn test_blocked_board_lowest_pips_wins() {
    let mut engine = MatchEngine::from_position(Position {
        hands: vec![tiles(&[(1, 2), (3, 4)]), tiles(&[(1, 3)])],
        boneyard: vec![],
        board: board_of(&[(6, 6)]),
        to_act: p(0),
    })
    .unwrap();

    let events = engine.step().unwrap().to_vec();
    assert_eq!(events.len(), 2);
    assert!(matches!(events[0], MatchEvent::Blocked { player, .. } if player == p(0)));
    assert_eq!(
        events[1],
        MatchEvent::Won { player: p(1), reason: WinReason::LowestPips }
    );

    let outcome = engine.outcome().unwrap();
    assert_eq!(outcome.winner, p(1));
    assert_eq!(outcome.pip_totals[p(0)], 10);
    assert_eq!(outcome.pip_totals[p(1)], 4);
    assert_eq!(engine.current_player(), p(0));
}

#[test]
fn test_blocked_tie_goes_to_first_player() {
    let mut engine = MatchEngine::from_position(Position {
        hands: vec![tiles(&[(1, 2), (3, 4)]), tiles(&[(0, 5), (2, 3)])],
        boneyard: vec![],
        board: board_of(&[(6, 6)]),
        to_act: p(1),
    })
    .unwrap();

    let outcome = engine.run().unwrap();
    assert_eq!(outcome.winner, p(0));
    assert_eq!(outcome.reason, WinReason::LowestPips);
}

#[test]
fn test_last_tile_wins_immediately() {
    let mut engine = MatchEngine::from_position(Position {
        hands: vec![tiles(&[(6, 1)]), tiles(&[(2, 3), (4, 5)])],
        boneyard: tiles(&[(4, 4), (0, 0)]),
        board: board_of(&[(6, 6)]),
        to_act: p(0),
    })
    .unwrap();

    let events = engine.step().unwrap().to_vec();
    assert_eq!(events.last(), Some(&MatchEvent::Won { player: p(0), reason: WinReason::Domino }));
    assert!(engine.is_over());
    assert_eq!(engine.boneyard().len(), 2);
    assert_eq!(engine.hand(p(1)).len(), 2);
    assert_eq!(engine.step().unwrap_err(), DominoError::MatchOver);
}

#[test]
fn test_full_match_ends_with_winner() {
    for n in 2..=4 {
        let mut engine = MatchEngine::new(&MatchConfig::new(n).with_seed(5)).unwrap();
        let outcome = engine.run().unwrap();

        match outcome.reason {
            WinReason::Domino => assert!(engine.hand(outcome.winner).is_empty()),
            WinReason::LowestPips => {
                assert!(engine.boneyard().is_empty());
                let min = outcome.pip_totals.values().min().copied().unwrap();
                assert_eq!(outcome.pip_totals[outcome.winner], min);
            }
        }
        assert_eq!(engine.tile_count(), 28);
    }
}
