//! End-to-end scenarios driven through the public `Arbiter` API.

#![allow(clippy::unwrap_used)]

use ardri::error::PlayInvalid;
use ardri::game::GameStatus::{Ongoing, Over};
use ardri::game::WinReason::{KingCaptured, KingEscaped};
use ardri::game::{Arbiter, GameOutcome};
use ardri::pieces::PieceKind::{Attacker, Defender, King};
use ardri::pieces::Side::{Black, White};
use ardri::pieces::{PieceKind, PlacedPiece, Side};
use ardri::play::Play;
use ardri::tiles::Tile;
use std::collections::HashSet;

fn play(from: (u8, u8), to: (u8, u8)) -> Play {
    Play::new(Tile::new(from.0, from.1), Tile::new(to.0, to.1))
}

fn set_up(kinds: &[PieceKind], coords: &[(i8, i8)], side: Side) -> Arbiter {
    let mut arbiter = Arbiter::new();
    arbiter.place_pieces(kinds, coords, side).unwrap();
    arbiter
}

fn assert_undecided(arbiter: &Arbiter) {
    assert!(!arbiter.attacker_won());
    assert!(!arbiter.defender_won());
    assert_eq!(arbiter.status(), Ongoing);
}

#[test]
fn opening_position_renders_as_diagram() {
    let arbiter = Arbiter::new();
    let expected = "\
7 - - - A - - -
6 - - - A - - -
5 - - - D - - -
4 A A D R D A A
3 - - - D - - -
2 - - - A - - -
1 - - - A - - -
  a b c d e f g";
    assert_eq!(arbiter.board().to_string(), expected);
}

#[test]
fn king_captured_by_four_attackers() {
    let mut arbiter = set_up(
        &[Attacker, Attacker, Attacker, Attacker, King],
        &[(2, 3), (3, 2), (3, 4), (5, 3), (3, 3)],
        Black
    );
    assert_undecided(&arbiter);

    let effects = arbiter.play(play((5, 3), (4, 3))).unwrap();
    assert_eq!(effects.captures, HashSet::from([PlacedPiece::new(Tile::new(3, 3), King)]));
    assert_eq!(effects.game_outcome, Some(GameOutcome::new(Black, KingCaptured)));
    assert!(arbiter.attacker_won());
    assert!(!arbiter.defender_won());
    assert_eq!(arbiter.turn(), Black);
    assert_eq!(arbiter.count_pieces(King), 0);
}

#[test]
fn king_captured_by_three_attackers_and_empty_throne() {
    // (king, two attackers already in place, the completing play)
    let cases = [
        ((4, 3), [(4, 2), (4, 4)], play((6, 3), (5, 3))),
        ((2, 3), [(2, 2), (2, 4)], play((0, 3), (1, 3))),
        ((3, 4), [(2, 4), (4, 4)], play((3, 6), (3, 5))),
        ((3, 2), [(2, 2), (4, 2)], play((3, 0), (3, 1)))
    ];
    for (king, [a1, a2], completing) in cases {
        let mover = (completing.from.row as i8, completing.from.col as i8);
        let mut arbiter = set_up(
            &[Attacker, Attacker, Attacker, King],
            &[a1, a2, mover, king],
            Black
        );
        assert_undecided(&arbiter);
        let effects = arbiter.play(completing).unwrap();
        assert_eq!(effects.game_outcome, Some(GameOutcome::new(Black, KingCaptured)));
        assert!(arbiter.attacker_won());
        assert!(!arbiter.defender_won());
        assert_eq!(arbiter.turn(), Black);
    }
}

#[test]
fn encircled_king_is_decided_at_set_up() {
    let cases: [(&[PieceKind], &[(i8, i8)]); 5] = [
        (&[Attacker, Attacker, Attacker, Attacker, King], &[(2, 3), (3, 2), (3, 4), (4, 3), (3, 3)]),
        (&[Attacker, Attacker, Attacker, King], &[(4, 2), (4, 4), (5, 3), (4, 3)]),
        (&[Attacker, Attacker, Attacker, King], &[(2, 4), (3, 5), (4, 4), (3, 4)]),
        (&[Attacker, Attacker, Attacker, King], &[(2, 2), (3, 1), (4, 2), (3, 2)]),
        (&[Attacker, Attacker, Attacker, King], &[(1, 3), (2, 2), (2, 4), (2, 3)])
    ];
    for (kinds, coords) in cases {
        let mut arbiter = set_up(kinds, coords, Black);
        assert!(arbiter.attacker_won());
        assert!(!arbiter.defender_won());
        assert_eq!(arbiter.turn(), Black);
        assert_eq!(arbiter.status(), Over(GameOutcome::new(Black, KingCaptured)));
        let any_play = play((coords[0].0 as u8, coords[0].1 as u8), (0, 1));
        assert_eq!(arbiter.play(any_play), Err(PlayInvalid::GameOver));
    }
}

#[test]
fn insufficient_encirclement_does_not_capture() {
    // (attacker, king, play)
    let single_attacker = [
        ((4, 6), (4, 3), play((4, 6), (4, 5))),
        ((3, 6), (3, 4), play((3, 6), (3, 5))),
        ((3, 0), (3, 2), play((3, 0), (3, 1))),
        ((6, 3), (4, 3), play((6, 3), (5, 3))),
        ((0, 3), (2, 3), play((0, 3), (1, 3)))
    ];
    for (attacker, king, p) in single_attacker {
        let mut arbiter = set_up(&[Attacker, King], &[attacker, king], Black);
        let effects = arbiter.play(p).unwrap();
        assert!(effects.captures.is_empty());
        assert_undecided(&arbiter);
        assert_eq!(arbiter.count_pieces(King), 1);
        assert_eq!(arbiter.turn(), White);
    }

    // A king on the throne flanked on a single axis survives.
    for (coords, p) in [
        ([(3, 2), (3, 5), (3, 3)], play((3, 5), (3, 4))),
        ([(2, 3), (5, 3), (3, 3)], play((5, 3), (4, 3)))
    ] {
        let mut arbiter = set_up(&[Attacker, Attacker, King], &coords, Black);
        let effects = arbiter.play(p).unwrap();
        assert!(effects.captures.is_empty());
        assert_undecided(&arbiter);
    }
}

#[test]
fn king_stepping_between_attackers_is_not_captured() {
    // d4-d5 puts the king between c5, e5, d6 and the throne it just left.
    let mut arbiter = set_up(
        &[Attacker, Attacker, Attacker, King, Attacker],
        &[(1, 3), (2, 2), (2, 4), (3, 3), (6, 1)],
        White
    );
    let effects = arbiter.play("d4-d5".parse().unwrap()).unwrap();
    assert!(effects.captures.is_empty());
    assert_eq!(effects.game_outcome, None);
    assert_undecided(&arbiter);
    assert_eq!(arbiter.count_pieces(King), 1);
    assert_eq!(arbiter.turn(), Black);

    // An unrelated attacker play does not capture it either.
    let effects = arbiter.play(play((6, 1), (6, 2))).unwrap();
    assert!(effects.captures.is_empty());
    assert_undecided(&arbiter);
}

#[test]
fn king_on_the_edge_cannot_be_captured() {
    let mut arbiter = set_up(
        &[Attacker, Attacker, Attacker, King],
        &[(0, 2), (1, 3), (2, 4), (0, 3)],
        Black
    );
    arbiter.play(play((2, 4), (0, 4))).unwrap();
    assert_undecided(&arbiter);
    assert_eq!(arbiter.count_pieces(King), 1);
}

#[test]
fn king_escapes_to_each_corner() {
    for (king, corner) in [
        ((0, 3), (0, 0)),
        ((0, 3), (0, 6)),
        ((6, 3), (6, 0)),
        ((6, 3), (6, 6)),
        ((3, 0), (0, 0)),
        ((3, 6), (6, 6))
    ] {
        let mut arbiter = set_up(&[King, Attacker], &[king, (2, 2)], White);
        let p = play((king.0 as u8, king.1 as u8), corner);
        let effects = arbiter.play(p).unwrap();
        assert_eq!(effects.game_outcome, Some(GameOutcome::new(White, KingEscaped)));
        assert!(arbiter.defender_won());
        assert!(!arbiter.attacker_won());
        assert_eq!(arbiter.turn(), White);
        assert_eq!(arbiter.last_play(), Some(p));
    }
}

#[test]
fn king_cannot_escape_through_a_piece() {
    let mut arbiter = set_up(&[King, Attacker], &[(0, 3), (0, 1)], White);
    assert_eq!(arbiter.play(play((0, 3), (0, 0))), Err(PlayInvalid::BlockedByPiece));
    assert_undecided(&arbiter);
    assert_eq!(arbiter.turn(), White);
}

#[test]
fn sandwich_captures() {
    // Against an attacker on the far side.
    let mut arbiter = set_up(
        &[Attacker, Defender, Attacker, King],
        &[(0, 1), (2, 2), (2, 3), (6, 3)],
        Black
    );
    let effects = arbiter.play(play((0, 1), (2, 1))).unwrap();
    assert_eq!(effects.captures, HashSet::from([PlacedPiece::new(Tile::new(2, 2), Defender)]));
    assert_eq!(arbiter.count_pieces(Defender), 0);

    // Against a corner.
    let mut arbiter = set_up(&[Defender, Attacker, King], &[(1, 0), (2, 5), (4, 3)], Black);
    let effects = arbiter.play(play((2, 5), (2, 0))).unwrap();
    assert_eq!(effects.captures, HashSet::from([PlacedPiece::new(Tile::new(1, 0), Defender)]));

    // Against a corner with a piece standing on it.
    let mut arbiter = set_up(
        &[Defender, Defender, Attacker, King],
        &[(0, 0), (0, 1), (2, 2), (5, 5)],
        Black
    );
    let effects = arbiter.play(play((2, 2), (0, 2))).unwrap();
    assert_eq!(effects.captures, HashSet::from([PlacedPiece::new(Tile::new(0, 1), Defender)]));
    assert_eq!(arbiter.count_pieces(Defender), 1);

    // Against the empty throne.
    let mut arbiter = set_up(&[Attacker, Defender, King], &[(3, 2), (6, 1), (0, 3)], White);
    let effects = arbiter.play(play((6, 1), (3, 1))).unwrap();
    assert_eq!(effects.captures, HashSet::from([PlacedPiece::new(Tile::new(3, 2), Attacker)]));

    // Against the king.
    let mut arbiter = set_up(&[King, Attacker, Defender], &[(1, 1), (1, 2), (5, 3)], White);
    let effects = arbiter.play(play((5, 3), (1, 3))).unwrap();
    assert_eq!(effects.captures, HashSet::from([PlacedPiece::new(Tile::new(1, 2), Attacker)]));
}

#[test]
fn protected_pieces_survive() {
    // A friendly piece on the far side.
    let mut arbiter = set_up(
        &[Attacker, Defender, Defender, King],
        &[(0, 1), (2, 2), (2, 3), (6, 3)],
        Black
    );
    let effects = arbiter.play(play((0, 1), (2, 1))).unwrap();
    assert!(effects.captures.is_empty());
    assert_eq!(arbiter.count_pieces(Defender), 2);

    // Only one hostile neighbour.
    let mut arbiter = set_up(&[Attacker, Defender, King], &[(0, 1), (2, 2), (6, 3)], Black);
    let effects = arbiter.play(play((0, 1), (2, 1))).unwrap();
    assert!(effects.captures.is_empty());

    // A piece that moves between two hostile pieces is not captured.
    let mut arbiter = set_up(
        &[Attacker, Attacker, Defender, King],
        &[(2, 1), (2, 3), (5, 2), (6, 5)],
        White
    );
    let effects = arbiter.play(play((5, 2), (2, 2))).unwrap();
    assert!(effects.captures.is_empty());
    assert_eq!(arbiter.count_pieces(Defender), 1);
}

#[test]
fn king_is_never_sandwiched() {
    let mut arbiter = set_up(&[Attacker, King, Attacker], &[(2, 0), (2, 1), (5, 2)], Black);
    let effects = arbiter.play(play((5, 2), (2, 2))).unwrap();
    assert!(effects.captures.is_empty());
    assert_eq!(arbiter.count_pieces(King), 1);
    assert_undecided(&arbiter);
}

#[test]
fn king_does_not_capture() {
    let mut arbiter = set_up(&[King, Attacker, Defender], &[(5, 3), (3, 4), (3, 5)], White);
    let effects = arbiter.play(play((5, 3), (3, 3))).unwrap();
    assert!(effects.captures.is_empty());
    assert_eq!(arbiter.count_pieces(Attacker), 1);
}

#[test]
fn one_play_captures_three_pieces() {
    let mut arbiter = set_up(
        &[Defender, Defender, Defender, Attacker, Attacker, Attacker, Attacker, King],
        &[(3, 4), (5, 4), (4, 3), (2, 4), (6, 4), (4, 2), (4, 6), (0, 3)],
        Black
    );
    let effects = arbiter.play(play((4, 6), (4, 4))).unwrap();
    assert_eq!(effects.captures, HashSet::from([
        PlacedPiece::new(Tile::new(3, 4), Defender),
        PlacedPiece::new(Tile::new(5, 4), Defender),
        PlacedPiece::new(Tile::new(4, 3), Defender)
    ]));
    assert_eq!(arbiter.count_pieces(Defender), 0);
    assert_eq!(arbiter.count_pieces(Attacker), 4);
}

#[test]
fn ordinary_pieces_may_cross_but_not_stop_on_the_throne() {
    let mut arbiter = set_up(&[Attacker, King], &[(3, 0), (0, 3)], Black);
    assert_eq!(arbiter.play(play((3, 0), (3, 3))), Err(PlayInvalid::MoveOntoBlockedTile));
    arbiter.play(play((3, 0), (3, 5))).unwrap();
    assert_eq!(arbiter.board().get_piece(Tile::new(3, 5)), Some(Attacker));
    assert_eq!(arbiter.turn_count(), 1);
}

#[test]
fn no_plays_after_the_game_ends() {
    let mut arbiter = set_up(&[King, Attacker], &[(0, 3), (4, 4)], White);
    arbiter.play(play((0, 3), (0, 0))).unwrap();
    let before = arbiter.state();
    assert!(arbiter.legal_plays().is_empty());
    assert_eq!(arbiter.play(play((4, 4), (4, 5))), Err(PlayInvalid::GameOver));
    assert_eq!(arbiter.play(play((0, 0), (0, 1))), Err(PlayInvalid::GameOver));
    assert_eq!(arbiter.state(), before);
}

#[test]
fn a_short_game_from_the_opening() {
    let mut arbiter = Arbiter::new();
    for (i, p) in ["d7-b7", "d5-b5", "d6-c6", "b5-b6"].iter().enumerate() {
        let effects = arbiter.play(p.parse().unwrap()).unwrap();
        assert_eq!(arbiter.turn_count(), i + 1);
        assert_eq!(arbiter.last_play(), Some(p.parse().unwrap()));
        assert!(effects.captures.is_empty());
        assert_eq!(effects.game_outcome, None);
    }
    // Moving between two attackers (b7 and c6 flank b6 on different axes) is safe.
    assert_eq!(arbiter.count_pieces(Defender), 4);
    assert_eq!(arbiter.board().get_piece(Tile::new(1, 1)), Some(Defender));
    assert_eq!(arbiter.turn(), Black);
}
