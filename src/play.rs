use crate::tiles::{Direction, Tile};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use crate::error::ParseError;
use crate::error::ParseError::BadString;
use crate::game::logic::GameLogic;
use crate::game::state::GameState;
use crate::pieces::PieceKind;
use strum::IntoEnumIterator;

/// A single move of a piece from one tile to another. (Named "Play" rather than "Move" as the
/// lower-cased version of the latter would clash with the Rust keyword.)
///
/// A `Play` is only a pair of tiles. It says nothing about whether the path between them is
/// clear, or even whether they lie on a common row or column; see [`Play::direction`] for the
/// latter. Checking a play against the board is the job of [`GameLogic`].
#[derive(Debug, Eq, PartialEq, Clone, Copy, Hash)]
pub struct Play {
    pub from: Tile,
    pub to: Tile
}

impl Play {

    /// Create a new [`Play`] from source and destination tiles.
    pub fn new(from: Tile, to: Tile) -> Self {
        Self { from, to }
    }

    /// The direction of travel, or `None` if the play is diagonal or does not leave its tile.
    pub fn direction(&self) -> Option<Direction> {
        let (from, to) = (self.from, self.to);
        if from.row == to.row && from.col != to.col {
            Some(if to.col > from.col { Direction::East } else { Direction::West })
        } else if from.col == to.col && from.row != to.row {
            Some(if to.row > from.row { Direction::South } else { Direction::North })
        } else {
            None
        }
    }

    /// Whether the play runs along a single row or column.
    pub fn is_straight(&self) -> bool {
        self.direction().is_some()
    }

    /// The number of tiles covered by the play, or `None` if it is not straight.
    pub fn distance(&self) -> Option<u8> {
        self.direction()?;
        Some(self.from.row.abs_diff(self.to.row) + self.from.col.abs_diff(self.to.col))
    }
}

impl FromStr for Play {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.trim().split('-').collect();
        if tokens.len() != 2 {
            return Err(BadString(String::from(s)))
        };
        Ok(Play::new(
            Tile::from_str(tokens[0])?,
            Tile::from_str(tokens[1])?
        ))
    }
}

impl Display for Play {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}

/// A play that has been checked against the rules and the current game state. Only
/// [`GameLogic::validate_play`] creates these, so holding one is proof that the wrapped play may be
/// made.
#[derive(Debug, Eq, PartialEq, Clone, Copy, Hash)]
pub struct ValidPlay {
    pub play: Play
}

/// An iterator over the legal plays that can be made by the piece at the given tile, walking
/// outwards one direction at a time. Because this struct holds a reference to the [`GameLogic`]
/// and [`GameState`], neither may be mutated while the iterator exists.
pub struct ValidPlayIterator<'logic, 'state> {
    game_logic: &'logic GameLogic,
    game_state: &'state GameState,
    start_tile: Tile,
    piece: Option<PieceKind>,
    directions: Vec<Direction>,
    current: Tile
}

impl<'logic, 'state> ValidPlayIterator<'logic, 'state> {

    /// Create an iterator over plays from `tile`. If the tile is empty the iterator is empty.
    pub fn new(game_logic: &'logic GameLogic, game_state: &'state GameState, tile: Tile) -> Self {
        let mut directions: Vec<Direction> = Direction::iter().collect();
        directions.reverse();
        Self {
            game_logic,
            game_state,
            start_tile: tile,
            piece: game_state.board.get_piece(tile),
            directions,
            current: tile
        }
    }
}

impl Iterator for ValidPlayIterator<'_, '_> {
    type Item = Play;

    fn next(&mut self) -> Option<Self::Item> {
        let piece = self.piece?;
        loop {
            let direction = *self.directions.last()?;
            let Some(next_tile) = self.game_logic.board_geo.step(self.current, direction) else {
                // Off the board, so try the next direction from the start.
                self.directions.pop();
                self.current = self.start_tile;
                continue
            };
            let (can_occupy, can_pass) = self.game_logic.can_occupy_or_pass(
                next_tile, piece, self.game_state
            );
            if !can_pass {
                self.directions.pop();
                self.current = self.start_tile;
                continue
            }
            self.current = next_tile;
            if can_occupy {
                return Some(Play::new(self.start_tile, next_tile))
            }
        }
    }
}
