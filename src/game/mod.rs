pub mod logic;
pub mod state;

use crate::board::cell::Cell;
use crate::board::state::Board;
use crate::error::{ArgumentError, BoardError, PlayInvalid, SetupError};
use crate::game::logic::GameLogic;
use crate::game::state::GameState;
use crate::game::GameStatus::{Ongoing, Over};
use crate::pieces::Side::{Black, White};
use crate::pieces::{PieceKind, PlacedPiece, Side};
use crate::play::{Play, ValidPlayIterator};
use crate::preset;
use crate::rules::Ruleset;
use crate::tiles::{Coords, Tile};
use derive_more::Display;
use std::collections::HashSet;
use tracing::{debug, info, instrument};

/// The reason why a game has been won.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash, Display)]
pub enum WinReason {
    /// King has reached a corner.
    #[display("the king escaped")]
    KingEscaped,
    /// King has been surrounded.
    #[display("the king was captured")]
    KingCaptured,
    /// The other side has no legal plays available. Only possible under
    /// [`crate::rules::NoPlaysRule::Loss`].
    #[display("the other side has no legal plays")]
    NoPlays
}

/// The outcome of a single game. Ard-Rí has no draws, so a finished game always has a winner.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash, Display)]
#[display("{winner} wins: {reason}")]
pub struct GameOutcome {
    pub winner: Side,
    pub reason: WinReason
}

impl GameOutcome {
    pub fn new(winner: Side, reason: WinReason) -> Self {
        Self { winner, reason }
    }
}

/// The effects of a single play, including captures and the game outcome caused by the play, if
/// any.
#[derive(Eq, PartialEq, Debug, Default, Clone)]
pub struct PlayEffects {
    /// Tiles containing pieces that have been captured by the move.
    pub captures: HashSet<PlacedPiece>,
    /// The outcome of the game, if the move has brought the game to an end.
    pub game_outcome: Option<GameOutcome>
}

/// The current status of the game.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash)]
pub enum GameStatus {
    /// Game is still ongoing.
    Ongoing,
    /// Game is over, with the given outcome.
    Over(GameOutcome)
}

/// The referee of a single game of Ard-Rí. It owns the authoritative [`GameState`] and is the only
/// way to change it: plays are checked in full against the rules before anything is touched, so a
/// rejected play leaves the game exactly as it was.
///
/// Everything handed out by the query methods is a copy. Mutating a [`Board`] returned by
/// [`Arbiter::board`] has no effect on the game.
///
/// An `Arbiter` is not synchronised. Callers sharing one between threads must wrap it in a lock.
#[derive(Clone, Debug)]
pub struct Arbiter {
    logic: GameLogic,
    state: GameState
}

impl Arbiter {

    /// Create a new game using the standard rules and opening position.
    pub fn new() -> Self {
        Self::with_rules(preset::rules::ARD_RI)
    }

    /// Create a new game from the standard opening position, played under the given rules.
    pub fn with_rules(rules: Ruleset) -> Self {
        Self {
            logic: GameLogic::new(rules),
            state: GameState::from_board(preset::boards::ARD_RI_BOARD, rules.starting_side)
        }
    }

    /// Attempt to make the given play on behalf of the side whose turn it is. On success, the
    /// piece is moved, captures are removed and the game is checked for an ending; the turn then
    /// passes to the other side unless the game is over. On failure, nothing changes.
    #[instrument(skip(self))]
    pub fn play(&mut self, play: Play) -> Result<PlayEffects, PlayInvalid> {
        let (state, effects) = match self.logic.do_play(play, self.state) {
            Ok(result) => result.into(),
            Err(reason) => {
                debug!(%reason, side = %self.state.side_to_play, "Play rejected");
                return Err(reason)
            }
        };
        self.state = state;
        if let Some(outcome) = effects.game_outcome {
            info!(
                winner = %outcome.winner,
                reason = %outcome.reason,
                turn = self.state.turn,
                "Game over"
            );
        }
        Ok(effects)
    }

    /// Check the given play without making it.
    pub fn validate(&self, play: &Play) -> Result<(), PlayInvalid> {
        self.logic.validate_play(*play, &self.state).map(|_| ())
    }

    /// Whether the given play could be made now.
    pub fn is_legal(&self, play: &Play) -> bool {
        self.validate(play).is_ok()
    }

    /// Every play available to the side whose turn it is. Empty once the game is over.
    pub fn legal_plays(&self) -> Vec<Play> {
        self.logic.legal_plays(&self.state)
    }

    /// Iterate over the plays that the piece at `tile` could make, whichever side it belongs to.
    pub fn iter_plays(&self, tile: Tile) -> ValidPlayIterator<'_, '_> {
        self.logic.iter_plays(tile, &self.state)
    }

    /// Replace the position with the given pieces, and give the turn to `side`. `kinds[i]` is
    /// placed at `coords[i]`; every other tile is left empty.
    ///
    /// All arguments are checked before the board is touched, so on error the game is unchanged.
    /// On success the play counter and last play are reset, and the new position is evaluated: a
    /// king that is already surrounded or already on a corner ends the game at once.
    #[instrument(skip(self))]
    pub fn place_pieces(
        &mut self,
        kinds: &[PieceKind],
        coords: &[(i8, i8)],
        side: Side
    ) -> Result<(), SetupError> {
        if kinds.len() != coords.len() {
            return Err(ArgumentError::LengthMismatch {
                pieces: kinds.len(),
                coords: coords.len()
            }.into())
        }
        let n_kings = kinds.iter().filter(|&&k| k == PieceKind::King).count();
        if n_kings > 1 {
            return Err(ArgumentError::MultipleKings(n_kings).into())
        }
        let geo = self.logic.board_geo;
        let mut tiles: Vec<Tile> = Vec::with_capacity(coords.len());
        for &c in coords {
            let tile = geo.coords_to_tile(Coords::from(c))?;
            if tiles.contains(&tile) {
                return Err(ArgumentError::DuplicateTile(Coords::from(c)).into())
            }
            tiles.push(tile);
        }

        let mut board = Board::new();
        for (&kind, &tile) in kinds.iter().zip(&tiles) {
            board.place(kind, tile)?;
        }
        self.state = GameState::from_board(board, side);
        if let Some(outcome) = self.logic.evaluate_position(&board) {
            info!(winner = %outcome.winner, reason = %outcome.reason, "Position is already decided");
            self.state.status = Over(outcome);
        }
        Ok(())
    }

    /// Return to the opening position, with the first side to move given by the rules.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::with_rules(self.logic.rules);
    }

    /// The side whose turn it is. Once the game is over, this is the side that made the last play.
    pub fn turn(&self) -> Side {
        self.state.side_to_play
    }

    /// The number of plays made since the game started or the position was last set up.
    pub fn turn_count(&self) -> usize {
        self.state.turn
    }

    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    /// The outcome of the game, if it is over.
    pub fn outcome(&self) -> Option<GameOutcome> {
        match self.state.status {
            Ongoing => None,
            Over(outcome) => Some(outcome)
        }
    }

    pub fn is_over(&self) -> bool {
        self.state.status != Ongoing
    }

    /// Whether the attackers have won, ie, the king has been captured (or the defenders were left
    /// without a play under the no-plays rule).
    pub fn attacker_won(&self) -> bool {
        self.outcome().is_some_and(|o| o.winner == Black)
    }

    /// Whether the defenders have won, ie, the king has escaped to a corner.
    pub fn defender_won(&self) -> bool {
        self.outcome().is_some_and(|o| o.winner == White)
    }

    pub fn last_play(&self) -> Option<Play> {
        self.state.last_play
    }

    /// Count the pieces of the given kind left on the board.
    pub fn count_pieces(&self, kind: PieceKind) -> u8 {
        self.state.board.count_pieces(kind)
    }

    /// A copy of the current board.
    pub fn board(&self) -> Board {
        self.state.board
    }

    /// A copy of the cell at the given tile.
    pub fn cell_at(&self, tile: Tile) -> Result<Cell, BoardError> {
        self.state.board.cell_at(tile)
    }

    /// A copy of the full game state.
    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn rules(&self) -> Ruleset {
        self.logic.rules
    }
}

impl Default for Arbiter {
    fn default() -> Self {
        Self::new()
    }
}
