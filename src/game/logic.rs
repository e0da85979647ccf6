use crate::board::geometry::BoardGeometry;
use crate::board::state::Board;
use crate::error::PlayInvalid;
use crate::error::PlayInvalid::{BlockedByPiece, DestinationOccupied, GameOver, MoveOntoBlockedTile, NoCommonAxis, NoPiece, OutOfBounds, WrongPlayer};
use crate::game::state::GameState;
use crate::game::GameStatus::{Ongoing, Over};
use crate::game::WinReason::{KingCaptured, KingEscaped, NoPlays};
use crate::game::{GameOutcome, PlayEffects};
use crate::pieces::PieceKind::{Attacker, King};
use crate::pieces::Side::{Black, White};
use crate::pieces::{PieceKind, PlacedPiece, Side};
use crate::play::{Play, ValidPlay, ValidPlayIterator};
use crate::rules::{NoPlaysRule, Ruleset};
use crate::tiles::{Direction, Tile};
use std::collections::HashSet;
use strum::IntoEnumIterator;
use tracing::debug;

/// The result of making a play.
pub struct DoPlayResult {
    /// The game state following the play.
    pub new_state: GameState,
    /// The captures and outcome caused by the play.
    pub effects: PlayEffects
}

impl From<DoPlayResult> for (GameState, PlayEffects) {
    fn from(result: DoPlayResult) -> (GameState, PlayEffects) {
        (result.new_state, result.effects)
    }
}

/// This struct contains the information necessary to implement the game logic, including the game
/// rules and information about the geometry of the board (size, positions of special tiles, etc).
/// It provides methods for evaluating a given play or board based on that logic.
///
/// The information stored in this struct is not expected to change over the course of a game. It
/// does not contain the current game state (piece placement, whose turn it is, etc), but rather,
/// its methods take references to such state where necessary.
#[derive(Clone, Copy, Debug)]
pub struct GameLogic {
    pub rules: Ruleset,
    pub board_geo: BoardGeometry
}

impl GameLogic {

    /// Create a new [`GameLogic`] struct from the given rules.
    pub fn new(rules: Ruleset) -> Self {
        Self { rules, board_geo: BoardGeometry::default() }
    }

    /// Determine whether the given tile is hostile to a piece of the given side, for the purposes
    /// of an ordinary (sandwich) capture. A corner is always hostile, whatever stands on it.
    /// Otherwise a tile is hostile if it holds any piece of the other side (the king included), or
    /// if it is the empty throne.
    pub fn tile_hostile(&self, tile: Tile, side: Side, board: &Board) -> bool {
        if self.board_geo.is_corner(tile) {
            return true
        }
        match board.get_piece(tile) {
            Some(other_piece) => other_piece.side() != side,
            None => self.board_geo.is_throne(tile)
        }
    }

    /// Whether the given piece can occupy or pass the given tile according to the game rules and
    /// current board state. Returns a pair of `bool`s indicating whether the piece can occupy or
    /// pass, respectively. Any piece may pass through the empty throne, but only the king may stop
    /// on it (or on a corner).
    pub fn can_occupy_or_pass(
        &self,
        tile: Tile,
        piece: PieceKind,
        state: &GameState
    ) -> (bool, bool) {
        if state.board.tile_occupied(tile) {
            return (false, false)
        }
        let can_occupy = piece == King || !self.board_geo.cell_kind(tile).is_restricted();
        (can_occupy, true)
    }

    /// Check whether a play is valid for the given side. Returns a `Result` which contains a
    /// [`ValidPlay`] wrapping the given `Play` if it is valid, and a [`PlayInvalid`] describing
    /// the first reason for the invalidity otherwise. Checks are made in this order: game over,
    /// bounds, empty origin, wrong side, straight line, clear path, empty destination and finally
    /// whether the piece may stand on the destination.
    pub fn validate_play_for_side(
        &self,
        play: Play,
        side: Side,
        state: &GameState
    ) -> Result<ValidPlay, PlayInvalid> {
        if state.status != Ongoing {
            return Err(GameOver)
        }
        let from = play.from;
        let to = play.to;
        if !(self.board_geo.tile_in_bounds(from) && self.board_geo.tile_in_bounds(to)) {
            return Err(OutOfBounds)
        }
        let piece = state.board.get_piece(from).ok_or(NoPiece)?;
        if piece.side() != side {
            return Err(WrongPlayer)
        }
        if !play.is_straight() {
            return Err(NoCommonAxis)
        }
        let between = self.board_geo.tiles_between(from, to);
        if between.iter().any(|t| state.board.tile_occupied(*t)) {
            return Err(BlockedByPiece)
        }
        if state.board.tile_occupied(to) {
            return Err(DestinationOccupied)
        }
        if piece != King && self.board_geo.cell_kind(to).is_restricted() {
            return Err(MoveOntoBlockedTile)
        }
        Ok(ValidPlay { play })
    }

    /// Check whether a move is valid for the side whose turn it is.
    pub fn validate_play(&self, play: Play, state: &GameState) -> Result<ValidPlay, PlayInvalid> {
        self.validate_play_for_side(play, state.side_to_play, state)
    }

    /// Whether the king is surrounded on all four sides by attackers or the empty throne. A king
    /// on the edge of the board can never be surrounded, and the board may hold no king at all.
    pub fn king_encircled(&self, board: &Board) -> bool {
        let Some(king) = board.king() else {
            return false
        };
        !self.board_geo.tile_at_edge(king) && self.board_geo.neighbors(king).iter().all(|&t| {
            match board.get_piece(t) {
                Some(piece) => piece == Attacker,
                None => self.board_geo.is_throne(t)
            }
        })
    }

    /// Whether the king is standing on a corner.
    pub fn king_escaped(&self, board: &Board) -> bool {
        board.king().is_some_and(|k| self.board_geo.is_corner(k))
    }

    /// Get the pieces captured by the given play, which must already have been made on `board`.
    /// Only pieces beside the destination of the play can be captured.
    pub fn get_captures(
        &self,
        play: Play,
        moving_piece: PieceKind,
        board: &Board
    ) -> HashSet<PlacedPiece> {
        let mut captures: HashSet<PlacedPiece> = HashSet::new();
        let to = play.to;

        // The king cannot capture, only be captured against.
        if moving_piece.is_ordinary() {
            for direction in Direction::iter() {
                let Some(n) = self.board_geo.step(to, direction) else {
                    continue
                };
                let Some(other_piece) = board.get_piece(n) else {
                    continue
                };
                if !other_piece.is_ordinary() || other_piece.side() == moving_piece.side() {
                    continue
                }
                let Some(far) = self.board_geo.step(n, direction) else {
                    continue
                };
                if self.tile_hostile(far, other_piece.side(), board) {
                    captures.insert(PlacedPiece::new(n, other_piece));
                }
            }
        }

        if moving_piece == Attacker {
            if let Some(king) = board.king() {
                if self.board_geo.neighbors(to).contains(&king) && self.king_encircled(board) {
                    captures.insert(PlacedPiece::new(king, King));
                }
            }
        }
        captures
    }

    /// Get the outcome of the game following a play by `mover`, if any. If `None`, the game is
    /// still ongoing. The attackers only win by actually capturing the king, so a king that
    /// steps between attackers of its own accord is still free.
    pub fn get_game_outcome(
        &self,
        mover: Side,
        caps: &HashSet<PlacedPiece>,
        state: &GameState,
    ) -> Option<GameOutcome> {
        if caps.iter().any(|c| c.kind == King) {
            return Some(GameOutcome::new(Black, KingCaptured))
        }
        if self.king_escaped(&state.board) {
            return Some(GameOutcome::new(White, KingEscaped))
        }
        if self.rules.no_plays == NoPlaysRule::Loss && !self.side_can_play(mover.other(), state) {
            return Some(GameOutcome::new(mover, NoPlays))
        }
        None
    }

    /// Assess a position without reference to how it came about: an encircled king means the
    /// attackers have won and a king on a corner means the defenders have won. Used for positions
    /// that are set up rather than played into.
    pub fn evaluate_position(&self, board: &Board) -> Option<GameOutcome> {
        if self.king_encircled(board) {
            Some(GameOutcome::new(Black, KingCaptured))
        } else if self.king_escaped(board) {
            Some(GameOutcome::new(White, KingEscaped))
        } else {
            None
        }
    }

    /// Execute a known valid play. Applies the play and its captures to a copy of the current
    /// game state, checks for any game end conditions, and returns the modified copy of the game
    /// state plus the effects of the play. The turn passes to the other side unless the game has
    /// ended, in which case the side that made the play remains the side to play.
    ///
    /// **NOTE**: This method assumes that the given play was validated against `state`. If it was
    /// validated against some other state and there is no piece to move, [`PlayInvalid::NoPiece`]
    /// is returned and nothing is changed. If in any doubt as to the validity of a play, use
    /// [`Self::do_play`] instead (which performs the full check).
    pub fn do_valid_play(
        &self,
        valid_play: ValidPlay,
        mut state: GameState
    ) -> Result<DoPlayResult, PlayInvalid> {
        let play = valid_play.play;
        let mover = state.side_to_play;
        // First move the piece on the board
        let moving_piece = state.board.move_piece(play.from, play.to).ok_or(NoPiece)?;
        // Then remove captured pieces
        let captures = self.get_captures(play, moving_piece, &state.board);
        for c in &captures {
            debug!(tile = %c.tile, kind = ?c.kind, "Piece captured");
            state.board.clear_tile(c.tile);
        }
        state.turn += 1;
        state.last_play = Some(play);

        // Then assess the game outcome
        let game_outcome = self.get_game_outcome(mover, &captures, &state);
        match game_outcome {
            Some(outcome) => state.status = Over(outcome),
            None => state.side_to_play = mover.other()
        }

        Ok(DoPlayResult { new_state: state, effects: PlayEffects { captures, game_outcome } })
    }

    /// Execute a play. Checks the play is valid and, if so, applies it to a copy of the given
    /// state as in [`Self::do_valid_play`]. An invalid play leaves nothing changed.
    pub fn do_play(
        &self,
        play: Play,
        state: GameState
    ) -> Result<DoPlayResult, PlayInvalid> {
        let valid_play = self.validate_play(play, &state)?;
        self.do_valid_play(valid_play, state)
    }

    /// Whether the given side could make any play given the current board.
    pub fn side_can_play(&self, side: Side, state: &GameState) -> bool {
        state.board.iter_side(side).any(|tile| self.iter_plays(tile, state).next().is_some())
    }

    /// Iterate over the possible plays that can be made by the piece at the given tile. If there
    /// is no piece at the tile the iterator is empty. This does not consider whose turn it is.
    pub fn iter_plays<'logic, 'state>(
        &'logic self,
        tile: Tile,
        state: &'state GameState
    ) -> ValidPlayIterator<'logic, 'state> {
        ValidPlayIterator::new(self, state, tile)
    }

    /// Every legal play for the side whose turn it is, grouped by piece in row-major order. Empty
    /// once the game is over.
    pub fn legal_plays(&self, state: &GameState) -> Vec<Play> {
        if state.status != Ongoing {
            return vec![]
        }
        state.board.iter_side(state.side_to_play)
            .flat_map(|tile| self.iter_plays(tile, state))
            .collect()
    }
}
