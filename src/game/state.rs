use crate::board::state::Board;
use crate::error::ParseError;
use crate::game::GameStatus;
use crate::game::GameStatus::Ongoing;
use crate::pieces::Side;
use crate::play::Play;

/// This struct contains all state that changes over the course of a game: the pieces on the board,
/// whose turn it is, how many plays have been made and the most recent one. It is `Copy`, so
/// handing a `GameState` to a caller never exposes the authoritative copy to mutation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct GameState {
    /// Board state, ie, the current pieces on the board.
    pub board: Board,
    /// The side whose turn it is. Once the game is over, this is the side that made the last play.
    pub side_to_play: Side,
    /// Current status of the game.
    pub status: GameStatus,
    /// Number of plays that have been taken by either side.
    pub turn: usize,
    /// The most recent play, if any has been made since the position was set up.
    pub last_play: Option<Play>
}

impl GameState {

    /// Create a new game state from a board in FEN-like format.
    pub fn new(fen_str: &str, side_to_play: Side) -> Result<Self, ParseError> {
        Ok(Self::from_board(Board::from_fen(fen_str)?, side_to_play))
    }

    /// Create a new game state, with no plays yet made, from the given board.
    pub fn from_board(board: Board, side_to_play: Side) -> Self {
        Self {
            board,
            side_to_play,
            status: Ongoing,
            turn: 0,
            last_play: None
        }
    }
}
