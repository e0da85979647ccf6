use derive_more::{Display, Error, From};
use crate::tiles::Coords;

/// Errors that may be encountered when parsing a string.
#[derive(Debug, Eq, PartialEq, Clone, Display, Error)]
pub enum ParseError {
    /// Tried to parse a string, but it was not the expected length. The given `usize` is the
    /// actual length.
    #[display("unexpected string length {_0}")]
    BadStringLen(#[error(not(source))] usize),
    /// Tried to parse a multi-line string but encountered a line that was not the expected length.
    /// The given `usize` is the actual length.
    #[display("unexpected line length {_0}")]
    BadLineLen(#[error(not(source))] usize),
    /// Tried to parse a board diagram that does not have one line per row. The given `usize` is
    /// the actual number of rows found.
    #[display("expected 7 rows, found {_0}")]
    BadLineCount(#[error(not(source))] usize),
    /// Encountered an unexpected character in a string.
    #[display("unexpected character {_0:?}")]
    BadChar(#[error(not(source))] char),
    /// Tried to parse an empty string.
    #[display("empty string")]
    EmptyString,
    /// A generic error type where the given string could not be parsed for some reason.
    #[display("could not parse {_0:?}")]
    BadString(#[error(not(source))] String)
}

/// Errors relating to the board.
#[derive(Debug, Eq, PartialEq, Copy, Clone, Display, Error)]
pub enum BoardError {
    /// Coordinates are out of bounds, ie, not on board.
    #[display("({}, {}) is not on the board", _0.row, _0.col)]
    OutOfBounds(#[error(not(source))] Coords)
}

/// Misuse of the API by the caller, as opposed to a play that breaks the rules of the game.
#[derive(Debug, Eq, PartialEq, Copy, Clone, Display, Error)]
pub enum ArgumentError {
    /// The piece and coordinate lists given to a bulk placement differ in length.
    #[display("{pieces} pieces given for {coords} coordinates")]
    LengthMismatch { pieces: usize, coords: usize },
    /// A position may contain at most one king. The given `usize` is the number requested.
    #[display("a board holds at most one king, {_0} requested")]
    MultipleKings(#[error(not(source))] usize),
    /// The same position was given for more than one piece.
    #[display("more than one piece placed at ({}, {})", _0.row, _0.col)]
    DuplicateTile(#[error(not(source))] Coords)
}

/// Reasons why setting up a position may fail.
#[derive(Debug, Eq, PartialEq, Copy, Clone, Display, Error, From)]
pub enum SetupError {
    #[display("invalid argument: {_0}")]
    Argument(#[error(source)] ArgumentError),
    #[display("{_0}")]
    Board(#[error(source)] BoardError)
}

/// Different ways a [`crate::play::Play`] can be invalid.
#[derive(Debug, Eq, PartialEq, Copy, Clone, Display, Error)]
pub enum PlayInvalid {
    /// Game is already over.
    #[display("the game is already over")]
    GameOver,
    /// The origin or destination tile is outside the board.
    #[display("tile is not on the board")]
    OutOfBounds,
    /// There is no piece to move at the given tile.
    #[display("there is no piece on the origin tile")]
    NoPiece,
    /// The piece being moved does not belong to the player whose turn it is.
    #[display("the piece on the origin tile belongs to the other side")]
    WrongPlayer,
    /// The start and end tiles do not share an axis (ie, they are not on the same row or column),
    /// or they are the same tile.
    #[display("pieces only move in a straight line along a row or column")]
    NoCommonAxis,
    /// Another piece stands between the origin and the destination.
    #[display("the path is blocked by another piece")]
    BlockedByPiece,
    /// The destination tile already holds a piece.
    #[display("the destination tile is occupied")]
    DestinationOccupied,
    /// This move would end on the throne or a corner, which only the king may occupy.
    #[display("only the king may occupy the throne or a corner")]
    MoveOntoBlockedTile
}
