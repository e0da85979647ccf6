use std::fmt::{Display, Formatter};
use crate::error::ParseError;
use crate::error::ParseError::BadChar;
use crate::pieces::PieceKind::{Attacker, Defender, King};
use crate::pieces::Side::{Black, White};
use crate::tiles::Tile;
use strum::EnumIter;

/// The two sides of the game. Black plays the attackers; White plays the defenders and the king.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, EnumIter)]
pub enum Side {
    Black,
    White
}

impl Side {

    /// Return the other side.
    pub fn other(&self) -> Self {
        match self {
            Black => White,
            White => Black
        }
    }

    /// A single-character representation of the side (`B` or `W`).
    pub fn to_char(&self) -> char {
        match self {
            Black => 'B',
            White => 'W'
        }
    }
}

impl Display for Side {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Black => write!(f, "Black"),
            White => write!(f, "White")
        }
    }
}

/// The different kinds of pieces that can occupy a board.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash, EnumIter)]
pub enum PieceKind {
    Attacker,
    Defender,
    King
}

impl PieceKind {

    /// The side that owns pieces of this kind.
    pub fn side(&self) -> Side {
        match self {
            Attacker => Black,
            Defender | King => White
        }
    }

    /// The character used for this kind of piece in board diagrams.
    pub fn to_char(&self) -> char {
        match self {
            Attacker => 'A',
            Defender => 'D',
            King => 'R'
        }
    }

    /// Whether this is one of the ordinary (non-king) pieces.
    pub fn is_ordinary(&self) -> bool {
        !matches!(self, King)
    }
}

impl From<PieceKind> for char {
    fn from(value: PieceKind) -> Self {
        value.to_char()
    }
}

impl TryFrom<char> for PieceKind {

    type Error = ParseError;
    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'A' => Ok(Attacker),
            'D' => Ok(Defender),
            'R' => Ok(King),
            other => Err(BadChar(other))
        }
    }
}

/// A struct representing a combination of a tile and a piece.
#[derive(Debug, Eq, PartialEq, Clone, Copy, Hash)]
pub struct PlacedPiece {
    pub tile: Tile,
    pub kind: PieceKind
}

impl PlacedPiece {
    pub fn new(tile: Tile, kind: PieceKind) -> Self {
        Self { tile, kind }
    }
}
