use crate::board::geometry::BOARD_LEN;
use crate::error::ParseError;
use crate::error::ParseError::{BadChar, BadStringLen, EmptyString};
use crate::tiles::Axis::{Horizontal, Vertical};
use std::fmt::{Debug, Display, Formatter};
use std::ops::Add;
use std::str::FromStr;
use strum::EnumIter;

/// An unbounded row-column pair representing a hypothetical location, which may or may not be on
/// the board. Can be used to represent out-of-bounds locations, including those with negative row
/// or column values.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct Coords {
    pub row: i8,
    pub col: i8
}

impl Coords {
    pub fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }
}

impl From<Tile> for Coords {
    /// Rows or columns beyond `i8::MAX` saturate; they are off the board either way.
    fn from(t: Tile) -> Self {
        Self {
            row: i8::try_from(t.row).unwrap_or(i8::MAX),
            col: i8::try_from(t.col).unwrap_or(i8::MAX)
        }
    }
}

impl From<(i8, i8)> for Coords {
    fn from((row, col): (i8, i8)) -> Self {
        Self { row, col }
    }
}

impl Add<Direction> for Coords {
    type Output = Self;

    fn add(self, rhs: Direction) -> Self {
        let (d_row, d_col) = rhs.offset();
        Self {
            row: self.row + d_row,
            col: self.col + d_col
        }
    }
}

/// The location of a single tile on the board, ie, row and column. Row 0 is the top row of the
/// board (rank 7 in algebraic notation) and column 0 is the leftmost column (file `a`). This
/// struct is only a reference to a location on the board, and does not contain any other
/// information such as piece placement, etc.
///
/// Avoid constructing `Tile`s which may refer to positions not on the game board (use [`Coords`]
/// for that instead). Every board operation rejects an out-of-bounds `Tile` rather than clamping
/// it.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Tile {
    pub row: u8,
    pub col: u8
}

impl Tile {

    /// Create a new [`Tile`] with the given row and column.
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Whether the tile lies on the 7x7 board.
    pub fn in_bounds(&self) -> bool {
        self.row < BOARD_LEN && self.col < BOARD_LEN
    }

    /// Convert a two-character algebraic string (file `a`-`g`, rank `1`-`7`) to a tile. Returns
    /// `None` for anything that does not name a tile on the board.
    pub fn from_notation(s: &str) -> Option<Self> {
        Self::from_str(s).ok()
    }

    /// The algebraic notation for this tile, or `None` if the tile is not on the board.
    pub fn to_notation(&self) -> Option<String> {
        if !self.in_bounds() {
            return None
        }
        let file = (b'a' + self.col) as char;
        let rank = (b'0' + BOARD_LEN - self.row) as char;
        Some(format!("{file}{rank}"))
    }
}

/// Whether the given string is a well-formed algebraic name for a tile on the board.
pub fn is_valid_notation(s: &str) -> bool {
    Tile::from_notation(s).is_some()
}

impl Debug for Tile {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile(row={}, col={})", self.row, self.col)
    }
}

impl Display for Tile {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.to_notation() {
            Some(s) => write!(f, "{s}"),
            None => write!(f, "{self:?}")
        }
    }
}

impl FromStr for Tile {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        match bytes.len() {
            0 => return Err(EmptyString),
            2 => {},
            n => return Err(BadStringLen(n))
        }
        let (file, rank) = (bytes[0], bytes[1]);
        if !(b'a'..b'a' + BOARD_LEN).contains(&file) {
            return Err(BadChar(file as char))
        }
        if !(b'1'..=b'0' + BOARD_LEN).contains(&rank) {
            return Err(BadChar(rank as char))
        }
        Ok(Tile::new(BOARD_LEN - (rank - b'0'), file - b'a'))
    }
}

impl From<Tile> for (u8, u8) {
    fn from(value: Tile) -> Self {
        (value.row, value.col)
    }
}

/// A single axis of movement (vertical or horizontal).
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash)]
pub enum Axis {
    Vertical,
    Horizontal
}

/// One of the four directions in which a piece can travel. North is towards row 0.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash, EnumIter)]
pub enum Direction {
    North,
    South,
    West,
    East
}

impl Direction {

    /// The `(row, col)` step taken by moving one tile in this direction.
    pub fn offset(&self) -> (i8, i8) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
            Direction::East => (0, 1)
        }
    }

    pub fn axis(&self) -> Axis {
        match self {
            Direction::North | Direction::South => Vertical,
            Direction::West | Direction::East => Horizontal
        }
    }
}

/// Iterator over all tiles on a board, in row-major order.
pub struct TileIterator {
    side_len: u8,
    current_row: u8,
    current_col: u8
}

impl TileIterator {
    pub(crate) fn new(side_len: u8) -> Self {
        Self {
            side_len,
            current_row: 0,
            current_col: 0
        }
    }
}

impl Iterator for TileIterator {
    type Item = Tile;
    fn next(&mut self) -> Option<Self::Item> {
        if self.current_row >= self.side_len {
            return None
        }
        let tile = Tile::new(self.current_row, self.current_col);
        if self.current_col >= self.side_len - 1 {
            self.current_row += 1;
            self.current_col = 0;
        } else {
            self.current_col += 1;
        }
        Some(tile)
    }
}
