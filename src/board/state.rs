use std::fmt::{Display, Formatter};
use std::str::FromStr;
use crate::bitfield::{Bitboard, BitboardIter};
use crate::board::cell::{Cell, CellKind};
use crate::board::geometry::{BoardGeometry, BOARD_LEN};
use crate::error::{BoardError, ParseError};
use crate::error::ParseError::{BadLineCount, BadLineLen, BadString};
use crate::pieces::{PieceKind, Side};
use crate::pieces::PieceKind::{Attacker, Defender, King};
use crate::tiles::{Axis, Direction, Tile};

/// The placement of pieces on the 7x7 board. The kind of each cell (normal, throne or corner) is
/// fixed by the [`BoardGeometry`] and is not stored here.
///
/// Two bitfields record the positions of the attackers and of the ordinary defenders, and the
/// king's position (if it is still on the board) is stored separately. The whole struct is `Copy`,
/// so every [`Cell`] or `Board` handed out is an independent value and two boards compare equal
/// exactly when every cell holds the same piece.
///
/// Methods taking a [`Tile`] reject tiles that are off the board with [`BoardError::OutOfBounds`].
/// More complex game logic (checking play validity, captures, etc) is implemented in
/// [`crate::game::logic::GameLogic`].
#[derive(Copy, Clone, Hash, Eq, PartialEq, Default, Debug)]
pub struct Board {
    attackers: Bitboard,
    defenders: Bitboard,
    king: Option<Tile>
}

impl Board {

    /// Create an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from fixed piece positions, for use in constants. Every tile must be on the
    /// board and no tile may be listed twice.
    pub(crate) const fn from_tiles(attackers: &[Tile], defenders: &[Tile], king: Option<Tile>) -> Self {
        Self {
            attackers: Bitboard::from_tiles(attackers),
            defenders: Bitboard::from_tiles(defenders),
            king
        }
    }

    pub fn geometry(&self) -> BoardGeometry {
        BoardGeometry::default()
    }

    /// Return the length of the board's side.
    pub fn side_len(&self) -> u8 {
        BOARD_LEN
    }

    /// Get the tile on which the king is currently placed, if it has not been captured.
    pub fn king(&self) -> Option<Tile> {
        self.king
    }

    /// Get the piece that occupies the given tile, if any. Tiles off the board are never occupied.
    pub fn get_piece(&self, t: Tile) -> Option<PieceKind> {
        if !t.in_bounds() {
            None
        } else if self.king == Some(t) {
            Some(King)
        } else if self.defenders.contains(t) {
            Some(Defender)
        } else if self.attackers.contains(t) {
            Some(Attacker)
        } else {
            None
        }
    }

    /// Check if there is any piece occupying a tile.
    pub fn tile_occupied(&self, t: Tile) -> bool {
        self.get_piece(t).is_some()
    }

    /// A copy of the cell at the given tile.
    pub fn cell_at(&self, t: Tile) -> Result<Cell, BoardError> {
        let geo = self.geometry();
        geo.check_in_bounds(t)?;
        Ok(Cell::new(t, geo.cell_kind(t), self.get_piece(t)))
    }

    pub fn cell_kind_at(&self, t: Tile) -> Result<CellKind, BoardError> {
        let geo = self.geometry();
        geo.check_in_bounds(t)?;
        Ok(geo.cell_kind(t))
    }

    /// Place a piece at the given position, replacing whatever was there. A board holds at most one
    /// king, so placing a king moves it from wherever it stood before.
    pub fn place(&mut self, kind: PieceKind, t: Tile) -> Result<(), BoardError> {
        self.geometry().check_in_bounds(t)?;
        self.clear_tile(t);
        match kind {
            Attacker => self.attackers.set(t),
            Defender => self.defenders.set(t),
            King => self.king = Some(t)
        }
        Ok(())
    }

    /// Clear a tile, returning the piece that was removed (if any).
    pub fn remove(&mut self, t: Tile) -> Result<Option<PieceKind>, BoardError> {
        self.geometry().check_in_bounds(t)?;
        let piece = self.get_piece(t);
        self.clear_tile(t);
        Ok(piece)
    }

    /// Clear a tile that is known to be on the board.
    pub(crate) fn clear_tile(&mut self, t: Tile) {
        self.attackers.unset(t);
        self.defenders.unset(t);
        if self.king == Some(t) {
            self.king = None;
        }
    }

    /// Remove every piece from the board.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Move a piece from one position to another. This does not check whether a move is valid; it
    /// just clears `from` and places the piece at `to`. Returns the piece that was moved, or `None`
    /// (leaving the board untouched) if `from` was empty or `to` is off the board.
    pub fn move_piece(&mut self, from: Tile, to: Tile) -> Option<PieceKind> {
        if !to.in_bounds() {
            return None
        }
        let piece = self.get_piece(from)?;
        self.clear_tile(from);
        self.place(piece, to).ok()?;
        Some(piece)
    }

    /// The cells orthogonally adjacent to the given tile, in the order up, down, left, right.
    /// Neighbours that would fall off the board are omitted.
    pub fn neighbors(&self, t: Tile) -> Result<Vec<Cell>, BoardError> {
        let geo = self.geometry();
        geo.check_in_bounds(t)?;
        geo.neighbors(t).into_iter().map(|n| self.cell_at(n)).collect()
    }

    /// The cells to the left and right of the given tile, where they exist.
    pub fn horizontal_neighbors(&self, t: Tile) -> Result<Vec<Cell>, BoardError> {
        self.neighbors_on_axis(t, Axis::Horizontal)
    }

    /// The cells above and below the given tile, where they exist.
    pub fn vertical_neighbors(&self, t: Tile) -> Result<Vec<Cell>, BoardError> {
        self.neighbors_on_axis(t, Axis::Vertical)
    }

    fn neighbors_on_axis(&self, t: Tile, axis: Axis) -> Result<Vec<Cell>, BoardError> {
        let geo = self.geometry();
        geo.check_in_bounds(t)?;
        [Direction::North, Direction::South, Direction::West, Direction::East]
            .into_iter()
            .filter(|d| d.axis() == axis)
            .filter_map(|d| geo.step(t, d))
            .map(|n| self.cell_at(n))
            .collect()
    }

    /// Count the number of pieces of the given kind left on the board.
    pub fn count_pieces(&self, kind: PieceKind) -> u8 {
        match kind {
            Attacker => self.attackers.count() as u8,
            Defender => self.defenders.count() as u8,
            King => u8::from(self.king.is_some())
        }
    }

    /// Return an iterator over the tiles that are occupied by pieces of the given kind, in
    /// row-major order.
    pub fn iter_occupied(&self, kind: PieceKind) -> BitboardIter {
        self.occupied_by_kind(kind).iter()
    }

    /// Return an iterator over the tiles that are occupied by pieces of the given side (including
    /// the king for [`Side::White`]), in row-major order.
    pub fn iter_side(&self, side: Side) -> BitboardIter {
        match side {
            Side::Black => self.attackers.iter(),
            Side::White => (self.defenders | self.occupied_by_kind(King)).iter()
        }
    }

    fn occupied_by_kind(&self, kind: PieceKind) -> Bitboard {
        match kind {
            Attacker => self.attackers,
            Defender => self.defenders,
            King => {
                let mut b = Bitboard::empty();
                if let Some(k) = self.king {
                    b.set(k);
                }
                b
            }
        }
    }

    /// Copies of all cells on the board, in row-major order.
    pub fn cells(&self) -> Vec<Cell> {
        let geo = self.geometry();
        geo.iter_tiles()
            .map(|t| Cell::new(t, geo.cell_kind(t), self.get_piece(t)))
            .collect()
    }

    /// Parse board state from a string in FEN-like format, ie, one `/`-separated group per row,
    /// using `A`, `D` and `R` for pieces and digits for runs of empty cells.
    pub fn from_fen(fen: &str) -> Result<Self, ParseError> {
        let mut state = Self::default();
        let rows: Vec<&str> = fen.split('/').collect();
        if rows.len() != BOARD_LEN as usize {
            return Err(BadLineCount(rows.len()))
        }
        for (r, line) in rows.into_iter().enumerate() {
            let mut c = 0usize;
            for chr in line.chars() {
                if let Some(n_empty) = chr.to_digit(10) {
                    c += n_empty as usize;
                } else {
                    state.place_parsed(PieceKind::try_from(chr)?, r, c)?;
                    c += 1;
                }
            }
            if c != BOARD_LEN as usize {
                return Err(BadLineLen(c))
            }
        }
        Ok(state)
    }

    /// Parse board state from a string in the format output by [`Self::to_display_str`]. Row
    /// labels and the column footer are optional, as are the spaces between cells, so
    /// `"---A---"` is accepted as a row. Both `-` and `.` denote an empty cell.
    pub fn from_display_str(display_str: &str) -> Result<Self, ParseError> {
        let mut state = Self::default();
        let mut rows: Vec<Vec<char>> = vec![];
        for line in display_str.lines() {
            let mut tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.is_empty() || tokens.concat() == "abcdefg" {
                continue
            }
            if tokens[0].chars().all(|c| c.is_ascii_digit()) {
                tokens.remove(0);
            }
            rows.push(tokens.concat().chars().collect());
        }
        if rows.len() != BOARD_LEN as usize {
            return Err(BadLineCount(rows.len()))
        }
        for (r, row) in rows.into_iter().enumerate() {
            if row.len() != BOARD_LEN as usize {
                return Err(BadLineLen(row.len()))
            }
            for (c, chr) in row.into_iter().enumerate() {
                if chr != '-' && chr != '.' {
                    state.place_parsed(PieceKind::try_from(chr)?, r, c)?;
                }
            }
        }
        Ok(state)
    }

    fn place_parsed(&mut self, kind: PieceKind, row: usize, col: usize) -> Result<(), ParseError> {
        if kind == King && self.king.is_some() {
            return Err(BadString("more than one king".to_string()))
        }
        let (Ok(r), Ok(c)) = (u8::try_from(row), u8::try_from(col)) else {
            return Err(BadLineLen(col + 1))
        };
        self.place(kind, Tile::new(r, c)).map_err(|_| BadLineLen(col + 1))
    }

    /// Return a string in FEN-like format representing the board state.
    pub fn to_fen(&self) -> String {
        let mut s = String::new();
        for row in 0..BOARD_LEN {
            let mut n_empty = 0;
            for col in 0..BOARD_LEN {
                let t = Tile::new(row, col);
                if let Some(piece) = self.get_piece(t) {
                    if n_empty > 0 {
                        s.push_str(n_empty.to_string().as_str());
                        n_empty = 0;
                    }
                    s.push(piece.into());
                } else {
                    n_empty += 1;
                }
            }
            if n_empty > 0 {
                s.push_str(n_empty.to_string().as_str());
            }
            if row < BOARD_LEN - 1 {
                s.push('/');
            }
        }
        s
    }

    /// Return a string representing the board state, in a format suitable for printing: one line
    /// per row from rank 7 down to rank 1, each starting with its rank, followed by a footer
    /// naming the files.
    pub fn to_display_str(&self) -> String {
        let mut s = String::new();
        for r in 0..BOARD_LEN {
            s.push_str(&(BOARD_LEN - r).to_string());
            for c in 0..BOARD_LEN {
                s.push(' ');
                match self.get_piece(Tile::new(r, c)) {
                    Some(piece) => s.push(piece.into()),
                    None => s.push('-'),
                }
            }
            s.push('\n');
        }
        s.push_str("  a b c d e f g");
        s
    }
}

impl FromStr for Board {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_fen(s)
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_display_str())
    }
}
