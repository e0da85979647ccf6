use crate::pieces::{PieceKind, Side};
use crate::tiles::Tile;

/// The fixed classification of a square. Only the king may stand on a [`CellKind::Throne`] or
/// [`CellKind::Corner`].
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum CellKind {
    Normal,
    Throne,
    Corner
}

impl CellKind {

    /// Whether only the king may end a play on a cell of this kind.
    pub fn is_restricted(&self) -> bool {
        !matches!(self, CellKind::Normal)
    }
}

/// A snapshot of a single square: where it is, what kind of square it is, and what (if anything)
/// is standing on it. Cells are values; changing one does not change the board it came from.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct Cell {
    pub tile: Tile,
    pub kind: CellKind,
    pub piece: Option<PieceKind>
}

impl Cell {
    pub fn new(tile: Tile, kind: CellKind, piece: Option<PieceKind>) -> Self {
        Self { tile, kind, piece }
    }

    pub fn is_empty(&self) -> bool {
        self.piece.is_none()
    }

    /// The side owning the piece on this cell, if any.
    pub fn side(&self) -> Option<Side> {
        self.piece.map(|p| p.side())
    }

    /// The character used for this cell in board diagrams.
    pub fn to_char(&self) -> char {
        self.piece.map_or('-', |p| p.to_char())
    }
}
