use crate::board::geometry::BOARD_LEN;
use crate::tiles::Tile;
use std::ops::{BitAnd, BitOr, Not};

/// A set of tiles on the 7x7 board, stored as a single `u64` with one bit per tile in row-major
/// order. Bits above the 49th are always zero.
#[derive(Copy, Clone, Hash, Eq, PartialEq, Default, Debug)]
pub struct Bitboard(u64);

impl Bitboard {

    /// The number of bits used to represent a single row of the board.
    pub const ROW_WIDTH: u8 = BOARD_LEN;

    /// An empty set.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Create a set containing the given tiles, which must all be on the board.
    pub const fn from_tiles(tiles: &[Tile]) -> Self {
        let mut bits = 0u64;
        let mut i = 0;
        while i < tiles.len() {
            bits |= 1u64 << (tiles[i].row * Self::ROW_WIDTH + tiles[i].col);
            i += 1;
        }
        Self(bits)
    }

    /// Create a bitmask for the given tile. Only the bit corresponding to the tile's position on
    /// the board will be set. The tile must be in bounds.
    pub fn tile_mask(t: Tile) -> Self {
        Self(1 << ((t.row * Self::ROW_WIDTH) + t.col))
    }

    /// Covert the given bit index to a tile.
    pub fn bit_to_tile(bit: u32) -> Tile {
        let row = bit / (Self::ROW_WIDTH as u32);
        let col = bit - (row * (Self::ROW_WIDTH as u32));
        Tile { row: row as u8, col: col as u8 }
    }

    pub fn contains(&self, t: Tile) -> bool {
        !(*self & Self::tile_mask(t)).is_empty()
    }

    pub fn set(&mut self, t: Tile) {
        *self = *self | Self::tile_mask(t);
    }

    pub fn unset(&mut self, t: Tile) {
        *self = *self & !Self::tile_mask(t);
    }

    /// Returns the number of tiles in the set.
    pub fn count(&self) -> u32 {
        self.0.count_ones()
    }

    /// Whether the set is empty (ie, no set bits).
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Iterate over the tiles in the set, in row-major order.
    pub fn iter(&self) -> BitboardIter {
        BitboardIter { state: self.0, i: 0 }
    }
}

impl BitAnd for Bitboard {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl BitOr for Bitboard {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl Not for Bitboard {
    type Output = Self;
    fn not(self) -> Self {
        const BOARD_MASK: u64 = (1 << (BOARD_LEN as u32 * BOARD_LEN as u32)) - 1;
        Self(!self.0 & BOARD_MASK)
    }
}

pub struct BitboardIter {
    /// Bits not yet visited.
    state: u64,
    /// Keeps track of current position in the bitfield.
    i: u32
}

impl Iterator for BitboardIter {
    type Item = Tile;

    fn next(&mut self) -> Option<Self::Item> {
        if self.i >= u64::BITS {
            return None
        }
        let skipped = self.state >> self.i;
        if skipped == 0 {
            return None
        }
        self.i += skipped.trailing_zeros() + 1;
        Some(Bitboard::bit_to_tile(self.i - 1))
    }
}
