use crate::board::cell::CellKind;
use crate::error::BoardError;
use crate::tiles::{Coords, Direction, Tile, TileIterator};
use strum::IntoEnumIterator;

/// The length of each side of the Ard-Rí board.
pub const BOARD_LEN: u8 = 7;

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SpecialTiles {
    pub throne: Tile,
    pub corners: [Tile; 4]
}

impl From<u8> for SpecialTiles {
    fn from(board_len: u8) -> Self {
        let corners = [
            Tile::new(0, 0),
            Tile::new(0, board_len - 1),
            Tile::new(board_len - 1, board_len - 1),
            Tile::new(board_len - 1, 0)
        ];
        let throne = Tile::new(board_len / 2, board_len / 2);
        Self { corners, throne }
    }
}

/// This struct contains information about the geometry of the board, such as its size and the
/// positions of the throne and corners. It does not contain information about piece placement or
/// any other state that would be expected to change over the course of a game.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct BoardGeometry {
    pub side_len: u8,
    pub special_tiles: SpecialTiles
}

impl Default for BoardGeometry {
    fn default() -> Self {
        Self::new(BOARD_LEN)
    }
}

impl BoardGeometry {

    /// Create the geometry of an empty board with the given side length.
    pub fn new(side_len: u8) -> Self {
        Self { side_len, special_tiles: SpecialTiles::from(side_len) }
    }

    /// Check whether the given tile is on the board.
    pub fn tile_in_bounds(&self, tile: Tile) -> bool {
        let r = 0..self.side_len;
        r.contains(&tile.row) && r.contains(&tile.col)
    }

    /// Return `Ok(())` if the tile is on the board, or a [`BoardError::OutOfBounds`] otherwise.
    pub fn check_in_bounds(&self, tile: Tile) -> Result<(), BoardError> {
        if self.tile_in_bounds(tile) {
            Ok(())
        } else {
            Err(BoardError::OutOfBounds(tile.into()))
        }
    }

    /// Convert an unbounded [`Coords`] to a [`Tile`] representing a position on the board, if
    /// possible. If the coords represents a position not on the board, return a
    /// [`BoardError::OutOfBounds`] error.
    pub fn coords_to_tile(&self, coords: Coords) -> Result<Tile, BoardError> {
        if self.coords_in_bounds(coords) {
            Ok(Tile::new(coords.row as u8, coords.col as u8))
        } else {
            Err(BoardError::OutOfBounds(coords))
        }
    }

    /// Check whether the coords refer to a position on the board.
    pub fn coords_in_bounds(&self, coords: Coords) -> bool {
        let range = 0..(self.side_len as i8);
        range.contains(&coords.row) && range.contains(&coords.col)
    }

    /// The tile one step away from `tile` in the given direction, if that is still on the board.
    pub fn step(&self, tile: Tile, direction: Direction) -> Option<Tile> {
        self.coords_to_tile(Coords::from(tile) + direction).ok()
    }

    /// Find a tile's neighbours (ie, the tiles directly above, below and to either side of it), in
    /// that order, omitting any that are off the board.
    pub fn neighbors(&self, tile: Tile) -> Vec<Tile> {
        Direction::iter()
            .filter_map(|d| self.step(tile, d))
            .collect()
    }

    /// Get all the tiles between the given two tiles. If given tiles do not share a row or column,
    /// an empty vector is returned.
    pub fn tiles_between(&self, t1: Tile, t2: Tile) -> Vec<Tile> {
        let mut tiles: Vec<Tile> = vec![];
        let (r1, c1, r2, c2) = (t1.row, t1.col, t2.row, t2.col);
        if r1 == r2 {
            let col_range = if c1 > c2 {
                (c2+1)..c1
            } else {
                (c1+1)..c2
            };
            for col in col_range {
                tiles.push(Tile::new(r1, col))
            }
        } else if c1 == c2 {
            let row_range = if r1 > r2 {
                (r2 + 1)..r1
            } else {
                (r1 + 1)..r2
            };
            for row in row_range {
                tiles.push(Tile::new(row, c1))
            }
        }
        tiles
    }

    /// Check whether the given tile is at the edge of the board (including at a corner).
    pub fn tile_at_edge(&self, tile: Tile) -> bool {
        tile.row == 0
            || tile.row == self.side_len - 1
            || tile.col == 0
            || tile.col == self.side_len - 1
    }

    pub fn is_corner(&self, tile: Tile) -> bool {
        self.special_tiles.corners.contains(&tile)
    }

    pub fn is_throne(&self, tile: Tile) -> bool {
        self.special_tiles.throne == tile
    }

    /// The fixed kind of the cell at the given tile.
    pub fn cell_kind(&self, tile: Tile) -> CellKind {
        if self.is_throne(tile) {
            CellKind::Throne
        } else if self.is_corner(tile) {
            CellKind::Corner
        } else {
            CellKind::Normal
        }
    }

    /// Return an iterator over all tiles on the board.
    pub fn iter_tiles(&self) -> TileIterator {
        TileIterator::new(self.side_len)
    }
}

#[cfg(test)]
mod tests {
    use crate::board::cell::CellKind;
    use crate::board::geometry::BoardGeometry;
    use crate::error::BoardError;
    use crate::tiles::{Coords, Tile};
    use crate::utils::check_tile_vec;

    #[test]
    fn test_neighbors() {
        let geo = BoardGeometry::default();
        let n = geo.neighbors(Tile::new(0, 0));
        assert_eq!(n, vec![
            Tile::new(1, 0),
            Tile::new(0, 1)
        ]);

        let n = geo.neighbors(Tile::new(3, 2));
        assert_eq!(n, vec![
            Tile::new(2, 2),
            Tile::new(4, 2),
            Tile::new(3, 1),
            Tile::new(3, 3),
        ]);

        let n = geo.neighbors(Tile::new(6, 3));
        assert_eq!(n, vec![
            Tile::new(5, 3),
            Tile::new(6, 2),
            Tile::new(6, 4),
        ]);
    }

    #[test]
    fn test_tiles_between() {
        let geo = BoardGeometry::default();
        let b = geo.tiles_between(Tile::new(2, 2), Tile::new(2, 5));
        check_tile_vec(b, vec![
            Tile::new(2, 3),
            Tile::new(2, 4)
        ]);

        let b = geo.tiles_between(Tile::new(4, 3), Tile::new(1, 3));
        check_tile_vec(b, vec![
            Tile::new(2, 3),
            Tile::new(3, 3)
        ]);

        assert!(geo.tiles_between(Tile::new(1, 1), Tile::new(3, 3)).is_empty());
        assert!(geo.tiles_between(Tile::new(1, 1), Tile::new(1, 1)).is_empty());
        assert!(geo.tiles_between(Tile::new(1, 1), Tile::new(1, 2)).is_empty());
    }

    #[test]
    fn test_cell_kinds() {
        let geo = BoardGeometry::default();
        let mut corners = 0;
        let mut thrones = 0;
        for t in geo.iter_tiles() {
            match geo.cell_kind(t) {
                CellKind::Corner => corners += 1,
                CellKind::Throne => thrones += 1,
                CellKind::Normal => {}
            }
        }
        assert_eq!(corners, 4);
        assert_eq!(thrones, 1);
        assert_eq!(geo.cell_kind(Tile::new(3, 3)), CellKind::Throne);
        assert_eq!(geo.cell_kind(Tile::new(6, 0)), CellKind::Corner);
        assert_eq!(geo.cell_kind(Tile::new(0, 1)), CellKind::Normal);
    }

    #[test]
    fn test_bounds() {
        let geo = BoardGeometry::default();
        assert!(geo.tile_in_bounds(Tile::new(6, 6)));
        assert!(!geo.tile_in_bounds(Tile::new(7, 0)));
        assert_eq!(
            geo.check_in_bounds(Tile::new(0, 9)),
            Err(BoardError::OutOfBounds(Coords::new(0, 9)))
        );
        assert_eq!(geo.coords_to_tile(Coords::new(-1, 2)), Err(BoardError::OutOfBounds(Coords::new(-1, 2))));
        assert_eq!(geo.coords_to_tile(Coords::new(5, 2)), Ok(Tile::new(5, 2)));
        assert!(geo.tile_at_edge(Tile::new(0, 3)));
        assert!(!geo.tile_at_edge(Tile::new(1, 3)));
    }
}
