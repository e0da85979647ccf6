pub mod rules {
    use crate::pieces::Side::Black;
    use crate::rules::NoPlaysRule::{Ignore, Loss};
    use crate::rules::Ruleset;

    /// Rules for Ard-Rí: attackers move first, and a side with no legal plays simply cannot move.
    pub const ARD_RI: Ruleset = Ruleset {
        starting_side: Black,
        no_plays: Ignore
    };

    /// Ard-Rí where a side left with no legal plays loses the game.
    pub const ARD_RI_NO_PLAYS_LOSS: Ruleset = Ruleset {
        starting_side: Black,
        no_plays: Loss
    };
}

pub mod boards {
    use crate::board::state::Board;
    use crate::tiles::Tile;

    /// The Ard-Rí opening: attackers on the four mid-edge pairs, defenders around the king on the
    /// throne.
    pub const ARD_RI: &str = "3A3/3A3/3D3/AADRDAA/3D3/3A3/3A3";

    /// The same opening as [`ARD_RI`], built without parsing.
    pub const ARD_RI_BOARD: Board = Board::from_tiles(
        &[
            Tile::new(0, 3), Tile::new(1, 3),
            Tile::new(3, 0), Tile::new(3, 1), Tile::new(3, 5), Tile::new(3, 6),
            Tile::new(5, 3), Tile::new(6, 3)
        ],
        &[Tile::new(2, 3), Tile::new(3, 2), Tile::new(3, 4), Tile::new(4, 3)],
        Some(Tile::new(3, 3))
    );
}

#[cfg(test)]
mod tests {
    use crate::board::state::Board;
    use crate::preset::boards;

    #[test]
    fn test_opening_board_matches_diagram() {
        assert_eq!(Board::from_fen(boards::ARD_RI), Ok(boards::ARD_RI_BOARD));
        assert_eq!(boards::ARD_RI_BOARD.to_fen(), boards::ARD_RI);
    }
}
