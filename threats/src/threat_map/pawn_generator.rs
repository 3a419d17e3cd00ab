use board::PieceKind;

use super::generator::{mark_offsets, ThreatGenerator};
use super::grid::ThreatGrid;

/// Pawns always attack toward row 0, whatever their color.
const PAWN_OFFSETS: [(isize, isize); 2] = [(-1, -1), (-1, 1)];

pub struct PawnGenerator;

impl ThreatGenerator for PawnGenerator {
    fn piece(&self) -> PieceKind {
        PieceKind::Pawn
    }

    fn mark_from(&self, row: usize, col: usize, grid: &mut ThreatGrid) {
        mark_offsets(row, col, &PAWN_OFFSETS, grid);
    }
}

#[cfg(test)]
mod tests {
    use board::{Board, CellLabel};

    use super::*;

    #[test]
    fn pawn_attacks_forward_diagonals() {
        let board = Board::empty(8).with_piece(6, 4, CellLabel::Piece('P'));
        let grid = PawnGenerator.generate(&board);

        assert_eq!(
            grid.marked_squares().collect::<Vec<_>>(),
            vec![(5, 3), (5, 5)]
        );
    }

    #[test]
    fn pawn_on_first_row_attacks_nothing() {
        for col in 0..8 {
            let board = Board::empty(8).with_piece(0, col, CellLabel::Piece('P'));
            assert_eq!(PawnGenerator.generate(&board).marked_count(), 0);
        }
    }

    #[test]
    fn edge_pawn_attacks_one_square() {
        let board = Board::empty(8).with_piece(3, 0, CellLabel::Piece('P'));
        let grid = PawnGenerator.generate(&board);

        assert_eq!(grid.marked_squares().collect::<Vec<_>>(), vec![(2, 1)]);
    }

    #[test]
    fn lowercase_pawn_does_not_attack() {
        let board = Board::empty(8).with_piece(1, 4, CellLabel::Piece('p'));
        assert_eq!(PawnGenerator.generate(&board).marked_count(), 0);
    }
}
