use board::PieceKind;

use super::generator::ThreatGenerator;
use super::grid::ThreatGrid;

/// Bishops attack all four diagonals out to the edge, excluding their own square.
pub struct BishopGenerator;

impl ThreatGenerator for BishopGenerator {
    fn piece(&self) -> PieceKind {
        PieceKind::Bishop
    }

    fn mark_from(&self, row: usize, col: usize, grid: &mut ThreatGrid) {
        mark_diagonals(row, col, grid);
    }
}

/// Mark the four diagonal rays from `(row, col)`, starting one step away.
pub(super) fn mark_diagonals(row: usize, col: usize, grid: &mut ThreatGrid) {
    for d in 1..grid.size() as isize {
        grid.mark_offset(row, col, -d, -d);
        grid.mark_offset(row, col, d, d);
        grid.mark_offset(row, col, -d, d);
        grid.mark_offset(row, col, d, -d);
    }
}

#[cfg(test)]
mod tests {
    use board::{Board, CellLabel};

    use super::*;

    #[test]
    fn central_bishop_covers_both_diagonals() {
        let board = Board::empty(8).with_piece(3, 3, CellLabel::Piece('B'));
        let grid = BishopGenerator.generate(&board);

        assert_eq!(grid.marked_count(), 13);
        assert!(!grid.is_marked(3, 3));
        for (row, col) in grid.marked_squares() {
            let on_main = row == col;
            let on_anti = row + col == 6;
            assert!(on_main || on_anti, "({row}, {col}) is off both diagonals");
        }
    }

    #[test]
    fn corner_bishop_has_one_diagonal() {
        let board = Board::empty(8).with_piece(7, 0, CellLabel::Piece('B'));
        let grid = BishopGenerator.generate(&board);

        assert_eq!(grid.marked_count(), 7);
        assert!(grid.is_marked(0, 7));
    }

    #[test]
    fn bishop_on_one_square_board_attacks_nothing() {
        let board = Board::empty(1).with_piece(0, 0, CellLabel::Piece('B'));
        assert_eq!(BishopGenerator.generate(&board).marked_count(), 0);
    }

    #[test]
    fn lowercase_bishop_does_not_attack() {
        let board = Board::empty(8).with_piece(3, 3, CellLabel::Piece('b'));
        assert_eq!(BishopGenerator.generate(&board).marked_count(), 0);
    }
}
