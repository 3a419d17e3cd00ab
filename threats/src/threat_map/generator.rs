use board::{Board, PieceKind};

use super::grid::ThreatGrid;

/// Attack pattern for a single piece kind.
///
/// Each generator is a zero-sized struct. `mark_from` marks the squares one
/// piece standing on `(row, col)` attacks; the provided `generate` scans the
/// board for the piece's uppercase symbol and marks every occurrence into a
/// fresh grid. Other pieces never block or absorb an attack.
pub trait ThreatGenerator {
    fn piece(&self) -> PieceKind;

    fn mark_from(&self, row: usize, col: usize, grid: &mut ThreatGrid);

    fn generate(&self, board: &Board) -> ThreatGrid {
        let mut grid = ThreatGrid::new(board.size());
        for (row, col) in board.occurrences(self.piece().to_char_upper()) {
            self.mark_from(row, col, &mut grid);
        }
        grid
    }
}

/// Mark each in-bounds `(row + dr, col + dc)`.
pub(super) fn mark_offsets(
    row: usize,
    col: usize,
    offsets: &[(isize, isize)],
    grid: &mut ThreatGrid,
) {
    for &(dr, dc) in offsets {
        grid.mark_offset(row, col, dr, dc);
    }
}
