use board::PieceKind;

use super::generator::ThreatGenerator;
use super::grid::ThreatGrid;

/// Rooks attack their whole rank and file, own square included.
pub struct RookGenerator;

impl ThreatGenerator for RookGenerator {
    fn piece(&self) -> PieceKind {
        PieceKind::Rook
    }

    fn mark_from(&self, row: usize, col: usize, grid: &mut ThreatGrid) {
        mark_lines(row, col, grid);
    }
}

/// Mark every square of `row` and of `col`.
pub(super) fn mark_lines(row: usize, col: usize, grid: &mut ThreatGrid) {
    for k in 0..grid.size() {
        grid.mark(row, k);
        grid.mark(k, col);
    }
}
