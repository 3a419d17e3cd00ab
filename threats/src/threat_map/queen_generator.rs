use board::PieceKind;

use super::bishop_generator::mark_diagonals;
use super::generator::ThreatGenerator;
use super::grid::ThreatGrid;
use super::rook_generator::mark_lines;

/// Queens combine the rook and bishop patterns.
pub struct QueenGenerator;

impl ThreatGenerator for QueenGenerator {
    fn piece(&self) -> PieceKind {
        PieceKind::Queen
    }

    fn mark_from(&self, row: usize, col: usize, grid: &mut ThreatGrid) {
        mark_lines(row, col, grid);
        mark_diagonals(row, col, grid);
    }
}
