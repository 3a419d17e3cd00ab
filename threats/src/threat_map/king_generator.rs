use board::PieceKind;

use super::generator::{mark_offsets, ThreatGenerator};
use super::grid::ThreatGrid;

const KING_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub struct KingGenerator;

impl ThreatGenerator for KingGenerator {
    fn piece(&self) -> PieceKind {
        PieceKind::King
    }

    fn mark_from(&self, row: usize, col: usize, grid: &mut ThreatGrid) {
        mark_offsets(row, col, &KING_OFFSETS, grid);
    }
}
