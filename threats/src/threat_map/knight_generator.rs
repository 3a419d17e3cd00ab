use board::PieceKind;

use super::generator::{mark_offsets, ThreatGenerator};
use super::grid::ThreatGrid;

const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (-2, -1),
    (-2, 1),
    (2, -1),
    (2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
];

pub struct KnightGenerator;

impl ThreatGenerator for KnightGenerator {
    fn piece(&self) -> PieceKind {
        PieceKind::Knight
    }

    fn mark_from(&self, row: usize, col: usize, grid: &mut ThreatGrid) {
        mark_offsets(row, col, &KNIGHT_OFFSETS, grid);
    }
}
