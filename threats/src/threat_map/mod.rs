pub mod aggregate;
pub mod bishop_generator;
pub mod generator;
pub mod grid;
pub mod king_generator;
pub mod knight_generator;
pub mod pawn_generator;
pub mod queen_generator;
pub mod report;
pub mod rook_generator;

pub use aggregate::{aggregate, AggregateGrid, DimensionMismatchError};
pub use generator::ThreatGenerator;
pub use grid::ThreatGrid;
pub use report::{report, ThreatReport};

use board::Board;
use bishop_generator::BishopGenerator;
use king_generator::KingGenerator;
use knight_generator::KnightGenerator;
use pawn_generator::PawnGenerator;
use queen_generator::QueenGenerator;
use rook_generator::RookGenerator;

/// Every registered generator, one per piece kind.
pub fn threat_generators() -> Vec<Box<dyn ThreatGenerator>> {
    vec![
        Box::new(RookGenerator),
        Box::new(BishopGenerator),
        Box::new(QueenGenerator),
        Box::new(KnightGenerator),
        Box::new(KingGenerator),
        Box::new(PawnGenerator),
    ]
}

/// Run every generator on `board` and return one grid per piece kind, in
/// registration order.
pub fn threat_grids(board: &Board) -> Vec<ThreatGrid> {
    threat_generators()
        .iter()
        .map(|generator| {
            let grid = generator.generate(board);
            tracing::debug!(
                piece = %generator.piece(),
                marked = grid.marked_count(),
                "generated threat grid"
            );
            grid
        })
        .collect()
}

/// Union of all piece threats on `board`.
///
/// This is the main entry point for the threat pipeline.
pub fn compute_threats(board: &Board) -> Result<AggregateGrid, DimensionMismatchError> {
    aggregate(board.size(), threat_grids(board))
}

/// Attacked and safe square totals for `board`.
pub fn compute_report(board: &Board) -> Result<ThreatReport, DimensionMismatchError> {
    let grid = compute_threats(board)?;
    let report = ThreatReport::from_grid(&grid);
    tracing::debug!(
        size = board.size(),
        attacked = report.attacked_squares,
        safe = report.safe_squares,
        "computed threat report"
    );
    Ok(report)
}
