//! Random board generation.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::Board;
use crate::types::{CellLabel, PieceColor, PieceKind};

/// Side length of generated boards.
pub const STANDARD_SIZE: usize = 8;

/// One label per piece kind and color, white first: R N B Q K P r n b q k p.
pub fn standard_labels() -> impl Iterator<Item = CellLabel> {
    PieceColor::ALL.into_iter().flat_map(|color| {
        PieceKind::ALL
            .into_iter()
            .map(move |kind| CellLabel::piece(kind, color))
    })
}

/// An 8x8 board holding each standard label once, the remaining squares
/// empty, in a uniformly random arrangement.
pub fn random_board<R: Rng + ?Sized>(rng: &mut R) -> Board {
    let square_count = STANDARD_SIZE * STANDARD_SIZE;
    let mut cells: Vec<CellLabel> = standard_labels().collect();
    cells.resize(square_count, CellLabel::Empty);
    cells.shuffle(rng);

    Board::from_square_cells(STANDARD_SIZE, cells)
}
