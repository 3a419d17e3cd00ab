pub mod board;
pub mod generate;
pub mod text;
pub mod types;

pub use board::{Board, MalformedBoardError};
pub use generate::{random_board, standard_labels, STANDARD_SIZE};
pub use text::{format_board, load_board, parse_board, save_board};
pub use types::{CellLabel, PieceColor, PieceKind};
