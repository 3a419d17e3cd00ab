//! Immutable square board of cell labels.

use std::path::PathBuf;

use crate::types::CellLabel;

/// An N×N board. `N` is taken from the input and may be zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<CellLabel>,
}

impl Board {
    /// Build a board from rows of labels.
    ///
    /// Every row must have the same length, and that length must equal the
    /// number of rows. Zero rows gives the size-0 board.
    pub fn from_rows(rows: Vec<Vec<CellLabel>>) -> Result<Self, MalformedBoardError> {
        let size = rows.len();
        let Some(width) = rows.first().map(Vec::len) else {
            return Ok(Self::default());
        };

        for (row, labels) in rows.iter().enumerate() {
            if labels.len() != width {
                return Err(MalformedBoardError::RaggedRow {
                    row,
                    expected: width,
                    found: labels.len(),
                });
            }
        }

        if width != size {
            return Err(MalformedBoardError::NotSquare {
                rows: size,
                columns: width,
            });
        }

        Ok(Self {
            size,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// An all-empty board.
    pub fn empty(size: usize) -> Self {
        Self {
            size,
            cells: vec![CellLabel::Empty; size * size],
        }
    }

    /// Row-major cells whose length is already known to be `size * size`.
    pub(crate) fn from_square_cells(size: usize, cells: Vec<CellLabel>) -> Self {
        debug_assert_eq!(cells.len(), size * size);
        Self { size, cells }
    }

    /// Copy of this board with one square replaced.
    ///
    /// Panics if `row` or `col` is off the board.
    pub fn with_piece(&self, row: usize, col: usize, label: CellLabel) -> Self {
        let mut next = self.clone();
        let idx = next.index(row, col);
        next.cells[idx] = label;
        next
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn square_count(&self) -> usize {
        self.cells.len()
    }

    /// Label at `(row, col)`. Callers must stay within `0..size()`.
    pub fn cell_at(&self, row: usize, col: usize) -> CellLabel {
        self.cells[self.index(row, col)]
    }

    /// Row-major iterator over every square.
    pub fn squares(&self) -> impl Iterator<Item = (usize, usize, CellLabel)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, label)| (idx / size, idx % size, *label))
    }

    /// Squares whose label is exactly `Piece(symbol)`.
    pub fn occurrences(&self, symbol: char) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.squares()
            .filter(move |(_, _, label)| label.is_symbol(symbol))
            .map(|(row, col, _)| (row, col))
    }

    /// Iterator over rows as label slices.
    pub fn rows(&self) -> impl Iterator<Item = &[CellLabel]> + '_ {
        // chunks(0) panics, and a size-0 board has no rows anyway.
        self.cells.chunks(self.size.max(1))
    }

    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.size && col < self.size,
            "square ({row}, {col}) is off a {0}x{0} board",
            self.size
        );
        row * self.size + col
    }
}

#[derive(Debug, thiserror::Error)]
pub enum MalformedBoardError {
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("board is not square: {rows} rows of {columns} cells")]
    NotSquare { rows: usize, columns: usize },
    #[error("invalid token {token:?} on line {line}")]
    InvalidToken { line: usize, token: String },
    #[error("failed to read board file {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
