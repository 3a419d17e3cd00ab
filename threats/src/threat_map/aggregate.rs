use std::fmt;

use super::grid::ThreatGrid;

/// Every square attacked by at least one piece, regardless of by whom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateGrid {
    size: usize,
    attacked: Vec<bool>,
}

impl AggregateGrid {
    /// Panics if the square is off the grid.
    pub fn is_attacked(&self, row: usize, col: usize) -> bool {
        assert!(row < self.size && col < self.size);
        self.attacked[row * self.size + col]
    }

    pub fn attacked_count(&self) -> usize {
        self.attacked.iter().filter(|&&a| a).count()
    }

    pub fn safe_count(&self) -> usize {
        self.size * self.size - self.attacked_count()
    }
}

/// One line per row: `x` for attacked, `.` for safe.
impl fmt::Display for AggregateGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.attacked.chunks(self.size.max(1)) {
            let line: String = row.iter().map(|&a| if a { 'x' } else { '.' }).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// A threat grid did not match the board it was aggregated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("threat grid is {found}x{found}, expected {expected}x{expected}")]
pub struct DimensionMismatchError {
    pub expected: usize,
    pub found: usize,
}

/// Cell-wise OR of `grids` onto a `size`×`size` grid.
///
/// Each grid is consumed. Order does not matter and a square marked by
/// several grids is counted once.
pub fn aggregate<I>(size: usize, grids: I) -> Result<AggregateGrid, DimensionMismatchError>
where
    I: IntoIterator<Item = ThreatGrid>,
{
    let mut attacked = vec![false; size * size];

    for grid in grids {
        if grid.size() != size {
            return Err(DimensionMismatchError {
                expected: size,
                found: grid.size(),
            });
        }

        for (cell, marked) in attacked.iter_mut().zip(grid.into_cells()) {
            *cell |= marked;
        }
    }

    Ok(AggregateGrid { size, attacked })
}
