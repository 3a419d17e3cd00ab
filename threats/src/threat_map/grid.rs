/// Squares attacked by every piece of one kind on a board.
///
/// Owned by the generator that fills it until it is moved into
/// [`aggregate`](super::aggregate::aggregate).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreatGrid {
    size: usize,
    marked: Vec<bool>,
}

impl ThreatGrid {
    /// An unmarked `size`×`size` grid.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            marked: vec![false; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Mark `(row, col)`. Panics if the square is off the grid.
    pub fn mark(&mut self, row: usize, col: usize) {
        let idx = self.index(row, col);
        self.marked[idx] = true;
    }

    /// Mark the square `(row + dr, col + dc)` if it lies on the grid.
    ///
    /// Returns whether a square was marked.
    pub fn mark_offset(&mut self, row: usize, col: usize, dr: isize, dc: isize) -> bool {
        let target = row
            .checked_add_signed(dr)
            .zip(col.checked_add_signed(dc))
            .filter(|&(r, c)| r < self.size && c < self.size);

        match target {
            Some((r, c)) => {
                self.mark(r, c);
                true
            }
            None => false,
        }
    }

    pub fn is_marked(&self, row: usize, col: usize) -> bool {
        self.marked[self.index(row, col)]
    }

    pub fn marked_count(&self) -> usize {
        self.marked.iter().filter(|&&m| m).count()
    }

    /// Row-major iterator over marked squares.
    pub fn marked_squares(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let size = self.size;
        self.marked
            .iter()
            .enumerate()
            .filter(|(_, &m)| m)
            .map(move |(idx, _)| (idx / size, idx % size))
    }

    pub(crate) fn into_cells(self) -> Vec<bool> {
        self.marked
    }

    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.size && col < self.size,
            "square ({row}, {col}) is off a {0}x{0} grid",
            self.size
        );
        row * self.size + col
    }
}

#[cfg(test)]
mod tests {
    use super::ThreatGrid;

    #[test]
    fn new_grid_is_unmarked() {
        let grid = ThreatGrid::new(5);
        assert_eq!(grid.size(), 5);
        assert_eq!(grid.marked_count(), 0);
    }

    #[test]
    fn marking_twice_counts_once() {
        let mut grid = ThreatGrid::new(3);
        grid.mark(1, 2);
        grid.mark(1, 2);
        assert!(grid.is_marked(1, 2));
        assert_eq!(grid.marked_count(), 1);
        assert_eq!(grid.marked_squares().collect::<Vec<_>>(), vec![(1, 2)]);
    }

    #[test]
    fn mark_offset_ignores_off_board_targets() {
        let mut grid = ThreatGrid::new(3);
        assert!(!grid.mark_offset(0, 0, -1, 0));
        assert!(!grid.mark_offset(2, 2, 0, 1));
        assert!(grid.mark_offset(2, 2, -2, -2));
        assert_eq!(grid.marked_squares().collect::<Vec<_>>(), vec![(0, 0)]);
    }

    #[test]
    fn zero_size_grid_accepts_no_offsets() {
        let mut grid = ThreatGrid::new(0);
        assert!(!grid.mark_offset(0, 0, 0, 0));
        assert_eq!(grid.marked_count(), 0);
    }
}
