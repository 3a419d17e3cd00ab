use std::fmt;

use serde::Serialize;

use super::aggregate::AggregateGrid;

/// Attacked versus safe square totals for one board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThreatReport {
    /// Squares attacked by at least one piece.
    pub attacked_squares: usize,
    /// Squares no piece attacks.
    pub safe_squares: usize,
}

impl ThreatReport {
    pub fn from_grid(grid: &AggregateGrid) -> Self {
        report(grid.attacked_count(), grid.safe_count())
    }

    pub fn total_squares(&self) -> usize {
        self.attacked_squares + self.safe_squares
    }
}

pub fn report(attacked_squares: usize, safe_squares: usize) -> ThreatReport {
    ThreatReport {
        attacked_squares,
        safe_squares,
    }
}

impl fmt::Display for ThreatReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "attacked_squares: {}, safe_squares: {}",
            self.attacked_squares, self.safe_squares
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_fixed_field_names() {
        let json = serde_json::to_string(&report(15, 49)).unwrap();
        assert_eq!(json, r#"{"attacked_squares":15,"safe_squares":49}"#);
    }

    #[test]
    fn display_lists_both_counts() {
        assert_eq!(
            report(3, 61).to_string(),
            "attacked_squares: 3, safe_squares: 61"
        );
    }

    #[test]
    fn total_is_sum_of_fields() {
        assert_eq!(report(20, 44).total_squares(), 64);
    }
}
