//! Whitespace-delimited board text format.
//!
//! One line per row, one token per square. `0` is an empty square and any
//! other single character is stored verbatim as a piece label:
//!
//! ```text
//! 0 0 R 0
//! 0 k 0 0
//! 0 0 0 0
//! P 0 0 0
//! ```

use std::path::Path;

use crate::board::{Board, MalformedBoardError};
use crate::types::CellLabel;

/// Parse a board from its text form.
///
/// Blank lines before the first row and after the last row are ignored. A
/// blank line between rows is an empty row and makes the board ragged.
pub fn parse_board(text: &str) -> Result<Board, MalformedBoardError> {
    let lines: Vec<&str> = text.lines().collect();
    let first = lines.iter().position(|line| !line.trim().is_empty());
    let last = lines.iter().rposition(|line| !line.trim().is_empty());
    let (first, last) = match (first, last) {
        (Some(first), Some(last)) => (first, last),
        _ => return Board::from_rows(Vec::new()),
    };

    let mut rows = Vec::with_capacity(last - first + 1);
    for (line_idx, line) in lines.iter().enumerate().take(last + 1).skip(first) {
        let row = line
            .split_whitespace()
            .map(|token| parse_token(token, line_idx + 1))
            .collect::<Result<Vec<_>, _>>()?;
        rows.push(row);
    }

    Board::from_rows(rows)
}

fn parse_token(token: &str, line: usize) -> Result<CellLabel, MalformedBoardError> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(CellLabel::from_token(c)),
        _ => Err(MalformedBoardError::InvalidToken {
            line,
            token: token.to_string(),
        }),
    }
}

/// Format a board in the text form accepted by [`parse_board`].
pub fn format_board(board: &Board) -> String {
    let mut out = String::with_capacity(board.square_count() * 2);
    for row in board.rows() {
        let line = row
            .iter()
            .map(|label| label.to_token().to_string())
            .collect::<Vec<_>>()
            .join(" ");
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// Read and parse a board file.
pub fn load_board(path: impl AsRef<Path>) -> Result<Board, MalformedBoardError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| MalformedBoardError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let board = parse_board(&text)?;
    tracing::debug!(path = %path.display(), size = board.size(), "loaded board");
    Ok(board)
}

/// Write a board file, replacing any existing file.
pub fn save_board(path: impl AsRef<Path>, board: &Board) -> std::io::Result<()> {
    std::fs::write(path, format_board(board))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tokens_verbatim() {
        let board = parse_board("R 0 b\n0 0 0\n0 q 0\n").unwrap();
        assert_eq!(board.size(), 3);
        assert_eq!(board.cell_at(0, 0), CellLabel::Piece('R'));
        assert_eq!(board.cell_at(0, 2), CellLabel::Piece('b'));
        assert_eq!(board.cell_at(2, 1), CellLabel::Piece('q'));
        assert!(board.cell_at(1, 1).is_empty());
    }

    #[test]
    fn tolerates_extra_whitespace_and_blank_lines() {
        let board = parse_board("\n  \n  K   0 \n0\t0\n\n  \n").unwrap();
        assert_eq!(board.size(), 2);
        assert_eq!(board.cell_at(0, 0), CellLabel::Piece('K'));
    }

    #[test]
    fn blank_line_between_rows_is_ragged() {
        let err = parse_board("R 0\n\n0 0\n").unwrap_err();
        assert!(matches!(
            err,
            MalformedBoardError::RaggedRow {
                row: 1,
                expected: 2,
                found: 0
            }
        ));
    }

    #[test]
    fn whitespace_only_line_between_rows_is_ragged() {
        let err = parse_board("0 0\n   \t\n0 K\n").unwrap_err();
        assert!(matches!(err, MalformedBoardError::RaggedRow { row: 1, .. }));
    }

    #[test]
    fn only_blank_lines_is_size_zero() {
        assert_eq!(parse_board("\n  \n\n").unwrap().size(), 0);
    }

    #[test]
    fn empty_text_is_size_zero() {
        assert_eq!(parse_board("").unwrap().size(), 0);
    }

    #[test]
    fn inconsistent_line_lengths_fail() {
        let err = parse_board("0 0 0\n0 0\n0 0 0\n").unwrap_err();
        assert!(matches!(err, MalformedBoardError::RaggedRow { row: 1, .. }));
    }

    #[test]
    fn multi_character_token_fails() {
        let err = parse_board("0 0\n0 Empty\n").unwrap_err();
        match err {
            MalformedBoardError::InvalidToken { line, token } => {
                assert_eq!(line, 2);
                assert_eq!(token, "Empty");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn format_writes_zero_for_empty() {
        let board = parse_board("R 0\n0 p\n").unwrap();
        assert_eq!(format_board(&board), "R 0\n0 p\n");
    }

    #[test]
    fn formatted_board_parses_back() {
        let board = parse_board("0 N 0 0\n0 0 0 k\nB 0 0 0\n0 0 Q 0\n").unwrap();
        assert_eq!(parse_board(&format_board(&board)).unwrap(), board);
    }

    #[test]
    fn missing_file_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_board(dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, MalformedBoardError::Unreadable { .. }));
    }

    #[test]
    fn save_then_load_returns_same_board() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("board.txt");
        let board = parse_board("0 0 0\n0 K 0\n0 0 r\n").unwrap();

        save_board(&path, &board).unwrap();
        assert_eq!(load_board(&path).unwrap(), board);
    }
}
