//! Piece, color and cell label types shared by the board and threat crates.

/// Project-owned piece type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// Project-owned color type.
///
/// Uppercase symbols are white, lowercase symbols are black.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceColor {
    White,
    Black,
}

impl PieceKind {
    /// Board file order: R N B Q K P.
    pub const ALL: [PieceKind; 6] = [
        Self::Rook,
        Self::Knight,
        Self::Bishop,
        Self::Queen,
        Self::King,
        Self::Pawn,
    ];

    pub fn to_char_upper(self) -> char {
        match self {
            Self::Pawn => 'P',
            Self::Knight => 'N',
            Self::Bishop => 'B',
            Self::Rook => 'R',
            Self::Queen => 'Q',
            Self::King => 'K',
        }
    }

    pub fn to_char_lower(self) -> char {
        self.to_char_upper().to_ascii_lowercase()
    }

    pub fn to_char(self, color: PieceColor) -> char {
        match color {
            PieceColor::White => self.to_char_upper(),
            PieceColor::Black => self.to_char_lower(),
        }
    }
}

impl PieceColor {
    pub const ALL: [PieceColor; 2] = [Self::White, Self::Black];
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char_upper())
    }
}

/// Contents of a single square.
///
/// Piece symbols are kept verbatim. Nothing here decides whether a symbol
/// is a "real" piece; the threat generators match exact uppercase symbols
/// only, so lowercase or unknown characters are carried but never attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellLabel {
    #[default]
    Empty,
    Piece(char),
}

impl CellLabel {
    /// Token used for empty squares in the board text format.
    pub const EMPTY_TOKEN: char = '0';

    pub fn piece(kind: PieceKind, color: PieceColor) -> Self {
        Self::Piece(kind.to_char(color))
    }

    pub fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    /// True only for `Piece(symbol)` with exactly this character.
    pub fn is_symbol(self, symbol: char) -> bool {
        self == Self::Piece(symbol)
    }

    pub fn to_token(self) -> char {
        match self {
            Self::Empty => Self::EMPTY_TOKEN,
            Self::Piece(c) => c,
        }
    }

    pub fn from_token(c: char) -> Self {
        if c == Self::EMPTY_TOKEN {
            Self::Empty
        } else {
            Self::Piece(c)
        }
    }
}

impl std::fmt::Display for CellLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_token())
    }
}
