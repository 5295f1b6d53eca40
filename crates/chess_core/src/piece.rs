use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a forward pawn step. White starts at the bottom (row 7).
    pub fn pawn_direction(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    pub fn pawn_start_row(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    pub fn promotion_row(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceType {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceType {
    pub const ALL: [PieceType; 6] = [
        PieceType::Pawn,
        PieceType::Knight,
        PieceType::Bishop,
        PieceType::Rook,
        PieceType::Queen,
        PieceType::King,
    ];

    /// Dense index used by per-piece tables.
    pub fn index(self) -> usize {
        match self {
            PieceType::Pawn => 0,
            PieceType::Knight => 1,
            PieceType::Bishop => 2,
            PieceType::Rook => 3,
            PieceType::Queen => 4,
            PieceType::King => 5,
        }
    }

    fn to_lowercase_char(self) -> char {
        match self {
            PieceType::Pawn => 'p',
            PieceType::Knight => 'n',
            PieceType::Bishop => 'b',
            PieceType::Rook => 'r',
            PieceType::Queen => 'q',
            PieceType::King => 'k',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub piece_type: PieceType,
    pub color: Color,
}

impl Piece {
    pub fn new(piece_type: PieceType, color: Color) -> Self {
        Self { piece_type, color }
    }

    /// Parses a board token: uppercase letters are white, lowercase black.
    pub fn from_char(token: char) -> Option<Self> {
        let piece_type = match token.to_ascii_lowercase() {
            'p' => PieceType::Pawn,
            'n' => PieceType::Knight,
            'b' => PieceType::Bishop,
            'r' => PieceType::Rook,
            'q' => PieceType::Queen,
            'k' => PieceType::King,
            _ => return None,
        };
        let color = if token.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Self::new(piece_type, color))
    }

    pub fn to_char(self) -> char {
        let c = self.piece_type.to_lowercase_char();
        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    pub fn is_white(self) -> bool {
        self.color == Color::White
    }

    /// Index into a twelve-entry per-piece table, white pieces first.
    pub fn table_index(self) -> usize {
        match self.color {
            Color::White => self.piece_type.index(),
            Color::Black => 6 + self.piece_type.index(),
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_carry_color_in_case() {
        let white_knight = Piece::from_char('N').unwrap();
        assert_eq!(white_knight, Piece::new(PieceType::Knight, Color::White));
        assert!(white_knight.is_white());

        let black_queen = Piece::from_char('q').unwrap();
        assert_eq!(black_queen, Piece::new(PieceType::Queen, Color::Black));
        assert_eq!(black_queen.to_char(), 'q');

        assert_eq!(Piece::from_char('x'), None);
        assert_eq!(Piece::from_char(' '), None);
    }

    #[test]
    fn table_indices_are_distinct() {
        let mut seen = [false; 12];
        for color in [Color::White, Color::Black] {
            for piece_type in PieceType::ALL {
                let idx = Piece::new(piece_type, color).table_index();
                assert!(!seen[idx]);
                seen[idx] = true;
            }
        }
    }
}
