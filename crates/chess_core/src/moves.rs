use std::fmt;

use crate::{Board, Square};

/// A from/to pair. Promotion, castling and en passant are not modelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }

    /// Builds a move from raw `(from_row, from_col, to_row, to_col)` coordinates.
    pub fn from_coords(from_row: u8, from_col: u8, to_row: u8, to_col: u8) -> Option<Self> {
        Some(Self {
            from: Square::new(from_row, from_col)?,
            to: Square::new(to_row, to_col)?,
        })
    }

    /// Parses coordinate notation such as `e2e4`.
    pub fn from_coordinate_notation(notation: &str) -> Option<Self> {
        if notation.len() != 4 || !notation.is_ascii() {
            return None;
        }
        Some(Self {
            from: Square::from_algebraic(&notation[..2])?,
            to: Square::from_algebraic(&notation[2..])?,
        })
    }

    pub fn is_capture(&self, board: &Board) -> bool {
        board.get_piece(self.to).is_some()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinate_notation() {
        let mv = Move::from_coordinate_notation("e2e4").unwrap();
        assert_eq!(mv, Move::from_coords(6, 4, 4, 4).unwrap());
        assert_eq!(mv.to_string(), "e2e4");
        assert_eq!(Move::from_coordinate_notation("e2e9"), None);
        assert_eq!(Move::from_coordinate_notation("e2"), None);
    }

    #[test]
    fn capture_depends_on_destination() {
        let board = Board::new();
        let quiet = Move::from_coordinate_notation("e2e4").unwrap();
        assert!(!quiet.is_capture(&board));
        let onto_black = Move::from_coords(6, 4, 1, 4).unwrap();
        assert!(onto_black.is_capture(&board));
    }
}
