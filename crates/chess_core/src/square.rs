use std::fmt;

/// A board coordinate. Row 0 is black's back rank, row 7 is white's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    pub fn new(row: u8, col: u8) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// Applies a (row, col) delta, returning `None` when it leaves the board.
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Index into a 64-entry table, `row * 8 + col`.
    pub fn index(self) -> usize {
        self.row as usize * 8 + self.col as usize
    }

    pub fn all() -> impl Iterator<Item = Square> {
        (0..8).flat_map(|row| (0..8).map(move |col| Square { row, col }))
    }

    pub fn from_algebraic(notation: &str) -> Option<Self> {
        let mut chars = notation.chars();
        let file = chars.next()?;
        let rank = chars.next()?;
        if chars.next().is_some() {
            return None;
        }

        if !('a'..='h').contains(&file) || !('1'..='8').contains(&rank) {
            return None;
        }

        Some(Self {
            row: b'8' - rank as u8,
            col: file as u8 - b'a',
        })
    }

    pub fn to_algebraic(self) -> String {
        format!("{}{}", (b'a' + self.col) as char, 8 - self.row)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn algebraic_maps_to_rows_from_the_top() {
        assert_eq!(Square::from_algebraic("a8"), Square::new(0, 0));
        assert_eq!(Square::from_algebraic("e2"), Square::new(6, 4));
        assert_eq!(Square::from_algebraic("h1"), Square::new(7, 7));
        assert_eq!(Square::new(6, 4).unwrap().to_algebraic(), "e2");
        assert_eq!(Square::from_algebraic("i1"), None);
        assert_eq!(Square::from_algebraic("e22"), None);
        assert_eq!(Square::from_algebraic(""), None);
    }

    #[test]
    fn offset_stays_on_board() {
        let corner = Square::new(0, 0).unwrap();
        assert_eq!(corner.offset(-1, 0), None);
        assert_eq!(corner.offset(0, -1), None);
        assert_eq!(corner.offset(2, 1), Square::new(2, 1));
        assert_eq!(Square::new(7, 7).unwrap().offset(1, 1), None);
    }

    #[test]
    fn all_visits_every_square_in_row_major_order() {
        let squares: Vec<_> = Square::all().collect();
        assert_eq!(squares.len(), 64);
        for (i, sq) in squares.iter().enumerate() {
            assert_eq!(sq.index(), i);
        }
    }
}
