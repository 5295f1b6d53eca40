use chess_core::{
    piece::{Color, PieceType},
    Board, Piece, Square,
};

// Material values in whole pawns. The king's value dwarfs every other piece
// so that losing it outweighs any material combination.
const PAWN_VALUE: i32 = 1;
const KNIGHT_VALUE: i32 = 3;
const BISHOP_VALUE: i32 = 3;
const ROOK_VALUE: i32 = 5;
const QUEEN_VALUE: i32 = 9;
const KING_VALUE: i32 = 900;

/// Per-piece, per-square bonuses indexed by `row * 8 + col`.
///
/// One table per piece and color (twelve in all). A missing table, or a
/// table shorter than 64 entries, contributes 0 for the squares it does not
/// cover. Values are added to the score as given, so tables for black
/// pieces carry their own sign. The default is the material-only baseline:
/// no tables at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PieceSquareTables {
    tables: [Option<Vec<i32>>; 12],
}

impl PieceSquareTables {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_table(mut self, piece: Piece, values: Vec<i32>) -> Self {
        self.set_table(piece, values);
        self
    }

    pub fn set_table(&mut self, piece: Piece, values: Vec<i32>) {
        self.tables[piece.table_index()] = Some(values);
    }

    pub fn is_empty(&self) -> bool {
        self.tables.iter().all(Option::is_none)
    }

    pub fn bonus(&self, piece: Piece, square: Square) -> i32 {
        self.tables[piece.table_index()]
            .as_ref()
            .and_then(|table| table.get(square.index()))
            .copied()
            .unwrap_or(0)
    }
}

/// Material balance plus positional bonuses. Positive favors White.
pub fn evaluate_with_tables(board: &Board, tables: &PieceSquareTables) -> i32 {
    board
        .pieces()
        .map(|(square, piece)| {
            let material = match piece.color {
                Color::White => get_piece_value(piece.piece_type),
                Color::Black => -get_piece_value(piece.piece_type),
            };
            material + tables.bonus(piece, square)
        })
        .sum()
}

/// Material-only evaluation, positive favors White.
pub fn evaluate_position(board: &Board) -> i32 {
    evaluate_with_tables(board, &PieceSquareTables::empty())
}

/// Returns the base material value of a piece
pub fn get_piece_value(piece_type: PieceType) -> i32 {
    match piece_type {
        PieceType::Pawn => PAWN_VALUE,
        PieceType::Knight => KNIGHT_VALUE,
        PieceType::Bishop => BISHOP_VALUE,
        PieceType::Rook => ROOK_VALUE,
        PieceType::Queen => QUEEN_VALUE,
        PieceType::King => KING_VALUE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_position_is_balanced() {
        assert_eq!(evaluate_position(&Board::new()), 0);
    }

    #[test]
    fn material_is_signed_by_color() {
        // Kings cancel, white has a rook, black a knight.
        let board = Board::from_fen("4k3/8/8/3n4/8/8/8/R3K3").unwrap();
        assert_eq!(evaluate_position(&board), ROOK_VALUE - KNIGHT_VALUE);

        let lone_black_queen = Board::from_fen("3qk3/8/8/8/8/8/8/4K3").unwrap();
        assert_eq!(evaluate_position(&lone_black_queen), -QUEEN_VALUE);

        let no_black_king = Board::from_fen("8/8/8/8/8/8/8/4K3").unwrap();
        assert_eq!(evaluate_position(&no_black_king), KING_VALUE);
    }

    #[test]
    fn empty_tables_add_nothing() {
        let board = Board::new();
        let tables = PieceSquareTables::empty();
        assert!(tables.is_empty());
        assert_eq!(evaluate_with_tables(&board, &tables), evaluate_position(&board));
    }

    #[test]
    fn supplied_tables_are_indexed_by_row_and_column() {
        let white_knight = Piece::new(PieceType::Knight, Color::White);
        let mut values = vec![0; 64];
        values[7 * 8 + 6] = 2; // g1
        values[5 * 8 + 5] = 7; // f3
        let tables = PieceSquareTables::empty().with_table(white_knight, values);

        let board = Board::from_fen("4k3/8/8/8/8/5N2/8/4K3").unwrap();
        assert_eq!(evaluate_with_tables(&board, &tables), KNIGHT_VALUE + 7);

        let start = Board::new();
        // Two white knights on b1 and g1; only g1 carries a bonus.
        assert_eq!(evaluate_with_tables(&start, &tables), 2);
    }

    #[test]
    fn short_tables_default_to_zero() {
        let black_pawn = Piece::new(PieceType::Pawn, Color::Black);
        let tables = PieceSquareTables::empty().with_table(black_pawn, vec![-1; 10]);
        // b8 (index 1) is covered, a2 (index 48) is not.
        assert_eq!(tables.bonus(black_pawn, Square::new(0, 1).unwrap()), -1);
        assert_eq!(tables.bonus(black_pawn, Square::new(6, 0).unwrap()), 0);
    }
}
