use std::fmt;

use crate::{
    error::{BoardError, BoardResult},
    movegen,
    piece::{Color, PieceType},
    Move, Piece, Square,
};

const BACK_RANK: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

/// An 8x8 mailbox. `Board` is `Copy`, so every search branch owns its grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// The standard starting position.
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.setup_initial_position();
        board
    }

    pub fn empty() -> Self {
        Self {
            squares: [[None; 8]; 8],
        }
    }

    pub fn setup_initial_position(&mut self) {
        self.squares = [[None; 8]; 8];
        for (col, &piece_type) in BACK_RANK.iter().enumerate() {
            self.squares[0][col] = Some(Piece::new(piece_type, Color::Black));
            self.squares[1][col] = Some(Piece::new(PieceType::Pawn, Color::Black));
            self.squares[6][col] = Some(Piece::new(PieceType::Pawn, Color::White));
            self.squares[7][col] = Some(Piece::new(piece_type, Color::White));
        }
    }

    /// Builds a board from eight rows of eight tokens, top row first.
    /// `' '` and `'.'` are empty squares.
    pub fn from_rows(rows: [&str; 8]) -> BoardResult<Self> {
        let mut board = Self::empty();
        for (row, text) in rows.iter().enumerate() {
            let len = text.chars().count();
            if len != 8 {
                return Err(BoardError::RowLength { row, len });
            }
            for (col, token) in text.chars().enumerate() {
                board.squares[row][col] = parse_token(row, token)?;
            }
        }
        Ok(board)
    }

    /// Reads the piece placement field of a FEN string. Remaining fields, if
    /// any, are ignored.
    pub fn from_fen(fen: &str) -> BoardResult<Self> {
        let placement = fen.split_whitespace().next().unwrap_or("");
        let rows: Vec<&str> = placement.split('/').collect();
        if rows.len() != 8 {
            return Err(BoardError::RowCount(rows.len()));
        }

        let mut board = Self::empty();
        for (row, text) in rows.iter().enumerate() {
            let mut col = 0usize;
            for token in text.chars() {
                if let Some(skip) = token.to_digit(10) {
                    col += skip as usize;
                    continue;
                }
                let piece = Piece::from_char(token).ok_or(BoardError::UnknownToken { row, token })?;
                if col < 8 {
                    board.squares[row][col] = Some(piece);
                }
                col += 1;
            }
            if col != 8 {
                return Err(BoardError::RowLength { row, len: col });
            }
        }
        Ok(board)
    }

    pub fn to_fen_placement(&self) -> String {
        let mut fen = String::with_capacity(72);
        for (row, squares) in self.squares.iter().enumerate() {
            if row > 0 {
                fen.push('/');
            }
            let mut gap = 0;
            for square in squares {
                match square {
                    Some(piece) => {
                        if gap > 0 {
                            fen.push_str(&gap.to_string());
                            gap = 0;
                        }
                        fen.push(piece.to_char());
                    }
                    None => gap += 1,
                }
            }
            if gap > 0 {
                fen.push_str(&gap.to_string());
            }
        }
        fen
    }

    pub fn get_piece(&self, square: Square) -> Option<&Piece> {
        self.squares[square.row as usize][square.col as usize].as_ref()
    }

    pub fn get(&self, row: u8, col: u8) -> Option<Piece> {
        Square::new(row, col).and_then(|sq| self.get_piece(sq).copied())
    }

    pub fn color_at(&self, square: Square) -> Option<Color> {
        self.get_piece(square).map(|p| p.color)
    }

    pub fn set_piece(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square.row as usize][square.col as usize] = piece;
    }

    /// Moves whatever stands on `from` to `to` and clears `from`. Legality is
    /// the caller's business; only these two squares change.
    pub fn move_piece(&mut self, from: Square, to: Square) {
        let piece = self.squares[from.row as usize][from.col as usize].take();
        self.squares[to.row as usize][to.col as usize] = piece;
    }

    /// Applies a move the way the search does: `move_piece` plus promotion to
    /// a queen when a pawn reaches its last row.
    pub fn make_move(&mut self, mv: Move) {
        self.move_piece(mv.from, mv.to);
        if let Some(piece) = self.get_piece(mv.to).copied() {
            if piece.piece_type == PieceType::Pawn && mv.to.row == piece.color.promotion_row() {
                self.set_piece(mv.to, Some(Piece::new(PieceType::Queen, piece.color)));
            }
        }
    }

    /// A copy of this board with `mv` applied.
    pub fn with_move(&self, mv: Move) -> Self {
        let mut next = *self;
        next.make_move(mv);
        next
    }

    /// Occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.get_piece(sq).map(|p| (sq, *p)))
    }

    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|(_, p)| p.piece_type == PieceType::King && p.color == color)
            .map(|(sq, _)| sq)
    }

    pub fn count(&self, piece: Piece) -> usize {
        self.pieces().filter(|(_, p)| *p == piece).count()
    }

    pub fn is_in_check(&self, color: Color) -> BoardResult<bool> {
        movegen::is_in_check(self, color)
    }

    pub fn get_valid_moves(&self, square: Square) -> BoardResult<Vec<Move>> {
        movegen::legal_moves_from(self, square)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, squares) in self.squares.iter().enumerate() {
            write!(f, "{} ", 8 - row)?;
            for square in squares {
                match square {
                    Some(piece) => write!(f, " {}", piece)?,
                    None => write!(f, " .")?,
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

fn parse_token(row: usize, token: char) -> BoardResult<Option<Piece>> {
    match token {
        ' ' | '.' => Ok(None),
        _ => Piece::from_char(token)
            .map(Some)
            .ok_or(BoardError::UnknownToken { row, token }),
    }
}
