//! Move generation in two tiers.
//!
//! [`pseudo_legal_destinations`] follows piece movement and occupancy rules
//! only. Check detection is built on it alone. [`legal_moves`] adds the
//! own-king-safety filter on top and is what the search consumes.

use log::trace;

use crate::{
    error::{BoardError, BoardResult},
    piece::{Color, PieceType},
    Board, Move, Square,
};

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

const ROYAL_DIRECTIONS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Check,
    Checkmate,
    Stalemate,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }
}

/// Squares the piece on `from` could move to, ignoring the safety of its own
/// king. Empty for an empty square.
pub fn pseudo_legal_destinations(board: &Board, from: Square) -> Vec<Square> {
    let mut destinations = Vec::new();
    let piece = match board.get_piece(from) {
        Some(p) => *p,
        None => return destinations,
    };

    match piece.piece_type {
        PieceType::Pawn => pawn_destinations(board, from, piece.color, &mut destinations),
        PieceType::Knight => step_destinations(board, from, piece.color, &KNIGHT_OFFSETS, &mut destinations),
        PieceType::King => step_destinations(board, from, piece.color, &ROYAL_DIRECTIONS, &mut destinations),
        PieceType::Rook => ray_destinations(board, from, piece.color, &ROOK_DIRECTIONS, &mut destinations),
        PieceType::Bishop => ray_destinations(board, from, piece.color, &BISHOP_DIRECTIONS, &mut destinations),
        PieceType::Queen => ray_destinations(board, from, piece.color, &ROYAL_DIRECTIONS, &mut destinations),
    }
    destinations
}

fn pawn_destinations(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    let direction = color.pawn_direction();

    // A pawn with no row in front of it has nowhere to go.
    let Some(one) = from.offset(direction, 0) else {
        return;
    };

    if board.get_piece(one).is_none() {
        out.push(one);
        if from.row == color.pawn_start_row() {
            if let Some(two) = from.offset(2 * direction, 0) {
                if board.get_piece(two).is_none() {
                    out.push(two);
                }
            }
        }
    }

    for d_col in [-1, 1] {
        if let Some(target) = from.offset(direction, d_col) {
            if board.color_at(target) == Some(color.opposite()) {
                out.push(target);
            }
        }
    }
}

fn step_destinations(board: &Board, from: Square, color: Color, offsets: &[(i8, i8)], out: &mut Vec<Square>) {
    for &(d_row, d_col) in offsets {
        if let Some(target) = from.offset(d_row, d_col) {
            if board.color_at(target) != Some(color) {
                out.push(target);
            }
        }
    }
}

fn ray_destinations(board: &Board, from: Square, color: Color, directions: &[(i8, i8)], out: &mut Vec<Square>) {
    for &(d_row, d_col) in directions {
        let mut current = from;
        while let Some(next) = current.offset(d_row, d_col) {
            match board.color_at(next) {
                None => out.push(next),
                Some(other) => {
                    if other != color {
                        out.push(next);
                    }
                    break;
                }
            }
            current = next;
        }
    }
}

/// Whether any piece of color `by` has `target` among its unfiltered
/// destinations.
pub fn is_square_attacked(board: &Board, target: Square, by: Color) -> bool {
    board
        .pieces()
        .filter(|(_, piece)| piece.color == by)
        .any(|(from, _)| pseudo_legal_destinations(board, from).contains(&target))
}

/// Whether `color`'s king is attacked. Fails when that king is missing.
pub fn is_in_check(board: &Board, color: Color) -> BoardResult<bool> {
    let king = board.find_king(color).ok_or(BoardError::MissingKing(color))?;
    Ok(is_square_attacked(board, king, color.opposite()))
}

/// Whether playing `mv` would leave `color`'s own king attacked.
fn exposes_king(board: &Board, mv: Move, color: Color) -> BoardResult<bool> {
    let mut copy = *board;
    copy.move_piece(mv.from, mv.to);
    is_in_check(&copy, color)
}

/// All moves for `color` that do not leave its king in check, scanning the
/// board row by row.
pub fn legal_moves(board: &Board, color: Color) -> BoardResult<Vec<Move>> {
    let mut moves = Vec::new();
    for (from, piece) in board.pieces() {
        if piece.color != color {
            continue;
        }
        for to in pseudo_legal_destinations(board, from) {
            let mv = Move::new(from, to);
            if exposes_king(board, mv, color)? {
                trace!("{mv} would leave the {color:?} king in check");
            } else {
                moves.push(mv);
            }
        }
    }
    Ok(moves)
}

/// Legal moves of the single piece on `from`.
pub fn legal_moves_from(board: &Board, from: Square) -> BoardResult<Vec<Move>> {
    let color = match board.color_at(from) {
        Some(c) => c,
        None => return Ok(Vec::new()),
    };
    let mut moves = Vec::new();
    for to in pseudo_legal_destinations(board, from) {
        let mv = Move::new(from, to);
        if !exposes_king(board, mv, color)? {
            moves.push(mv);
        }
    }
    Ok(moves)
}

pub fn status(board: &Board, color: Color) -> BoardResult<GameStatus> {
    let in_check = is_in_check(board, color)?;
    let has_moves = !legal_moves(board, color)?.is_empty();
    Ok(match (in_check, has_moves) {
        (true, true) => GameStatus::Check,
        (true, false) => GameStatus::Checkmate,
        (false, true) => GameStatus::InProgress,
        (false, false) => GameStatus::Stalemate,
    })
}
