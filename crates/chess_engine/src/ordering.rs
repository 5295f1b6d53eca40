use std::cmp::Reverse;

use chess_core::{piece::PieceType, Board, Move};

const CAPTURE_SCORE_BASE: i32 = 10000;

/// How candidate moves are arranged before the search visits them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MoveOrdering {
    /// Keep generation order (row-major by origin square).
    Generated,
    /// Captures first, most valuable victim / least valuable attacker.
    #[default]
    CapturesFirst,
}

/// Reorders `moves` in place. The sort is stable, so equal keys keep their
/// generation order and the result is deterministic.
pub fn order_moves(board: &Board, moves: &mut [Move], ordering: MoveOrdering) {
    match ordering {
        MoveOrdering::Generated => {}
        MoveOrdering::CapturesFirst => moves.sort_by_key(|&mv| Reverse(move_score(board, mv))),
    }
}

fn move_score(board: &Board, mv: Move) -> i32 {
    match (board.get_piece(mv.to), board.get_piece(mv.from)) {
        (Some(victim), Some(attacker)) => {
            CAPTURE_SCORE_BASE + mvv_lva_score(victim.piece_type, attacker.piece_type)
        }
        _ => 0,
    }
}

fn mvv_lva_score(victim: PieceType, attacker: PieceType) -> i32 {
    let victim_value = ordering_value(victim);
    let attacker_value = ordering_value(attacker);

    // Most Valuable Victim - Least Valuable Attacker
    victim_value * 100 - attacker_value * 10
}

// The king never gets captured in a legal line, so it ranks lowest.
fn ordering_value(piece_type: PieceType) -> i32 {
    match piece_type {
        PieceType::Pawn => 1,
        PieceType::Knight => 3,
        PieceType::Bishop => 3,
        PieceType::Rook => 5,
        PieceType::Queen => 9,
        PieceType::King => 0,
    }
}
