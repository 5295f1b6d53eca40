//! Minimax search with alpha-beta pruning.
//!
//! White is always the maximizing side and Black the minimizing side, matching
//! the sign of [`evaluate_with_tables`]. Every child node works on its own copy
//! of the parent board, and nothing survives from one call to the next.

use chess_core::{movegen, piece::Color, Board, GameStatus, Move, Piece, PieceType};
use log::{debug, trace, warn};

use crate::error::{EngineResult, SearchError};
use crate::evaluation::{evaluate_with_tables, PieceSquareTables};
use crate::ordering::{order_moves, MoveOrdering};

/// Score magnitude for a side that has been checkmated. Remaining depth is
/// added on top so that quicker mates score further from zero.
pub const MATE_SCORE: i32 = 100_000;

/// The side whose best score is the largest one.
pub const MAXIMIZING_COLOR: Color = Color::White;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchConfig {
    pub ordering: MoveOrdering,
    pub tables: PieceSquareTables,
}

/// A move annotated with the score the search assigned to it. `best_move`
/// is `None` at depth 0 and on positions without legal moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredMove {
    pub best_move: Option<Move>,
    pub score: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub score: i32,
    /// State of the root position for the side to move.
    pub status: GameStatus,
    pub nodes_searched: u64,
}

pub fn side_to_move(maximizing: bool) -> Color {
    if maximizing {
        MAXIMIZING_COLOR
    } else {
        MAXIMIZING_COLOR.opposite()
    }
}

/// Picks a move for the side given by `maximizing` using the default
/// configuration: captures-first ordering and material-only evaluation.
pub fn select_move(board: &Board, depth: i32, maximizing: bool) -> EngineResult<SearchResult> {
    select_move_with(board, depth, maximizing, &SearchConfig::default())
}

pub fn select_move_with(
    board: &Board,
    depth: i32,
    maximizing: bool,
    config: &SearchConfig,
) -> EngineResult<SearchResult> {
    let depth = u32::try_from(depth).map_err(|_| SearchError::InvalidDepth(depth))?;
    let side = side_to_move(maximizing);
    validate_position(board, side)?;

    let status = movegen::status(board, side)?;
    if status.is_terminal() {
        warn!("{side:?} to move has no legal moves ({status:?})");
    }
    debug!("searching {side:?} to move at depth {depth}");

    let mut searcher = Searcher::new(config);
    let scored = searcher.alpha_beta(board, depth, maximizing, i32::MIN, i32::MAX)?;

    debug!(
        "search finished: best move {}, score {}, {} nodes",
        scored.best_move.map_or_else(|| "none".to_string(), |mv| mv.to_string()),
        scored.score,
        searcher.nodes_searched()
    );

    Ok(SearchResult {
        best_move: scored.best_move,
        score: scored.score,
        status,
        nodes_searched: searcher.nodes_searched(),
    })
}

/// Plain minimax without pruning, sharing ordering, evaluation and terminal
/// scoring with the pruned search.
pub fn minimax(board: &Board, depth: u32, maximizing: bool, config: &SearchConfig) -> EngineResult<ScoredMove> {
    Searcher::new(config).minimax(board, depth, maximizing)
}

/// Rejects boards the check detector cannot work with: a side without
/// exactly one king, or a side not to move whose king is already attacked.
fn validate_position(board: &Board, side: Color) -> EngineResult<()> {
    for color in [Color::White, Color::Black] {
        let count = board.count(Piece::new(PieceType::King, color));
        if count != 1 {
            return Err(SearchError::KingCount { color, count });
        }
    }
    let waiting = side.opposite();
    if movegen::is_in_check(board, waiting)? {
        return Err(SearchError::OpponentInCheck(waiting));
    }
    Ok(())
}

/// One search invocation. Holds the configuration and a node counter.
pub struct Searcher<'a> {
    config: &'a SearchConfig,
    nodes_searched: u64,
}

impl<'a> Searcher<'a> {
    pub fn new(config: &'a SearchConfig) -> Self {
        Self {
            config,
            nodes_searched: 0,
        }
    }

    pub fn nodes_searched(&self) -> u64 {
        self.nodes_searched
    }

    pub fn alpha_beta(
        &mut self,
        board: &Board,
        depth: u32,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> EngineResult<ScoredMove> {
        self.nodes_searched += 1;
        if depth == 0 {
            return Ok(self.leaf(board));
        }

        let moves = self.ordered_moves(board, maximizing)?;
        if moves.is_empty() {
            return self.terminal(board, depth, maximizing);
        }

        let mut best_move = None;
        if maximizing {
            let mut best_score = i32::MIN;
            for mv in moves {
                let child = board.with_move(mv);
                let score = self.alpha_beta(&child, depth - 1, false, alpha, beta)?.score;
                if score > best_score {
                    best_score = score;
                    best_move = Some(mv);
                }
                alpha = alpha.max(score);
                if beta <= alpha {
                    trace!("beta cutoff after {mv} at depth {depth}");
                    break;
                }
            }
            Ok(ScoredMove {
                best_move,
                score: best_score,
            })
        } else {
            let mut best_score = i32::MAX;
            for mv in moves {
                let child = board.with_move(mv);
                let score = self.alpha_beta(&child, depth - 1, true, alpha, beta)?.score;
                if score < best_score {
                    best_score = score;
                    best_move = Some(mv);
                }
                beta = beta.min(score);
                if beta <= alpha {
                    trace!("alpha cutoff after {mv} at depth {depth}");
                    break;
                }
            }
            Ok(ScoredMove {
                best_move,
                score: best_score,
            })
        }
    }

    pub fn minimax(&mut self, board: &Board, depth: u32, maximizing: bool) -> EngineResult<ScoredMove> {
        self.nodes_searched += 1;
        if depth == 0 {
            return Ok(self.leaf(board));
        }

        let moves = self.ordered_moves(board, maximizing)?;
        if moves.is_empty() {
            return self.terminal(board, depth, maximizing);
        }

        let mut best_move = None;
        let mut best_score = if maximizing { i32::MIN } else { i32::MAX };
        for mv in moves {
            let child = board.with_move(mv);
            let score = self.minimax(&child, depth - 1, !maximizing)?.score;
            let improves = if maximizing {
                score > best_score
            } else {
                score < best_score
            };
            if improves {
                best_score = score;
                best_move = Some(mv);
            }
        }
        Ok(ScoredMove {
            best_move,
            score: best_score,
        })
    }

    fn leaf(&self, board: &Board) -> ScoredMove {
        ScoredMove {
            best_move: None,
            score: evaluate_with_tables(board, &self.config.tables),
        }
    }

    fn ordered_moves(&self, board: &Board, maximizing: bool) -> EngineResult<Vec<Move>> {
        let mut moves = movegen::legal_moves(board, side_to_move(maximizing))?;
        order_moves(board, &mut moves, self.config.ordering);
        Ok(moves)
    }

    /// Score of a node whose side to move has no legal moves.
    fn terminal(&self, board: &Board, depth: u32, maximizing: bool) -> EngineResult<ScoredMove> {
        let side = side_to_move(maximizing);
        let score = if movegen::is_in_check(board, side)? {
            let mate = MATE_SCORE.saturating_add(depth.min(i32::MAX as u32) as i32);
            if maximizing {
                -mate
            } else {
                mate
            }
        } else {
            0
        };
        Ok(ScoredMove {
            best_move: None,
            score,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::Square;

    fn board(fen: &str) -> Board {
        Board::from_fen(fen).unwrap()
    }

    #[test]
    fn depth_zero_returns_static_evaluation() {
        let board = board("4k3/8/8/3n4/8/8/8/R3K3");
        let result = select_move(&board, 0, true).unwrap();
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, 2);
        assert_eq!(result.nodes_searched, 1);
    }

    #[test]
    fn negative_depth_is_rejected() {
        assert_eq!(select_move(&Board::new(), -1, true), Err(SearchError::InvalidDepth(-1)));
    }

    #[test]
    fn missing_or_extra_kings_are_rejected() {
        let no_black_king = board("8/8/8/8/8/8/8/4K3");
        assert_eq!(
            select_move(&no_black_king, 1, true),
            Err(SearchError::KingCount {
                color: Color::Black,
                count: 0
            })
        );
        let two_white_kings = board("4k3/8/8/8/8/8/8/K3K3");
        assert_eq!(
            select_move(&two_white_kings, 1, false),
            Err(SearchError::KingCount {
                color: Color::White,
                count: 2
            })
        );
    }

    #[test]
    fn opponent_already_in_check_is_rejected() {
        // Black is in check from the rook but it is White's turn.
        let board = board("k7/8/8/8/8/8/8/R6K");
        assert_eq!(select_move(&board, 1, true), Err(SearchError::OpponentInCheck(Color::Black)));
    }

    #[test]
    fn takes_a_hanging_queen() {
        let board = board("4k3/8/8/3q4/8/8/3R4/4K3");
        let result = select_move(&board, 1, true).unwrap();
        let expected = Move::new(Square::from_algebraic("d2").unwrap(), Square::from_algebraic("d5").unwrap());
        assert_eq!(result.best_move, Some(expected));
        assert_eq!(result.score, 5);
    }

    #[test]
    fn finds_mate_in_one_for_black() {
        // Black rook delivers a back-rank mate on a1.
        let board = board("r5k1/8/8/8/8/8/5PPP/6K1");
        // One ply is not enough: every quiet move scores the same material.
        let result = select_move(&board, 2, false).unwrap();
        let expected = Move::from_coordinate_notation("a8a1").unwrap();
        assert_eq!(result.best_move, Some(expected));
        assert_eq!(result.score, -(MATE_SCORE + 1));
    }

    #[test]
    fn checkmated_root_reports_no_move() {
        let board = board("R5k1/5ppp/8/8/8/8/8/6K1");
        let result = select_move(&board, 3, false).unwrap();
        assert_eq!(result.best_move, None);
        assert_eq!(result.status, GameStatus::Checkmate);
        assert_eq!(result.score, MATE_SCORE + 3);
    }

    #[test]
    fn stalemated_root_scores_zero() {
        let board = board("k7/2Q5/1K6/8/8/8/8/8");
        let result = select_move(&board, 2, false).unwrap();
        assert_eq!(result.best_move, None);
        assert_eq!(result.status, GameStatus::Stalemate);
        assert_eq!(result.score, 0);
    }

    #[test]
    fn pruning_visits_fewer_nodes_than_minimax() {
        let board = Board::new();
        let config = SearchConfig::default();
        let mut pruned = Searcher::new(&config);
        let pruned_result = pruned.alpha_beta(&board, 3, true, i32::MIN, i32::MAX).unwrap();
        let mut full = Searcher::new(&config);
        let full_result = full.minimax(&board, 3, true).unwrap();

        assert_eq!(pruned_result.score, full_result.score);
        assert!(pruned.nodes_searched() < full.nodes_searched());
    }

    #[test]
    fn search_leaves_the_input_board_untouched() {
        let board = Board::new();
        let copy = board;
        select_move(&board, 2, true).unwrap();
        assert_eq!(board, copy);
    }
}
