use chess_core::{Board, Color, Move};
use log::{info, warn};

use crate::error::EngineResult;
use crate::evaluation::PieceSquareTables;
use crate::ordering::MoveOrdering;
use crate::search::{select_move_with, SearchConfig, SearchResult, MAXIMIZING_COLOR};

pub const MIN_DEPTH: u8 = 1;
pub const MAX_DEPTH: u8 = 6;
/// Upper end of the skill scale offered to players (0 is weakest).
pub const MAX_SKILL: u8 = 20;

/// A fixed-depth computer player.
#[derive(Debug, Clone)]
pub struct ChessAI {
    max_depth: u8,
    config: SearchConfig,
}

impl ChessAI {
    pub fn new(depth: u8) -> Self {
        ChessAI {
            max_depth: depth.clamp(MIN_DEPTH, MAX_DEPTH),
            config: SearchConfig::default(),
        }
    }

    /// Maps a 0-20 skill level linearly onto the supported depth range.
    pub fn from_skill(skill: u8) -> Self {
        let skill = skill.min(MAX_SKILL) as u32;
        let span = (MAX_DEPTH - MIN_DEPTH) as u32;
        let depth = MIN_DEPTH as u32 + (skill * span + MAX_SKILL as u32 / 2) / MAX_SKILL as u32;
        Self::new(depth as u8)
    }

    pub fn with_ordering(mut self, ordering: MoveOrdering) -> Self {
        self.config.ordering = ordering;
        self
    }

    pub fn with_tables(mut self, tables: PieceSquareTables) -> Self {
        self.config.tables = tables;
        self
    }

    pub fn depth(&self) -> u8 {
        self.max_depth
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn search(&self, board: &Board, color: Color) -> EngineResult<SearchResult> {
        select_move_with(board, self.max_depth as i32, color == MAXIMIZING_COLOR, &self.config)
    }

    /// The move to play for `color`, or `None` when there is none or the
    /// position was rejected.
    pub fn get_move(&self, board: &Board, color: Color) -> Option<Move> {
        match self.search(board, color) {
            Ok(result) => {
                if let Some(mv) = result.best_move {
                    info!("{color:?} plays {mv} (score {}, {} nodes)", result.score, result.nodes_searched);
                }
                result.best_move
            }
            Err(err) => {
                warn!("search rejected the position: {err}");
                None
            }
        }
    }
}

impl Default for ChessAI {
    fn default() -> Self {
        ChessAI::new(MIN_DEPTH + 3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_is_clamped() {
        assert_eq!(ChessAI::new(0).depth(), MIN_DEPTH);
        assert_eq!(ChessAI::new(40).depth(), MAX_DEPTH);
        assert_eq!(ChessAI::default().depth(), 4);
    }

    #[test]
    fn skill_spans_the_depth_range() {
        assert_eq!(ChessAI::from_skill(0).depth(), MIN_DEPTH);
        assert_eq!(ChessAI::from_skill(MAX_SKILL).depth(), MAX_DEPTH);
        assert_eq!(ChessAI::from_skill(255).depth(), MAX_DEPTH);
        assert_eq!(ChessAI::from_skill(10).depth(), 4);

        let mut previous = 0;
        for skill in 0..=MAX_SKILL {
            let depth = ChessAI::from_skill(skill).depth();
            assert!(depth >= previous);
            previous = depth;
        }
    }

    #[test]
    fn no_move_on_invalid_or_finished_positions() {
        let ai = ChessAI::new(2);
        let kingless = Board::from_fen("8/8/8/8/8/8/8/4K3").unwrap();
        assert_eq!(ai.get_move(&kingless, Color::White), None);

        let mated = Board::from_fen("R5k1/5ppp/8/8/8/8/8/6K1").unwrap();
        assert_eq!(ai.get_move(&mated, Color::Black), None);
    }

    #[test]
    fn plays_a_legal_opening_move() {
        let ai = ChessAI::new(2);
        let board = Board::new();
        let mv = ai.get_move(&board, Color::Black).unwrap();
        let legal = chess_core::legal_moves(&board, Color::Black).unwrap();
        assert!(legal.contains(&mv));
    }
}
