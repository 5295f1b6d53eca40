use chess_core::{BoardError, Color};
use thiserror::Error;

/// Errors that reject a search request before or during the tree walk
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Depth must be a non-negative number of plies
    #[error("invalid search depth {0}: depth must not be negative")]
    InvalidDepth(i32),

    /// Check detection needs exactly one king per side
    #[error("invalid position: expected one {color:?} king, found {count}")]
    KingCount { color: Color, count: usize },

    /// The side not to move is already in check, so its king could be taken
    #[error("invalid position: the {0:?} king is in check while it is not {0:?}'s turn")]
    OpponentInCheck(Color),

    /// The background search thread could not be started
    #[error("failed to start search worker: {0}")]
    WorkerStart(String),

    #[error(transparent)]
    Board(#[from] BoardError),
}

pub type EngineResult<T> = Result<T, SearchError>;
