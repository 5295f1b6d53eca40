pub mod ai;
pub mod error;
pub mod evaluation;
pub mod ordering;
pub mod search;
pub mod worker;

pub use ai::ChessAI;
pub use error::{EngineResult, SearchError};
pub use evaluation::{evaluate_position, evaluate_with_tables, PieceSquareTables};
pub use ordering::{order_moves, MoveOrdering};
pub use search::{minimax, select_move, select_move_with, ScoredMove, SearchConfig, SearchResult, Searcher};
pub use worker::{SearchReply, SearchRequest, SearchWorker};
