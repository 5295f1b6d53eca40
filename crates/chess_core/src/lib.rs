// Core chess game logic modules
pub mod board;
pub mod error;
pub mod movegen;
pub mod moves;
pub mod piece;
pub mod square;

// Re-export main types for convenience
pub use board::Board;
pub use error::{BoardError, BoardResult};
pub use movegen::{is_in_check, legal_moves, pseudo_legal_destinations, GameStatus};
pub use moves::Move;
pub use piece::{Color, Piece, PieceType};
pub use square::Square;
