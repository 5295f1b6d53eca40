use thiserror::Error;

use crate::piece::Color;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("no {0:?} king on the board")]
    MissingKing(Color),

    #[error("expected 8 rows, found {0}")]
    RowCount(usize),

    #[error("row {row} describes {len} squares, expected 8")]
    RowLength { row: usize, len: usize },

    #[error("unknown piece token {token:?} in row {row}")]
    UnknownToken { row: usize, token: char },
}

pub type BoardResult<T> = Result<T, BoardError>;
