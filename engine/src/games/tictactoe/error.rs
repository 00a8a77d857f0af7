use thiserror::Error;

use super::types::CellIndex;

/// A move request that was refused; the board is untouched when this is returned.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMove {
    #[error("cell {index} is out of range (expected 0..=8)")]
    OutOfRange { index: CellIndex },

    #[error("cell {index} is already occupied")]
    Occupied { index: CellIndex },

    #[error("game already over")]
    GameOver,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("no legal moves available")]
pub struct NoLegalMoves;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardParseError {
    #[error("expected 9 cells, got {got} in '{context}'")]
    InvalidLength { got: usize, context: String },

    #[error("invalid character '{character}' at cell {position} in '{context}'")]
    InvalidCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid piece counts: X={x_count}, O={o_count} (must be equal or X ahead by 1)")]
    InvalidPieceCounts { x_count: usize, o_count: usize },

    #[error("position cannot arise from legal play: {reason}")]
    ImpossiblePosition { reason: &'static str },
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    #[error(transparent)]
    InvalidMove(#[from] InvalidMove),

    #[error(transparent)]
    NoLegalMoves(#[from] NoLegalMoves),

    #[error("it is not the bot's turn")]
    NotBotTurn,

    #[error("waiting for the bot to move")]
    BotToMove,
}
