mod board;
mod bot_controller;
mod error;
mod game_state;
mod session;
mod types;
mod win_detector;

pub use board::{BOARD_SIDE, BOARD_SIZE, Board};
pub use bot_controller::{BotInput, calculate_minimax_move, calculate_move};
pub use error::{BoardParseError, InvalidMove, NoLegalMoves, SessionError};
pub use game_state::TicTacToeGameState;
pub use session::{GameMode, Scoreboard, TicTacToeSession};
pub use types::{CellIndex, Difficulty, GameResult, Mark, Player, TurnOutcome};
pub use win_detector::{WIN_LINES, WinLine, check_win, check_win_with_line, check_winner};
