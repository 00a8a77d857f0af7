use super::board::{BOARD_SIZE, Board, validate_position};
use super::error::{BoardParseError, InvalidMove};
use super::types::{CellIndex, GameResult, Mark, Player, TurnOutcome};
use super::win_detector::{WinLine, check_win, check_win_with_line, check_winner};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicTacToeGameState {
    board: Board,
    current_player: Player,
    last_move: Option<CellIndex>,
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToeGameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            last_move: None,
        }
    }

    /// Resumes from an arbitrary position. The side to move follows from the
    /// piece counts: X when they are equal, O when X is one ahead.
    pub fn from_board(board: Board) -> Result<Self, BoardParseError> {
        validate_position(&board)?;
        let x_count = board.count(Mark::X);
        let o_count = board.count(Mark::O);
        let current_player = if x_count == o_count {
            Player::X
        } else if x_count == o_count + 1 {
            Player::O
        } else {
            return Err(BoardParseError::InvalidPieceCounts { x_count, o_count });
        };

        Ok(Self {
            board,
            current_player,
            last_move: None,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn last_move(&self) -> Option<CellIndex> {
        self.last_move
    }

    pub fn apply_move(&mut self, index: CellIndex) -> Result<TurnOutcome, InvalidMove> {
        if self.result().is_over() {
            return Err(InvalidMove::GameOver);
        }

        if index >= BOARD_SIZE {
            return Err(InvalidMove::OutOfRange { index });
        }

        if !self.board.is_valid_move(index) {
            return Err(InvalidMove::Occupied { index });
        }

        let mark = self.current_player.mark();
        self.board.set(index, mark);
        self.last_move = Some(index);

        let result = self.result();
        if result == GameResult::InProgress {
            self.current_player = self.current_player.opponent();
        }

        Ok(TurnOutcome {
            cell: index,
            mark,
            result,
            current_player: self.current_player,
        })
    }

    pub fn check_winner(&self, player: Player) -> bool {
        check_winner(&self.board, player)
    }

    pub fn is_full(&self) -> bool {
        self.board.is_full()
    }

    pub fn result(&self) -> GameResult {
        if let Some(winner) = check_win(&self.board) {
            return GameResult::Win(winner);
        }
        if self.is_full() {
            GameResult::Draw
        } else {
            GameResult::InProgress
        }
    }

    pub fn winning_line(&self) -> Option<WinLine> {
        check_win_with_line(&self.board).map(|(_, line)| line)
    }

    pub fn reset(&mut self) {
        self.board.clear();
        self.current_player = Player::X;
        self.last_move = None;
    }
}
