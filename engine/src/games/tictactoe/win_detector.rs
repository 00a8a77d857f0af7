use super::board::Board;
use super::types::{CellIndex, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinLine(pub [CellIndex; 3]);

impl WinLine {
    pub fn cells(&self) -> &[CellIndex; 3] {
        &self.0
    }

    pub fn contains(&self, index: CellIndex) -> bool {
        self.0.contains(&index)
    }

    fn is_held_by(&self, board: &Board, player: Player) -> bool {
        let mark = player.mark();
        self.0.iter().all(|&index| board.get(index) == Some(mark))
    }
}

pub const WIN_LINES: [WinLine; 8] = [
    WinLine([0, 1, 2]),
    WinLine([3, 4, 5]),
    WinLine([6, 7, 8]),
    WinLine([0, 3, 6]),
    WinLine([1, 4, 7]),
    WinLine([2, 5, 8]),
    WinLine([0, 4, 8]),
    WinLine([2, 4, 6]),
];

pub fn check_winner(board: &Board, player: Player) -> bool {
    WIN_LINES.iter().any(|line| line.is_held_by(board, player))
}

/// Both sides completing a line cannot come out of alternating play.
pub fn check_win(board: &Board) -> Option<Player> {
    let x_won = check_winner(board, Player::X);
    let o_won = check_winner(board, Player::O);
    debug_assert!(!(x_won && o_won), "both players hold a winning line:\n{}", board);

    if x_won {
        Some(Player::X)
    } else if o_won {
        Some(Player::O)
    } else {
        None
    }
}

pub fn check_win_with_line(board: &Board) -> Option<(Player, WinLine)> {
    [Player::X, Player::O].into_iter().find_map(|player| {
        WIN_LINES
            .iter()
            .find(|line| line.is_held_by(board, player))
            .map(|&line| (player, line))
    })
}
