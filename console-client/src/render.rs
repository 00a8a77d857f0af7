use tictactoe_engine::games::tictactoe::{
    BOARD_SIDE, BOARD_SIZE, GameMode, GameResult, Mark, Player, TicTacToeSession, WinLine,
};

/// Empty cells show their 1-based number so players know what to type;
/// cells of the winning line are bracketed.
pub fn render_board(cells: &[Mark; BOARD_SIZE], winning_line: Option<WinLine>) -> String {
    let separator = format!("\n{}\n", vec!["---"; BOARD_SIDE].join("+"));
    cells
        .chunks(BOARD_SIDE)
        .enumerate()
        .map(|(row, row_cells)| {
            row_cells
                .iter()
                .enumerate()
                .map(|(column, &cell)| {
                    let index = row * BOARD_SIDE + column;
                    let symbol = match cell {
                        Mark::Empty => char::from_digit(index as u32 + 1, 10).unwrap_or('?'),
                        mark => mark.symbol(),
                    };
                    if winning_line.is_some_and(|line| line.contains(index)) {
                        format!("[{}]", symbol)
                    } else {
                        format!(" {} ", symbol)
                    }
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect::<Vec<_>>()
        .join(&separator)
}

pub fn status_line(session: &TicTacToeSession) -> String {
    match session.result() {
        GameResult::Win(player) => format!("{} wins!", player),
        GameResult::Draw => "It's a draw!".to_string(),
        GameResult::InProgress => {
            let player = session.state().current_player();
            match session.mode() {
                GameMode::VsBot if player == TicTacToeSession::BOT_PLAYER => {
                    format!("Bot is thinking ({})...", player)
                }
                GameMode::VsBot => format!("Your turn ({})", player),
                GameMode::TwoPlayers => format!("Player {} turn", player),
            }
        }
    }
}

pub fn scores_line(session: &TicTacToeSession) -> String {
    let scores = session.scores();
    format!("Score  X: {}  O: {}", scores.get(Player::X), scores.get(Player::O))
}
