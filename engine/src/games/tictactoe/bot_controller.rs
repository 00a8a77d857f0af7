use crate::games::SessionRng;
use super::board::Board;
use super::error::NoLegalMoves;
use super::game_state::TicTacToeGameState;
use super::types::{CellIndex, Difficulty, Mark, Player};
use super::win_detector::check_winner;

const WIN_SCORE: i32 = 10;

pub struct BotInput {
    pub board: Board,
    pub bot_player: Player,
}

impl BotInput {
    pub fn from_game_state(state: &TicTacToeGameState) -> Self {
        Self {
            board: *state.board(),
            bot_player: state.current_player(),
        }
    }
}

/// Picks the bot's next cell. Easy is uniform over empty cells, Hard is a full
/// alpha-beta search, Medium flips a coin between the two on every call.
pub fn calculate_move(
    difficulty: Difficulty,
    input: BotInput,
    rng: &mut SessionRng,
) -> Result<CellIndex, NoLegalMoves> {
    match difficulty {
        Difficulty::Easy => calculate_random_move(&input, rng),
        Difficulty::Medium => {
            if rng.random_bool() {
                calculate_random_move(&input, rng)
            } else {
                calculate_minimax_move(&input)
            }
        }
        Difficulty::Hard => calculate_minimax_move(&input),
    }
}

fn calculate_random_move(input: &BotInput, rng: &mut SessionRng) -> Result<CellIndex, NoLegalMoves> {
    let available_moves = input.board.available_moves();
    rng.choose(&available_moves).copied().ok_or(NoLegalMoves)
}

pub fn calculate_minimax_move(input: &BotInput) -> Result<CellIndex, NoLegalMoves> {
    let mut board = input.board;
    let best = best_move(&mut board, input.bot_player);
    debug_assert_eq!(board, input.board, "search left the board modified");
    best.map(|(index, _)| index).ok_or(NoLegalMoves)
}

/// Scores every empty cell for `bot` and keeps the first strictly best one.
/// Each candidate is placed, searched with a fresh window and taken back, so
/// `board` holds its original contents on return.
fn best_move(board: &mut Board, bot: Player) -> Option<(CellIndex, i32)> {
    let mut best: Option<(CellIndex, i32)> = None;

    for index in board.available_moves() {
        board.set(index, bot.mark());
        let score = minimax(board, 0, false, bot, i32::MIN, i32::MAX);
        board.set(index, Mark::Empty);

        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((index, score));
        }
    }

    best
}

fn minimax(
    board: &mut Board,
    depth: i32,
    is_maximizing: bool,
    bot: Player,
    mut alpha: i32,
    mut beta: i32,
) -> i32 {
    if check_winner(board, bot) {
        return WIN_SCORE - depth;
    }
    if check_winner(board, bot.opponent()) {
        return depth - WIN_SCORE;
    }
    if board.is_full() {
        return 0;
    }

    if is_maximizing {
        let mut max_eval = i32::MIN;
        for index in board.available_moves() {
            board.set(index, bot.mark());
            let eval = minimax(board, depth + 1, false, bot, alpha, beta);
            board.set(index, Mark::Empty);

            max_eval = max_eval.max(eval);
            alpha = alpha.max(eval);
            if beta <= alpha {
                break;
            }
        }
        max_eval
    } else {
        let opponent_mark = bot.opponent().mark();
        let mut min_eval = i32::MAX;
        for index in board.available_moves() {
            board.set(index, opponent_mark);
            let eval = minimax(board, depth + 1, true, bot, alpha, beta);
            board.set(index, Mark::Empty);

            min_eval = min_eval.min(eval);
            beta = beta.min(eval);
            if beta <= alpha {
                break;
            }
        }
        min_eval
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::GameResult;

    fn input(s: &str) -> BotInput {
        let state = TicTacToeGameState::from_board(s.parse().unwrap()).unwrap();
        BotInput::from_game_state(&state)
    }

    #[test]
    fn test_full_board_has_no_legal_moves() {
        let mut rng = SessionRng::new(42);
        for difficulty in Difficulty::ALL {
            let full = BotInput {
                board: "XOXXOOOXX".parse().unwrap(),
                bot_player: Player::O,
            };
            assert_eq!(calculate_move(difficulty, full, &mut rng), Err(NoLegalMoves));
        }
    }

    #[test]
    fn test_hard_blocks_immediate_threat() {
        assert_eq!(calculate_minimax_move(&input("XX.O.....")), Ok(2));
        assert_eq!(calculate_minimax_move(&input("X..X.O...")), Ok(6));
    }

    #[test]
    fn test_hard_prefers_own_win_over_block() {
        let board: Board = "XX.OO....".parse().unwrap();
        let as_o = BotInput { board, bot_player: Player::O };
        assert_eq!(calculate_minimax_move(&as_o), Ok(5));

        let mut rng = SessionRng::new(4);
        let as_o = BotInput { board, bot_player: Player::O };
        assert_eq!(calculate_move(Difficulty::Hard, as_o, &mut rng), Ok(5));

        let as_x = BotInput { board, bot_player: Player::X };
        assert_eq!(calculate_minimax_move(&as_x), Ok(2));
    }

    #[test]
    fn test_hard_answers_center_with_corner() {
        let mv = calculate_minimax_move(&input("....X....")).unwrap();
        assert!([0, 2, 6, 8].contains(&mv), "edge reply {}", mv);
    }

    #[test]
    fn test_hard_ties_break_to_lowest_index() {
        // every opening is a draw under perfect play
        let empty = BotInput {
            board: Board::new(),
            bot_player: Player::X,
        };
        assert_eq!(calculate_minimax_move(&empty), Ok(0));
    }

    #[test]
    fn test_faster_win_scores_higher() {
        let mut board: Board = "XX.OO....".parse().unwrap();
        let (index, score) = best_move(&mut board, Player::O).unwrap();
        assert_eq!((index, score), (5, WIN_SCORE));
    }

    #[test]
    fn test_search_restores_board() {
        for position in ["", "X", "XO", "....X", "XX.O.", "XX.OO"] {
            let padded = format!("{:.<9}", position);
            let original: Board = padded.parse().unwrap();
            let mut board = original;
            let bot = TicTacToeGameState::from_board(original).unwrap().current_player();
            best_move(&mut board, bot);
            assert_eq!(board, original, "position {}", padded);
        }
    }

    #[test]
    fn test_calculate_move_leaves_game_state_untouched() {
        let mut rng = SessionRng::new(9);
        let state = TicTacToeGameState::from_board("XX.O.....".parse().unwrap()).unwrap();
        for difficulty in Difficulty::ALL {
            let before = state.clone();
            let mv = calculate_move(difficulty, BotInput::from_game_state(&state), &mut rng).unwrap();
            assert!(state.board().is_valid_move(mv));
            assert_eq!(state, before);
        }
    }

    #[test]
    fn test_easy_is_reproducible_and_legal() {
        let board: Board = "X...O...X".parse().unwrap();
        let mut a = SessionRng::new(123);
        let mut b = SessionRng::new(123);
        for _ in 0..50 {
            let first = calculate_move(Difficulty::Easy, BotInput { board, bot_player: Player::O }, &mut a).unwrap();
            let second = calculate_move(Difficulty::Easy, BotInput { board, bot_player: Player::O }, &mut b).unwrap();
            assert_eq!(first, second);
            assert!(board.is_valid_move(first));
        }
    }

    #[test]
    fn test_easy_reaches_every_empty_cell() {
        let board: Board = "X...O...X".parse().unwrap();
        let mut rng = SessionRng::new(5);
        let mut seen = [false; 9];
        for _ in 0..500 {
            let mv = calculate_move(Difficulty::Easy, BotInput { board, bot_player: Player::O }, &mut rng).unwrap();
            seen[mv] = true;
        }
        for index in board.available_moves() {
            assert!(seen[index], "cell {} never chosen", index);
        }
        assert!(!seen[0] && !seen[4] && !seen[8]);
    }

    #[test]
    fn test_medium_mixes_random_and_optimal() {
        let board: Board = "XX.O.....".parse().unwrap();
        let mut rng = SessionRng::new(77);
        let mut blocks = 0;
        let mut others = 0;
        for _ in 0..400 {
            match calculate_move(Difficulty::Medium, BotInput { board, bot_player: Player::O }, &mut rng).unwrap() {
                2 => blocks += 1,
                _ => others += 1,
            }
        }
        // random picks land on 2 one time in six, so blocks dominate
        assert!(blocks > others, "blocks={} others={}", blocks, others);
        assert!(others > 0);
    }

    #[test]
    fn test_hard_vs_hard_is_a_draw() {
        let mut state = TicTacToeGameState::new();
        let mut rng = SessionRng::new(0);
        while !state.result().is_over() {
            let mv = calculate_move(Difficulty::Hard, BotInput::from_game_state(&state), &mut rng).unwrap();
            state.apply_move(mv).unwrap();
        }
        assert_eq!(state.result(), GameResult::Draw);
    }

    fn assert_bot_never_loses(state: &TicTacToeGameState, bot: Player) {
        match state.result() {
            GameResult::Win(winner) => {
                assert_eq!(winner, bot, "bot lost:\n{}", state.board());
                return;
            }
            GameResult::Draw => return,
            GameResult::InProgress => {}
        }

        if state.current_player() == bot {
            let mv = calculate_minimax_move(&BotInput::from_game_state(state)).unwrap();
            let mut next = state.clone();
            next.apply_move(mv).unwrap();
            assert_bot_never_loses(&next, bot);
        } else {
            for index in state.board().available_moves() {
                let mut next = state.clone();
                next.apply_move(index).unwrap();
                assert_bot_never_loses(&next, bot);
            }
        }
    }

    #[test]
    fn test_hard_never_loses_as_second_player() {
        assert_bot_never_loses(&TicTacToeGameState::new(), Player::O);
    }

    #[test]
    fn test_hard_never_loses_as_first_player() {
        assert_bot_never_loses(&TicTacToeGameState::new(), Player::X);
    }
}
