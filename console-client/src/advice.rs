use tictactoe_engine::games::SessionRng;
use tictactoe_engine::games::tictactoe::{GameMode, GameResult, Player, TicTacToeSession};

const WIN_QUOTES: &[&str] = &[
    "Victory! Frame this board and hang it on the wall.",
    "Three in a row. Textbook.",
    "You outplayed the machine. Tell nobody, it's shy.",
    "Smooth as butter on warm toast.",
    "Winning looks good on you.",
];

const LOSE_QUOTES: &[&str] = &[
    "Lost this one. Maybe let the cat take the next turn?",
    "The bot wins again. Dun dun dunnn.",
    "Even grandmasters lose at tic-tac-toe. Occasionally. Probably.",
    "Better luck on the next tap, champ.",
    "Plot twist: the bot has been studying you.",
];

const DRAW_QUOTES: &[&str] = &[
    "A draw. Great minds think alike, maybe too alike.",
    "Nobody wins, but everybody gets snacks.",
    "Another draw? Are you two secretly twins?",
    "The board is as confused as you are.",
    "Stalemate. Try harder, genius brains.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdviceKind {
    Win,
    Lose,
    Draw,
}

impl AdviceKind {
    /// Against the bot the human is X, so an O win is a loss. Between two
    /// players the quotes are told from X's side.
    pub fn for_result(mode: GameMode, result: GameResult) -> Option<Self> {
        match (mode, result) {
            (_, GameResult::InProgress) => None,
            (_, GameResult::Draw) => Some(AdviceKind::Draw),
            (GameMode::VsBot, GameResult::Win(player)) if player == TicTacToeSession::BOT_PLAYER => {
                Some(AdviceKind::Lose)
            }
            (GameMode::VsBot, GameResult::Win(_)) => Some(AdviceKind::Win),
            (GameMode::TwoPlayers, GameResult::Win(Player::X)) => Some(AdviceKind::Win),
            (GameMode::TwoPlayers, GameResult::Win(Player::O)) => Some(AdviceKind::Lose),
        }
    }

    fn quotes(self) -> &'static [&'static str] {
        match self {
            AdviceKind::Win => WIN_QUOTES,
            AdviceKind::Lose => LOSE_QUOTES,
            AdviceKind::Draw => DRAW_QUOTES,
        }
    }
}

pub fn pick_advice(kind: AdviceKind, rng: &mut SessionRng) -> &'static str {
    rng.choose(kind.quotes()).copied().unwrap_or_default()
}
