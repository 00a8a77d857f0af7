use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::games::SessionRng;
use crate::log;
use super::bot_controller::{BotInput, calculate_move};
use super::error::SessionError;
use super::game_state::TicTacToeGameState;
use super::types::{CellIndex, Difficulty, GameResult, Player, TurnOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameMode {
    #[default]
    #[serde(rename = "ai")]
    VsBot,
    #[serde(rename = "pvp")]
    TwoPlayers,
}

impl GameMode {
    pub fn as_str(self) -> &'static str {
        match self {
            GameMode::VsBot => "ai",
            GameMode::TwoPlayers => "pvp",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ai" | "bot" => Ok(GameMode::VsBot),
            "pvp" | "friend" => Ok(GameMode::TwoPlayers),
            other => Err(format!("Unknown mode '{}', expected ai or pvp", other)),
        }
    }
}

/// Games won per side; draws are not counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Scoreboard {
    pub x: u32,
    pub o: u32,
}

impl Scoreboard {
    pub fn get(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }

    pub fn record_win(&mut self, player: Player) {
        match player {
            Player::X => self.x = self.x.saturating_add(1),
            Player::O => self.o = self.o.saturating_add(1),
        }
    }
}

/// One table: the current game plus everything that outlives it (mode,
/// difficulty, score tally). In `VsBot` mode the bot always plays O.
#[derive(Debug, Clone)]
pub struct TicTacToeSession {
    state: TicTacToeGameState,
    mode: GameMode,
    difficulty: Difficulty,
    scores: Scoreboard,
}

impl TicTacToeSession {
    pub const BOT_PLAYER: Player = Player::O;

    pub fn new(mode: GameMode, difficulty: Difficulty, scores: Scoreboard) -> Self {
        Self {
            state: TicTacToeGameState::new(),
            mode,
            difficulty,
            scores,
        }
    }

    pub fn state(&self) -> &TicTacToeGameState {
        &self.state
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn scores(&self) -> Scoreboard {
        self.scores
    }

    pub fn result(&self) -> GameResult {
        self.state.result()
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        if self.difficulty != difficulty {
            log!("Difficulty changed: {} -> {}", self.difficulty, difficulty);
        }
        self.difficulty = difficulty;
    }

    /// Switching mode always starts a new game.
    pub fn set_mode(&mut self, mode: GameMode) {
        log!("Mode set to {}, starting a new game", mode);
        self.mode = mode;
        self.state.reset();
    }

    pub fn reset(&mut self) {
        self.state.reset();
    }

    pub fn is_bot_turn(&self) -> bool {
        self.mode == GameMode::VsBot
            && !self.state.result().is_over()
            && self.state.current_player() == Self::BOT_PLAYER
    }

    pub fn play_move(&mut self, index: CellIndex) -> Result<TurnOutcome, SessionError> {
        if self.is_bot_turn() {
            return Err(SessionError::BotToMove);
        }
        let outcome = self.state.apply_move(index)?;
        self.record_outcome(&outcome);
        Ok(outcome)
    }

    pub fn play_bot_move(&mut self, rng: &mut SessionRng) -> Result<TurnOutcome, SessionError> {
        if !self.is_bot_turn() {
            return Err(SessionError::NotBotTurn);
        }
        let index = calculate_move(self.difficulty, BotInput::from_game_state(&self.state), rng)?;
        let outcome = self.state.apply_move(index)?;
        self.record_outcome(&outcome);
        Ok(outcome)
    }

    fn record_outcome(&mut self, outcome: &TurnOutcome) {
        match outcome.result {
            GameResult::Win(player) => {
                self.scores.record_win(player);
                log!("{} wins (score X {} : O {})", player, self.scores.x, self.scores.o);
            }
            GameResult::Draw => log!("Game drawn"),
            GameResult::InProgress => {}
        }
    }
}
