use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use tictactoe_engine::games::SessionRng;
use tictactoe_engine::games::tictactoe::{GameResult, InvalidMove, SessionError, TicTacToeSession};
use tictactoe_engine::log;

use crate::advice::{AdviceKind, pick_advice};
use crate::command::{Command, HELP};
use crate::config::{ConfigContentProvider, ConfigManager, ConsoleConfig};
use crate::render::{render_board, scores_line, status_line};

pub struct ConsoleRunner<P: ConfigContentProvider> {
    session: TicTacToeSession,
    config_manager: ConfigManager<P, ConsoleConfig>,
    config: ConsoleConfig,
    rng: SessionRng,
}

impl<P: ConfigContentProvider> ConsoleRunner<P> {
    pub fn new(config_manager: ConfigManager<P, ConsoleConfig>, config: ConsoleConfig, rng: SessionRng) -> Self {
        let session = TicTacToeSession::new(config.mode, config.difficulty, config.scores);
        Self {
            session,
            config_manager,
            config,
            rng,
        }
    }

    #[cfg(test)]
    pub fn session(&self) -> &TicTacToeSession {
        &self.session
    }

    #[cfg(test)]
    pub fn config_manager(&self) -> &ConfigManager<P, ConsoleConfig> {
        &self.config_manager
    }

    /// Reads commands line by line until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> io::Result<()> {
        writeln!(
            output,
            "Tic-tac-toe: mode {}, difficulty {}. Type 'help' for commands.",
            self.session.mode(),
            self.session.difficulty()
        )?;
        self.print_board(output)?;

        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match line.parse::<Command>() {
                Ok(Command::Quit) => break,
                Ok(command) => self.handle(command, output)?,
                Err(message) => writeln!(output, "{}", message)?,
            }
        }

        writeln!(output, "{}", scores_line(&self.session))?;
        Ok(())
    }

    fn handle<W: Write>(&mut self, command: Command, output: &mut W) -> io::Result<()> {
        match command {
            Command::Place(index) => match self.session.play_move(index) {
                Ok(_) => {
                    self.after_move(output)?;
                    self.play_bot_turns(output)?;
                }
                Err(SessionError::InvalidMove(InvalidMove::Occupied { index })) => {
                    writeln!(output, "Cell {} is already taken", index + 1)?
                }
                Err(SessionError::InvalidMove(InvalidMove::GameOver)) => {
                    writeln!(output, "The game is over, type 'reset' to play again")?
                }
                Err(err) => writeln!(output, "Invalid move: {}", err)?,
            },
            Command::Reset => {
                self.session.reset();
                self.print_board(output)?;
            }
            Command::Mode(mode) => {
                self.session.set_mode(mode);
                self.persist();
                self.print_board(output)?;
            }
            Command::Difficulty(difficulty) => {
                self.session.set_difficulty(difficulty);
                self.persist();
                writeln!(output, "Difficulty set to {}", difficulty)?;
            }
            Command::Scores => writeln!(output, "{}", scores_line(&self.session))?,
            Command::Help => writeln!(output, "{}", HELP)?,
            Command::Quit => {}
        }
        Ok(())
    }

    fn play_bot_turns<W: Write>(&mut self, output: &mut W) -> io::Result<()> {
        while self.session.is_bot_turn() {
            if self.config.bot_delay_ms > 0 {
                output.flush()?;
                thread::sleep(Duration::from_millis(self.config.bot_delay_ms));
            }
            match self.session.play_bot_move(&mut self.rng) {
                Ok(outcome) => {
                    writeln!(output, "Bot plays {}", outcome.cell + 1)?;
                    self.after_move(output)?;
                }
                Err(err) => {
                    log!("Bot failed to move: {}", err);
                    writeln!(output, "Bot failed to move: {}", err)?;
                    break;
                }
            }
        }
        Ok(())
    }

    fn after_move<W: Write>(&mut self, output: &mut W) -> io::Result<()> {
        self.print_board(output)?;
        let result = self.session.result();
        if result == GameResult::InProgress {
            return Ok(());
        }

        if let Some(kind) = AdviceKind::for_result(self.session.mode(), result) {
            writeln!(output, "{}", pick_advice(kind, &mut self.rng))?;
        }
        writeln!(output, "{}", scores_line(&self.session))?;
        writeln!(output, "Type 'reset' to play again.")?;
        self.persist();
        Ok(())
    }

    fn print_board<W: Write>(&self, output: &mut W) -> io::Result<()> {
        let state = self.session.state();
        writeln!(output, "{}", render_board(state.board().cells(), state.winning_line()))?;
        writeln!(output, "{}", status_line(&self.session))
    }

    // A failed save is reported but never ends the game.
    fn persist(&mut self) {
        self.config.difficulty = self.session.difficulty();
        self.config.mode = self.session.mode();
        self.config.scores = self.session.scores();
        if let Err(err) = self.config_manager.set_config(&self.config) {
            log!("Failed to save config: {}", err);
        }
    }
}
