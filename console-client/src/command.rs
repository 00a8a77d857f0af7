use std::str::FromStr;

use tictactoe_engine::games::tictactoe::{BOARD_SIZE, CellIndex, Difficulty, GameMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Zero-based cell; players type 1-9.
    Place(CellIndex),
    Reset,
    Mode(GameMode),
    Difficulty(Difficulty),
    Scores,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  1-9                        place your mark (cells numbered left to right, top to bottom)
  reset                      start a new game
  mode ai|pvp                play against the bot or a friend
  difficulty easy|medium|hard
  scores                     show the score tally
  help                       show this message
  quit                       leave";

impl FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let Some(head) = parts.next() else {
            return Err("Empty command".to_string());
        };
        let argument = parts.next();
        if parts.next().is_some() {
            return Err(format!("Too many arguments in '{}'", s.trim()));
        }

        if let Ok(number) = head.parse::<usize>() {
            if argument.is_some() {
                return Err(format!("Too many arguments in '{}'", s.trim()));
            }
            return match number {
                1..=BOARD_SIZE => Ok(Command::Place(number - 1)),
                _ => Err(format!("Cell must be between 1 and {}", BOARD_SIZE)),
            };
        }

        let command = match (head.to_ascii_lowercase().as_str(), argument) {
            ("reset" | "new", None) => Command::Reset,
            ("scores" | "score", None) => Command::Scores,
            ("help" | "?", None) => Command::Help,
            ("quit" | "exit" | "q", None) => Command::Quit,
            ("mode", Some(mode)) => Command::Mode(mode.parse()?),
            ("difficulty" | "level", Some(level)) => Command::Difficulty(level.parse()?),
            ("mode" | "difficulty" | "level", None) => {
                return Err(format!("'{}' needs an argument", head));
            }
            _ => return Err(format!("Unknown command '{}', type 'help'", s.trim())),
        };
        Ok(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cells() {
        assert_eq!("1".parse(), Ok(Command::Place(0)));
        assert_eq!(" 9 ".parse(), Ok(Command::Place(8)));
        assert!("0".parse::<Command>().is_err());
        assert!("10".parse::<Command>().is_err());
        assert!("5 5".parse::<Command>().is_err());
    }

    #[test]
    fn test_parse_words() {
        assert_eq!("Reset".parse(), Ok(Command::Reset));
        assert_eq!("mode pvp".parse(), Ok(Command::Mode(GameMode::TwoPlayers)));
        assert_eq!("difficulty HARD".parse(), Ok(Command::Difficulty(Difficulty::Hard)));
        assert_eq!("q".parse(), Ok(Command::Quit));
    }

    #[test]
    fn test_parse_errors() {
        assert!("".parse::<Command>().is_err());
        assert!("mode".parse::<Command>().is_err());
        assert!("mode online".parse::<Command>().is_err());
        assert!("dance".parse::<Command>().unwrap_err().contains("Unknown command"));
    }
}
