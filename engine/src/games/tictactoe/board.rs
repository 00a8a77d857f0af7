use std::fmt;
use std::str::FromStr;

use super::error::BoardParseError;
use super::types::{CellIndex, Mark, Player};
use super::win_detector::check_winner;

pub const BOARD_SIZE: usize = 9;
pub const BOARD_SIDE: usize = 3;

/// Nine cells in row-major order. `Copy`, so every search owns its own buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Mark; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cells(&self) -> &[Mark; BOARD_SIZE] {
        &self.cells
    }

    pub fn get(&self, index: CellIndex) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    pub fn is_valid_move(&self, index: CellIndex) -> bool {
        self.get(index) == Some(Mark::Empty)
    }

    pub fn available_moves(&self) -> Vec<CellIndex> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Mark::Empty)
            .map(|(index, _)| index)
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == mark).count()
    }

    pub fn moves_made(&self) -> usize {
        BOARD_SIZE - self.count(Mark::Empty)
    }

    // Callers validate the index; used by the game state and the search only.
    pub(crate) fn set(&mut self, index: CellIndex, mark: Mark) {
        self.cells[index] = mark;
    }

    pub(crate) fn clear(&mut self) {
        self.cells = [Mark::Empty; BOARD_SIZE];
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Accepts `X`/`O` (any case) and `.`, `_` or `-` for empty cells.
    /// Whitespace, `|` and `,` are separators and ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [Mark::Empty; BOARD_SIZE];
        let mut position = 0;

        for character in s.chars() {
            if character.is_whitespace() || character == '|' || character == ',' {
                continue;
            }
            let mark = match character {
                'X' | 'x' => Mark::X,
                'O' | 'o' => Mark::O,
                '.' | '_' | '-' => Mark::Empty,
                _ => {
                    return Err(BoardParseError::InvalidCharacter {
                        character,
                        position,
                        context: s.to_string(),
                    });
                }
            };
            if position < BOARD_SIZE {
                cells[position] = mark;
            }
            position += 1;
        }

        if position != BOARD_SIZE {
            return Err(BoardParseError::InvalidLength {
                got: position,
                context: s.to_string(),
            });
        }

        let board = Board { cells };
        validate_position(&board)?;
        Ok(board)
    }
}

/// X moves first and the game stops at the first completed line, so the
/// counts and the winner have to agree with each other.
pub(crate) fn validate_position(board: &Board) -> Result<(), BoardParseError> {
    let x_count = board.count(Mark::X);
    let o_count = board.count(Mark::O);
    if x_count != o_count && x_count != o_count + 1 {
        return Err(BoardParseError::InvalidPieceCounts { x_count, o_count });
    }

    let x_won = check_winner(board, Player::X);
    let o_won = check_winner(board, Player::O);
    let reason = if x_won && o_won {
        "both players hold a winning line"
    } else if x_won && x_count == o_count {
        "O moved after X had already won"
    } else if o_won && x_count == o_count + 1 {
        "X moved after O had already won"
    } else {
        return Ok(());
    };
    Err(BoardParseError::ImpossiblePosition { reason })
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_index, row) in self.cells.chunks(BOARD_SIDE).enumerate() {
            if row_index > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}
