use std::fmt;
use std::str::FromStr;

use super::error::GameError;
use super::types::{BOARD_SIZE, CELL_COUNT, Cell, Mark};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Result<Self, GameError> {
        let board = Self { cells };
        board.validate_piece_counts()?;
        Ok(board)
    }

    #[cfg(test)]
    pub fn from_cells_unchecked(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    pub fn is_valid_move(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    pub fn place(&mut self, index: usize, mark: Mark) -> Result<(), GameError> {
        match self.get(index) {
            None => Err(GameError::OutOfBounds { index }),
            Some(Cell::Empty) => {
                self.cells[index] = mark.into();
                Ok(())
            }
            Some(_) => Err(GameError::CellOccupied { index }),
        }
    }

    /// Backtracking step for the search. Only ever called on a cell the
    /// search itself just filled.
    pub(crate) fn clear(&mut self, index: usize) {
        self.cells[index] = Cell::Empty;
    }

    /// Unchecked placement for the search; `index` always comes from
    /// `available_moves` on the same board.
    pub(crate) fn set(&mut self, index: usize, mark: Mark) {
        self.cells[index] = mark.into();
    }

    pub fn available_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(index, _)| index)
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub fn count(&self, mark: Mark) -> usize {
        let target = Cell::from(mark);
        self.cells.iter().filter(|&&cell| cell == target).count()
    }

    /// Mark that moves next, assuming X opened the game.
    pub fn next_mark(&self) -> Mark {
        if self.count(Mark::X) > self.count(Mark::O) {
            Mark::O
        } else {
            Mark::X
        }
    }

    fn validate_piece_counts(&self) -> Result<(), GameError> {
        let x_count = self.count(Mark::X);
        let o_count = self.count(Mark::O);
        if x_count == o_count || x_count == o_count + 1 {
            Ok(())
        } else {
            Err(GameError::InvalidPieceCounts { x_count, o_count })
        }
    }
}

impl FromStr for Board {
    type Err = GameError;

    /// Accepts `X`, `O` and `_` or `.` for empty cells. Whitespace and `/`
    /// row separators are skipped, so `"XO_/_X_/__O"` is valid.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/')
            .collect();

        if symbols.len() != CELL_COUNT {
            return Err(GameError::InvalidBoardLength {
                expected: CELL_COUNT,
                got: symbols.len(),
            });
        }

        let mut cells = [Cell::Empty; CELL_COUNT];
        for (position, character) in symbols.into_iter().enumerate() {
            cells[position] = match character.to_ascii_uppercase() {
                'X' => Cell::X,
                'O' => Cell::O,
                '_' | '.' => Cell::Empty,
                _ => {
                    return Err(GameError::InvalidCellCharacter {
                        character,
                        position,
                    });
                }
            };
        }

        Board::from_cells(cells)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, chunk) in self.cells.chunks(BOARD_SIZE).enumerate() {
            if row > 0 {
                write!(f, "/")?;
            }
            for cell in chunk {
                write!(f, "{}", cell.to_char())?;
            }
        }
        Ok(())
    }
}
