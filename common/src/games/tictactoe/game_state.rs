use super::board::Board;
use super::bot_controller::best_move;
use super::error::GameError;
use super::types::{GameMode, Mark, Outcome};
use super::win_detector::{Line, evaluate, winning_line};

#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    pub board: Board,
    pub current_mark: Mark,
    pub status: Outcome,
    pub mode: GameMode,
    pub last_move: Option<usize>,
}

impl TicTacToeGameState {
    pub fn new(mode: GameMode) -> Self {
        Self {
            board: Board::new(),
            current_mark: Mark::X,
            status: Outcome::InProgress,
            mode,
            last_move: None,
        }
    }

    pub fn reset(&mut self, mode: GameMode) {
        *self = Self::new(mode);
    }

    pub fn is_active(&self) -> bool {
        self.status == Outcome::InProgress
    }

    pub fn is_computer_turn(&self) -> bool {
        self.is_active() && self.mode.computer_mark() == Some(self.current_mark)
    }

    pub fn place_mark(&mut self, index: usize) -> Result<Outcome, GameError> {
        if !self.is_active() {
            return Err(GameError::GameOver);
        }

        self.board.place(index, self.current_mark)?;
        self.last_move = Some(index);
        self.status = evaluate(&self.board);

        if self.is_active() {
            self.switch_turn();
        }

        Ok(self.status)
    }

    pub fn place_human_mark(&mut self, index: usize) -> Result<Outcome, GameError> {
        if self.is_computer_turn() {
            return Err(GameError::NotHumanTurn);
        }
        self.place_mark(index)
    }

    /// Applies the search's choice for the computer's mark. `Ok(None)` means
    /// the board had no empty cell left.
    pub fn play_computer_move(&mut self) -> Result<Option<usize>, GameError> {
        if !self.is_computer_turn() {
            return Err(GameError::NotComputerTurn);
        }

        let Some(index) = best_move(&self.board, self.current_mark) else {
            return Ok(None);
        };
        self.place_mark(index)?;
        Ok(Some(index))
    }

    pub fn winning_line(&self) -> Option<Line> {
        winning_line(&self.board)
    }

    fn switch_turn(&mut self) {
        self.current_mark = self.current_mark.opponent();
    }
}
