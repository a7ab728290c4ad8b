use common::games::tictactoe::{Board, GameMode, Line, Mark, Outcome, TicTacToeGameState};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCommand {
    PlaceMark { index: usize },
    PlayAgain,
    PlayAgainstComputer,
    Exit,
}

/// What the UI needs to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub board: Board,
    pub current_mark: Mark,
    pub status: Outcome,
    pub mode: GameMode,
    pub last_move: Option<usize>,
    pub winning_line: Option<Line>,
    pub countdown: Option<u32>,
    pub computer_pending: bool,
}

impl GameSnapshot {
    pub fn from_game_state(state: &TicTacToeGameState) -> Self {
        Self {
            board: state.board,
            current_mark: state.current_mark,
            status: state.status,
            mode: state.mode,
            last_move: state.last_move,
            winning_line: state.winning_line(),
            countdown: None,
            computer_pending: false,
        }
    }

    pub fn accepts_clicks(&self) -> bool {
        self.status == Outcome::InProgress
            && self.countdown.is_none()
            && self.mode.computer_mark() != Some(self.current_mark)
    }

    /// Whether the UI has to keep repainting to pick up timer-driven changes.
    pub fn has_pending_timers(&self) -> bool {
        self.countdown.is_some() || self.computer_pending
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self::from_game_state(&TicTacToeGameState::new(GameMode::HumanVsHuman))
    }
}

#[derive(Clone, Default)]
pub struct SharedState {
    snapshot: Arc<Mutex<GameSnapshot>>,
    error: Arc<Mutex<Option<String>>>,
}

impl SharedState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_snapshot(&self, snapshot: GameSnapshot) {
        *lock(&self.snapshot) = snapshot;
    }

    pub fn get_snapshot(&self) -> GameSnapshot {
        lock(&self.snapshot).clone()
    }

    pub fn set_error(&self, error: String) {
        *lock(&self.error) = Some(error);
    }

    pub fn get_error(&self) -> Option<String> {
        lock(&self.error).clone()
    }

    pub fn clear_error(&self) {
        *lock(&self.error) = None;
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_snapshot_accepts_clicks() {
        let snapshot = GameSnapshot::default();
        assert!(snapshot.accepts_clicks());
        assert!(!snapshot.has_pending_timers());
    }

    #[test]
    fn test_snapshot_blocks_clicks_during_countdown_and_computer_turn() {
        let mut snapshot = GameSnapshot::from_game_state(&TicTacToeGameState::new(
            GameMode::HumanVsComputer { computer: Mark::O },
        ));
        snapshot.countdown = Some(3);
        assert!(!snapshot.accepts_clicks());

        snapshot.countdown = None;
        snapshot.current_mark = Mark::O;
        assert!(!snapshot.accepts_clicks());
    }

    #[test]
    fn test_shared_state_is_shared_between_clones() {
        let state = SharedState::new();
        let other = state.clone();

        let mut snapshot = GameSnapshot::default();
        snapshot.countdown = Some(2);
        other.set_snapshot(snapshot.clone());
        assert_eq!(state.get_snapshot(), snapshot);

        other.set_error("boom".to_string());
        assert_eq!(state.get_error().as_deref(), Some("boom"));
        state.clear_error();
        assert_eq!(other.get_error(), None);
    }
}
