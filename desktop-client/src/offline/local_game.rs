use common::games::tictactoe::{GameMode, Outcome, TicTacToeGameState};
use common::log;
use tokio::sync::mpsc;
use tokio::time::{Duration, Instant};

use crate::config::GameConfig;
use crate::state::{ClientCommand, GameSnapshot, SharedState};

const COUNTDOWN_TICK: Duration = Duration::from_secs(1);

/// Game state plus the two timers the front end needs: the countdown shown
/// before a game against the computer, and the pause before each computer
/// move. Time is passed in so the logic runs without a runtime.
pub struct LocalGame {
    state: TicTacToeGameState,
    config: GameConfig,
    countdown: Option<u32>,
    countdown_deadline: Option<Instant>,
    computer_deadline: Option<Instant>,
}

impl LocalGame {
    pub fn new(config: GameConfig) -> Self {
        Self {
            state: TicTacToeGameState::new(GameMode::HumanVsHuman),
            config,
            countdown: None,
            countdown_deadline: None,
            computer_deadline: None,
        }
    }

    /// Returns `false` once the task should stop.
    pub fn handle_command(&mut self, command: ClientCommand, now: Instant) -> bool {
        match command {
            ClientCommand::PlaceMark { index } => self.place_human_mark(index, now),
            ClientCommand::PlayAgain => {
                self.restart(GameMode::HumanVsHuman);
                log!("New game: human vs human");
            }
            ClientCommand::PlayAgainstComputer => {
                self.restart(GameMode::HumanVsComputer {
                    computer: self.config.computer_mark,
                });
                log!("New game: human vs computer ({})", self.config.computer_mark);
                if self.config.countdown_seconds > 0 {
                    self.countdown = Some(self.config.countdown_seconds);
                    self.countdown_deadline = Some(now + COUNTDOWN_TICK);
                } else {
                    self.schedule_computer_move(now);
                }
            }
            ClientCommand::Exit => return false,
        }
        true
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.countdown_deadline, self.computer_deadline) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    pub fn on_timer(&mut self, now: Instant) {
        if let Some(deadline) = self.countdown_deadline
            && deadline <= now
        {
            self.tick_countdown(deadline);
        }

        if let Some(deadline) = self.computer_deadline
            && deadline <= now
        {
            self.computer_deadline = None;
            self.play_computer_move(now);
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snapshot = GameSnapshot::from_game_state(&self.state);
        snapshot.countdown = self.countdown;
        snapshot.computer_pending = self.computer_deadline.is_some();
        snapshot
    }

    fn restart(&mut self, mode: GameMode) {
        self.state.reset(mode);
        self.countdown = None;
        self.countdown_deadline = None;
        self.computer_deadline = None;
    }

    fn place_human_mark(&mut self, index: usize, now: Instant) {
        if self.countdown.is_some() {
            log!("Ignoring move at {} during countdown", index);
            return;
        }

        let mark = self.state.current_mark;
        match self.state.place_human_mark(index) {
            Ok(outcome) => {
                log!("{} placed at {}", mark, index);
                self.log_outcome(outcome);
                self.schedule_computer_move(now);
            }
            Err(e) => log!("Rejected move at {}: {}", index, e),
        }
    }

    fn tick_countdown(&mut self, deadline: Instant) {
        let remaining = self.countdown.unwrap_or(0).saturating_sub(1);
        if remaining == 0 {
            self.countdown = None;
            self.countdown_deadline = None;
            self.schedule_computer_move(deadline);
        } else {
            self.countdown = Some(remaining);
            self.countdown_deadline = Some(deadline + COUNTDOWN_TICK);
        }
    }

    fn schedule_computer_move(&mut self, now: Instant) {
        if self.countdown.is_none() && self.state.is_computer_turn() {
            self.computer_deadline =
                Some(now + Duration::from_millis(self.config.computer_move_delay_ms));
        }
    }

    fn play_computer_move(&mut self, now: Instant) {
        let mark = self.state.current_mark;
        match self.state.play_computer_move() {
            Ok(Some(index)) => {
                log!("Computer ({}) placed at {}", mark, index);
                self.log_outcome(self.state.status);
                self.schedule_computer_move(now);
            }
            Ok(None) => log!("Computer has no move available"),
            Err(e) => log!("Computer move skipped: {}", e),
        }
    }

    fn log_outcome(&self, outcome: Outcome) {
        match outcome {
            Outcome::InProgress => {}
            Outcome::Win(mark) => log!("Game over: {} wins ({})", mark, self.state.board),
            Outcome::Draw => log!("Game over: draw ({})", self.state.board),
        }
    }
}

pub async fn local_game_task(
    config: GameConfig,
    shared_state: SharedState,
    mut command_rx: mpsc::UnboundedReceiver<ClientCommand>,
) {
    let mut game = LocalGame::new(config);
    shared_state.set_snapshot(game.snapshot());

    loop {
        let deadline = game.next_deadline();

        tokio::select! {
            command = command_rx.recv() => {
                let Some(command) = command else {
                    break;
                };
                if !game.handle_command(command, Instant::now()) {
                    break;
                }
            }
            _ = wait_until(deadline) => {
                game.on_timer(Instant::now());
            }
        }

        shared_state.set_snapshot(game.snapshot());
    }

    log!("Local game task stopped");
}

async fn wait_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}
