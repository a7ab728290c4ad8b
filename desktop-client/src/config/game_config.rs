use common::config::Validate;
use common::games::tictactoe::Mark;
use serde::{Deserialize, Serialize};

pub const MAX_COMPUTER_MOVE_DELAY_MS: u64 = 10_000;
pub const MAX_COUNTDOWN_SECONDS: u32 = 10;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub struct GameConfig {
    pub computer_mark: Mark,
    pub computer_move_delay_ms: u64,
    pub countdown_seconds: u32,
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if self.computer_move_delay_ms > MAX_COMPUTER_MOVE_DELAY_MS {
            return Err(format!(
                "computer_move_delay_ms must not exceed {}, got {}",
                MAX_COMPUTER_MOVE_DELAY_MS, self.computer_move_delay_ms
            ));
        }
        if self.countdown_seconds > MAX_COUNTDOWN_SECONDS {
            return Err(format!(
                "countdown_seconds must not exceed {}, got {}",
                MAX_COUNTDOWN_SECONDS, self.countdown_seconds
            ));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            computer_mark: Mark::O,
            computer_move_delay_ms: 500,
            countdown_seconds: 3,
        }
    }
}
