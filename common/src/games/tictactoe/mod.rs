mod board;
mod bot_controller;
mod error;
mod game_state;
mod types;
mod win_detector;

pub use board::Board;
pub use bot_controller::{best_move, minimax, move_scores};
pub use error::GameError;
pub use game_state::TicTacToeGameState;
pub use types::{BOARD_SIZE, CELL_COUNT, Cell, GameMode, Mark, Outcome, Position};
pub use win_detector::{LINES, Line, check_win, check_win_with_line, evaluate, winning_line};
