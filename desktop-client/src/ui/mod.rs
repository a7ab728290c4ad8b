mod app;
mod board;
mod labels;

pub use app::TicTacToeApp;
