use super::board::Board;
use super::types::{Mark, Outcome};
use super::win_detector::evaluate;

const WIN_SCORE: i32 = 1;
const LOSS_SCORE: i32 = -1;
const DRAW_SCORE: i32 = 0;

/// Optimal cell for `maximizing_mark` to play, or `None` when the board is
/// full. Ties go to the lowest index.
///
/// The search runs on a private copy of `board`, so the caller's board is
/// never touched.
pub fn best_move(board: &Board, maximizing_mark: Mark) -> Option<usize> {
    let mut best_move = None;
    let mut best_score = i32::MIN;

    for (index, score) in move_scores(board, maximizing_mark) {
        if score > best_score {
            best_score = score;
            best_move = Some(index);
        }
    }

    best_move
}

/// Minimax value of every legal move for `maximizing_mark`, in ascending
/// cell order.
pub fn move_scores(board: &Board, maximizing_mark: Mark) -> Vec<(usize, i32)> {
    let mut board = *board;
    let available_moves = board.available_moves();
    let mut scores = Vec::with_capacity(available_moves.len());

    for index in available_moves {
        board.set(index, maximizing_mark);
        let score = minimax(&mut board, false, maximizing_mark);
        board.clear(index);

        scores.push((index, score));
    }

    scores
}

/// Exhaustive minimax without pruning. Every trial placement is undone
/// before returning, so `board` is unchanged afterwards.
pub fn minimax(board: &mut Board, is_maximizing: bool, maximizing_mark: Mark) -> i32 {
    if let Some(score) = terminal_score(evaluate(board), maximizing_mark) {
        return score;
    }

    let moves = board.available_moves();

    if is_maximizing {
        let mut max_eval = i32::MIN;
        for index in moves {
            board.set(index, maximizing_mark);
            let eval = minimax(board, false, maximizing_mark);
            board.clear(index);

            max_eval = max_eval.max(eval);
        }
        max_eval
    } else {
        let opponent_mark = maximizing_mark.opponent();
        let mut min_eval = i32::MAX;
        for index in moves {
            board.set(index, opponent_mark);
            let eval = minimax(board, true, maximizing_mark);
            board.clear(index);

            min_eval = min_eval.min(eval);
        }
        min_eval
    }
}

fn terminal_score(outcome: Outcome, maximizing_mark: Mark) -> Option<i32> {
    match outcome {
        Outcome::InProgress => None,
        Outcome::Draw => Some(DRAW_SCORE),
        Outcome::Win(mark) if mark == maximizing_mark => Some(WIN_SCORE),
        Outcome::Win(_) => Some(LOSS_SCORE),
    }
}
