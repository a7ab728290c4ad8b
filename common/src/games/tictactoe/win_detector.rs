use super::board::Board;
use super::types::{Mark, Outcome};

pub type Line = [usize; 3];

pub const LINES: [Line; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn evaluate(board: &Board) -> Outcome {
    if let Some((mark, _)) = check_win_with_line(board) {
        return Outcome::Win(mark);
    }

    if board.is_full() {
        return Outcome::Draw;
    }

    Outcome::InProgress
}

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|(mark, _)| mark)
}

pub fn winning_line(board: &Board) -> Option<Line> {
    check_win_with_line(board).map(|(_, line)| line)
}

/// First completed line in table order, with the mark that owns it.
pub fn check_win_with_line(board: &Board) -> Option<(Mark, Line)> {
    let cells = board.cells();
    for line in LINES {
        let [a, b, c] = line;
        if let Some(mark) = cells[a].mark()
            && cells[a] == cells[b]
            && cells[a] == cells[c]
        {
            return Some((mark, line));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::types::Cell;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(evaluate(&Board::new()), Outcome::InProgress);
    }

    #[test]
    fn test_every_line_is_detected_for_both_marks() {
        for line in LINES {
            for mark in [Mark::X, Mark::O] {
                let mut cells = [Cell::Empty; 9];
                for index in line {
                    cells[index] = mark.into();
                }
                let board = Board::from_cells_unchecked(cells);
                assert_eq!(evaluate(&board), Outcome::Win(mark), "line {:?}", line);
                assert_eq!(winning_line(&board), Some(line));
            }
        }
    }

    #[test]
    fn test_row_win() {
        let board = board("XXX/OO_/___");
        assert_eq!(evaluate(&board), Outcome::Win(Mark::X));
        assert_eq!(winning_line(&board), Some([0, 1, 2]));
    }

    #[test]
    fn test_column_win() {
        let board = board("OX_/OX_/O_X");
        assert_eq!(evaluate(&board), Outcome::Win(Mark::O));
        assert_eq!(winning_line(&board), Some([0, 3, 6]));
    }

    #[test]
    fn test_anti_diagonal_win() {
        let board = board("XXO/XO_/O__");
        assert_eq!(evaluate(&board), Outcome::Win(Mark::O));
        assert_eq!(winning_line(&board), Some([2, 4, 6]));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board = board("XOX/XOO/OXX");
        assert_eq!(evaluate(&board), Outcome::Draw);
        assert_eq!(winning_line(&board), None);
    }

    #[test]
    fn test_full_board_with_line_is_win_not_draw() {
        let board = board("XOX/OXO/OXX");
        assert!(board.is_full());
        assert_eq!(evaluate(&board), Outcome::Win(Mark::X));
    }

    #[test]
    fn test_partial_board_without_line_in_progress() {
        let board = board("XO_/_X_/__O");
        assert_eq!(evaluate(&board), Outcome::InProgress);
        assert_eq!(check_win(&board), None);
    }
}
