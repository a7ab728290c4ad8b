use common::games::tictactoe::{BOARD_SIZE, Cell, Line, Position};
use eframe::egui;

use crate::colors::{HOVER_CELL, LAST_MOVE_OUTLINE, MARK_TEXT, WINNING_LINE, cell_color};
use crate::state::GameSnapshot;

pub struct TicTacToeBoardUi;

impl TicTacToeBoardUi {
    const MIN_CELL_SIZE: f32 = 60.0;
    const MAX_CELL_SIZE: f32 = 140.0;
    const CELL_GAP: f32 = 6.0;
    const CORNER_RADIUS: f32 = 6.0;
    const LAST_MOVE_STROKE_WIDTH: f32 = 3.0;

    fn calculate_cell_size(available_width: f32, available_height: f32) -> f32 {
        let gaps = Self::CELL_GAP * (BOARD_SIZE as f32 - 1.0);
        let side = available_width.min(available_height) - gaps;
        (side / BOARD_SIZE as f32).clamp(Self::MIN_CELL_SIZE, Self::MAX_CELL_SIZE)
    }

    fn cell_rect(board_rect: egui::Rect, cell_size: f32, index: usize) -> egui::Rect {
        let position = Position::from_index(index).unwrap_or(Position::new(0, 0));
        let step = cell_size + Self::CELL_GAP;
        egui::Rect::from_min_size(
            egui::pos2(
                board_rect.left() + position.col as f32 * step,
                board_rect.top() + position.row as f32 * step,
            ),
            egui::vec2(cell_size, cell_size),
        )
    }

    fn cell_outline(snapshot: &GameSnapshot, index: usize) -> Option<egui::Stroke> {
        (snapshot.last_move == Some(index))
            .then(|| egui::Stroke::new(Self::LAST_MOVE_STROKE_WIDTH, LAST_MOVE_OUTLINE))
    }

    fn cell_at(board_rect: egui::Rect, cell_size: f32, pos: egui::Pos2) -> Option<usize> {
        (0..BOARD_SIZE * BOARD_SIZE)
            .find(|&index| Self::cell_rect(board_rect, cell_size, index).contains(pos))
    }

    /// Draws the board and returns the cell the user clicked, if any.
    pub fn render(ui: &mut egui::Ui, snapshot: &GameSnapshot) -> Option<usize> {
        let cell_size = Self::calculate_cell_size(ui.available_width(), ui.available_height());
        let side = cell_size * BOARD_SIZE as f32 + Self::CELL_GAP * (BOARD_SIZE as f32 - 1.0);

        let (board_rect, response) =
            ui.allocate_exact_size(egui::vec2(side, side), egui::Sense::click());

        let interactive = snapshot.accepts_clicks();
        let hovered = if interactive {
            response
                .hover_pos()
                .and_then(|pos| Self::cell_at(board_rect, cell_size, pos))
                .filter(|&index| snapshot.board.is_valid_move(index))
        } else {
            None
        };

        let painter = ui.painter();
        for (index, cell) in snapshot.board.cells().iter().enumerate() {
            let rect = Self::cell_rect(board_rect, cell_size, index);
            let fill = if hovered == Some(index) {
                HOVER_CELL
            } else {
                cell_color(*cell)
            };
            painter.rect_filled(rect, Self::CORNER_RADIUS, fill);
            if let Some(stroke) = Self::cell_outline(snapshot, index) {
                painter.rect_stroke(rect, Self::CORNER_RADIUS, stroke, egui::StrokeKind::Inside);
            }

            if let Some(mark) = cell.mark() {
                painter.text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    mark.to_string(),
                    egui::FontId::proportional(cell_size * 0.6),
                    MARK_TEXT,
                );
            }
        }

        if let Some(line) = snapshot.winning_line {
            Self::draw_winning_line(painter, board_rect, cell_size, line);
        }

        if interactive && response.clicked() {
            return response
                .interact_pointer_pos()
                .and_then(|pos| Self::cell_at(board_rect, cell_size, pos))
                .filter(|&index| snapshot.board.get(index) == Some(Cell::Empty));
        }

        None
    }

    fn draw_winning_line(
        painter: &egui::Painter,
        board_rect: egui::Rect,
        cell_size: f32,
        line: Line,
    ) {
        let start = Self::cell_rect(board_rect, cell_size, line[0]).center();
        let end = Self::cell_rect(board_rect, cell_size, line[2]).center();
        painter.line_segment([start, end], egui::Stroke::new(6.0, WINNING_LINE));
    }
}
