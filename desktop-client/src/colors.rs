use common::games::tictactoe::Cell;
use eframe::egui;

pub const X_CELL: egui::Color32 = egui::Color32::from_rgb(0xFF, 0xA2, 0x7F);
pub const O_CELL: egui::Color32 = egui::Color32::from_rgb(0x62, 0x95, 0xA2);
pub const EMPTY_CELL: egui::Color32 = egui::Color32::from_rgb(0x6F, 0x4E, 0x37);
pub const HOVER_CELL: egui::Color32 = egui::Color32::from_rgb(0x8A, 0x65, 0x4A);
pub const MARK_TEXT: egui::Color32 = egui::Color32::WHITE;
pub const LAST_MOVE_OUTLINE: egui::Color32 = egui::Color32::from_rgb(0xF5, 0xE6, 0xC8);
pub const WINNING_LINE: egui::Color32 = egui::Color32::from_rgba_premultiplied(50, 200, 50, 200);
pub const OVERLAY: egui::Color32 = egui::Color32::from_rgba_premultiplied(0, 0, 0, 160);

pub fn cell_color(cell: Cell) -> egui::Color32 {
    match cell {
        Cell::Empty => EMPTY_CELL,
        Cell::X => X_CELL,
        Cell::O => O_CELL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_cell_state_has_its_own_color() {
        assert_eq!(cell_color(Cell::X), egui::Color32::from_rgb(255, 162, 127));
        assert_eq!(cell_color(Cell::O), egui::Color32::from_rgb(98, 149, 162));
        assert_eq!(cell_color(Cell::Empty), egui::Color32::from_rgb(111, 78, 55));
    }
}
