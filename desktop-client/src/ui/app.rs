use common::log;
use eframe::egui;
use std::time::Duration;
use tokio::sync::mpsc;

use crate::colors::OVERLAY;
use crate::state::{ClientCommand, GameSnapshot, SharedState};

use super::board::TicTacToeBoardUi;
use super::labels::{outcome_label, turn_label};

const TIMER_REPAINT_INTERVAL: Duration = Duration::from_millis(50);

pub struct TicTacToeApp {
    shared_state: SharedState,
    command_tx: mpsc::UnboundedSender<ClientCommand>,
    awaiting_update: bool,
}

impl TicTacToeApp {
    pub fn new(shared_state: SharedState, command_tx: mpsc::UnboundedSender<ClientCommand>) -> Self {
        Self {
            shared_state,
            command_tx,
            awaiting_update: false,
        }
    }

    fn send(&mut self, command: ClientCommand) {
        self.awaiting_update = true;
        if self.command_tx.send(command).is_err() {
            log!("Game task is gone, dropping {:?}", command);
            self.shared_state
                .set_error("The game engine stopped unexpectedly".to_string());
        }
    }

    fn render_header(&self, ui: &mut egui::Ui, snapshot: &GameSnapshot) {
        ui.heading("Tic Tac Toe");
        ui.add_space(4.0);

        match outcome_label(snapshot.mode, snapshot.status) {
            Some(text) => {
                ui.label(egui::RichText::new(text).size(22.0).strong());
            }
            None => {
                ui.label(
                    egui::RichText::new(format!(
                        "Current player: {}",
                        turn_label(snapshot.mode, snapshot.current_mark)
                    ))
                    .size(16.0),
                );
            }
        }
    }

    fn render_controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("Play Again").clicked() {
                self.send(ClientCommand::PlayAgain);
            }
            if ui.button("Play Against PC").clicked() {
                self.send(ClientCommand::PlayAgainstComputer);
            }
        });
    }

    fn render_countdown(ctx: &egui::Context, count: u32) {
        let screen = ctx.content_rect();
        egui::Area::new(egui::Id::new("countdown_overlay"))
            .order(egui::Order::Foreground)
            .fixed_pos(screen.min)
            .show(ctx, |ui| {
                let (rect, _) = ui.allocate_exact_size(screen.size(), egui::Sense::click());
                let painter = ui.painter();
                painter.rect_filled(rect, 0.0, OVERLAY);
                painter.text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    count.to_string(),
                    egui::FontId::proportional(96.0),
                    egui::Color32::WHITE,
                );
            });
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.viewport().close_requested()) {
            self.send(ClientCommand::Exit);
        }

        if let Some(error) = self.shared_state.get_error() {
            egui::Window::new("Error")
                .collapsible(false)
                .show(ctx, |ui| {
                    ui.label(&error);
                    if ui.button("OK").clicked() {
                        self.shared_state.clear_error();
                    }
                });
        }

        let snapshot = self.shared_state.get_snapshot();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                self.render_header(ui, &snapshot);
                ui.add_space(12.0);

                if let Some(index) = TicTacToeBoardUi::render(ui, &snapshot) {
                    self.send(ClientCommand::PlaceMark { index });
                }

                ui.add_space(12.0);
                self.render_controls(ui);
            });
        });

        if let Some(count) = snapshot.countdown {
            Self::render_countdown(ctx, count);
        }

        // The game task answers commands asynchronously, so poll until the
        // next snapshot lands.
        if snapshot.has_pending_timers() || std::mem::take(&mut self.awaiting_update) {
            ctx.request_repaint_after(TIMER_REPAINT_INTERVAL);
        }
    }
}
