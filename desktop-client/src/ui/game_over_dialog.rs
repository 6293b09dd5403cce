use eframe::egui;
use snake_common::snake::GameOverReason;

/// Modal acknowledgment shown when a game ends. Blocks the rest of the window until dismissed.
pub struct GameOverDialog {
    reason: GameOverReason,
    score: u32,
}

impl GameOverDialog {
    pub fn new(reason: GameOverReason, score: u32) -> Self {
        Self { reason, score }
    }

    /// Returns true once the player dismissed the dialog.
    pub fn show(&self, ctx: &egui::Context) -> bool {
        let mut acknowledged = false;

        let response = egui::Modal::new(egui::Id::new("game_over_dialog")).show(ctx, |ui| {
            ui.set_min_width(220.0);
            ui.heading("Game over");
            ui.separator();
            ui.label(format!("Reason: {}", self.reason));
            ui.label(format!("Score: {}", self.score));
            ui.add_space(10.0);
            ui.vertical_centered(|ui| {
                if ui.button("OK").clicked() {
                    acknowledged = true;
                }
            });
        });

        acknowledged || response.should_close()
    }
}
