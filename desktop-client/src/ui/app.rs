use std::time::Instant;

use eframe::egui;
use snake_common::SessionRng;
use snake_common::snake::{Direction, SnakeGameState, SnakeSettings, TickOutcome};

use crate::colors;
use crate::state::{ShellCommand, StatusLine};
use crate::tick_timer::TickTimer;
use super::board::{paint_board, BoardLayout};
use super::game_over_dialog::GameOverDialog;

pub struct SnakeApp {
    game: SnakeGameState,
    rng: SessionRng,
    tick_timer: TickTimer,
    status: StatusLine,
    commands: Vec<ShellCommand>,
    game_over_dialog: Option<GameOverDialog>,
}

fn direction_for_key(key: egui::Key) -> Option<Direction> {
    match key {
        egui::Key::ArrowUp => Some(Direction::Up),
        egui::Key::ArrowDown => Some(Direction::Down),
        egui::Key::ArrowLeft => Some(Direction::Left),
        egui::Key::ArrowRight => Some(Direction::Right),
        _ => None,
    }
}

impl SnakeApp {
    pub fn new(settings: &SnakeSettings, rng: SessionRng) -> Self {
        Self {
            game: SnakeGameState::new(settings.field_size),
            rng,
            tick_timer: TickTimer::new(settings.tick_interval, Instant::now()),
            status: StatusLine::new(),
            commands: Vec::new(),
            game_over_dialog: None,
        }
    }

    /// Applies one command to the game. Returns true when the window should close.
    fn apply(&mut self, command: ShellCommand) -> bool {
        match command {
            ShellCommand::NewGame => {
                self.game.new_game(&mut self.rng);
                self.status.on_new_game();
                self.game_over_dialog = None;
                if let Some(reason) = self.game.game_over_reason() {
                    self.on_tick_outcome(TickOutcome::GameOver(reason));
                }
            }
            ShellCommand::Quit => return true,
            ShellCommand::Turn(direction) => self.game.request_turn(direction),
            ShellCommand::Tick => {
                let outcome = self.game.advance(&mut self.rng);
                self.on_tick_outcome(outcome);
            }
        }
        false
    }

    fn on_tick_outcome(&mut self, outcome: TickOutcome) {
        self.status.on_tick(outcome, self.game.score());
        if let TickOutcome::GameOver(reason) = outcome {
            self.game_over_dialog = Some(GameOverDialog::new(reason, self.game.score()));
        }
    }

    fn dispatch(&mut self) -> bool {
        let mut quit = false;
        for command in std::mem::take(&mut self.commands) {
            quit |= self.apply(command);
        }
        quit
    }

    fn collect_key_presses(&mut self, ctx: &egui::Context) {
        let turns: Vec<Direction> = ctx.input(|i| {
            i.events
                .iter()
                .filter_map(|event| match event {
                    egui::Event::Key { key, pressed: true, .. } => direction_for_key(*key),
                    _ => None,
                })
                .collect()
        });
        self.commands.extend(turns.into_iter().map(ShellCommand::Turn));
    }

    fn render_menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game").clicked() {
                        self.commands.push(ShellCommand::NewGame);
                    }
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        self.commands.push(ShellCommand::Quit);
                    }
                });
            });
        });
    }

    fn render_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(self.status.message());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(self.status.score_text());
                });
            });
        });
    }

    fn render_board(&self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(colors::BOARD_BACKGROUND))
            .show(ctx, |ui| {
                let (response, painter) =
                    ui.allocate_painter(ui.available_size(), egui::Sense::hover());
                let snapshot = self.game.snapshot();
                if let Some(layout) = BoardLayout::fit(response.rect, snapshot.field_size) {
                    paint_board(&painter, &layout, &snapshot);
                }
            });
    }
}

impl eframe::App for SnakeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.render_menu_bar(ctx);
        self.collect_key_presses(ctx);
        if self.tick_timer.poll(Instant::now()) {
            self.commands.push(ShellCommand::Tick);
        }

        if self.dispatch() {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }

        self.render_status_bar(ctx);
        self.render_board(ctx);

        if let Some(dialog) = &self.game_over_dialog
            && dialog.show(ctx)
        {
            self.game_over_dialog = None;
        }

        ctx.request_repaint_after(self.tick_timer.time_until_next(Instant::now()));
    }
}
