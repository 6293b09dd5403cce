use snake_common::snake::{Direction, TickOutcome};

/// Everything that can change the game, queued per frame and applied in order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShellCommand {
    NewGame,
    Quit,
    Turn(Direction),
    Tick,
}

pub const READY_STATUS: &str = "Ready.";
pub const STARTED_STATUS: &str = "Game started!";
pub const ATE_FOOD_STATUS: &str = "Ate food!";

/// Text of the status row: message on the left, score on the right.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusLine {
    message: String,
    score: u32,
}

impl StatusLine {
    pub fn new() -> Self {
        Self {
            message: READY_STATUS.to_string(),
            score: 0,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn score_text(&self) -> String {
        format!("Score: {}", self.score)
    }

    pub fn on_new_game(&mut self) {
        self.message = STARTED_STATUS.to_string();
        self.score = 0;
    }

    pub fn on_tick(&mut self, outcome: TickOutcome, score: u32) {
        self.score = score;
        match outcome {
            TickOutcome::AteFood => self.message = ATE_FOOD_STATUS.to_string(),
            TickOutcome::GameOver(reason) => {
                self.message = format!("Game over: {}. Score: {}", reason, score);
            }
            TickOutcome::Moved | TickOutcome::Idle => {}
        }
    }
}

impl Default for StatusLine {
    fn default() -> Self {
        Self::new()
    }
}
