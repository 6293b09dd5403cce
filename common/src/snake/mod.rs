mod entity;
mod game_state;
mod settings;
mod types;

pub use entity::Snake;
pub use game_state::{BoardSnapshot, SnakeGameState, TickOutcome, INITIAL_SNAKE_LENGTH};
pub use settings::SnakeSettings;
pub use types::{Cell, Direction, FieldSize, GameOverReason, GamePhase};
