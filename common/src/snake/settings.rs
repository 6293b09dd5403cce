use std::time::Duration;

use super::types::FieldSize;

pub const DEFAULT_FIELD_WIDTH: usize = 25;
pub const DEFAULT_FIELD_HEIGHT: usize = 20;
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(150);

/// Startup parameters of a game. Fixed for the lifetime of the process.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SnakeSettings {
    pub field_size: FieldSize,
    pub tick_interval: Duration,
}

impl Default for SnakeSettings {
    fn default() -> Self {
        Self {
            field_size: FieldSize::new(DEFAULT_FIELD_WIDTH, DEFAULT_FIELD_HEIGHT),
            tick_interval: DEFAULT_TICK_INTERVAL,
        }
    }
}
