use std::time::Duration;

use serde::{Deserialize, Serialize};
use snake_common::config::Validate;
use snake_common::snake::{FieldSize, SnakeSettings};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct GameConfig {
    pub field_width: u32,
    pub field_height: u32,
    pub tick_interval_ms: u32,
}

impl GameConfig {
    pub fn to_settings(&self) -> SnakeSettings {
        SnakeSettings {
            field_size: FieldSize::new(self.field_width as usize, self.field_height as usize),
            tick_interval: Duration::from_millis(self.tick_interval_ms as u64),
        }
    }
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if self.field_width < 5 || self.field_height < 5 {
            return Err("field dimensions must be at least 5x5".to_string());
        }
        if self.field_width > 100 || self.field_height > 100 {
            return Err("field dimensions must not exceed 100x100".to_string());
        }
        if self.tick_interval_ms < 20 {
            return Err("tick_interval_ms must be at least 20".to_string());
        }
        if self.tick_interval_ms > 5000 {
            return Err("tick_interval_ms must not exceed 5000".to_string());
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        let settings = SnakeSettings::default();
        Self {
            field_width: settings.field_size.width as u32,
            field_height: settings.field_size.height as u32,
            tick_interval_ms: settings.tick_interval.as_millis() as u32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_classic_board() {
        let config = GameConfig::default();
        assert_eq!(config.field_width, 25);
        assert_eq!(config.field_height, 20);
        assert_eq!(config.tick_interval_ms, 150);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_to_settings() {
        let config = GameConfig {
            field_width: 30,
            field_height: 12,
            tick_interval_ms: 90,
        };
        let settings = config.to_settings();
        assert_eq!(settings.field_size, FieldSize::new(30, 12));
        assert_eq!(settings.tick_interval, Duration::from_millis(90));
    }

    #[test]
    fn test_rejects_out_of_range_values() {
        let too_small = GameConfig { field_width: 4, ..GameConfig::default() };
        assert!(too_small.validate().is_err());

        let too_large = GameConfig { field_height: 101, ..GameConfig::default() };
        assert!(too_large.validate().is_err());

        let too_fast = GameConfig { tick_interval_ms: 10, ..GameConfig::default() };
        assert!(too_fast.validate().is_err());

        let too_slow = GameConfig { tick_interval_ms: 6000, ..GameConfig::default() };
        assert!(too_slow.validate().is_err());
    }
}
