use std::path::Path;

use serde::{Deserialize, Serialize};
use snake_common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};

use super::{GameConfig, WindowConfig};

pub fn get_config_manager(
    path: impl AsRef<Path>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub game: GameConfig,
    pub window: WindowConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.game.validate()?;
        self.window.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snake_common::config::{ConfigContentProvider, ConfigSerializer};

    fn get_temp_file_path() -> String {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_snake_desktop_config_{}.yaml", random_number));
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();
        let serialized = serializer.serialize(&default_config).unwrap();
        let deserialized: Config = serializer.deserialize(&serialized).unwrap();
        assert_eq!(default_config, deserialized);
    }

    #[test]
    fn test_config_can_be_saved_and_loaded_by_manager() {
        let config = Config {
            game: GameConfig {
                field_width: 40,
                field_height: 30,
                tick_interval_ms: 100,
            },
            window: WindowConfig {
                title: "Big Snake".to_string(),
                geometry: "900x700".to_string(),
            },
        };
        let file_path = get_temp_file_path();
        let manager = get_config_manager(&file_path);

        manager.save(&config).unwrap();
        assert_eq!(manager.load().unwrap(), config);

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_config_file_does_not_exist_returns_default_config() {
        let manager = get_config_manager("this_file_does_not_exist.yaml");
        assert_eq!(manager.load().unwrap(), Config::default());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let file_path = get_temp_file_path();
        let content_provider = FileContentConfigProvider::new(file_path.clone());
        content_provider
            .set_config_content("game:\n  tick_interval_ms: 80\n")
            .unwrap();

        let loaded = get_config_manager(&file_path).load().unwrap();
        assert_eq!(loaded.game.tick_interval_ms, 80);
        assert_eq!(loaded.game.field_width, 25);
        assert_eq!(loaded.window, WindowConfig::default());

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_invalid_config_cant_be_read() {
        let invalid_config_content = r#"
            game:
              field_width: 3
              field_height: 3
            window:
              geometry: 600x520
        "#;

        let file_path = get_temp_file_path();
        let content_provider = FileContentConfigProvider::new(file_path.clone());
        content_provider
            .set_config_content(invalid_config_content)
            .unwrap();

        assert!(get_config_manager(&file_path).load().is_err());
        let _ = std::fs::remove_file(file_path);
    }
}
