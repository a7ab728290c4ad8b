use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::{GameConfig, WindowConfig};

const CONFIG_FILE_NAME: &str = "tictactoe_client_config.yaml";

pub fn default_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager(
    path: Option<PathBuf>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path.unwrap_or_else(default_config_path))
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
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
    use common::config::{ConfigContentProvider, ConfigError, ConfigSerializer};
    use common::games::tictactoe::Mark;

    fn get_temp_file_path() -> PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!("temp_tictactoe_client_config_{}.yaml", random_number))
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
        assert_eq!(Config::default().game.computer_mark, Mark::O);
        assert_eq!(Config::default().game.computer_move_delay_ms, 500);
        assert_eq!(Config::default().game.countdown_seconds, 3);
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();
        let serialized_string = serializer.serialize(&default_config).unwrap();
        let deserialized_config: Config = serializer.deserialize(&serialized_string).unwrap();
        assert_eq!(default_config, deserialized_config);
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_file() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();
        let file_path = get_temp_file_path();
        let content_provider = FileContentConfigProvider::new(file_path.clone());

        let serialized_string = serializer.serialize(&default_config).unwrap();
        content_provider.set_config_content(&serialized_string).unwrap();

        let read_string = content_provider.get_config_content().unwrap().unwrap();
        let deserialized_config: Config = serializer.deserialize(&read_string).unwrap();
        assert_eq!(default_config, deserialized_config);

        let _ = std::fs::remove_file(&file_path);
    }

    #[test]
    fn test_missing_file_yields_default_config() {
        let manager = get_config_manager(Some(get_temp_file_path()));
        assert_eq!(manager.get_config().unwrap(), Config::default());
    }

    #[test]
    fn test_partial_file_fills_missing_sections_with_defaults() {
        let file_path = get_temp_file_path();
        std::fs::write(
            &file_path,
            "game:\n  computer_mark: X\n  computer_move_delay_ms: 0\n  countdown_seconds: 0\n",
        )
        .unwrap();

        let config = get_config_manager(Some(file_path.clone())).get_config().unwrap();
        assert_eq!(config.game.computer_mark, Mark::X);
        assert_eq!(config.game.computer_move_delay_ms, 0);
        assert_eq!(config.window, WindowConfig::default());

        let _ = std::fs::remove_file(&file_path);
    }

    #[test]
    fn test_out_of_range_values_are_rejected() {
        let mut config = Config::default();
        config.game.countdown_seconds = 60;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.game.computer_move_delay_ms = 60_000;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.window.width = 50.0;
        assert!(config.validate().is_err());

        let manager = get_config_manager(Some(get_temp_file_path()));
        let mut config = Config::default();
        config.window.height = f32::NAN;
        assert!(matches!(manager.set_config(&config), Err(ConfigError::Validation(_))));
    }
}
