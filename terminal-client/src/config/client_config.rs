use std::path::Path;

use serde::{Deserialize, Serialize};
use snake_common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use snake_common::games::snake::SnakeSettings;

use super::ReplayConfig;

pub const CONFIG_FILE_NAME: &str = "snake_terminal_config.yaml";

pub fn get_config_manager(
    path: Option<&Path>,
) -> ConfigManager<FileContentConfigProvider, ClientConfig, YamlConfigSerializer> {
    match path {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => ConfigManager::from_yaml_file(CONFIG_FILE_NAME),
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct ClientConfig {
    #[serde(default)]
    pub snake: SnakeSettings,
    #[serde(default)]
    pub replays: ReplayConfig,
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<(), String> {
        self.snake.validate()?;
        self.replays.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snake_common::config::{ConfigContentProvider, ConfigSerializer};

    fn get_temp_file_path() -> std::path::PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!("temp_snake_terminal_config_{}.yaml", random_number))
    }

    #[test]
    fn test_default_config_round_trips_through_file() {
        let default_config = ClientConfig::default();
        let file_path = get_temp_file_path();
        let content_provider = FileContentConfigProvider::new(&file_path);

        let serialized = YamlConfigSerializer.serialize(&default_config).unwrap();
        content_provider.set_config_content(&serialized).unwrap();
        let read_back = content_provider.get_config_content().unwrap().unwrap();
        let deserialized: ClientConfig = YamlConfigSerializer.deserialize(&read_back).unwrap();

        std::fs::remove_file(&file_path).unwrap();
        assert_eq!(default_config, deserialized);
    }

    #[test]
    fn test_manager_defaults_when_file_missing() {
        let file_path = get_temp_file_path();
        let manager = get_config_manager(Some(file_path.as_path()));
        assert_eq!(manager.get_config().unwrap(), ClientConfig::default());
    }

    #[test]
    fn test_manager_rejects_invalid_snake_settings() {
        let file_path = get_temp_file_path();
        std::fs::write(&file_path, "snake:\n  field_width: 2\n").unwrap();
        let manager = get_config_manager(Some(file_path.as_path()));
        let result = manager.get_config();
        std::fs::remove_file(&file_path).unwrap();
        assert!(result.is_err());
    }
}
