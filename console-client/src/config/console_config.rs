use serde::{Deserialize, Serialize};
use tictactoe_engine::games::tictactoe::{Difficulty, GameMode, Scoreboard};

use super::Validate;

pub const MAX_BOT_DELAY_MS: u64 = 5000;
const DEFAULT_BOT_DELAY_MS: u64 = 500;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    pub difficulty: Difficulty,
    pub mode: GameMode,
    pub scores: Scoreboard,
    pub bot_delay_ms: u64,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            mode: GameMode::default(),
            scores: Scoreboard::default(),
            bot_delay_ms: DEFAULT_BOT_DELAY_MS,
        }
    }
}

impl Validate for ConsoleConfig {
    fn validate(&self) -> Result<(), String> {
        if self.bot_delay_ms > MAX_BOT_DELAY_MS {
            return Err(format!(
                "bot_delay_ms ({}) cannot exceed {}",
                self.bot_delay_ms, MAX_BOT_DELAY_MS
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{
        ConfigContentProvider, ConfigManager, ConfigSerializer, FileContentConfigProvider,
        MemoryContentProvider, YamlConfigSerializer,
    };

    fn get_temp_file_path() -> std::path::PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!("temp_tictactoe_console_config_{}.yaml", random_number))
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = ConsoleConfig::default();
        let serializer = YamlConfigSerializer;
        let serialized = serializer.serialize(&default_config).unwrap();
        assert!(serialized.contains("difficulty: medium"));
        assert!(serialized.contains("mode: ai"));
        let deserialized: ConsoleConfig = serializer.deserialize(&serialized).unwrap();
        assert_eq!(default_config, deserialized);
    }

    #[test]
    fn test_config_can_be_saved_and_loaded_file() {
        let file_path = get_temp_file_path();
        let config = ConsoleConfig {
            difficulty: Difficulty::Hard,
            mode: GameMode::TwoPlayers,
            scores: Scoreboard { x: 3, o: 7 },
            bot_delay_ms: 0,
        };

        let mut manager = ConfigManager::yaml(FileContentConfigProvider::new(file_path.clone()));
        manager.set_config(&config).unwrap();

        let mut reloaded: ConfigManager<_, ConsoleConfig> =
            ConfigManager::yaml(FileContentConfigProvider::new(file_path.clone()));
        assert_eq!(reloaded.get_config().unwrap(), config);

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_missing_file_yields_default() {
        let mut manager: ConfigManager<_, ConsoleConfig> =
            ConfigManager::yaml(FileContentConfigProvider::new(get_temp_file_path()));
        assert_eq!(manager.get_config().unwrap(), ConsoleConfig::default());
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let provider = MemoryContentProvider::new();
        provider.set_config_content("difficulty: easy\nscores:\n  x: 2\n  o: 1\n").unwrap();
        let mut manager: ConfigManager<_, ConsoleConfig> = ConfigManager::yaml(provider);
        let config = manager.get_config().unwrap();
        assert_eq!(config.difficulty, Difficulty::Easy);
        assert_eq!(config.mode, GameMode::VsBot);
        assert_eq!(config.scores, Scoreboard { x: 2, o: 1 });
        assert_eq!(config.bot_delay_ms, DEFAULT_BOT_DELAY_MS);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = ConsoleConfig {
            bot_delay_ms: MAX_BOT_DELAY_MS + 1,
            ..ConsoleConfig::default()
        };
        assert!(config.validate().is_err());

        let mut manager = ConfigManager::yaml(MemoryContentProvider::new());
        assert!(manager.set_config(&config).is_err());
        assert_eq!(manager.content_provider().content(), None);

        let provider = MemoryContentProvider::new();
        provider.set_config_content("bot_delay_ms: 999999\n").unwrap();
        let mut manager: ConfigManager<_, ConsoleConfig> = ConfigManager::yaml(provider);
        let err = manager.get_config().unwrap_err();
        assert!(err.starts_with("Config validation error"), "{}", err);
    }

    #[test]
    fn test_unknown_difficulty_fails_to_load() {
        let provider = MemoryContentProvider::new();
        provider.set_config_content("difficulty: impossible\n").unwrap();
        let mut manager: ConfigManager<_, ConsoleConfig> = ConfigManager::yaml(provider);
        assert!(manager.get_config().is_err());
    }
}
