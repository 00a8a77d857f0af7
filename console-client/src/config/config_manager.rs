use serde::{Deserialize, Serialize};

use super::{ConfigContentProvider, ConfigSerializer, Validate, YamlConfigSerializer};

/// Loads the config once, validates it, and writes every accepted change back
/// through the content provider.
pub struct ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer = YamlConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    config_serializer: TConfigSerializer,
    config_content_provider: TConfigContentProvider,
    config: Option<TConfig>,
}

impl<TConfigContentProvider, TConfig> ConfigManager<TConfigContentProvider, TConfig, YamlConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn yaml(config_content_provider: TConfigContentProvider) -> Self {
        Self {
            config_serializer: YamlConfigSerializer,
            config_content_provider,
            config: None,
        }
    }
}

impl<TConfigContentProvider, TConfig, TConfigSerializer>
    ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    #[cfg(test)]
    pub fn content_provider(&self) -> &TConfigContentProvider {
        &self.config_content_provider
    }

    pub fn get_config(&mut self) -> Result<TConfig, String> {
        if let Some(config) = self.config.as_ref() {
            return Ok(config.clone());
        }

        let config = match self.config_content_provider.get_config_content()? {
            Some(content) => {
                let config = self.config_serializer.deserialize(&content)?;
                config
                    .validate()
                    .map_err(|e| format!("Config validation error: {}", e))?;
                config
            }
            None => TConfig::default(),
        };

        self.config = Some(config.clone());
        Ok(config)
    }

    pub fn set_config(&mut self, config: &TConfig) -> Result<(), String> {
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        let serialized_config = self.config_serializer.serialize(config)?;
        self.config_content_provider
            .set_config_content(&serialized_config)?;

        self.config = Some(config.clone());
        Ok(())
    }
}
