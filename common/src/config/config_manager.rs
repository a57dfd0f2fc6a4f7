use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::{
    ConfigContentProvider, ConfigSerializer, FileContentConfigProvider, Validate,
    YamlConfigSerializer,
};

/// Loads a validated config from a content provider, falling back to
/// `TConfig::default()` when nothing is stored.
pub struct ConfigManager<TProvider, TConfig, TSerializer = YamlConfigSerializer>
where
    TProvider: ConfigContentProvider,
    TConfig: for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TSerializer: ConfigSerializer<TConfig>,
{
    provider: TProvider,
    serializer: TSerializer,
    _config: std::marker::PhantomData<TConfig>,
}

impl<TConfig> ConfigManager<FileContentConfigProvider, TConfig, YamlConfigSerializer>
where
    TConfig: for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn from_yaml_file(path: impl Into<PathBuf>) -> Self {
        Self::new(FileContentConfigProvider::new(path), YamlConfigSerializer)
    }
}

impl<TProvider, TConfig, TSerializer> ConfigManager<TProvider, TConfig, TSerializer>
where
    TProvider: ConfigContentProvider,
    TConfig: for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TSerializer: ConfigSerializer<TConfig>,
{
    pub fn new(provider: TProvider, serializer: TSerializer) -> Self {
        Self {
            provider,
            serializer,
            _config: std::marker::PhantomData,
        }
    }

    pub fn load(&self) -> Result<TConfig, String> {
        let Some(content) = self.provider.read_content()? else {
            return Ok(TConfig::default());
        };

        let config = self.serializer.deserialize(&content)?;
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;
        Ok(config)
    }

    pub fn save(&self, config: &TConfig) -> Result<(), String> {
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        let content = self.serializer.serialize(config)?;
        self.provider.write_content(&content)
    }
}
