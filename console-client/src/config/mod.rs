mod config_manager;
mod console_config;
mod content_provider;
mod serializer;

pub use config_manager::ConfigManager;
pub use console_config::ConsoleConfig;
pub use content_provider::{ConfigContentProvider, FileContentConfigProvider, MemoryContentProvider};
pub use serializer::{ConfigSerializer, YamlConfigSerializer};

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}
